use std::fs::File;
use std::sync::Arc;

use redis::aio::ConnectionManager;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{http::app_state::AppState, persistence::waitlist::RedisWaitlistRepo},
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    infra::{
        config::AppConfig,
        error::InfraError,
        landing_page::LandingPage,
        rate_limit::{RateLimiterTrait, RedisRateLimiter},
    },
};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    init_tracing();

    let config = AppConfig::from_env();

    if config.admin_secret.is_none() {
        tracing::warn!("ADMIN_PASSWORD is not set; GET /waitlist will reject every request");
    }

    let client =
        redis::Client::open(config.redis_url.as_str()).map_err(InfraError::RedisConnection)?;
    let manager = ConnectionManager::new(client)
        .await
        .map_err(InfraError::RedisConnection)?;

    let repo = Arc::new(RedisWaitlistRepo::new(manager.clone())) as Arc<dyn WaitlistRepo>;
    let waitlist_use_cases = WaitlistUseCases::new(repo);

    let rate_limiter: Arc<dyn RateLimiterTrait> = Arc::new(RedisRateLimiter::new(
        manager,
        config.rate_limit_window_secs,
        config.rate_limit_max_requests,
    ));

    let landing_page =
        LandingPage::load(&config.index_html_path, config.cache_landing_page).await;

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        rate_limiter,
        landing_page: Arc::new(landing_page),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "alere_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
