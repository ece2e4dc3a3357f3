//! Test app state builder for HTTP-level integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    entities::waitlist_entry::WaitlistEntry,
    infra::{config::AppConfig, landing_page::LandingPage, rate_limit::RateLimiterTrait},
    test_utils::{InMemoryRateLimiter, InMemoryWaitlistRepo},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .with_admin_secret("s3cret")
///     .with_entry(WaitlistEntry::new("a@b.com".into()))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    admin_secret: Option<String>,
    repo: Option<Arc<dyn WaitlistRepo>>,
    rate_limiter: Option<Arc<dyn RateLimiterTrait>>,
    landing_html: String,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            admin_secret: None,
            repo: None,
            rate_limiter: None,
            landing_html: "<html><body>test landing page</body></html>".to_string(),
        }
    }

    /// Seed the waitlist with an existing entry.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Configure the admin secret; the default is unconfigured (fail closed).
    pub fn with_admin_secret(mut self, secret: &str) -> Self {
        self.admin_secret = Some(secret.to_string());
        self
    }

    /// Replace the repo entirely (e.g. with `FailingWaitlistRepo`).
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Replace the permissive default rate limiter.
    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimiterTrait>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    pub fn with_landing_html(mut self, html: &str) -> Self {
        self.landing_html = html.to_string();
        self
    }

    /// Build the state plus a handle on the in-memory repo for assertions.
    pub fn build_with_repo(mut self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(std::mem::take(
            &mut self.entries,
        )));
        let app_state = self.with_repo(repo.clone()).build();
        (app_state, repo)
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        let repo: Arc<dyn WaitlistRepo> = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::with_entries(self.entries)));

        let rate_limiter: Arc<dyn RateLimiterTrait> = self
            .rate_limiter
            .unwrap_or_else(|| Arc::new(InMemoryRateLimiter::permissive()));

        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:8000".parse::<SocketAddr>().unwrap(),
            redis_url: String::new(),
            admin_secret: self.admin_secret.map(|s| SecretString::new(s.into())),
            rate_limit_window_secs: 600,
            rate_limit_max_requests: 5,
            cache_landing_page: true,
            index_html_path: PathBuf::from("./index.html"),
            public_dir: PathBuf::from("./public"),
        });

        AppState {
            config,
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo)),
            rate_limiter,
            landing_page: Arc::new(LandingPage::from_cached(self.landing_html)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
