use std::sync::Arc;

use crate::{
    application::use_cases::waitlist::WaitlistUseCases,
    infra::{config::AppConfig, landing_page::LandingPage, rate_limit::RateLimiterTrait},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub rate_limiter: Arc<dyn RateLimiterTrait>,
    pub landing_page: Arc<LandingPage>,
}
