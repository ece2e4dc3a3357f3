use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub redis_url: String,
    /// Shared secret gating GET /waitlist. When unset the endpoint rejects
    /// every caller (fail closed).
    pub admin_secret: Option<SecretString>,
    pub rate_limit_window_secs: u64,
    pub rate_limit_max_requests: u64,
    /// Read index.html once at startup instead of on every request.
    pub cache_landing_page: bool,
    pub index_html_path: PathBuf,
    pub public_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:8000".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let redis_url = env::var("REDIS_URL").unwrap_or("redis://127.0.0.1:6379".to_string());

        let admin_secret = env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| SecretString::new(s.into()));

        let rate_limit_window_secs: u64 = env::var("RATE_LIMIT_WINDOW_SECS")
            .unwrap_or("600".to_string())
            .parse()
            .expect("RATE_LIMIT_WINDOW_SECS must be a valid number");

        let rate_limit_max_requests: u64 = env::var("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or("5".to_string())
            .parse()
            .expect("RATE_LIMIT_MAX_REQUESTS must be a valid number");

        let cache_landing_page = env::var("CACHE_LANDING_PAGE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let index_html_path =
            PathBuf::from(env::var("INDEX_HTML_PATH").unwrap_or("./index.html".to_string()));
        let public_dir = PathBuf::from(env::var("PUBLIC_DIR").unwrap_or("./public".to_string()));

        Self {
            bind_addr,
            redis_url,
            admin_secret,
            rate_limit_window_secs,
            rate_limit_max_requests,
            cache_landing_page,
            index_html_path,
            public_dir,
        }
    }
}
