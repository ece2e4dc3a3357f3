use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{adapters::http::app_state::AppState, app_error::AppError};

/// Bucket key for clients that present no usable address header. All such
/// clients share one rate-limit bucket.
pub const UNKNOWN_CLIENT: &str = "unknown-ip";

pub async fn rate_limit_middleware(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = client_key(&request);

    tracing::debug!(client_key = %key, "Rate limiting request");

    app_state.rate_limiter.check(&key).await?;

    Ok(next.run(request).await)
}

fn client_key(req: &Request) -> String {
    // Extract the client address from X-Forwarded-For or CF-Connecting-IP
    if let Some(forwarded) = req.headers().get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(first) = val.split(',').next()
    {
        let trimmed = first.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    if let Some(connecting) = req.headers().get("cf-connecting-ip")
        && let Ok(val) = connecting.to_str()
        && !val.trim().is_empty()
    {
        return val.trim().to_string();
    }
    UNKNOWN_CLIENT.to_string()
}
