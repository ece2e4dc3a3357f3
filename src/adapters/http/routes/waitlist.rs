use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, middleware::rate_limit_middleware},
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::SubmitOutcome,
    infra::config::AppConfig,
};

/// Shared-secret header gating the admin listing.
pub const ADMIN_AUTH_HEADER: &str = "x-alere-internal-auth";

pub fn router(app_state: AppState) -> Router<AppState> {
    // Only submissions are rate limited; the admin listing is gated by the
    // shared secret instead.
    let submit = Router::new()
        .route("/waitlist", post(join_waitlist))
        .route_layer(middleware::from_fn_with_state(
            app_state,
            rate_limit_middleware,
        ));

    Router::new()
        .route("/waitlist", get(list_waitlist))
        .merge(submit)
}

#[derive(Deserialize)]
struct JoinPayload {
    // Left as a raw value so a missing or non-string email maps to our own
    // 400 instead of a deserialization rejection.
    #[serde(default)]
    email: serde_json::Value,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

async fn join_waitlist(
    State(app_state): State<AppState>,
    Json(payload): Json<JoinPayload>,
) -> AppResult<impl IntoResponse> {
    let email = payload
        .email
        .as_str()
        .ok_or_else(|| AppError::InvalidInput("A valid email is required.".into()))?;

    let outcome = app_state.waitlist_use_cases.submit(email).await?;

    Ok(match outcome {
        SubmitOutcome::Joined => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Success! You have been added to the waitlist.".into(),
            }),
        ),
        SubmitOutcome::AlreadyJoined => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "You are already on the waitlist!".into(),
            }),
        ),
    })
}

async fn list_waitlist(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Response> {
    require_admin(&headers, &app_state.config)?;

    let entries = app_state.waitlist_use_cases.list().await?;
    let body =
        serde_json::to_string_pretty(&entries).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
        body,
    )
        .into_response())
}

fn require_admin(headers: &HeaderMap, config: &AppConfig) -> AppResult<()> {
    // Fail closed: with no secret configured every caller is rejected.
    let Some(secret) = config.admin_secret.as_ref() else {
        return Err(AppError::Forbidden);
    };
    let Some(provided) = headers.get(ADMIN_AUTH_HEADER).and_then(|v| v.to_str().ok()) else {
        return Err(AppError::Forbidden);
    };
    if provided != secret.expose_secret() {
        return Err(AppError::Forbidden);
    }
    Ok(())
}
