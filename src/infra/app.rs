use axum::{Router, http};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::adapters::http::{app_state::AppState, routes};

pub fn create_app(app_state: AppState) -> Router {
    let public_dir = app_state.config.public_dir.clone();

    Router::new()
        .merge(routes::router(app_state.clone()))
        // Anything that is not a route falls through to the static assets.
        .fallback_service(ServeDir::new(public_dir))
        .with_state(app_state)
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http-request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                    request_id = %request_id
                )
            }),
        )
}
