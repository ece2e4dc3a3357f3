use axum::{Router, extract::State, response::Html, routing::get};

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing_page))
}

async fn landing_page(State(app_state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(app_state.landing_page.render().await?))
}
