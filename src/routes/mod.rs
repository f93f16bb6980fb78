use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: reachout_contact::RelayClient,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(contact::page))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .nest_service("/static", assets::AssetsService::new())
        .with_state(app_state)
}
