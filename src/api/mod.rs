pub mod countries;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, Router},
    Json,
};
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::services::repository::CountryRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub repository: Arc<CountryRepository>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/countries", get(countries::list_countries))
        .route("/countries/search", get(countries::search_countries))
        .route("/countries/sections", get(countries::list_sections))
        .route("/countries/index", get(countries::index_letters))
        .route(
            "/countries/dial/{code}",
            get(countries::country_for_dial_code),
        )
        .route(
            "/countries/iso/{iso}",
            get(countries::country_for_iso_code),
        )
        .route(
            "/health",
            get({
                (
                    StatusCode::OK,
                    Json(serde_json::json!({ "status": "healthy" })),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
