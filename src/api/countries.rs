use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::AppState;

#[derive(serde::Deserialize)]
pub struct CountryQueryParams {
    pub q: Option<String>,
}

pub async fn list_countries(State(app_state): State<AppState>) -> Json<serde_json::Value> {
    match app_state.repository.all_countries().await {
        Ok(countries) => Json(serde_json::json!({
            "success": true,
            "data": countries
        })),
        Err(e) => Json(serde_json::json!({
            "success": false,
            "error": format!("Failed to load countries: {}", e)
        })),
    }
}

pub async fn search_countries(
    State(app_state): State<AppState>,
    Query(params): Query<CountryQueryParams>,
) -> Json<serde_json::Value> {
    let query = params.q.as_deref().unwrap_or("");

    match app_state.repository.search(query).await {
        Ok(countries) => Json(serde_json::json!({
            "success": true,
            "data": countries
        })),
        Err(e) => Json(serde_json::json!({
            "success": false,
            "error": format!("Failed to search countries: {}", e)
        })),
    }
}

pub async fn list_sections(
    State(app_state): State<AppState>,
    Query(params): Query<CountryQueryParams>,
) -> Json<serde_json::Value> {
    let query = params.q.as_deref().unwrap_or("");

    let countries = match app_state.repository.search(query).await {
        Ok(countries) => countries,
        Err(e) => {
            return Json(serde_json::json!({
                "success": false,
                "error": format!("Failed to load countries: {}", e)
            }));
        }
    };

    let sections = app_state.repository.sectioned(&countries);
    Json(serde_json::json!({
        "success": true,
        "data": sections
    }))
}

pub async fn index_letters(State(app_state): State<AppState>) -> Json<serde_json::Value> {
    match app_state.repository.index_letters().await {
        Ok(letters) => Json(serde_json::json!({
            "success": true,
            "data": letters
        })),
        Err(e) => Json(serde_json::json!({
            "success": false,
            "error": format!("Failed to load index letters: {}", e)
        })),
    }
}

pub async fn country_for_dial_code(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match app_state.repository.country_for_dial_code(&code).await {
        Ok(Some(country)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "data": country
            })),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "success": false,
                "error": format!("No country matches dial code: {}", code)
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "success": false,
                "error": format!("Failed to look up dial code: {}", e)
            })),
        ),
    }
}

pub async fn country_for_iso_code(
    State(app_state): State<AppState>,
    Path(iso): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match app_state.repository.country_for_iso_code(&iso).await {
        Ok(Some(country)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "data": country
            })),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "success": false,
                "error": format!("No country with ISO code: {}", iso)
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "success": false,
                "error": format!("Failed to look up ISO code: {}", e)
            })),
        ),
    }
}
