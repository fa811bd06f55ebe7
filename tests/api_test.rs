//! Routes the HTTP surface through the axum router in-process.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use countrysrv::api::{router, AppState};
use countrysrv::config::Config;
use countrysrv::services::repository::CountryRepository;
use tower::util::ServiceExt;

fn test_router() -> axum::Router {
    let config = Arc::new(Config {
        server_port: 0,
        assets_dir: "./assets".to_string(),
    });
    let repository = Arc::new(CountryRepository::bundled());
    router(AppState { config, repository })
}

async fn get_json(
    uri: &str,
) -> Result<(StatusCode, serde_json::Value), Box<dyn std::error::Error>> {
    let response = test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn test_list_countries() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get_json("/countries").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"].as_array().unwrap().len() > 200);

    Ok(())
}

#[tokio::test]
async fn test_search_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get_json("/countries/search?q=united").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"United Kingdom"));
    assert!(names.contains(&"United States"));

    // Missing q behaves as no filter.
    let (_, unfiltered) = get_json("/countries/search").await?;
    assert!(unfiltered["data"].as_array().unwrap().len() > 200);

    Ok(())
}

#[tokio::test]
async fn test_sections_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get_json("/countries/sections?q=ger").await?;

    assert_eq!(status, StatusCode::OK);
    let sections = body["data"].as_array().unwrap();
    assert!(sections.iter().any(|s| s["key"] == "G"
        && s["items"]
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["name"] == "Germany")));

    Ok(())
}

#[tokio::test]
async fn test_index_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get_json("/countries/index").await?;

    assert_eq!(status, StatusCode::OK);
    let letters = body["data"].as_array().unwrap();
    assert!(letters.len() > 20);
    assert_eq!(letters[0], "A");

    Ok(())
}

#[tokio::test]
async fn test_dial_code_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get_json("/countries/dial/+1242555").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "BS");

    let (status, body) = get_json("/countries/dial/+999").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    Ok(())
}

#[tokio::test]
async fn test_iso_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get_json("/countries/iso/de").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Germany");

    let (status, _) = get_json("/countries/iso/ZZ").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get_json("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    Ok(())
}
