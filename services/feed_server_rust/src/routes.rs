//! HTTP surface of the feed service: a liveness endpoint and the aggregated
//! orders feed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use feed_core::clients::ShopifyClient;
use feed_core::feed::build_orders_feed;
use feed_core::FeedError;
use log::{error, info};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub struct AppState {
    pub client: ShopifyClient,
    pub max_concurrency: usize,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/orders-feed", get(orders_feed))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe; never fails.
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Orders feed service is running"
    }))
}

async fn orders_feed(State(state): State<Arc<AppState>>) -> Response {
    info!("Received request for orders feed");

    match build_orders_feed(&state.client, state.max_concurrency).await {
        Ok(orders) => (StatusCode::OK, Json(orders)).into_response(),
        Err(e) => {
            error!("Error building orders feed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body(&e))).into_response()
        }
    }
}

/// Structured error body for feed failures: stable message, underlying
/// detail text, and a request timestamp.
fn error_body(error: &FeedError) -> serde_json::Value {
    json!({
        "error": "Failed to process orders",
        "details": error.to_string(),
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use feed_core::Config;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(shop_url: &str) -> Router {
        let config = Config {
            shop_url: shop_url.to_string(),
            access_token: "shpat_test".to_string(),
            port: 3000,
            max_concurrency: 4,
        };
        create_router(Arc::new(AppState {
            client: ShopifyClient::new(&config),
            max_concurrency: config.max_concurrency,
        }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_is_ok() {
        let app = test_app("example.myshopify.com");

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_feed_failure_returns_structured_500() {
        // Unroutable shop host: the upstream fetch fails, and the feed must
        // answer with the structured error body rather than a bare 500.
        let app = test_app("invalid.host.invalid");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/orders-feed")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to process orders");
        assert!(!json["details"].as_str().unwrap().is_empty());
        assert!(json["timestamp"].as_str().is_some());
    }

    #[test]
    fn test_error_body_carries_upstream_detail() {
        let err = FeedError::Upstream {
            status: 401,
            body: "{\"errors\":\"[API] Invalid API key or access token\"}".to_string(),
        };

        let body = error_body(&err);
        assert_eq!(body["error"], "Failed to process orders");
        let details = body["details"].as_str().unwrap();
        assert!(details.contains("401"));
        assert!(details.contains("Invalid API key"));
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_error_body_for_format_error() {
        let err = FeedError::Format("no orders array in response".to_string());

        let body = error_body(&err);
        let details = body["details"].as_str().unwrap();
        assert!(details.contains("no orders array"));
    }
}
