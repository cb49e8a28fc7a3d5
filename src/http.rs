// src/http.rs

//! HTTP adapter for the receipt service.
//!
//! Routes:
//! - `POST /receipt/process` → `{"id": ...}`
//! - `GET /receipt/{id}/points` → `{"points": ...}`
//! - `GET /health` → `{"status": "ok", "receipts": ...}`
//!
//! Every failure is rendered as `{"error": message}` with a status derived
//! from the `AppError` variant.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::error::AppError;
use crate::models::ReceiptRequest;
use crate::services::ReceiptService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<ReceiptService>,
}

/// Body of a successful `POST /receipt/process`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Body of a successful `GET /receipt/{id}/points`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsResponse {
    pub points: u64,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Calculation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_)
            | AppError::Config(_)
            | AppError::Io(_)
            | AppError::Json(_)
            | AppError::Toml(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, "request failed: {}", self);
        } else {
            warn!(%status, "request rejected: {}", self);
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the application router around a receipt service.
pub fn router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/receipt/process", post(process_receipt))
        .route("/receipt/{id}/points", get(get_points))
        .route("/health", get(health))
        .with_state(AppState { service })
}

#[instrument(skip_all)]
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptRequest>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::validation(format!("invalid receipt payload: {}", rejection.body_text()))
    })?;
    let receipt = request.into_receipt()?;

    let id = state.service.process_receipt(receipt).await?;
    info!(receipt_id = %id, "receipt processed");
    Ok(Json(ProcessReceiptResponse { id }))
}

#[instrument(skip_all)]
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    let points = state.service.get_points(&id).await?;
    info!(receipt_id = %id, points, "points looked up");
    Ok(Json(PointsResponse { points }))
}

#[instrument(skip_all)]
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let receipts = state.service.receipt_count().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        receipts,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use super::*;
    use crate::models::Config;
    use crate::services::build_receipt_service;

    const TARGET: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"}
        ],
        "total": "35.35"
    }"#;

    fn app() -> Router {
        router(Arc::new(build_receipt_service(&Config::default())))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipt/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send<T: DeserializeOwned>(app: &Router, request: Request<Body>) -> (StatusCode, T) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_process_then_get_points() {
        let app = app();

        let (status, body): (_, ProcessReceiptResponse) = send(&app, post_json(TARGET)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.id.is_empty());

        let uri = format!("/receipt/{}/points", body.id);
        let (status, points): (_, PointsResponse) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(points, PointsResponse { points: 20 });
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body): (_, ErrorResponse) =
            send(&app(), post_json(r#"{"retailer": "Target",,}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("invalid receipt payload"));
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let body = TARGET.replace(r#""total": "35.35""#, r#""totl": "35.35""#);
        let (status, body): (_, ErrorResponse) = send(&app(), post_json(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("total"));
    }

    #[tokio::test]
    async fn test_bad_time_is_bad_request() {
        let body = TARGET.replace("13:01", "1:01 PM");
        let (status, body): (_, ErrorResponse) = send(&app(), post_json(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("purchase time"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (status, body): (_, ErrorResponse) =
            send(&app(), get("/receipt/nonexistent/points")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.error.contains("nonexistent"));
    }

    #[tokio::test]
    async fn test_health_counts_receipts() {
        let app = app();
        let _: (_, ProcessReceiptResponse) = send(&app, post_json(TARGET)).await;

        let (status, health): (_, HealthResponse) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health.status, "ok");
        assert_eq!(health.receipts, 1);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::storage("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
