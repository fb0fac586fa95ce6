// JSON endpoints exposing the cost model outside the browser

use crate::config::AppConfig;
use crate::cost;
use crate::models::{Car, Comparison, CostSample, FuelPrices, RangeError, SamplingRange};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use dioxus::logger::tracing::{info, warn};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub cars: Vec<Car>,
    #[serde(default)]
    pub prices: FuelPrices,
    #[serde(default)]
    pub range: Option<SamplingRange>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid sampling range: {0}")]
    InvalidRange(#[from] RangeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidRange(_) => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

pub fn router(config: AppConfig) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/compare", post(compare))
        .route("/api/samples", post(samples))
        .with_state(Arc::new(config))
}

pub async fn health() -> &'static str {
    "OK"
}

fn requested_range(config: &AppConfig, request: &CompareRequest) -> Result<SamplingRange, ApiError> {
    match request.range {
        Some(range) => Ok(range
            .validate()
            .inspect_err(|e| warn!("Rejected request range: {}", e))?),
        None => Ok(config.default_range),
    }
}

pub async fn compare(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<Comparison>, ApiError> {
    let range = requested_range(&config, &request)?;

    let comparison = cost::compare(&request.cars, &request.prices, &range);
    info!(
        "Compared {} cars over {} km: {} break-even points",
        request.cars.len(),
        range.max_distance_km,
        comparison.break_evens.len()
    );
    Ok(Json(comparison))
}

/// Cost table: one row per sampled distance, one column per car.
pub async fn samples(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<Vec<CostSample>>, ApiError> {
    let range = requested_range(&config, &request)?;
    Ok(Json(cost::cost_samples(&request.cars, &request.prices, &range)))
}
