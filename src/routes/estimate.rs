// src/routes/estimate.rs

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::bad_request;
use crate::estimator::{self, PropertyClass, Region};
use crate::models::{Ack, EstimateLogRecord, EstimateResponse};
use crate::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Request models
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBody {
    pub bill_amount: f64,
    #[serde(default)] pub location: String,
    #[serde(default)] pub property_type: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateLogBody {
    pub bill_amount: f64,
    #[serde(default)] pub location: String,
    #[serde(default)] pub property_type: String,
    pub result: serde_json::Value,
}

#[derive(Deserialize)]
pub struct ListQ {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /api/estimate
///
/// Computation only. Telemetry goes through the separate, fire-and-forget
/// `/api/estimate-log` call.
pub async fn compute_estimate(
    Json(body): Json<EstimateBody>,
) -> Result<Json<EstimateResponse>, (StatusCode, Json<Ack>)> {
    let property =
        PropertyClass::parse(&body.property_type).map_err(|e| bad_request(e.to_string()))?;
    let region = Region::parse(&body.location);

    let estimate = estimator::estimate(body.bill_amount, region, property)
        .map_err(|e| bad_request(e.to_string()))?;
    tracing::debug!(
        bill = body.bill_amount,
        region = region.name(),
        property = property.as_str(),
        size_kw = estimate.system_size_kw,
        "estimate computed"
    );
    Ok(Json(estimate.into()))
}

/// POST /api/estimate-log
pub async fn log_estimate(
    State(state): State<AppState>,
    Json(body): Json<EstimateLogBody>,
) -> Json<Ack> {
    let record = state
        .store
        .append_estimate(body.bill_amount, body.location, body.property_type, body.result)
        .await;
    tracing::info!(
        id = record.id,
        bill = record.bill_amount,
        location = %record.location,
        "estimate logged"
    );

    Json(Ack {
        success: true,
        message: "Estimate saved".to_string(),
    })
}

/// GET /api/estimate-logs
pub async fn list_estimate_logs(
    State(state): State<AppState>,
    Query(q): Query<ListQ>,
) -> Json<Vec<EstimateLogRecord>> {
    let limit = q.limit.unwrap_or(50).clamp(1, 500);
    let offset = q.offset.unwrap_or(0);
    Json(state.store.list_estimates(limit, offset).await)
}
