// src/routes/contact.rs

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::bad_request;
use crate::models::{Ack, ContactLead};
use crate::AppState;

#[derive(Deserialize)]
pub struct ContactBody {
    #[serde(default)] pub name: String,
    #[serde(default)] pub phone: String,
    pub requirements: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQ {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactBody>,
) -> Result<Json<Ack>, (StatusCode, Json<Ack>)> {
    // Absent and blank are the same offence; nothing is stored either way.
    if body.name.trim().is_empty() || body.phone.trim().is_empty() {
        return Err(bad_request("Missing required fields"));
    }

    let lead = state
        .store
        .append_contact(body.name, body.phone, body.requirements)
        .await;
    tracing::info!(id = lead.id, name = %lead.name, phone = %lead.phone, "new lead received");

    Ok(Json(Ack {
        success: true,
        message: "Consultation scheduled successfully!".to_string(),
    }))
}

/// GET /api/leads
pub async fn list_leads(
    State(state): State<AppState>,
    Query(q): Query<ListQ>,
) -> Json<Vec<ContactLead>> {
    let limit = q.limit.unwrap_or(50).clamp(1, 500);
    let offset = q.offset.unwrap_or(0);
    Json(state.store.list_contacts(limit, offset).await)
}
