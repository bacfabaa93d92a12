// src/models/mod.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::estimator::SolarEstimate;

// ───────────────────────────────────────
// Display formatting
// ───────────────────────────────────────

/// Indian-locale currency string: `₹` symbol, no fraction digits, Indian
/// digit grouping (last three digits, then groups of two): `₹2,61,250`.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let sign = if rounded < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{sign}₹{},{tail}", groups.join(","))
}

// ───────────────────────────────────────
// Estimate wire shape
// ───────────────────────────────────────

/// Estimate as consumed by the front end: formatted strings for display
/// plus the raw numbers for charting. Never the other way around.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub system_size_kw: f64,
    pub estimated_cost: String,
    pub monthly_savings: String,
    pub total_annual_savings: String,
    pub government_subsidy: String,
    /// Payback in years, one decimal; `null` when savings are zero.
    pub roi_years: Option<f64>,
    pub carbon_offset: String,
    pub recommendation: String,
    pub cost_min: i64,
    pub cost_max: i64,
    pub savings_yearly_min: f64,
    pub savings_yearly_max: f64,
}

impl From<SolarEstimate> for EstimateResponse {
    fn from(e: SolarEstimate) -> Self {
        Self {
            system_size_kw: e.system_size_kw,
            estimated_cost: format!(
                "{} - {}",
                format_inr(e.cost_min as f64),
                format_inr(e.cost_max as f64)
            ),
            monthly_savings: format_inr(e.monthly_savings),
            total_annual_savings: format_inr(e.annual_savings),
            government_subsidy: if e.subsidy_amount > 0.0 {
                format_inr(e.subsidy_amount)
            } else {
                "N/A".to_string()
            },
            roi_years: e.roi_years.map(|r| (r * 10.0).round() / 10.0),
            carbon_offset: format!("{:.1} Tons/Year", e.carbon_offset_tons_per_year),
            recommendation: e.recommendation,
            cost_min: e.cost_min,
            cost_max: e.cost_max,
            // Same ±5% band as the cost range.
            savings_yearly_min: e.annual_savings * 0.95,
            savings_yearly_max: e.annual_savings * 1.05,
        }
    }
}

// ───────────────────────────────────────
// Captured submissions
// ───────────────────────────────────────

/// A contact-form lead. Append-only; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLead {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub requirements: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// One logged estimator run: the request fields plus the response the user
/// saw, kept verbatim as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateLogRecord {
    pub id: i64,
    pub bill_amount: f64,
    pub location: String,
    pub property_type: String,
    pub result: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
}

/// Uniform acknowledgement for all relay endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}
