// src/store/mod.rs

//! Transient storage for captured submissions.
//!
//! The relay is a capture mechanism, not a system of record: everything here
//! lives for the process lifetime only and a restart discards it. Handlers
//! only ever see `append_*` / `list_*`; the containers themselves stay
//! private.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use chrono::Utc;

use crate::models::{ContactLead, EstimateLogRecord};

/// Process-unique, roughly time-sortable id source. Seeded from the clock
/// once, then strictly incremented, so two appends landing in the same
/// millisecond can never collide.
#[derive(Debug)]
struct IdGen {
    next: AtomicI64,
}

impl IdGen {
    fn new() -> Self {
        Self {
            next: AtomicI64::new(Utc::now().timestamp_millis()),
        }
    }

    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[derive(Clone)]
pub struct Store {
    ids: Arc<IdGen>,
    contacts: Arc<tokio::sync::RwLock<Vec<ContactLead>>>,
    estimates: Arc<tokio::sync::RwLock<Vec<EstimateLogRecord>>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            ids: Arc::new(IdGen::new()),
            contacts: Arc::new(tokio::sync::RwLock::new(Vec::new())),
            estimates: Arc::new(tokio::sync::RwLock::new(Vec::new())),
        }
    }

    pub async fn append_contact(
        &self,
        name: String,
        phone: String,
        requirements: Option<String>,
    ) -> ContactLead {
        let lead = ContactLead {
            id: self.ids.next_id(),
            name,
            phone,
            requirements,
            submitted_at: Utc::now(),
        };
        self.contacts.write().await.push(lead.clone());
        lead
    }

    pub async fn append_estimate(
        &self,
        bill_amount: f64,
        location: String,
        property_type: String,
        result: serde_json::Value,
    ) -> EstimateLogRecord {
        let record = EstimateLogRecord {
            id: self.ids.next_id(),
            bill_amount,
            location,
            property_type,
            result,
            submitted_at: Utc::now(),
        };
        self.estimates.write().await.push(record.clone());
        record
    }

    /// Leads in arrival order.
    pub async fn list_contacts(&self, limit: usize, offset: usize) -> Vec<ContactLead> {
        let contacts = self.contacts.read().await;
        contacts.iter().skip(offset).take(limit).cloned().collect()
    }

    pub async fn list_estimates(&self, limit: usize, offset: usize) -> Vec<EstimateLogRecord> {
        let estimates = self.estimates.read().await;
        estimates.iter().skip(offset).take(limit).cloned().collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
