//! Stock Entity
//!
//! A single stock line: brand, on-hand quantity, unit price, optional
//! description. Quantity is never negative in persisted state.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::entity::Entity;

/// A stock item as stored and served to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Opaque unique identifier, immutable once assigned
    pub id: String,
    /// Display name, non-empty
    pub brand: String,
    /// Units on hand, >= 0
    pub quantity: i64,
    /// Unit price in currency units, >= 0
    pub price: f64,
    /// Optional free-form description
    pub description: Option<String>,
    /// Server-assigned creation time (epoch millis)
    pub created_at: i64,
    /// Server-assigned last-update time (epoch millis)
    pub updated_at: i64,
}

impl StockItem {
    /// Create a new item with a fresh id and server-assigned timestamps
    pub fn new(brand: String, quantity: i64, price: f64, description: Option<String>) -> Self {
        let now = now_millis();
        Self {
            id: new_stock_id(),
            brand,
            quantity,
            price,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for StockItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Current time as epoch millis
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate an opaque stock id.
///
/// A blake3 hash over the current time and a process-local counter,
/// truncated to 16 hex chars. Unique within and across runs.
pub fn new_stock_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut hasher = blake3::Hasher::new();
    hasher.update(&nanos.to_le_bytes());
    hasher.update(&seq.to_le_bytes());
    let hash = hasher.finalize();
    hash.to_hex()[..16].to_string()
}
