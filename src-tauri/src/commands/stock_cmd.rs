//! Tauri Commands for Stock CRUD
//!
//! Exposes stock operations to the frontend via Tauri IPC. The contract
//! mirrors what the dashboard expects: list never fails (empty on error),
//! mutations answer with OpResult.

use tauri::State;

use super::OpResult;
use crate::domain::{DomainError, StockItem};
use crate::repository::Repository;
use crate::AppState;

/// List all stock, newest first. Returns an empty list on internal error.
#[tauri::command]
pub async fn list_stock(state: State<'_, AppState>) -> Result<Vec<StockItem>, String> {
    match state.stock_repo.list().await {
        Ok(items) => Ok(items),
        Err(e) => {
            log::error!("Error fetching stock: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Create a new stock item
#[tauri::command]
pub async fn add_stock(
    state: State<'_, AppState>,
    brand: String,
    quantity: i64,
    price: f64,
    description: Option<String>,
) -> Result<OpResult, String> {
    if let Some(reason) = validate(&brand, quantity, price) {
        return Ok(OpResult::fail(reason));
    }

    let item = StockItem::new(brand, quantity, price, description);
    match state.stock_repo.create(&item).await {
        Ok(_) => Ok(OpResult::ok()),
        Err(e) => {
            log::error!("Error adding item: {}", e);
            Ok(OpResult::fail("Failed to add item"))
        }
    }
}

/// Update all fields of an existing stock item
#[tauri::command]
pub async fn update_stock(
    state: State<'_, AppState>,
    id: String,
    brand: String,
    quantity: i64,
    price: f64,
    description: Option<String>,
) -> Result<OpResult, String> {
    if let Some(reason) = validate(&brand, quantity, price) {
        return Ok(OpResult::fail(reason));
    }

    let existing = match state.stock_repo.find_by_id(&id).await {
        Ok(Some(item)) => item,
        Ok(None) => return Ok(OpResult::fail("Item not found")),
        Err(e) => {
            log::error!("Error updating item: {}", e);
            return Ok(OpResult::fail("Failed to update item"));
        }
    };

    let updated = StockItem {
        brand,
        quantity,
        price,
        description,
        ..existing
    };

    match state.stock_repo.update(&updated).await {
        Ok(_) => Ok(OpResult::ok()),
        Err(e) => {
            log::error!("Error updating item: {}", e);
            Ok(OpResult::fail("Failed to update item"))
        }
    }
}

/// Delete a stock item
#[tauri::command]
pub async fn delete_stock(state: State<'_, AppState>, id: String) -> Result<OpResult, String> {
    match state.stock_repo.delete(&id).await {
        Ok(()) => Ok(OpResult::ok()),
        Err(DomainError::NotFound(_)) => Ok(OpResult::fail("Item not found")),
        Err(e) => {
            log::error!("Error deleting item: {}", e);
            Ok(OpResult::fail("Failed to delete item"))
        }
    }
}

/// Set the quantity of a stock item (already clamped client-side)
#[tauri::command]
pub async fn set_stock_quantity(
    state: State<'_, AppState>,
    id: String,
    quantity: i64,
) -> Result<OpResult, String> {
    // Persisted quantity must never go negative, whatever the caller sent
    if quantity < 0 {
        return Ok(OpResult::fail("Quantity cannot be negative"));
    }

    match state.stock_repo.set_quantity(&id, quantity).await {
        Ok(()) => Ok(OpResult::ok()),
        Err(DomainError::NotFound(_)) => Ok(OpResult::fail("Item not found")),
        Err(e) => {
            log::error!("Error updating quantity: {}", e);
            Ok(OpResult::fail("Failed to update quantity"))
        }
    }
}

fn validate(brand: &str, quantity: i64, price: f64) -> Option<&'static str> {
    if brand.trim().is_empty() {
        Some("Brand is required")
    } else if quantity < 0 {
        Some("Quantity cannot be negative")
    } else if price < 0.0 {
        Some("Price cannot be negative")
    } else {
        None
    }
}
