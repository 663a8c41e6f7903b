//! Stock Repository Implementation
//!
//! SQLite-backed implementation of Repository<StockItem> plus the
//! quantity-set operation used by the dashboard's +/- adjustments.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, StockItem};

const STOCK_COLUMNS: &str = "id, brand, quantity, price, description, created_at, updated_at";

/// SQLite implementation of the stock repository
pub struct StockRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl StockRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Set only the quantity of an item, bumping updated_at
    pub async fn set_quantity(&self, id: &str, quantity: i64) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = ready(&guard)?;

        let changed = conn
            .execute(
                "UPDATE stock SET quantity = ?1, updated_at = ?2 WHERE id = ?3",
                params![quantity, crate::domain::now_millis(), id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("stock item {}", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<StockItem> for StockRepository {
    async fn create(&self, entity: &StockItem) -> DomainResult<StockItem> {
        let guard = self.conn.lock().await;
        let conn = ready(&guard)?;

        conn.execute(
            "INSERT INTO stock (id, brand, quantity, price, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                entity.id,
                entity.brand,
                entity.quantity,
                entity.price,
                entity.description,
                entity.created_at,
                entity.updated_at
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<StockItem>> {
        let guard = self.conn.lock().await;
        let conn = ready(&guard)?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM stock WHERE id = ?1", STOCK_COLUMNS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        match rows.next().map_err(|e| DomainError::Internal(e.to_string()))? {
            Some(row) => Ok(Some(row_to_stock(row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<StockItem>> {
        let guard = self.conn.lock().await;
        let conn = ready(&guard)?;

        // Newest first; rowid breaks same-millisecond ties
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM stock ORDER BY created_at DESC, rowid DESC",
                STOCK_COLUMNS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(())
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().map_err(|e| DomainError::Internal(e.to_string()))? {
            items.push(row_to_stock(row)?);
        }
        Ok(items)
    }

    async fn update(&self, entity: &StockItem) -> DomainResult<StockItem> {
        let guard = self.conn.lock().await;
        let conn = ready(&guard)?;

        let updated_at = crate::domain::now_millis();
        let changed = conn
            .execute(
                "UPDATE stock SET brand = ?1, quantity = ?2, price = ?3, description = ?4, updated_at = ?5
                 WHERE id = ?6",
                params![
                    entity.brand,
                    entity.quantity,
                    entity.price,
                    entity.description,
                    updated_at,
                    entity.id
                ],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("stock item {}", entity.id)));
        }

        let mut updated = entity.clone();
        updated.updated_at = updated_at;
        Ok(updated)
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = ready(&guard)?;

        let changed = conn
            .execute("DELETE FROM stock WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("stock item {}", id)));
        }
        Ok(())
    }
}

fn ready<'a>(guard: &'a Option<Connection>) -> DomainResult<&'a Connection> {
    guard
        .as_ref()
        .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))
}

fn row_to_stock(row: &Row<'_>) -> DomainResult<StockItem> {
    Ok(StockItem {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        brand: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        quantity: row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?,
        price: row.get(3).map_err(|e| DomainError::Internal(e.to_string()))?,
        description: row.get(4).map_err(|e| DomainError::Internal(e.to_string()))?,
        created_at: row.get(5).map_err(|e| DomainError::Internal(e.to_string()))?,
        updated_at: row.get(6).map_err(|e| DomainError::Internal(e.to_string()))?,
    })
}
