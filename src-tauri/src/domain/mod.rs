//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization
//! and blake3 for id generation).

mod entity;
mod stock;

pub use entity::{DomainError, DomainResult, Entity};
pub(crate) use stock::now_millis;
pub use stock::{new_stock_id, StockItem};
