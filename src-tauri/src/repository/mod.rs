//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod stock_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::{init_db, DbState};
pub use stock_repo::StockRepository;
pub use traits::Repository;
