//! Frontend Models
//!
//! Data structures matching backend entities, plus the raw form state the
//! add/edit dialog binds to.

use serde::{Deserialize, Serialize};

/// Prefix of client-only ids given to optimistically inserted items.
/// Replaced by the authoritative id on the post-create reload.
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Stock item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    pub brand: String,
    pub quantity: i64,
    pub price: f64,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl StockItem {
    /// True while the item only exists client-side
    pub fn is_temporary(&self) -> bool {
        self.id.starts_with(TEMP_ID_PREFIX)
    }
}

/// Outcome of a backend mutation (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpResult {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl OpResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Raw add/edit form values, exactly as typed.
///
/// Numeric fields stay strings here; parsing is lenient (bad or negative
/// input coerces to 0) and happens at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockForm {
    pub brand: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
}

impl StockForm {
    pub fn from_item(item: &StockItem) -> Self {
        Self {
            brand: item.brand.clone(),
            quantity: item.quantity.to_string(),
            price: item.price.to_string(),
            description: item.description.clone().unwrap_or_default(),
        }
    }

    /// Lenient quantity: unparseable or negative input becomes 0
    pub fn parsed_quantity(&self) -> i64 {
        self.quantity.trim().parse::<i64>().unwrap_or(0).max(0)
    }

    /// Lenient price: unparseable or negative input becomes 0
    pub fn parsed_price(&self) -> f64 {
        self.price.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
    }

    /// Empty description means "no description"
    pub fn description_opt(&self) -> Option<String> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> StockItem {
        StockItem {
            id: id.to_string(),
            brand: "Vanilla".to_string(),
            quantity: 5,
            price: 120.0,
            description: None,
            created_at: 1,
            updated_at: 1,
        }
    }

    #[test]
    fn test_temporary_id_detection() {
        assert!(item("temp-1712").is_temporary());
        assert!(!item("a1b2c3").is_temporary());
    }

    #[test]
    fn test_lenient_quantity_parsing() {
        let mut form = StockForm::default();
        form.quantity = "12".to_string();
        assert_eq!(form.parsed_quantity(), 12);

        form.quantity = "abc".to_string();
        assert_eq!(form.parsed_quantity(), 0);

        form.quantity = "-3".to_string();
        assert_eq!(form.parsed_quantity(), 0);

        form.quantity = "".to_string();
        assert_eq!(form.parsed_quantity(), 0);
    }

    #[test]
    fn test_lenient_price_parsing() {
        let mut form = StockForm::default();
        form.price = "24.50".to_string();
        assert_eq!(form.parsed_price(), 24.5);

        form.price = "oops".to_string();
        assert_eq!(form.parsed_price(), 0.0);

        form.price = "-1.5".to_string();
        assert_eq!(form.parsed_price(), 0.0);
    }

    #[test]
    fn test_description_opt() {
        let mut form = StockForm::default();
        assert_eq!(form.description_opt(), None);

        form.description = "  ".to_string();
        assert_eq!(form.description_opt(), None);

        form.description = "family pack".to_string();
        assert_eq!(form.description_opt(), Some("family pack".to_string()));
    }

    #[test]
    fn test_form_from_item_roundtrip() {
        let mut it = item("x1");
        it.description = Some("choc chips".to_string());
        let form = StockForm::from_item(&it);
        assert_eq!(form.brand, "Vanilla");
        assert_eq!(form.parsed_quantity(), 5);
        assert_eq!(form.parsed_price(), 120.0);
        assert_eq!(form.description_opt(), Some("choc chips".to_string()));
    }
}
