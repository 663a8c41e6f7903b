//! Dashboard Header Component
//!
//! Title, inventory totals and the add/logout actions.

use leptos::prelude::*;

use crate::models::StockItem;
use crate::store::DashboardState;

/// One-line inventory summary: item count and total stock value
fn summary(items: &[StockItem]) -> String {
    let total: f64 = items
        .iter()
        .map(|item| item.quantity as f64 * item.price)
        .sum();
    format!("{} items \u{2022} ${:.2} total", items.len(), total)
}

#[component]
pub fn Header(
    state: RwSignal<DashboardState>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <div class="header-title">
                <h1>"Inventory Dashboard"</h1>
                <p class="header-summary">{move || summary(&state.get().items)}</p>
            </div>
            <div class="header-actions">
                <button class="btn-primary" on:click=move |_| on_add.run(())>
                    "Add Item"
                </button>
                <button class="btn-secondary" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(brand: &str, quantity: i64, price: f64) -> StockItem {
        StockItem {
            id: brand.to_lowercase(),
            brand: brand.to_string(),
            quantity,
            price,
            description: None,
            created_at: 1,
            updated_at: 1,
        }
    }

    #[test]
    fn test_summary_counts_items_and_value() {
        let items = vec![item("Vanilla", 5, 120.0), item("Mango", 2, 150.0)];
        assert_eq!(summary(&items), "2 items \u{2022} $900.00 total");
    }

    #[test]
    fn test_summary_empty_inventory() {
        assert_eq!(summary(&[]), "0 items \u{2022} $0.00 total");
    }
}
