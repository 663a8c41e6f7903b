//! Empty State Component

use leptos::prelude::*;

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"No items in inventory"</p>
            <p class="empty-state-hint">"Click \"Add Item\" to create your first stock entry."</p>
        </div>
    }
}
