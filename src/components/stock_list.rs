//! Stock List Component
//!
//! Renders the stock collection as a card grid, with loading and empty
//! states.

use leptos::prelude::*;

use crate::store::DashboardState;

use super::admin_dashboard::DashboardHandle;
use super::empty_state::EmptyState;
use super::stock_card::StockCard;

#[component]
pub fn StockList(handle: DashboardHandle, state: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <Show when=move || state.get().loading>
            <p class="loading">"Loading inventory..."</p>
        </Show>
        <Show when=move || !state.get().loading>
            <Show
                when=move || !state.get().items.is_empty()
                fallback=|| view! { <EmptyState /> }
            >
                <div class="stock-grid">
                    {move || {
                        state
                            .get()
                            .items
                            .into_iter()
                            .map(|item| view! { <StockCard item=item handle=handle /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </Show>
    }
}
