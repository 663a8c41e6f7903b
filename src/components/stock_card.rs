//! Stock Card Component
//!
//! One inventory item: details plus the edit, delete and quantity
//! adjustment controls. Quantity mutations go through the confirmation
//! gate; the card only raises requests.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::confirm::ConfirmKind;
use crate::coordinator::Action;
use crate::models::StockItem;

use super::admin_dashboard::DashboardHandle;

#[component]
pub fn StockCard(item: StockItem, handle: DashboardHandle) -> impl IntoView {
    let (amount, set_amount) = signal(String::new());

    // Temporary items have no server id yet; mutations wait for the reload
    let temporary = item.is_temporary();
    let edit_id = item.id.clone();
    let delete_id = item.id.clone();
    let increase_id = item.id.clone();
    let decrease_id = item.id.clone();

    let request_adjust = move |id: String, kind: ConfirmKind| {
        handle.dispatch(Action::RequestConfirm {
            kind,
            id,
            amount_input: amount.get(),
        });
    };

    view! {
        <div class="stock-card" class:stock-card-pending=temporary>
            <div class="stock-card-header">
                <h3>{item.brand.clone()}</h3>
                <span class="stock-price">{format!("${:.2}", item.price)}</span>
            </div>
            <p class="stock-quantity">
                "In stock: " <strong>{item.quantity}</strong>
            </p>
            {item
                .description
                .clone()
                .map(|text| view! { <p class="stock-description">{text}</p> })}
            <div class="stock-adjust-row">
                <input
                    type="number"
                    min="1"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    disabled=temporary
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_amount.set(input.value());
                    }
                />
                <button
                    class="btn-success"
                    disabled=temporary
                    on:click=move |_| request_adjust(increase_id.clone(), ConfirmKind::IncreaseQuantity)
                >
                    "+"
                </button>
                <button
                    class="btn-warning"
                    disabled=temporary
                    on:click=move |_| request_adjust(decrease_id.clone(), ConfirmKind::DecreaseQuantity)
                >
                    "-"
                </button>
            </div>
            <div class="stock-card-actions">
                <button
                    class="btn-secondary"
                    disabled=temporary
                    on:click=move |_| handle.dispatch(Action::OpenEditForm(edit_id.clone()))
                >
                    "Edit"
                </button>
                <button
                    class="btn-destructive"
                    disabled=temporary
                    on:click=move |_| {
                        handle.dispatch(Action::RequestConfirm {
                            kind: ConfirmKind::Delete,
                            id: delete_id.clone(),
                            amount_input: String::new(),
                        })
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
