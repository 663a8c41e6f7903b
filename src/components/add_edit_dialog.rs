//! Add/Edit Dialog Component
//!
//! Modal form bound to the editor state in the store. Every keystroke
//! dispatches the whole form back; submit hands off to the coordinator
//! with the current wall-clock time for the optimistic timestamps.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::coordinator::Action;
use crate::models::StockForm;
use crate::store::{DashboardState, EditorState};

use super::admin_dashboard::DashboardHandle;

#[component]
pub fn AddEditDialog(handle: DashboardHandle, state: RwSignal<DashboardState>) -> impl IntoView {
    let editing = move || matches!(state.get().editor, EditorState::Editing { .. });
    let form = move || state.get().editor.form().cloned().unwrap_or_default();

    let change = move |update: fn(&mut StockForm, String), value: String| {
        let mut next = form();
        update(&mut next, value);
        handle.dispatch(Action::FormChanged(next));
    };

    let input_value = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        input.value()
    };

    view! {
        <Show when=move || state.get().editor.is_open()>
            <div class="dialog-backdrop" on:click=move |_| handle.dispatch(Action::CloseEditor)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2>{move || if editing() { "Edit Item" } else { "Add New Item" }}</h2>
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        let now_ms = js_sys::Date::now() as i64;
                        if editing() {
                            handle.dispatch(Action::SubmitUpdate { now_ms });
                        } else {
                            handle.dispatch(Action::SubmitCreate { now_ms });
                        }
                    }>
                        <label>
                            "Brand"
                            <input
                                type="text"
                                prop:value=move || form().brand
                                on:input=move |ev| change(|f, v| f.brand = v, input_value(&ev))
                            />
                        </label>
                        <label>
                            "Quantity"
                            <input
                                type="number"
                                min="0"
                                prop:value=move || form().quantity
                                on:input=move |ev| change(|f, v| f.quantity = v, input_value(&ev))
                            />
                        </label>
                        <label>
                            "Price"
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                prop:value=move || form().price
                                on:input=move |ev| change(|f, v| f.price = v, input_value(&ev))
                            />
                        </label>
                        <label>
                            "Description"
                            <textarea
                                prop:value=move || form().description
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let area = target
                                        .dyn_ref::<web_sys::HtmlTextAreaElement>()
                                        .unwrap();
                                    change(|f, v| f.description = v, area.value());
                                }
                            />
                        </label>
                        <div class="dialog-actions">
                            <button
                                type="button"
                                class="btn-secondary"
                                on:click=move |_| handle.dispatch(Action::CloseEditor)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn-primary">
                                {move || if editing() { "Update Item" } else { "Add Item" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
