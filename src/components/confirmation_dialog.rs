//! Confirmation Dialog Component
//!
//! Renders whatever the gate holds. Both buttons disable while the
//! confirmed mutation is outstanding, so a double click cannot issue a
//! second call.

use leptos::prelude::*;

use crate::confirm::{ConfirmKind, Severity};
use crate::coordinator::Action;
use crate::store::DashboardState;

use super::admin_dashboard::DashboardHandle;

#[component]
pub fn ConfirmationDialog(
    handle: DashboardHandle,
    state: RwSignal<DashboardState>,
) -> impl IntoView {
    view! {
        <Show when=move || state.get().gate.is_pending()>
            {move || {
                let gate = state.get().gate;
                let busy = gate.is_busy();
                // For quantity adjustments, show the held snapshot's stock level
                let current_stock = gate
                    .pending()
                    .filter(|held| held.kind != ConfirmKind::Delete)
                    .map(|held| held.target.quantity);
                gate.prompt()
                    .map(|prompt| {
                        let confirm_class = match prompt.severity {
                            Severity::Success => "btn-success",
                            Severity::Warning => "btn-warning",
                            Severity::Destructive => "btn-destructive",
                        };
                        view! {
                            <div class="dialog-backdrop">
                                <div class="dialog confirm-dialog">
                                    <h2>{prompt.title}</h2>
                                    <p>{prompt.description}</p>
                                    {current_stock
                                        .map(|quantity| {
                                            view! {
                                                <p class="confirm-meta">
                                                    {format!("Current stock: {}", quantity)}
                                                </p>
                                            }
                                        })}
                                    <div class="dialog-actions">
                                        <button
                                            class="btn-secondary"
                                            disabled=busy
                                            on:click=move |_| handle.dispatch(Action::CancelPending)
                                        >
                                            "Cancel"
                                        </button>
                                        <button
                                            class=confirm_class
                                            disabled=busy
                                            on:click=move |_| handle.dispatch(Action::ConfirmPending)
                                        >
                                            {if busy { "Working...".to_string() } else { prompt.confirm_label }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
