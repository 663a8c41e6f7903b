//! Toast Host Component
//!
//! Non-blocking notification stack. Toasts auto-dismiss after a few
//! seconds or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::coordinator::{Toast, ToastKind};

const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for pushing toasts from anywhere in the dashboard
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<ActiveToast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, toast: Toast) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or_default();
        self.toasts.update(|list| {
            list.push(ActiveToast {
                id,
                kind: toast.kind,
                message: toast.message,
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-stack">
            {move || {
                toaster
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| toaster.dismiss(id)>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
