//! Admin Dashboard Component
//!
//! Owns the coordinator and wires it to the reactive world: dispatched
//! actions mutate the store synchronously, a subscription mirrors the
//! store into a signal, and the returned effects run as local tasks that
//! feed settlements back in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, AddStockArgs, UpdateStockArgs};
use crate::context::use_app_context;
use crate::coordinator::{Action, Coordinator, Effect as CoordinatorEffect, PersistOp};
use crate::guard::{self, Route};
use crate::models::OpResult;
use crate::store::DashboardState;

use super::add_edit_dialog::AddEditDialog;
use super::confirmation_dialog::ConfirmationDialog;
use super::header::Header;
use super::stock_list::StockList;
use super::toast_host::{ToastHost, Toaster};

/// Copyable handle over the coordinator and its effect runner
#[derive(Clone, Copy)]
pub struct DashboardHandle {
    coordinator: StoredValue<Coordinator, LocalStorage>,
    toaster: Toaster,
}

impl DashboardHandle {
    fn new(state: RwSignal<DashboardState>, toaster: Toaster) -> Self {
        let coordinator = StoredValue::new_local(Coordinator::new());
        let listener =
            coordinator.try_update_value(|c| c.subscribe(move |s| state.set(s.clone())));
        state.set(coordinator.with_value(|c| c.state().clone()));
        on_cleanup(move || {
            if let Some(id) = listener {
                coordinator.try_update_value(|c| c.unsubscribe(id));
            }
        });
        Self { coordinator, toaster }
    }

    pub fn dispatch(self, action: Action) {
        let effects = self
            .coordinator
            .try_update_value(|c| c.dispatch(action))
            .unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: CoordinatorEffect) {
        match effect {
            CoordinatorEffect::Toast(toast) => self.toaster.push(toast),
            CoordinatorEffect::Reload => spawn_local(async move {
                self.reload().await;
            }),
            CoordinatorEffect::Persist(call) => spawn_local(async move {
                let result = persist(call.op).await;
                self.dispatch(Action::Settled {
                    ticket: call.ticket,
                    result,
                });
            }),
        }
    }

    async fn reload(self) {
        if let Ok(items) = commands::list_stock().await {
            self.dispatch(Action::StockLoaded(items));
        }
    }
}

async fn persist(op: PersistOp) -> OpResult {
    match op {
        PersistOp::Create {
            brand,
            quantity,
            price,
            description,
        } => {
            commands::add_stock(&AddStockArgs {
                brand: &brand,
                quantity,
                price,
                description: description.as_deref(),
            })
            .await
        }
        PersistOp::Update {
            id,
            brand,
            quantity,
            price,
            description,
        } => {
            commands::update_stock(&UpdateStockArgs {
                id: &id,
                brand: &brand,
                quantity,
                price,
                description: description.as_deref(),
            })
            .await
        }
        PersistOp::Delete { id } => commands::delete_stock(&id).await,
        PersistOp::SetQuantity { id, quantity } => {
            commands::set_stock_quantity(&id, quantity).await
        }
    }
}

/// What the mount hook does with the session verification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MountPlan {
    /// Session valid: load the stock list
    LoadStock,
    /// Not logged in: clear the marker and bounce to login, no load
    RedirectToLogin,
}

fn mount_plan(verify: &OpResult) -> MountPlan {
    if verify.success {
        MountPlan::LoadStock
    } else {
        MountPlan::RedirectToLogin
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(DashboardState::default());
    let toaster = Toaster::new();
    let handle = DashboardHandle::new(state, toaster);

    let (verified, set_verified) = signal(false);

    // Verify the session with the backend before rendering anything;
    // a stale localStorage marker bounces back to login here
    Effect::new(move |_| {
        spawn_local(async move {
            let result = commands::verify_admin().await;
            match mount_plan(&result) {
                MountPlan::LoadStock => {
                    set_verified.set(true);
                    handle.reload().await;
                }
                MountPlan::RedirectToLogin => {
                    guard::clear_credential();
                    ctx.redirect(Route::AdminLogin);
                }
            }
        });
    });

    let on_add = move |_: ()| handle.dispatch(Action::OpenAddForm);

    // Logout navigates whatever the backend says
    let on_logout = move |_: ()| {
        spawn_local(async move {
            let _ = commands::logout_admin().await;
            guard::clear_credential();
            ctx.redirect(Route::AdminLogin);
        });
    };

    view! {
        <Show when=move || verified.get()>
            <div class="admin-layout">
                <Header state=state on_add=Callback::new(on_add) on_logout=Callback::new(on_logout) />
                <StockList handle=handle state=state />
                <AddEditDialog handle=handle state=state />
                <ConfirmationDialog handle=handle state=state />
                <ToastHost toaster=toaster />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_verification_redirects_without_loading() {
        // No stock load happens on this path
        assert_eq!(
            mount_plan(&OpResult::fail("No token found")),
            MountPlan::RedirectToLogin
        );
        assert_eq!(
            mount_plan(&OpResult::fail("token expired")),
            MountPlan::RedirectToLogin
        );
    }

    #[test]
    fn test_verified_session_loads_stock() {
        assert_eq!(mount_plan(&OpResult::ok()), MountPlan::LoadStock);
    }
}
