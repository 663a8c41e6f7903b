//! Optimistic Mutation Coordinator
//!
//! Keeps the dashboard's stock collection consistent with the backend
//! under latency and possible failure, without blocking the interface.
//! Every mutation follows the same shape:
//!
//! 1. the optimistic change is applied to the store immediately,
//! 2. a persistence call is emitted as an [`Effect`] carrying a ticket,
//! 3. settlement comes back as [`Action::Settled`] and is reconciled
//!    against the snapshot captured when the mutation began: success
//!    keeps (or reloads) the optimistic state, failure reverts it.
//!
//! The coordinator is sans-IO: `dispatch` returns the effects to run and
//! the caller feeds settlements back in. Overlapping mutations on the
//! same id are not coordinated beyond their own snapshots; the last
//! settlement wins.

use crate::confirm::{AdjustDirection, ConfirmKind, MutationRequest};
use crate::models::{OpResult, StockForm, StockItem, TEMP_ID_PREFIX};
use crate::store::{DashboardState, EditorState, ListenerId, Store};

pub type Ticket = u64;

/// User intents and settlements, the coordinator's input alphabet
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Authoritative list arrived (initial load or reconciling reload)
    StockLoaded(Vec<StockItem>),
    OpenAddForm,
    OpenEditForm(String),
    FormChanged(StockForm),
    CloseEditor,
    SubmitCreate { now_ms: i64 },
    SubmitUpdate { now_ms: i64 },
    /// Ask the confirmation gate to hold a quantity/delete mutation
    RequestConfirm {
        kind: ConfirmKind,
        id: String,
        amount_input: String,
    },
    ConfirmPending,
    CancelPending,
    Settled { ticket: Ticket, result: OpResult },
}

/// A persistence call to issue; settle it back with the same ticket
#[derive(Debug, Clone, PartialEq)]
pub struct PersistCall {
    pub ticket: Ticket,
    pub op: PersistOp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PersistOp {
    Create {
        brand: String,
        quantity: i64,
        price: f64,
        description: Option<String>,
    },
    Update {
        id: String,
        brand: String,
        quantity: i64,
        price: f64,
        description: Option<String>,
    },
    Delete {
        id: String,
    },
    SetQuantity {
        id: String,
        quantity: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A user-visible, non-blocking notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Side effects requested by a dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Persist(PersistCall),
    Toast(Toast),
    /// Fetch the authoritative list and feed it back as StockLoaded
    Reload,
}

/// How to reconcile one in-flight mutation once it settles
#[derive(Debug, Clone)]
enum SettlePlan {
    Create {
        temp_id: String,
        form: StockForm,
    },
    Update {
        before: StockItem,
        brand: String,
    },
    Delete {
        item: StockItem,
    },
    Adjust {
        id: String,
        brand: String,
        prev_quantity: i64,
        new_quantity: i64,
        amount: i64,
        direction: AdjustDirection,
    },
}

#[derive(Debug, Clone)]
struct InFlight {
    ticket: Ticket,
    plan: SettlePlan,
    via_gate: bool,
}

/// The coordinator; owns the store
pub struct Coordinator {
    store: Store,
    in_flight: Vec<InFlight>,
    next_ticket: Ticket,
}

impl Coordinator {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            in_flight: Vec::new(),
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> &DashboardState {
        self.store.state()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DashboardState) + 'static) -> ListenerId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.store.unsubscribe(id);
    }

    /// Apply an action; returns the effects the caller must run.
    /// Listeners are notified after every dispatch.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let effects = self.apply(action);
        self.store.notify();
        effects
    }

    fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::StockLoaded(items) => {
                let state = self.store.state_mut();
                state.items = items;
                state.loading = false;
                Vec::new()
            }
            Action::OpenAddForm => {
                self.store.state_mut().editor = EditorState::Adding(StockForm::default());
                Vec::new()
            }
            Action::OpenEditForm(id) => {
                let state = self.store.state_mut();
                if let Some(item) = state.items.iter().find(|item| item.id == id) {
                    let form = StockForm::from_item(item);
                    state.editor = EditorState::Editing { id, form };
                }
                Vec::new()
            }
            Action::FormChanged(new_form) => {
                let state = self.store.state_mut();
                match &mut state.editor {
                    EditorState::Closed => {}
                    EditorState::Adding(form) => *form = new_form,
                    EditorState::Editing { form, .. } => *form = new_form,
                }
                Vec::new()
            }
            Action::CloseEditor => {
                self.store.state_mut().editor = EditorState::Closed;
                Vec::new()
            }
            Action::SubmitCreate { now_ms } => self.begin_create(now_ms),
            Action::SubmitUpdate { now_ms } => self.begin_update(now_ms),
            Action::RequestConfirm {
                kind,
                id,
                amount_input,
            } => self.request_confirm(kind, &id, &amount_input),
            Action::ConfirmPending => self.confirm_pending(),
            Action::CancelPending => {
                self.store.state_mut().gate.cancel();
                Vec::new()
            }
            Action::Settled { ticket, result } => self.settle(ticket, result),
        }
    }

    // ---- Create ----

    fn begin_create(&mut self, now_ms: i64) -> Vec<Effect> {
        let form = match self.store.state().editor {
            EditorState::Adding(ref form) => form.clone(),
            _ => return Vec::new(),
        };
        if form.brand.trim().is_empty() {
            return vec![Effect::Toast(Toast::error("Brand is required"))];
        }

        let quantity = form.parsed_quantity();
        let price = form.parsed_price();
        let description = form.description_opt();

        let temp_id = format!("{}{}", TEMP_ID_PREFIX, now_ms);
        let optimistic = StockItem {
            id: temp_id.clone(),
            brand: form.brand.trim().to_string(),
            quantity,
            price,
            description: description.clone(),
            created_at: now_ms,
            updated_at: now_ms,
        };

        // Optimistic: prepend and close the form before the call goes out
        let state = self.store.state_mut();
        state.items.insert(0, optimistic);
        state.editor = EditorState::Closed;

        let ticket = self.take_ticket();
        self.in_flight.push(InFlight {
            ticket,
            plan: SettlePlan::Create {
                temp_id,
                form: form.clone(),
            },
            via_gate: false,
        });

        vec![Effect::Persist(PersistCall {
            ticket,
            op: PersistOp::Create {
                brand: form.brand.trim().to_string(),
                quantity,
                price,
                description,
            },
        })]
    }

    // ---- Update ----

    fn begin_update(&mut self, now_ms: i64) -> Vec<Effect> {
        let (id, form) = match self.store.state().editor {
            EditorState::Editing { ref id, ref form } => (id.clone(), form.clone()),
            _ => return Vec::new(),
        };
        if form.brand.trim().is_empty() {
            return vec![Effect::Toast(Toast::error("Brand is required"))];
        }

        let state = self.store.state_mut();
        let Some(item) = state.items.iter_mut().find(|item| item.id == id) else {
            return Vec::new();
        };

        // Snapshot for the revert path before touching anything
        let before = item.clone();
        let brand = form.brand.trim().to_string();
        let quantity = form.parsed_quantity();
        let price = form.parsed_price();
        let description = form.description_opt();

        item.brand = brand.clone();
        item.quantity = quantity;
        item.price = price;
        item.description = description.clone();
        item.updated_at = now_ms;
        state.editor = EditorState::Closed;

        let ticket = self.take_ticket();
        self.in_flight.push(InFlight {
            ticket,
            plan: SettlePlan::Update {
                before,
                brand: brand.clone(),
            },
            via_gate: false,
        });

        vec![Effect::Persist(PersistCall {
            ticket,
            op: PersistOp::Update {
                id,
                brand,
                quantity,
                price,
                description,
            },
        })]
    }

    // ---- Confirmation gate ----

    fn request_confirm(&mut self, kind: ConfirmKind, id: &str, amount_input: &str) -> Vec<Effect> {
        let amount = match kind {
            ConfirmKind::Delete => 0,
            ConfirmKind::IncreaseQuantity | ConfirmKind::DecreaseQuantity => {
                match crate::confirm::parse_amount(amount_input) {
                    Some(amount) => amount,
                    None => {
                        return vec![Effect::Toast(Toast::error("Please enter a valid amount"))]
                    }
                }
            }
        };

        let state = self.store.state_mut();
        let Some(target) = state.items.iter().find(|item| item.id == id).cloned() else {
            return Vec::new();
        };
        state.gate.request(kind, target, amount);
        Vec::new()
    }

    fn confirm_pending(&mut self) -> Vec<Effect> {
        let Some(request) = self.store.state_mut().gate.confirm() else {
            return Vec::new();
        };
        match request {
            MutationRequest::Delete { id } => self.begin_delete(&id),
            MutationRequest::AdjustQuantity {
                id,
                amount,
                direction,
            } => self.begin_adjust(&id, amount, direction),
        }
    }

    // ---- Delete ----

    fn begin_delete(&mut self, id: &str) -> Vec<Effect> {
        let state = self.store.state_mut();
        let Some(position) = state.items.iter().position(|item| item.id == id) else {
            state.gate.settled();
            return Vec::new();
        };
        let item = state.items.remove(position);

        let ticket = self.take_ticket();
        self.in_flight.push(InFlight {
            ticket,
            plan: SettlePlan::Delete { item },
            via_gate: true,
        });

        vec![Effect::Persist(PersistCall {
            ticket,
            op: PersistOp::Delete { id: id.to_string() },
        })]
    }

    // ---- Quantity adjustment ----

    fn begin_adjust(&mut self, id: &str, amount: i64, direction: AdjustDirection) -> Vec<Effect> {
        // Validated at request time; nothing mutates on a bad amount
        if amount <= 0 {
            self.store.state_mut().gate.settled();
            return vec![Effect::Toast(Toast::error("Please enter a valid amount"))];
        }

        let state = self.store.state_mut();
        let Some(item) = state.items.iter_mut().find(|item| item.id == id) else {
            state.gate.settled();
            return Vec::new();
        };

        let prev_quantity = item.quantity;
        let new_quantity = match direction {
            AdjustDirection::Increase => prev_quantity + amount,
            // Never below zero
            AdjustDirection::Decrease => (prev_quantity - amount).max(0),
        };
        item.quantity = new_quantity;
        let brand = item.brand.clone();

        let ticket = self.take_ticket();
        self.in_flight.push(InFlight {
            ticket,
            plan: SettlePlan::Adjust {
                id: id.to_string(),
                brand,
                prev_quantity,
                new_quantity,
                amount,
                direction,
            },
            via_gate: true,
        });

        vec![Effect::Persist(PersistCall {
            ticket,
            op: PersistOp::SetQuantity {
                id: id.to_string(),
                quantity: new_quantity,
            },
        })]
    }

    // ---- Settlement ----

    fn settle(&mut self, ticket: Ticket, result: OpResult) -> Vec<Effect> {
        let Some(position) = self.in_flight.iter().position(|call| call.ticket == ticket) else {
            return Vec::new();
        };
        let call = self.in_flight.remove(position);

        if call.via_gate {
            self.store.state_mut().gate.settled();
        }

        match call.plan {
            SettlePlan::Create { temp_id, form } => {
                if result.success {
                    vec![
                        Effect::Reload,
                        Effect::Toast(Toast::success(format!(
                            "Added {} to inventory",
                            form.brand.trim()
                        ))),
                    ]
                } else {
                    // Remove exactly the synthesized item, reopen pre-filled
                    let state = self.store.state_mut();
                    state.items.retain(|item| item.id != temp_id);
                    state.editor = EditorState::Adding(form);
                    vec![Effect::Toast(Toast::error("Failed to add item"))]
                }
            }
            SettlePlan::Update { before, brand } => {
                if result.success {
                    // Optimistic state stands; no reconciling reload
                    vec![Effect::Toast(Toast::success(format!(
                        "Updated {} successfully",
                        brand
                    )))]
                } else {
                    let state = self.store.state_mut();
                    if let Some(item) = state.items.iter_mut().find(|item| item.id == before.id) {
                        *item = before.clone();
                    }
                    state.editor = EditorState::Editing {
                        id: before.id.clone(),
                        form: StockForm::from_item(&before),
                    };
                    vec![Effect::Toast(Toast::error("Failed to update item"))]
                }
            }
            SettlePlan::Delete { item } => {
                if result.success {
                    vec![Effect::Toast(Toast::success(format!(
                        "Deleted {} from inventory",
                        item.brand
                    )))]
                } else {
                    // Position is not preserved on revert
                    self.store.state_mut().items.push(item);
                    vec![Effect::Toast(Toast::error("Failed to delete item"))]
                }
            }
            SettlePlan::Adjust {
                id,
                brand,
                prev_quantity,
                new_quantity,
                amount,
                direction,
            } => {
                if result.success {
                    let message = match direction {
                        AdjustDirection::Increase => format!(
                            "Added {} units to {}. New total: {}",
                            amount, brand, new_quantity
                        ),
                        AdjustDirection::Decrease => format!(
                            "Removed {} units from {}. New total: {}",
                            amount, brand, new_quantity
                        ),
                    };
                    vec![Effect::Toast(Toast::success(message))]
                } else {
                    // Restore the quantity only; other fields may have
                    // moved on since the adjustment began
                    let state = self.store.state_mut();
                    if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                        item.quantity = prev_quantity;
                    }
                    vec![Effect::Toast(Toast::error("Failed to update quantity"))]
                }
            }
        }
    }

    fn take_ticket(&mut self) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}
