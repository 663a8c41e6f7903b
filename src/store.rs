//! Dashboard State Store
//!
//! The explicit state container behind the admin dashboard: the stock
//! collection, the add/edit editor, and the confirmation gate. Owned by
//! the coordinator, which is the only writer of the collection; views
//! observe it through `subscribe`. No reactive runtime required, so the
//! whole mutation workflow is testable off-screen.

use crate::confirm::ConfirmationGate;
use crate::models::{StockForm, StockItem};

/// Add/edit dialog state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    /// Create form open with the values typed so far
    Adding(StockForm),
    /// Edit form open for an existing item
    Editing { id: String, form: StockForm },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    pub fn form(&self) -> Option<&StockForm> {
        match self {
            EditorState::Closed => None,
            EditorState::Adding(form) => Some(form),
            EditorState::Editing { form, .. } => Some(form),
        }
    }
}

/// Everything the admin view renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Mirror of the persisted list, mutated optimistically
    pub items: Vec<StockItem>,
    /// True until the first authoritative load lands
    pub loading: bool,
    pub editor: EditorState,
    pub gate: ConfirmationGate,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            editor: EditorState::Closed,
            gate: ConfirmationGate::new(),
        }
    }
}

pub type ListenerId = usize;

type Listener = Box<dyn FnMut(&DashboardState)>;

/// Listener-based state container
pub struct Store {
    state: DashboardState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: ListenerId,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: DashboardState::default(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Writer access, coordinator only
    pub(crate) fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DashboardState) + 'static) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    /// Notify all listeners with the current state
    pub(crate) fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_and_notify() {
        let mut store = Store::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = store.subscribe(move |state| {
            seen_clone.borrow_mut().push(state.items.len());
        });

        store.state_mut().items.push(crate::models::StockItem {
            id: "a".to_string(),
            brand: "Vanilla".to_string(),
            quantity: 1,
            price: 1.0,
            description: None,
            created_at: 0,
            updated_at: 0,
        });
        store.notify();
        assert_eq!(*seen.borrow(), vec![1]);

        store.unsubscribe(id);
        store.notify();
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_default_state_is_loading_and_closed() {
        let store = Store::new();
        assert!(store.state().loading);
        assert!(!store.state().editor.is_open());
        assert!(!store.state().gate.is_pending());
        assert!(store.state().items.is_empty());
    }
}
