//! Confirmation Gate
//!
//! A human-confirmation step interposed before destructive and quantity
//! mutations. State machine: idle -> pending(kind, target, amount) -> idle.
//! At most one mutation is pending at a time; while the confirmed mutation
//! is outstanding the gate is busy but remains logically pending until
//! settlement.
//!
//! The gate never touches the stock collection itself: `confirm` hands an
//! explicit [`MutationRequest`] across the boundary to the coordinator.

use crate::models::StockItem;

/// What the user is being asked to confirm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    IncreaseQuantity,
    DecreaseQuantity,
    Delete,
}

/// Direction of a quantity adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    Increase,
    Decrease,
}

/// The held mutation while the gate is pending
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMutation {
    pub kind: ConfirmKind,
    /// Snapshot of the target at request time
    pub target: StockItem,
    /// Adjustment magnitude; 0 for delete
    pub amount: i64,
}

/// Command object dispatched to the coordinator on confirm
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRequest {
    AdjustQuantity {
        id: String,
        amount: i64,
        direction: AdjustDirection,
    },
    Delete {
        id: String,
    },
}

/// Human-facing summary, derived purely from kind/target/amount
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub description: String,
    pub confirm_label: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Destructive,
}

/// Strict adjustment-amount validation: a positive integer or nothing
pub fn parse_amount(input: &str) -> Option<i64> {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// The gate itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmationGate {
    pending: Option<PendingMutation>,
    busy: bool,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingMutation> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True while the confirmed mutation is outstanding
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// idle -> pending. Rejected (returns false, no transition) if a
    /// mutation is already outstanding or the amount is invalid for the
    /// kind (quantity kinds need amount > 0, delete carries 0).
    pub fn request(&mut self, kind: ConfirmKind, target: StockItem, amount: i64) -> bool {
        if self.pending.is_some() {
            return false;
        }
        let amount_ok = match kind {
            ConfirmKind::Delete => amount == 0,
            ConfirmKind::IncreaseQuantity | ConfirmKind::DecreaseQuantity => amount > 0,
        };
        if !amount_ok {
            return false;
        }
        self.pending = Some(PendingMutation { kind, target, amount });
        true
    }

    /// Dispatch the held mutation. Marks the gate busy; it stays pending
    /// until [`settled`](Self::settled). Returns None when idle or busy.
    pub fn confirm(&mut self) -> Option<MutationRequest> {
        if self.busy {
            return None;
        }
        let held = self.pending.as_ref()?;
        self.busy = true;
        Some(match held.kind {
            ConfirmKind::Delete => MutationRequest::Delete {
                id: held.target.id.clone(),
            },
            ConfirmKind::IncreaseQuantity => MutationRequest::AdjustQuantity {
                id: held.target.id.clone(),
                amount: held.amount,
                direction: AdjustDirection::Increase,
            },
            ConfirmKind::DecreaseQuantity => MutationRequest::AdjustQuantity {
                id: held.target.id.clone(),
                amount: held.amount,
                direction: AdjustDirection::Decrease,
            },
        })
    }

    /// pending -> idle without dispatching. Rejected while busy.
    pub fn cancel(&mut self) -> bool {
        if self.busy || self.pending.is_none() {
            return false;
        }
        self.pending = None;
        true
    }

    /// The dispatched mutation settled (success or failure): back to idle.
    pub fn settled(&mut self) {
        self.pending = None;
        self.busy = false;
    }

    /// Prompt for the current pending mutation, if any
    pub fn prompt(&self) -> Option<ConfirmPrompt> {
        let held = self.pending.as_ref()?;
        let brand = &held.target.brand;
        Some(match held.kind {
            ConfirmKind::Delete => ConfirmPrompt {
                title: "Delete Item".to_string(),
                description: format!(
                    "Are you sure you want to delete {}? This action cannot be undone.",
                    brand
                ),
                confirm_label: "Delete".to_string(),
                severity: Severity::Destructive,
            },
            ConfirmKind::IncreaseQuantity => ConfirmPrompt {
                title: "Add Stock".to_string(),
                description: format!("Add {} units to {}?", held.amount, brand),
                confirm_label: "Add".to_string(),
                severity: Severity::Success,
            },
            ConfirmKind::DecreaseQuantity => ConfirmPrompt {
                title: "Remove Stock".to_string(),
                description: format!("Remove {} units from {}?", held.amount, brand),
                confirm_label: "Remove".to_string(),
                severity: Severity::Warning,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: &str, brand: &str) -> StockItem {
        StockItem {
            id: id.to_string(),
            brand: brand.to_string(),
            quantity: 5,
            price: 100.0,
            description: None,
            created_at: 1,
            updated_at: 1,
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("8"), Some(8));
        assert_eq!(parse_amount(" 3 "), Some(3));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-4"), None);
        assert_eq!(parse_amount("2.5"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_request_confirm_roundtrip() {
        let mut gate = ConfirmationGate::new();
        assert!(gate.request(ConfirmKind::DecreaseQuantity, target("a", "Vanilla"), 3));
        assert!(gate.is_pending());

        let request = gate.confirm().expect("should dispatch");
        assert_eq!(
            request,
            MutationRequest::AdjustQuantity {
                id: "a".to_string(),
                amount: 3,
                direction: AdjustDirection::Decrease,
            }
        );
        // Busy but still logically pending until settlement
        assert!(gate.is_busy());
        assert!(gate.is_pending());

        gate.settled();
        assert!(!gate.is_busy());
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_second_request_while_pending_rejected() {
        let mut gate = ConfirmationGate::new();
        assert!(gate.request(ConfirmKind::Delete, target("a", "Vanilla"), 0));
        assert!(!gate.request(ConfirmKind::Delete, target("b", "Mango"), 0));

        // The held mutation is still the first one
        assert_eq!(gate.pending().unwrap().target.id, "a");
    }

    #[test]
    fn test_invalid_amount_rejected() {
        let mut gate = ConfirmationGate::new();
        assert!(!gate.request(ConfirmKind::IncreaseQuantity, target("a", "Vanilla"), 0));
        assert!(!gate.request(ConfirmKind::DecreaseQuantity, target("a", "Vanilla"), -2));
        // Delete carries no amount
        assert!(!gate.request(ConfirmKind::Delete, target("a", "Vanilla"), 3));
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_cancel_discards_without_dispatch() {
        let mut gate = ConfirmationGate::new();
        gate.request(ConfirmKind::Delete, target("a", "Vanilla"), 0);
        assert!(gate.cancel());
        assert!(!gate.is_pending());

        // Cancel from idle is a no-op
        assert!(!gate.cancel());
    }

    #[test]
    fn test_busy_gate_ignores_controls() {
        let mut gate = ConfirmationGate::new();
        gate.request(ConfirmKind::IncreaseQuantity, target("a", "Vanilla"), 2);
        let _ = gate.confirm().unwrap();

        assert!(gate.confirm().is_none());
        assert!(!gate.cancel());
        assert!(gate.is_pending());
    }

    #[test]
    fn test_prompt_derivation() {
        let mut gate = ConfirmationGate::new();
        assert!(gate.prompt().is_none());

        gate.request(ConfirmKind::DecreaseQuantity, target("a", "Vanilla"), 8);
        let prompt = gate.prompt().unwrap();
        assert_eq!(prompt.title, "Remove Stock");
        assert_eq!(prompt.description, "Remove 8 units from Vanilla?");
        assert_eq!(prompt.severity, Severity::Warning);

        gate.settled();
        gate.request(ConfirmKind::Delete, target("a", "Vanilla"), 0);
        let prompt = gate.prompt().unwrap();
        assert_eq!(prompt.confirm_label, "Delete");
        assert_eq!(prompt.severity, Severity::Destructive);
    }
}
