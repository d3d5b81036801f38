use serde::{Deserialize, Serialize};

use stockyard_core::{DomainError, DomainResult, ValueObject};

/// Capacity/quantity pair for one storage unit.
///
/// Invariant: `0 <= quantity <= capacity` holds after every successful
/// mutation, and both fields are finite.
///
/// Insufficient stock is never an error here: removals are partial (the
/// actual amount removed is returned) and additions are capped at capacity.
/// The only failure mode is invalid input at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStockLedger")]
pub struct StockLedger {
    capacity: f64,
    quantity: f64,
}

impl ValueObject for StockLedger {}

/// Unvalidated wire shape. Deserialization funnels through
/// [`StockLedger::new`] so an out-of-range pair can never enter the domain
/// from JSON either.
#[derive(Debug, Deserialize)]
struct RawStockLedger {
    capacity: f64,
    quantity: f64,
}

impl TryFrom<RawStockLedger> for StockLedger {
    type Error = DomainError;

    fn try_from(raw: RawStockLedger) -> DomainResult<Self> {
        Self::new(raw.capacity, raw.quantity)
    }
}

impl StockLedger {
    /// Create a ledger with the given capacity and starting quantity.
    ///
    /// Validation is strict on every construction path: a starting quantity
    /// above capacity is rejected with a message naming both values, never
    /// silently clamped. Registry updates construct ledgers through here, so
    /// create and update cannot diverge in policy.
    pub fn new(capacity: f64, initial_quantity: f64) -> DomainResult<Self> {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(DomainError::validation(format!(
                "capacity must be a finite non-negative number, got {capacity}"
            )));
        }
        if !initial_quantity.is_finite() || initial_quantity < 0.0 {
            return Err(DomainError::validation(format!(
                "stock must be a finite non-negative number, got {initial_quantity}"
            )));
        }
        if initial_quantity > capacity {
            return Err(DomainError::validation(format!(
                "current stock ({initial_quantity}) exceeds capacity ({capacity})"
            )));
        }
        Ok(Self {
            capacity,
            quantity: initial_quantity,
        })
    }

    /// Create an empty ledger with the given capacity.
    pub fn empty(capacity: f64) -> DomainResult<Self> {
        Self::new(capacity, 0.0)
    }

    /// Add stock, capped at capacity.
    ///
    /// Excess beyond capacity is discarded, not an error. Callers are expected
    /// to reject non-positive amounts before calling; the resulting quantity
    /// is re-clamped into `[0, capacity]` regardless of the input's sign, and
    /// non-finite amounts are ignored, so the invariant survives a buggy
    /// caller.
    pub fn add(&mut self, amount: f64) {
        if !amount.is_finite() {
            return;
        }
        self.quantity = (self.quantity + amount).clamp(0.0, self.capacity);
    }

    /// Remove up to `amount` of stock, never going below zero.
    ///
    /// Returns the actual amount removed: equal to `amount` when enough stock
    /// was available, otherwise the prior quantity. Non-positive and
    /// non-finite amounts remove nothing and return `0.0`.
    pub fn remove(&mut self, amount: f64) -> f64 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        let removed = amount.min(self.quantity);
        self.quantity -= removed;
        removed
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Free space left before additions start getting capped.
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.quantity
    }

    pub fn is_full(&self) -> bool {
        self.quantity >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.quantity <= 0.0
    }
}
