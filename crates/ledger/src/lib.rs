//! Stock ledger domain module.
//!
//! This crate contains the bounded-quantity accounting rules for a single
//! storage unit, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod ledger;

pub use ledger::StockLedger;
