//! Warehouse registry module.
//!
//! The registry owns the collection of warehouse entries, assigns identity,
//! and delegates stock movement to each entry's ledger. It is an explicitly
//! constructed instance with an explicit lifecycle: build one at process
//! start and pass it (or a [`SharedRegistry`] handle) to whatever consumes
//! it. There is no process-wide singleton.

pub mod registry;
pub mod shared;
pub mod warehouse;

pub use registry::WarehouseRegistry;
pub use shared::SharedRegistry;
pub use warehouse::Warehouse;
