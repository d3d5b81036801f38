//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a warehouse.
///
/// Warehouse ids are sequential: assigned starting at 1, strictly increasing,
/// and never reused within a process lifetime, including after deletion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(u64);

impl WarehouseId {
    /// The first id a registry hands out.
    pub fn first() -> Self {
        Self(1)
    }

    /// The id following this one in assignment order.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for WarehouseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<WarehouseId> for u64 {
    fn from(value: WarehouseId) -> Self {
        value.0
    }
}

impl FromStr for WarehouseId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = u64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("WarehouseId: {e}")))?;
        Ok(Self(id))
    }
}
