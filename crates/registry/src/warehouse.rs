use serde::{Deserialize, Serialize};

use stockyard_core::{Entity, WarehouseId};
use stockyard_ledger::StockLedger;

/// One registry entry: a named, capacity-bounded stock holder.
///
/// Fixed-shape record with static fields; each entry exclusively owns its
/// ledger, and the ledger lives and dies with the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    name: String,
    ledger: StockLedger,
}

impl Warehouse {
    pub(crate) fn new(id: WarehouseId, name: impl Into<String>, ledger: StockLedger) -> Self {
        Self {
            id,
            name: name.into(),
            ledger,
        }
    }

    pub fn id_typed(&self) -> WarehouseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut StockLedger {
        &mut self.ledger
    }

    /// Replace name and ledger in one step. Update validation happens before
    /// this is called; a rejected update never reaches here.
    pub(crate) fn replace(&mut self, name: impl Into<String>, ledger: StockLedger) {
        self.name = name.into();
        self.ledger = ledger;
    }
}

impl Entity for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
