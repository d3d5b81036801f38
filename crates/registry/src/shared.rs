use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use stockyard_core::{DomainResult, WarehouseId};

use crate::registry::WarehouseRegistry;
use crate::warehouse::Warehouse;

/// Thread-safe handle to a [`WarehouseRegistry`].
///
/// One lock guards the whole collection: the id counter and the entry map are
/// shared mutable state with no other synchronization, so every mutation goes
/// through the same mutual-exclusion boundary. Reads hand out owned copies
/// rather than guards, keeping lock scopes inside this type.
///
/// Cloning the handle shares the underlying registry.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<WarehouseRegistry>>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::from_registry(WarehouseRegistry::new())
    }

    /// Wrap an existing registry, e.g. one pre-populated during startup.
    pub fn from_registry(registry: WarehouseRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn create(&self, name: &str, capacity: f64, initial_quantity: f64) -> DomainResult<WarehouseId> {
        let mut registry = self.inner.write().unwrap();
        match registry.create(name, capacity, initial_quantity) {
            Ok(id) => {
                info!(%id, name, capacity, initial_quantity, "warehouse created");
                Ok(id)
            }
            Err(e) => {
                warn!(name, capacity, initial_quantity, error = %e, "warehouse creation rejected");
                Err(e)
            }
        }
    }

    pub fn create_empty(&self, name: &str, capacity: f64) -> DomainResult<WarehouseId> {
        self.create(name, capacity, 0.0)
    }

    /// Owned copy of the entry, or `None` when absent.
    pub fn get(&self, id: WarehouseId) -> Option<Warehouse> {
        let registry = self.inner.read().unwrap();
        registry.get(id).cloned()
    }

    /// Owned point-in-time snapshot of the current membership, in id order.
    pub fn list(&self) -> Vec<Warehouse> {
        let registry = self.inner.read().unwrap();
        registry.snapshot()
    }

    pub fn update(
        &self,
        id: WarehouseId,
        name: &str,
        capacity: f64,
        current_stock: f64,
    ) -> DomainResult<()> {
        let mut registry = self.inner.write().unwrap();
        match registry.update(id, name, capacity, current_stock) {
            Ok(()) => {
                info!(%id, name, capacity, current_stock, "warehouse updated");
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "warehouse update rejected");
                Err(e)
            }
        }
    }

    pub fn delete(&self, id: WarehouseId) -> bool {
        let mut registry = self.inner.write().unwrap();
        let deleted = registry.delete(id);
        if deleted {
            info!(%id, "warehouse deleted");
        } else {
            debug!(%id, "delete was a no-op, warehouse absent");
        }
        deleted
    }

    pub fn add_stock(&self, id: WarehouseId, amount: f64) -> bool {
        let mut registry = self.inner.write().unwrap();
        let found = registry.add_stock(id, amount);
        if found {
            debug!(%id, amount, "stock added");
        } else {
            debug!(%id, amount, "add_stock on absent warehouse");
        }
        found
    }

    pub fn remove_stock(&self, id: WarehouseId, amount: f64) -> f64 {
        let mut registry = self.inner.write().unwrap();
        if registry.get(id).is_none() {
            debug!(%id, amount, "remove_stock on absent warehouse");
            return 0.0;
        }
        let removed = registry.remove_stock(id, amount);
        debug!(%id, requested = amount, removed, "stock removed");
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
