use std::collections::BTreeMap;

use stockyard_core::{DomainError, DomainResult, WarehouseId};
use stockyard_ledger::StockLedger;

use crate::warehouse::Warehouse;

/// Owner of the warehouse collection.
///
/// Assigns sequential ids (starting at 1, strictly increasing, never reused
/// within the process lifetime) and provides CRUD plus stock-movement
/// delegation. Construct one explicitly and pass it where it is needed; for
/// concurrent callers wrap it in [`crate::SharedRegistry`].
///
/// Expected conditions follow the contracts below rather than erroring:
/// absence is `None`/`false`/`0.0`, insufficient stock is a partial result,
/// and only update/create validation produces a [`DomainError`].
#[derive(Debug)]
pub struct WarehouseRegistry {
    entries: BTreeMap<WarehouseId, Warehouse>,
    next_id: WarehouseId,
}

impl Default for WarehouseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseRegistry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: WarehouseId::first(),
        }
    }

    fn allocate_id(&mut self) -> WarehouseId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// Create a warehouse and return its id.
    ///
    /// Initial stock is validated strictly against capacity, the same policy
    /// [`WarehouseRegistry::update`] applies; on rejection nothing is stored
    /// and no id is consumed. Names are not required to be unique.
    pub fn create(
        &mut self,
        name: &str,
        capacity: f64,
        initial_quantity: f64,
    ) -> DomainResult<WarehouseId> {
        let ledger = StockLedger::new(capacity, initial_quantity)?;
        let id = self.allocate_id();
        self.entries.insert(id, Warehouse::new(id, name, ledger));
        Ok(id)
    }

    /// Create a warehouse with no initial stock.
    pub fn create_empty(&mut self, name: &str, capacity: f64) -> DomainResult<WarehouseId> {
        self.create(name, capacity, 0.0)
    }

    /// Look up a warehouse. Absence is a normal outcome, not an error.
    pub fn get(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.entries.get(&id)
    }

    /// All live entries in id (= insertion) order.
    pub fn list(&self) -> Vec<&Warehouse> {
        self.entries.values().collect()
    }

    /// Owned point-in-time copy of the current membership.
    pub fn snapshot(&self) -> Vec<Warehouse> {
        self.entries.values().cloned().collect()
    }

    /// Replace a warehouse's name and ledger.
    ///
    /// Validates before mutating: a missing id yields [`DomainError::NotFound`]
    /// and stock above capacity yields a validation error naming the
    /// offending values. A rejected update leaves the entry fully unchanged,
    /// name included. On success the prior quantity history is discarded in
    /// favor of the fresh `(capacity, current_stock)` ledger.
    pub fn update(
        &mut self,
        id: WarehouseId,
        name: &str,
        capacity: f64,
        current_stock: f64,
    ) -> DomainResult<()> {
        if !self.entries.contains_key(&id) {
            return Err(DomainError::not_found());
        }
        let ledger = StockLedger::new(capacity, current_stock)?;
        if let Some(warehouse) = self.entries.get_mut(&id) {
            warehouse.replace(name, ledger);
        }
        Ok(())
    }

    /// Remove a warehouse; reports whether a removal occurred.
    ///
    /// Idempotent: deleting a missing id is a no-op returning `false`. The
    /// deleted id is never reassigned.
    pub fn delete(&mut self, id: WarehouseId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Add stock to a warehouse, capped at its capacity.
    ///
    /// Returns `false` only when the id is absent. A partially capped
    /// addition still reports `true`; callers needing the applied delta can
    /// read the ledger's quantity around the call.
    pub fn add_stock(&mut self, id: WarehouseId, amount: f64) -> bool {
        match self.entries.get_mut(&id) {
            Some(warehouse) => {
                warehouse.ledger_mut().add(amount);
                true
            }
            None => false,
        }
    }

    /// Remove stock from a warehouse, returning the actual amount removed.
    ///
    /// An absent id removes nothing and returns `0.0`, the same as removing
    /// from an empty warehouse; this layer does not distinguish the two.
    pub fn remove_stock(&mut self, id: WarehouseId, amount: f64) -> f64 {
        match self.entries.get_mut(&id) {
            Some(warehouse) => warehouse.ledger_mut().remove(amount),
            None => 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockyard_core::Entity;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut registry = WarehouseRegistry::new();
        let a = registry.create_empty("A", 10.0).unwrap();
        let b = registry.create_empty("B", 10.0).unwrap();
        let c = registry.create_empty("C", 10.0).unwrap();
        assert_eq!(a, WarehouseId::first());
        assert_eq!(b, a.next());
        assert_eq!(c, b.next());
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut registry = WarehouseRegistry::new();
        let a = registry.create_empty("A", 10.0).unwrap();
        let b = registry.create_empty("B", 10.0).unwrap();
        assert!(registry.delete(a));
        assert!(registry.delete(b));
        let c = registry.create_empty("C", 10.0).unwrap();
        assert!(c > b);
        assert_eq!(c.as_u64(), 3);
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut registry = WarehouseRegistry::new();
        let a = registry.create_empty("depot", 10.0).unwrap();
        let b = registry.create_empty("depot", 20.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn create_with_stock_above_capacity_is_rejected_and_consumes_no_id() {
        let mut registry = WarehouseRegistry::new();
        let err = registry.create("A", 10.0, 15.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(registry.is_empty());
        // The failed create must not burn an id.
        let id = registry.create_empty("B", 10.0).unwrap();
        assert_eq!(id, WarehouseId::first());
    }

    #[test]
    fn get_missing_id_is_none() {
        let registry = WarehouseRegistry::new();
        assert!(registry.get(WarehouseId::from_u64(42)).is_none());
    }

    #[test]
    fn list_reflects_live_membership_in_insertion_order() {
        let mut registry = WarehouseRegistry::new();
        let a = registry.create_empty("A", 10.0).unwrap();
        let b = registry.create_empty("B", 10.0).unwrap();
        let c = registry.create_empty("C", 10.0).unwrap();
        registry.delete(b);
        let names: Vec<&str> = registry.list().iter().map(|w| w.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
        let ids: Vec<WarehouseId> = registry.list().iter().map(|w| *w.id()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn snapshot_is_not_a_live_view() {
        let mut registry = WarehouseRegistry::new();
        let a = registry.create("A", 100.0, 20.0).unwrap();
        let snapshot = registry.snapshot();
        registry.add_stock(a, 30.0);
        assert_eq!(snapshot[0].ledger().quantity(), 20.0);
        assert_eq!(registry.get(a).unwrap().ledger().quantity(), 50.0);
    }

    #[test]
    fn update_replaces_name_and_ledger() {
        let mut registry = WarehouseRegistry::new();
        let id = registry.create("old", 100.0, 80.0).unwrap();
        registry.update(id, "new", 50.0, 10.0).unwrap();
        let warehouse = registry.get(id).unwrap();
        assert_eq!(warehouse.name(), "new");
        assert_eq!(warehouse.ledger().capacity(), 50.0);
        assert_eq!(warehouse.ledger().quantity(), 10.0);
    }

    #[test]
    fn update_missing_id_reports_not_found() {
        let mut registry = WarehouseRegistry::new();
        let err = registry
            .update(WarehouseId::from_u64(7), "x", 10.0, 5.0)
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn rejected_update_leaves_entry_fully_unchanged() {
        let mut registry = WarehouseRegistry::new();
        let id = registry.create("original", 100.0, 40.0).unwrap();
        let err = registry.update(id, "renamed", 10.0, 15.0).unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("15"));
                assert!(msg.contains("10"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        let warehouse = registry.get(id).unwrap();
        assert_eq!(warehouse.name(), "original");
        assert_eq!(warehouse.ledger().capacity(), 100.0);
        assert_eq!(warehouse.ledger().quantity(), 40.0);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut registry = WarehouseRegistry::new();
        let id = registry.create_empty("A", 10.0).unwrap();
        assert!(registry.delete(id));
        assert!(!registry.delete(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn add_stock_reports_true_even_when_capped() {
        let mut registry = WarehouseRegistry::new();
        let id = registry.create("A", 100.0, 95.0).unwrap();
        assert!(registry.add_stock(id, 50.0));
        assert_eq!(registry.get(id).unwrap().ledger().quantity(), 100.0);
    }

    #[test]
    fn stock_movement_on_missing_id_reports_absence() {
        let mut registry = WarehouseRegistry::new();
        let ghost = WarehouseId::from_u64(9);
        assert!(!registry.add_stock(ghost, 10.0));
        assert_eq!(registry.remove_stock(ghost, 10.0), 0.0);
    }

    /// The full lifecycle walked end to end.
    #[test]
    fn scenario_create_move_drain_delete() {
        let mut registry = WarehouseRegistry::new();

        let id = registry.create("A", 100.0, 20.0).unwrap();
        assert_eq!(id.as_u64(), 1);

        assert!(registry.add_stock(id, 90.0));
        assert_eq!(registry.get(id).unwrap().ledger().quantity(), 100.0);

        assert_eq!(registry.remove_stock(id, 150.0), 100.0);
        assert_eq!(registry.get(id).unwrap().ledger().quantity(), 0.0);

        assert_eq!(registry.remove_stock(id, 5.0), 0.0);

        assert!(registry.delete(id));
        assert!(!registry.delete(id));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: across any interleaving of creates and deletes,
            /// assigned ids are strictly increasing and no id comes back.
            #[test]
            fn ids_are_monotonic_under_interleaved_deletes(
                // true = create, false = delete the oldest live entry
                steps in prop::collection::vec(any::<bool>(), 1..60)
            ) {
                let mut registry = WarehouseRegistry::new();
                let mut assigned: Vec<WarehouseId> = Vec::new();
                let mut live: Vec<WarehouseId> = Vec::new();

                for create in steps {
                    if create || live.is_empty() {
                        let id = registry.create_empty("w", 10.0).unwrap();
                        if let Some(last) = assigned.last() {
                            prop_assert!(id > *last);
                        }
                        prop_assert!(!assigned.contains(&id));
                        assigned.push(id);
                        live.push(id);
                    } else {
                        let id = live.remove(0);
                        prop_assert!(registry.delete(id));
                    }
                }
            }
        }
    }
}
