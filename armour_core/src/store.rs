//! Persisted ordered sets of numeric values

use crate::equality::is_equal;
use crate::signal::Signal;
use crate::storage::{load_json, save_json, SharedStorage, StorageKey};
use std::rc::Rc;

/// Default armour rows
pub fn default_armours() -> Vec<f64> {
    vec![0.0, 500.0, 1000.0, 2000.0, 3000.0, 5000.0, 6500.0, 10000.0]
}

/// Default damage tables
pub fn default_damages() -> Vec<f64> {
    vec![100.0, 500.0, 1100.0]
}

/// A deduplicated, ascending sequence of numbers retained across sessions
///
/// The set owns its sequence exclusively; all mutation goes through
/// `add`/`remove`/`reset`. Every mutation is written to storage by a
/// persistence hook subscribed to the underlying signal, so observers and
/// persistence see the same notification.
pub struct PersistedNumberSet {
    default: Vec<f64>,
    value: Signal<Vec<f64>>,
}

impl PersistedNumberSet {
    /// Load a set from storage, falling back to `default` when the key is
    /// missing or holds malformed data
    pub fn load(storage: SharedStorage, key: StorageKey, default: Vec<f64>) -> Self {
        let initial =
            load_json::<Vec<f64>>(&*storage.borrow(), key).unwrap_or_else(|| default.clone());
        let value = Signal::new(initial);

        let hook_storage = Rc::clone(&storage);
        value.subscribe(move |values: &Vec<f64>| {
            let _ = save_json(&mut *hook_storage.borrow_mut(), key, values);
        });

        PersistedNumberSet { default, value }
    }

    /// The armour-values set
    pub fn armour_values(storage: SharedStorage) -> Self {
        PersistedNumberSet::load(storage, StorageKey::Armours, default_armours())
    }

    /// The damage-values set
    pub fn damage_values(storage: SharedStorage) -> Self {
        PersistedNumberSet::load(storage, StorageKey::Damages, default_damages())
    }

    /// Current sequence, ascending
    pub fn get(&self) -> Vec<f64> {
        self.value.get()
    }

    /// Subscription access for observers
    pub fn signal(&self) -> &Signal<Vec<f64>> {
        &self.value
    }

    /// Insert a value if absent, keeping the sequence sorted ascending
    pub fn add(&self, n: f64) {
        let mut values = self.value.get();
        if values.iter().any(|&v| v == n) {
            return;
        }
        values.push(n);
        values.sort_by(f64::total_cmp);
        self.value.set(values);
    }

    /// Remove all occurrences of a value
    pub fn remove(&self, n: f64) {
        let mut values = self.value.get();
        values.retain(|&v| v != n);
        self.value.set(values);
    }

    /// Restore the built-in default sequence
    pub fn reset(&self) {
        self.value.set(self.default.clone());
    }

    /// Whether the current sequence equals the built-in default
    pub fn is_default(&self) -> bool {
        self.value.with(|values| is_equal(values, &self.default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, Storage};
    use std::cell::RefCell;

    fn memory_storage() -> (Rc<RefCell<MemoryStorage>>, SharedStorage) {
        let backing = Rc::new(RefCell::new(MemoryStorage::new()));
        let shared: SharedStorage = backing.clone();
        (backing, shared)
    }

    #[test]
    fn test_empty_storage_yields_defaults() {
        let (_, storage) = memory_storage();
        let armours = PersistedNumberSet::armour_values(storage);

        assert_eq!(
            armours.get(),
            vec![0.0, 500.0, 1000.0, 2000.0, 3000.0, 5000.0, 6500.0, 10000.0]
        );
        assert!(armours.is_default());
    }

    #[test]
    fn test_add_sorts_and_dedupes() {
        let (_, storage) = memory_storage();
        let damages = PersistedNumberSet::damage_values(storage);

        damages.add(250.0);
        assert_eq!(damages.get(), vec![100.0, 250.0, 500.0, 1100.0]);

        // Repeated add is idempotent
        damages.add(250.0);
        assert_eq!(damages.get(), vec![100.0, 250.0, 500.0, 1100.0]);
    }

    #[test]
    fn test_remove_drops_value() {
        let (_, storage) = memory_storage();
        let damages = PersistedNumberSet::damage_values(storage);

        damages.remove(500.0);
        assert_eq!(damages.get(), vec![100.0, 1100.0]);
        assert!(!damages.get().contains(&500.0));
    }

    #[test]
    fn test_add_then_remove_restores_default() {
        let (_, storage) = memory_storage();
        let armours = PersistedNumberSet::armour_values(storage);

        armours.add(2500.0);
        assert!(!armours.is_default());

        armours.remove(2500.0);
        assert!(armours.is_default());
        assert_eq!(
            armours.get(),
            vec![0.0, 500.0, 1000.0, 2000.0, 3000.0, 5000.0, 6500.0, 10000.0]
        );
    }

    #[test]
    fn test_reset_restores_default() {
        let (_, storage) = memory_storage();
        let damages = PersistedNumberSet::damage_values(storage);

        damages.add(9999.0);
        damages.remove(100.0);
        assert!(!damages.is_default());

        damages.reset();
        assert!(damages.is_default());
        assert_eq!(damages.get(), vec![100.0, 500.0, 1100.0]);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let (backing, storage) = memory_storage();
        let damages = PersistedNumberSet::damage_values(storage);

        damages.add(42.0);

        let raw = backing.borrow().load("damages").unwrap();
        let stored: Vec<f64> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec![42.0, 100.0, 500.0, 1100.0]);
    }

    #[test]
    fn test_reconstruction_roundtrip() {
        let (_, storage) = memory_storage();

        let original = PersistedNumberSet::armour_values(Rc::clone(&storage));
        original.add(1500.0);
        original.remove(0.0);
        let expected = original.get();
        drop(original);

        let reloaded = PersistedNumberSet::armour_values(storage);
        assert_eq!(reloaded.get(), expected);
        assert!(!reloaded.is_default());
    }

    #[test]
    fn test_observers_see_mutations() {
        let (_, storage) = memory_storage();
        let damages = PersistedNumberSet::damage_values(storage);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        damages.signal().subscribe(move |values: &Vec<f64>| {
            sink.borrow_mut().push(values.clone());
        });

        damages.add(42.0);
        damages.remove(42.0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], vec![42.0, 100.0, 500.0, 1100.0]);
        assert_eq!(seen[1], vec![100.0, 500.0, 1100.0]);
    }

    #[test]
    fn test_malformed_stored_data_falls_back_to_default() {
        let (backing, storage) = memory_storage();
        backing.borrow_mut().save("armours", "oops ]").unwrap();

        let armours = PersistedNumberSet::armour_values(storage);
        assert!(armours.is_default());
    }
}
