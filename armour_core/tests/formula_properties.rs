//! Property tests for the mitigation formulas and persisted sets

use armour_core::formula::{armour_reduction, armour_total_damage};
use armour_core::storage::MemoryStorage;
use armour_core::{PersistedNumberSet, SharedStorage};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const CONSTANTS: [f64; 3] = [5.0, 10.0, 12.0];

proptest! {
    #[test]
    fn reduction_is_a_proper_fraction(
        armour in 0.0f64..1.0e9,
        damage in 0.1f64..1.0e9,
    ) {
        for constant in CONSTANTS {
            let reduction = armour_reduction(armour, damage, constant);
            prop_assert!(reduction >= 0.0);
            prop_assert!(reduction < 1.0);
            prop_assert!(reduction.is_finite());
        }
    }

    #[test]
    fn reduction_increases_with_armour(
        armour in 0.0f64..1.0e6,
        extra in 1.0f64..1.0e6,
        damage in 1.0f64..1.0e6,
    ) {
        for constant in CONSTANTS {
            let lower = armour_reduction(armour, damage, constant);
            let higher = armour_reduction(armour + extra, damage, constant);
            prop_assert!(higher > lower);
        }
    }

    #[test]
    fn reduction_decreases_with_constant(
        armour in 1.0f64..1.0e6,
        damage in 1.0f64..1.0e6,
    ) {
        let poe1 = armour_reduction(armour, damage, 5.0);
        let poe2 = armour_reduction(armour, damage, 10.0);
        let legacy = armour_reduction(armour, damage, 12.0);
        prop_assert!(poe1 > poe2);
        prop_assert!(poe2 > legacy);
    }

    #[test]
    fn total_damage_stays_within_the_hit(
        armour in 0.0f64..1.0e9,
        damage in 0.0f64..1.0e9,
    ) {
        for constant in CONSTANTS {
            let taken = armour_total_damage(armour, damage, constant);
            prop_assert!(taken >= 0.0);
            prop_assert!(taken <= damage);
        }
    }

    #[test]
    fn total_damage_decreases_with_armour(
        armour in 0.0f64..1.0e6,
        extra in 1.0f64..1.0e6,
        damage in 1.0f64..1.0e6,
    ) {
        for constant in CONSTANTS {
            let thin = armour_total_damage(armour, damage, constant);
            let thick = armour_total_damage(armour + extra, damage, constant);
            prop_assert!(thick < thin);
        }
    }

    #[test]
    fn persisted_set_stays_sorted_and_distinct(
        values in prop::collection::vec(0.0f64..1.0e6, 0..20),
    ) {
        let storage: SharedStorage = Rc::new(RefCell::new(MemoryStorage::new()));
        let set = PersistedNumberSet::damage_values(storage);

        for value in &values {
            set.add(*value);
        }

        let current = set.get();
        for pair in current.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn removed_values_never_linger(
        values in prop::collection::vec(0.0f64..1.0e6, 1..20),
    ) {
        let storage: SharedStorage = Rc::new(RefCell::new(MemoryStorage::new()));
        let set = PersistedNumberSet::armour_values(storage);

        for value in &values {
            set.add(*value);
        }
        set.remove(values[0]);

        prop_assert!(!set.get().contains(&values[0]));
    }
}
