// ChainedHashMap property tests.
//
// Every test drives the table and a std HashMap model with the same
// operations and checks they agree:
//  - insert/remove return the same previous values as the model.
//  - len() equals the model's len and the number of traversed entries.
//  - traversal yields each stored key exactly once.
//  - capacity only doubles and the load factor stays below the threshold.
use std::collections::{HashMap, HashSet};

use chainhash::{ChainedHashMap, HashMapExtensions, LOAD_FACTOR_THRESHOLD};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16, i32),
    Remove(u16),
    Get(u16),
}

fn op() -> impl Strategy<Value = Op> {
    // A small key space keeps updates and removals of live keys frequent.
    prop_oneof![
        3 => (0u16..64, any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        1 => (0u16..64).prop_map(Op::Remove),
        1 => (0u16..64).prop_map(Op::Get),
    ]
}

proptest! {
    #[test]
    fn prop_matches_std_model(capacity in 1usize..32, ops in proptest::collection::vec(op(), 1..300)) {
        let mut table = ChainedHashMap::with_capacity(capacity).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut model = HashMap::new();
        let mut last_capacity = table.capacity();

        for op in ops {
            match op {
                Op::Insert(k, v) => prop_assert_eq!(table.insert(k, v), model.insert(k, v)),
                Op::Remove(k) => prop_assert_eq!(table.remove(&k), model.remove(&k)),
                Op::Get(k) => prop_assert_eq!(table.get(&k), model.get(&k)),
            }

            prop_assert_eq!(table.len(), model.len());
            prop_assert_eq!(table.iter().count(), model.len());
            prop_assert!(table.load_factor() < LOAD_FACTOR_THRESHOLD);

            let capacity = table.capacity();
            prop_assert!(capacity >= last_capacity);
            prop_assert!(capacity % last_capacity == 0 && (capacity / last_capacity).is_power_of_two());
            last_capacity = capacity;
        }

        for (k, v) in &model {
            prop_assert_eq!(table.get(k), Some(v));
        }
    }

    #[test]
    fn prop_traversal_yields_each_key_once(keys in proptest::collection::vec(any::<u64>(), 0..500)) {
        let table: ChainedHashMap<_, _> = keys.iter().map(|&k| (k, k.to_string())).collect();
        let distinct: HashSet<_> = keys.iter().copied().collect();

        let mut seen = HashSet::new();
        for (k, v) in &table {
            prop_assert!(seen.insert(*k), "key {} yielded twice", k);
            prop_assert_eq!(v, &k.to_string());
        }
        prop_assert_eq!(seen, distinct);
        prop_assert_eq!(table.chain_lengths().iter().sum::<usize>(), table.len());
    }

    #[test]
    fn prop_insert_then_get_round_trips(key in ".*", value in any::<i64>()) {
        let mut table = ChainedHashMap::new();
        prop_assert_eq!(table.insert(key.clone(), value), None);
        prop_assert_eq!(table.get(key.as_str()), Some(&value));
        prop_assert_eq!(table.insert(key.clone(), value.wrapping_add(1)), Some(value));
        prop_assert_eq!(table.len(), 1);
    }

    #[test]
    fn prop_growth_preserves_entries(count in 1usize..400) {
        let mut table = ChainedHashMap::new();
        for i in 0..count {
            table.insert(i, i * 3);
        }
        for i in 0..count {
            prop_assert_eq!(table.get(&i), Some(&(i * 3)));
        }
        prop_assert_eq!(table.into_iter().count(), count);
    }
}
