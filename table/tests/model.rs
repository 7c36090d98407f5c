use std::collections::HashMap;

use probe_table::{prime::is_prime, ProbeTable};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(u8, u32),
    Remove(u8),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (any::<u8>(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => any::<u8>().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn behaves_like_hash_map(hint in 0usize..64, ops in prop::collection::vec(op(), 0..400)) {
        let mut table = ProbeTable::with_capacity(hint);
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let was_live = model.contains_key(&k);
                    prop_assert_eq!(table.insert(k, v), !was_live);
                    model.entry(k).or_insert(v);
                }
                Op::Remove(k) => {
                    let was_live = table.contains(&k);
                    prop_assert_eq!(table.remove(&k), was_live);
                    prop_assert!(!table.contains(&k));
                    prop_assert_eq!(model.remove(&k).is_some(), was_live);
                }
                Op::Clear => {
                    table.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(table.size(), model.len());
            prop_assert!(table.size() <= table.capacity() / 2);
            prop_assert!(is_prime(table.capacity()));
        }

        for k in 0..=u8::MAX {
            prop_assert_eq!(table.find(&k), model.get(&k));
        }

        let mut live: Vec<_> = table.iter().map(|(k, v)| (*k, *v)).collect();
        live.sort_unstable();
        let mut expected: Vec<_> = model.into_iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(live, expected);
    }

    #[test]
    fn growth_preserves_live_keys(keys in prop::collection::hash_set(any::<u16>(), 1..300)) {
        let mut table = ProbeTable::with_capacity(3);
        let mut removed = Vec::new();

        for (i, &k) in keys.iter().enumerate() {
            table.insert(k, ());
            if i % 4 == 0 {
                table.remove(&k);
                removed.push(k);
            }
        }

        for k in &keys {
            prop_assert_eq!(table.contains(k), !removed.contains(k));
        }
        prop_assert_eq!(table.size(), keys.len() - removed.len());
    }
}
