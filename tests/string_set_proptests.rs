// StringSet property tests against the public API.
//
// Property 1: membership and size agree with std's HashSet after any
//   sequence of add/remove, and iteration order equals first-insertion
//   order of the surviving values.
//  - Model: HashSet for membership, Vec for order.
//  - Invariant: len() == model.len(); contains(k) == model.contains(k);
//               iter() == order.
//
// Property 2: a handle found before a run of insertions (with resizes)
//   keeps resolving to the same value.
use proptest::prelude::*;
use std::collections::HashSet;
use string_set::StringSet;

proptest! {
    #[test]
    fn prop_matches_std_hashset(ops in proptest::collection::vec((any::<bool>(), 0usize..24), 1..200)) {
        let mut set = StringSet::new();
        let mut model: HashSet<String> = HashSet::new();
        let mut order: Vec<String> = Vec::new();

        for (is_add, k) in ops {
            let key = format!("k{}", k);
            if is_add {
                let inserted = set.add(key.as_str());
                prop_assert_eq!(inserted, model.insert(key.clone()));
                if inserted {
                    order.push(key);
                }
            } else {
                let removed = set.remove(&key);
                prop_assert_eq!(removed, model.remove(&key));
                order.retain(|x| *x != key);
            }
            prop_assert_eq!(set.len(), model.len());
        }

        for k in 0..24 {
            let key = format!("k{}", k);
            prop_assert_eq!(set.contains(&key), model.contains(&key));
        }
        prop_assert_eq!(set.iter().collect::<Vec<_>>(), order.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_handle_survives_growth(seed in "[a-z]{1,8}", extra in 1usize..300) {
        let mut set = StringSet::new();
        set.add(seed.as_str());
        let h = set.find(&seed).expect("seed present");
        for i in 0..extra {
            set.add(format!("{seed}-{i}"));
        }
        prop_assert_eq!(set.get(h), Some(seed.as_str()));
        prop_assert!(set.load_factor() <= 1.0);
        prop_assert_eq!(set.len(), extra + 1);
    }
}
