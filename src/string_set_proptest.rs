#![cfg(test)]

// Property tests for StringSet kept inside the crate so they can call the
// structural self-check.

use crate::hasher::StringHasher;
use crate::{Handle, StringSet};
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// values, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Add(usize),
    Remove(usize),
    Contains(String),
    Find(usize),
    Replace(usize, usize),
    RemoveViaCursor(usize),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=10).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            6 => idx.clone().prop_map(Op::Add),
            3 => idx.clone().prop_map(Op::Remove),
            2 => prop_oneof![contains_pool, "[a-z]{0,4}"].prop_map(Op::Contains),
            2 => idx.clone().prop_map(Op::Find),
            1 => (idx.clone(), idx.clone()).prop_map(|(i, j)| Op::Replace(i, j)),
            1 => idx.clone().prop_map(Op::RemoveViaCursor),
            1 => Just(Op::Iterate),
            1 => Just(Op::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

/// Model: insertion-ordered `Vec` plus the handle last seen for each value.
#[derive(Default)]
struct Model {
    order: Vec<String>,
    handles: HashMap<String, Handle>,
    stale: Vec<Handle>,
}

impl Model {
    fn contains(&self, v: &str) -> bool {
        self.order.iter().any(|x| x == v)
    }

    fn remove(&mut self, v: &str) {
        self.order.retain(|x| x != v);
        if let Some(h) = self.handles.remove(v) {
            self.stale.push(h);
        }
    }
}

fn run_scenario<S>(mut sut: StringSet<S>, pool: &[String], ops: Vec<Op>) -> Result<(), TestCaseError>
where
    S: StringHasher,
{
    let mut model = Model::default();
    let mut added = 0usize;
    let mut removed = 0usize;

    for op in ops {
        match op {
            Op::Add(i) => {
                let v = &pool[i];
                let already = model.contains(v);
                let inserted = sut.add(v.as_str());
                prop_assert_eq!(inserted, !already, "add returns true iff absent");
                prop_assert!(sut.contains(v));
                prop_assert!(!sut.add(v.clone()), "second add must report a duplicate");
                if inserted {
                    added += 1;
                    model.order.push(v.clone());
                    let h = sut.find(v).expect("just inserted");
                    model.handles.insert(v.clone(), h);
                }
            }
            Op::Remove(i) => {
                let v = &pool[i];
                let was = sut.contains(v);
                prop_assert_eq!(was, model.contains(v));
                prop_assert_eq!(sut.remove(v), was, "remove returns true iff present");
                prop_assert!(!sut.contains(v));
                if was {
                    removed += 1;
                    model.remove(v);
                }
            }
            Op::Contains(s) => {
                prop_assert_eq!(sut.contains(&s), model.contains(&s));
            }
            Op::Find(i) => {
                let v = &pool[i];
                let found = sut.find(v);
                prop_assert_eq!(found.is_some(), model.contains(v));
                if let Some(h) = found {
                    // Handles are stable: the same one found at insertion time.
                    prop_assert_eq!(Some(&h), model.handles.get(v));
                    prop_assert_eq!(sut.get(h), Some(v.as_str()));
                    prop_assert_eq!(sut.cursor(v).current(), Some(v.as_str()));
                } else {
                    prop_assert!(sut.cursor(v).is_end());
                }
            }
            Op::Replace(i, j) => {
                let (from, to) = (&pool[i], &pool[j]);
                let mut c = sut.cursor_mut(from);
                let res = c.replace_current(to.clone());
                match res {
                    Ok(old) => {
                        prop_assert!(model.contains(from));
                        prop_assert_eq!(&old, from);
                        prop_assert!(from == to || !model.contains(to));
                        if let Some(pos) = model.order.iter().position(|x| x == from) {
                            model.order[pos] = to.clone();
                        }
                        if let Some(h) = model.handles.remove(from) {
                            model.handles.insert(to.clone(), h);
                        }
                    }
                    Err(crate::ReplaceError::Duplicate(v)) => {
                        prop_assert!(model.contains(from) && model.contains(to) && from != to);
                        prop_assert_eq!(&v, to);
                    }
                    Err(crate::ReplaceError::AtEnd(_)) => {
                        prop_assert!(!model.contains(from));
                    }
                }
            }
            Op::RemoveViaCursor(i) => {
                let v = &pool[i];
                let expected_next = model
                    .order
                    .iter()
                    .position(|x| x == v)
                    .and_then(|p| model.order.get(p + 1).cloned());
                let mut c = sut.cursor_mut(v);
                let out = c.remove_current();
                prop_assert_eq!(c.current().map(str::to_owned), expected_next);
                prop_assert_eq!(out.is_some(), model.contains(v));
                if out.is_some() {
                    removed += 1;
                    model.remove(v);
                }
            }
            Op::Iterate => {
                let seen: Vec<&str> = sut.iter().collect();
                prop_assert_eq!(seen, model.order.iter().map(String::as_str).collect::<Vec<_>>());
            }
            Op::Clear => {
                sut.clear();
                prop_assert_eq!(sut.table_size(), 1);
                removed += model.order.len();
                for v in std::mem::take(&mut model.order) {
                    model.remove(&v);
                }
            }
        }

        // Post-conditions after each op
        sut.assert_consistent();
        for &h in &model.stale {
            prop_assert!(sut.get(h).is_none(), "stale handle must not resolve");
        }
        prop_assert_eq!(sut.len(), model.order.len());
        prop_assert_eq!(sut.len(), added - removed);
        prop_assert_eq!(sut.iter().count(), sut.len());
        prop_assert_eq!(sut.is_empty(), model.order.is_empty());
        prop_assert!(sut.load_factor() <= 1.0);
    }
    Ok(())
}

// Property: state-machine equivalence against an insertion-ordered model.
// - add/remove/contains return values agree with the model.
// - size == successful adds - successful removes == iteration length.
// - Iteration order equals insertion order, across resizes and removals.
// - Handles stay stable while live and never resolve once removed.
// - Every element sits in exactly the chain its digest selects.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(StringSet::new(), &pool, ops)?;
    }
}

// Constant digest: every value shares one chain, so matching must fall
// back to string comparison.
#[derive(Clone, Default)]
struct ConstHasher;

impl StringHasher for ConstHasher {
    fn digest(&self, _value: &str) -> u64 {
        0
    }
}

// Property: same invariants as above under worst-case collisions.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(StringSet::with_hasher(ConstHasher), &pool, ops)?;
    }
}

// Property: bulk construction deduplicates and keeps first-seen order.
proptest! {
    #[test]
    fn prop_from_iter_dedups_in_first_seen_order(values in proptest::collection::vec("[a-c]{0,2}", 0..40)) {
        let set: StringSet = values.iter().map(String::as_str).collect();
        let mut expected: Vec<&str> = Vec::new();
        for v in &values {
            if !expected.contains(&v.as_str()) {
                expected.push(v);
            }
        }
        prop_assert_eq!(set.iter().collect::<Vec<_>>(), expected);
        set.assert_consistent();
    }
}
