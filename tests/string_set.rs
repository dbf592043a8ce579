// StringSet integration test suite.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Uniqueness: add reports duplicates without mutating the set.
// - Bookkeeping: len == successful adds - successful removes.
// - Order: iteration follows insertion order across resizes/removals.
// - Stability: handles and their values survive resizes; only removal
//   of the element itself invalidates a handle.
// - Hasher policy: custom hashers plug in at construction.
use std::collections::hash_map::RandomState;
use string_set::{FnHasher, StringHasher, StringSet};

// Test: the walkthrough from the demo driver.
// Verifies: add/contains/remove return values, case sensitivity.
#[test]
fn walkthrough_scenario() {
    let mut set = StringSet::new();
    assert!(set.add("Some data"));
    assert!(!set.add("Some data"));
    assert!(set.contains("Some data"));
    assert!(!set.contains("some data"));
    assert!(set.remove("Some data"));
    assert!(!set.remove("some data"));

    set.add("More data");
    set.add("Even more data");
    for c in 'a'..='z' {
        set.add(c.to_string());
    }
    let all: Vec<&str> = set.iter().collect();
    assert_eq!(all.len(), 28);
    assert_eq!(&all[..3], ["More data", "Even more data", "a"]);
    assert_eq!(all.last(), Some(&"z"));
}

// Test: resize transparency at scale.
// Verifies: 1000 distinct adds lose nothing, keep order, keep load <= 1.
#[test]
fn thousand_distinct_values_survive_resizes() {
    let mut set = StringSet::new();
    let first = {
        set.add("v0000");
        set.find("v0000").expect("just added")
    };
    for i in 1..1000 {
        assert!(set.add(format!("v{i:04}")));
    }
    assert_eq!(set.len(), 1000);
    assert_eq!(set.table_size(), 1024);
    assert!(set.load_factor() <= 1.0);
    for i in 0..1000 {
        assert!(set.contains(&format!("v{i:04}")));
    }
    let expected: Vec<String> = (0..1000).map(|i| format!("v{i:04}")).collect();
    assert!(set.iter().eq(expected.iter().map(String::as_str)));

    // A handle taken before every resize still resolves.
    assert_eq!(set.get(first), Some("v0000"));
}

// Test: bookkeeping under interleaved adds and removes.
// Verifies: len tracks successful operations; iteration length matches.
#[test]
fn len_tracks_successful_operations() {
    let mut set = StringSet::new();
    let mut expected = 0usize;
    for i in 0..200 {
        if set.add(format!("{}", i % 70)) {
            expected += 1;
        }
        if i % 3 == 0 && set.remove(&format!("{}", i % 50)) {
            expected -= 1;
        }
        assert_eq!(set.len(), expected);
        assert_eq!(set.iter().count(), expected);
    }
}

// Test: removal in the middle keeps the relative order of the rest.
#[test]
fn removal_preserves_relative_order() {
    let mut set: StringSet = ["a", "b", "c", "d", "e"].into_iter().collect();
    assert!(set.remove("c"));
    assert!(set.remove("a"));
    set.add("c");
    assert_eq!(set.iter().collect::<Vec<_>>(), ["b", "d", "e", "c"]);
}

// Test: construction forms.
// Verifies: literal list, iterator, and custom-hasher construction agree.
#[test]
fn construction_forms_agree() {
    let literal = StringSet::from(["x", "y", "x"]);
    assert_eq!(literal.len(), 2);
    assert!(literal.contains("x") && literal.contains("y"));

    let owned: StringSet = vec![String::from("x"), String::from("y")].into_iter().collect();
    assert_eq!(literal, owned);

    let custom = StringSet::from_iter_with_hasher(["x", "y", "x"], RandomState::new());
    assert_eq!(custom.iter().collect::<Vec<_>>(), ["x", "y"]);

    let defaulted: StringSet = StringSet::default();
    assert!(defaulted.is_empty());
    assert_eq!(defaulted.table_size(), 1);
}

// Test: the configured hasher is exposed read-only and used for lookups.
#[test]
fn hasher_is_exposed_and_used() {
    fn by_len(s: &str) -> u64 {
        s.len() as u64
    }
    let mut set = StringSet::with_hasher(FnHasher(by_len));
    set.extend(["ab", "cd", "efg"]);
    assert_eq!(set.hasher().digest("xy"), 2);
    assert_eq!(set.len(), 3);
    assert!(set.contains("cd"));
    assert!(!set.contains("gh"));
}

// Test: clear restores fresh-container behavior.
#[test]
fn clear_then_reuse() {
    let mut set = StringSet::from(["a", "b", "c"]);
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.iter().next(), None);
    assert!(set.add("b"));
    assert!(!set.add("b"));
    assert_eq!(set.iter().collect::<Vec<_>>(), ["b"]);
}

// Test: borrowed iteration via `for` and owned iteration via into_iter.
#[test]
fn for_loops_over_borrowed_and_owned() {
    let set = StringSet::from(["one", "two", "three"]);
    let mut lens = Vec::new();
    for v in &set {
        lens.push(v.len());
    }
    assert_eq!(lens, [3, 3, 5]);

    let owned: Vec<String> = set.into_iter().collect();
    assert_eq!(owned, ["one", "two", "three"]);
}

// Test: cursors mirror find/end semantics.
#[test]
fn cursor_find_and_end_sentinel() {
    let mut set = StringSet::from(["p", "q", "r"]);
    assert!(set.cursor("q").current() == Some("q"));
    assert!(set.cursor("nope").is_end());

    let h = set.find("q").expect("present");
    assert_eq!(set.cursor("q").handle(), Some(h));
    assert_eq!(set.iter_from(h).collect::<Vec<_>>(), ["q", "r"]);

    let mut c = set.cursor_mut("p");
    assert_eq!(c.remove_current().as_deref(), Some("p"));
    assert_eq!(c.current(), Some("q"));
    assert_eq!(set.get(h), Some("q"));
}
