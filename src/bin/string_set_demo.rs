//! Walkthrough of the `StringSet` API. Run with `RUST_LOG=trace` to see
//! the table resizes as they happen.

use string_set::StringSet;

fn main() {
    env_logger::init();

    let mut set = StringSet::new();

    let added = |inserted: bool| if inserted { "added" } else { "already exists" };
    println!("{}", added(set.add("Some data")));
    println!("{}", added(set.add("Some data")));

    let yes_no = |present: bool| if present { "yes" } else { "no" };
    println!("{}", yes_no(set.contains("Some data")));
    println!("{}", yes_no(set.contains("some data")));

    let contained = |removed: bool| if removed { "contained" } else { "did not contain" };
    println!("{}", contained(set.remove("Some data")));
    println!("{}", contained(set.remove("some data")));

    set.add("More data");
    set.add("Even more data");
    for c in 'a'..='z' {
        set.add(c.to_string());
    }

    for data in &set {
        println!("{data}");
    }
    log::debug!(
        "{} elements in {} buckets (load factor {:.2})",
        set.len(),
        set.table_size(),
        set.load_factor()
    );
}
