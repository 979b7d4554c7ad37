//! Property-based tests for local-store round trips.
//!
//! For any serializable value, writing then reading through the store
//! produces an equivalent value, and re-writing replaces it whole.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use skillswap::database::connection::Database;
use skillswap::services::local_store::LocalStore;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Record {
    label: String,
    count: u32,
    tags: Vec<String>,
    attrs: BTreeMap<String, String>,
}

fn setup() -> LocalStore {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    LocalStore::new(Arc::new(db))
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        "[ -~]{0,40}",
        any::<u32>(),
        proptest::collection::vec("[a-z]{1,10}", 0..5),
        proptest::collection::btree_map("[a-z]{1,8}", "[ -~]{0,20}", 0..4),
    )
        .prop_map(|(label, count, tags, attrs)| Record {
            label,
            count,
            tags,
            attrs,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn set_get_roundtrip(key in "[a-z_]{1,20}", record in arb_record()) {
        let store = setup();

        store.set(&key, &record).expect("set");
        let loaded: Option<Record> = store.get(&key).expect("get");
        prop_assert_eq!(loaded, Some(record));
    }

    #[test]
    fn rewrite_replaces_whole_value(
        key in "[a-z_]{1,20}",
        first in arb_record(),
        second in arb_record(),
    ) {
        let store = setup();

        store.set(&key, &first).expect("set first");
        store.set(&key, &second).expect("set second");

        let loaded: Record = store.get(&key).expect("get").expect("present");
        prop_assert_eq!(loaded, second);
    }
}
