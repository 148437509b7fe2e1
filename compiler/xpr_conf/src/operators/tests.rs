use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn register_appends_in_order() {
    let mut table = OperatorsTable::new();
    table.register("+", ["AddInt", "AddFloat"]);
    table.register("+", ["AddTime"]);

    assert_eq!(
        table.get("+"),
        Some(&["AddInt".to_string(), "AddFloat".to_string(), "AddTime".to_string()][..])
    );
}

#[test]
fn duplicates_are_kept() {
    let mut table = OperatorsTable::new();
    table.register("==", ["Equal"]);
    table.register("==", ["Equal"]);

    assert_eq!(table.get("==").map(<[String]>::len), Some(2));
}

#[test]
fn empty_registration_creates_entry() {
    let mut table = OperatorsTable::new();
    table.register::<_, String>("in", []);

    assert!(table.contains("in"));
    assert_eq!(table.get("in"), Some(&[][..]));
    assert_eq!(table.pairs().count(), 0);
}

#[test]
fn pairs_are_sorted_by_operator() {
    let mut table = OperatorsTable::new();
    table.register("in", ["Contains"]);
    table.register("+", ["Add", "Concat"]);

    let pairs: Vec<_> = table.pairs().collect();
    assert_eq!(
        pairs,
        vec![("+", "Add"), ("+", "Concat"), ("in", "Contains")]
    );
    assert_eq!(table.len(), 2);
}

#[test]
fn unknown_operator() {
    let table = OperatorsTable::new();
    assert!(table.is_empty());
    assert_eq!(table.get("+"), None);
}

proptest! {
    #[test]
    fn registration_concatenates(
        first in prop::collection::vec("[A-Z][a-z]{0,6}", 0..5),
        second in prop::collection::vec("[A-Z][a-z]{0,6}", 0..5),
    ) {
        let mut table = OperatorsTable::new();
        table.register("+", first.clone());
        table.register("+", second.clone());

        let expected: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(table.get("+").map(<[String]>::to_vec), Some(expected));
    }
}
