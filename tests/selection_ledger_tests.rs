use bulk_replace::services::selection_ledger::SelectionLedger;
use crate::common::{change, preview_entry, scenario_b_preview};

#[test]
fn initialize_seeds_only_policy_approved_fields() {
    let preview = scenario_b_preview();
    let ledger = SelectionLedger::from_preview(&preview);

    assert_eq!(ledger.fields_for("E1"), ["field1".to_string()]);
    assert!(!ledger.is_selected("E1", "field2"));
    assert_eq!(ledger.count_approvable("E1", &preview[0].changes), 1);
}

#[test]
fn explicit_policy_true_and_absent_are_both_approved() {
    let preview = vec![preview_entry(
        "E1",
        vec![
            change("title", "a", "b", Some(true)),
            change("body", "a", "b", None),
            change("slug", "a", "b", Some(false)),
        ],
    )];
    let ledger = SelectionLedger::from_preview(&preview);

    assert_eq!(ledger.fields_for("E1"), ["title".to_string(), "body".to_string()]);
}

#[test]
fn toggle_is_unconstrained_by_policy() {
    let preview = scenario_b_preview();
    let mut ledger = SelectionLedger::from_preview(&preview);

    ledger.toggle_field("E1", "field2", true);

    assert!(ledger.is_selected("E1", "field2"));
    assert_eq!(ledger.count_selected("E1"), 2);
}

#[test]
fn toggle_on_twice_is_idempotent() {
    let mut once = SelectionLedger::new();
    once.toggle_field("E1", "title", true);

    let mut twice = SelectionLedger::new();
    twice.toggle_field("E1", "title", true);
    twice.toggle_field("E1", "title", true);

    assert_eq!(once, twice);
    assert_eq!(twice.count_selected("E1"), 1);
}

#[test]
fn toggle_off_removes_field_and_ignores_unknown_entries() {
    let mut ledger = SelectionLedger::from_preview(&scenario_b_preview());

    ledger.toggle_field("E1", "field1", false);
    ledger.toggle_field("missing", "field1", false);

    assert_eq!(ledger.count_selected("E1"), 0);
    assert_eq!(ledger.count_selected("missing"), 0);
    assert!(!ledger.has_selection());
}

#[test]
fn select_all_for_entry_skips_rejected_changes() {
    let preview = scenario_b_preview();
    let changes = &preview[0].changes;
    let mut ledger = SelectionLedger::new();
    ledger.toggle_field("E1", "field2", true);

    ledger.select_all_for_entry("E1", changes, true);
    assert_eq!(ledger.fields_for("E1"), ["field1".to_string()]);
    assert_eq!(ledger.count_selected("E1"), ledger.count_approvable("E1", changes));
    assert!(ledger.is_all_selected("E1", changes));

    ledger.select_all_for_entry("E1", changes, false);
    assert_eq!(ledger.count_selected("E1"), 0);
    assert!(!ledger.is_all_selected("E1", changes));
}

#[test]
fn all_selected_requires_an_approvable_change() {
    let changes = vec![change("field2", "a", "b", Some(false))];
    let mut ledger = SelectionLedger::new();
    ledger.select_all_for_entry("E1", &changes, true);

    assert_eq!(ledger.count_approvable("E1", &changes), 0);
    assert_eq!(ledger.count_selected("E1"), 0);
    assert!(!ledger.is_all_selected("E1", &changes));
}

#[test]
fn all_selected_is_an_exact_count_match() {
    let preview = scenario_b_preview();
    let changes = &preview[0].changes;
    let mut ledger = SelectionLedger::from_preview(&preview);
    ledger.toggle_field("E1", "field2", true);

    // two selected, one approvable
    assert!(!ledger.is_all_selected("E1", changes));
}

#[test]
fn select_all_covers_every_preview_entry() {
    let preview = vec![
        preview_entry("E1", vec![change("a", "x", "y", None)]),
        preview_entry("E2", vec![change("b", "x", "y", None), change("c", "x", "y", Some(false))]),
    ];
    let mut ledger = SelectionLedger::new();

    ledger.select_all(&preview, true);
    assert_eq!(ledger.total_selected(), 2);

    ledger.select_all(&preview, false);
    assert!(!ledger.has_selection());
}

#[test]
fn second_initialize_replaces_previous_state() {
    let mut ledger = SelectionLedger::from_preview(&scenario_b_preview());
    ledger.toggle_field("E1", "field2", true);

    let second = vec![preview_entry("E2", vec![change("title", "foo", "bar", None)])];
    ledger.initialize(&second);

    assert_eq!(ledger.count_selected("E1"), 0);
    assert_eq!(ledger.fields_for("E2"), ["title".to_string()]);
    assert_eq!(ledger.iter().count(), 1);
}

#[test]
fn reconcile_drops_stale_entries_and_fields() {
    let mut ledger = SelectionLedger::new();
    ledger.toggle_field("E1", "field1", true);
    ledger.toggle_field("E1", "gone", true);
    ledger.toggle_field("E9", "field1", true);

    ledger.reconcile(&scenario_b_preview());

    assert_eq!(ledger.fields_for("E1"), ["field1".to_string()]);
    assert_eq!(ledger.count_selected("E9"), 0);
    assert_eq!(ledger.iter().count(), 1);
}

#[test]
fn reset_clears_everything() {
    let mut ledger = SelectionLedger::from_preview(&scenario_b_preview());
    ledger.reset();

    assert!(!ledger.has_selection());
    assert_eq!(ledger.iter().count(), 0);
}
