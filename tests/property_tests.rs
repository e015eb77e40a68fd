use proptest::prelude::*;
use bulk_replace::services::aggregator::Aggregator;
use bulk_replace::services::selection_ledger::SelectionLedger;
use bulk_replace::structs::content::preview_entry::PreviewEntry;
use bulk_replace::structs::content::proposed_change::ProposedChange;

const FIELDS: [&str; 5] = ["title", "body", "summary", "slug", "seo"];

fn policy() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), Just(Some(true)), Just(Some(false))]
}

fn changes() -> impl Strategy<Value = Vec<ProposedChange>> {
    proptest::sample::subsequence(FIELDS.to_vec(), 0..=FIELDS.len()).prop_flat_map(|fields| {
        let count = fields.len();
        proptest::collection::vec(policy(), count).prop_map(move |policies| {
            fields
                .iter()
                .zip(policies)
                .map(|(field, policy_approved)| ProposedChange {
                    field_name: (*field).to_string(),
                    before_text: format!("old {}", field),
                    after_text: format!("new {}", field),
                    policy_approved,
                })
                .collect()
        })
    })
}

fn preview() -> impl Strategy<Value = Vec<PreviewEntry>> {
    proptest::collection::vec(changes(), 0..6).prop_map(|all| {
        all.into_iter()
            .enumerate()
            .map(|(i, changes)| PreviewEntry {
                entry_id: format!("E{}", i),
                entry_label: String::new(),
                changes,
            })
            .collect()
    })
}

fn toggles() -> impl Strategy<Value = Vec<(usize, usize, bool)>> {
    proptest::collection::vec((0usize..8, 0usize..FIELDS.len(), any::<bool>()), 0..20)
}

proptest! {
    #[test]
    fn seed_never_contains_rejected_fields(preview in preview()) {
        let ledger = SelectionLedger::from_preview(&preview);

        for entry in &preview {
            for field in ledger.fields_for(&entry.entry_id) {
                let change = entry.find_change(field).expect("seeded field exists in preview");
                prop_assert_ne!(change.policy_approved, Some(false));
            }
        }
    }

    #[test]
    fn select_all_matches_approvable_count(preview in preview()) {
        let mut ledger = SelectionLedger::new();

        for entry in &preview {
            ledger.select_all_for_entry(&entry.entry_id, &entry.changes, true);
            let rejected = entry.changes.iter().filter(|c| c.policy_approved == Some(false)).count();

            prop_assert_eq!(ledger.count_selected(&entry.entry_id), ledger.count_approvable(&entry.entry_id, &entry.changes));
            prop_assert_eq!(ledger.count_approvable(&entry.entry_id, &entry.changes), entry.changes.len() - rejected);
        }
    }

    #[test]
    fn payload_length_matches_selected_pairs(preview in preview(), toggles in toggles()) {
        let mut ledger = SelectionLedger::from_preview(&preview);
        for (entry, field, selected) in toggles {
            ledger.toggle_field(&format!("E{}", entry), FIELDS[field], selected);
        }

        let payload = Aggregator::build_commit_payload(&preview, &ledger);
        let expected = ledger
            .iter()
            .map(|(entry_id, fields)| {
                preview
                    .iter()
                    .find(|entry| entry.entry_id == entry_id)
                    .map_or(0, |entry| fields.iter().filter(|f| entry.find_change(f).is_some()).count())
            })
            .sum::<usize>();

        prop_assert_eq!(payload.len(), expected);
        if !ledger.has_selection() {
            prop_assert!(payload.is_empty());
        }
    }

    #[test]
    fn toggle_on_is_idempotent(preview in preview(), entry in 0usize..8, field in 0usize..FIELDS.len()) {
        let entry_id = format!("E{}", entry);
        let mut once = SelectionLedger::from_preview(&preview);
        once.toggle_field(&entry_id, FIELDS[field], true);
        let mut twice = once.clone();
        twice.toggle_field(&entry_id, FIELDS[field], true);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn second_initialize_leaves_nothing_from_the_first(first in preview(), second in preview()) {
        let mut ledger = SelectionLedger::from_preview(&first);
        ledger.initialize(&second);

        prop_assert_eq!(ledger, SelectionLedger::from_preview(&second));
    }
}
