use std::collections::BTreeMap;
use crate::structs::content::preview_entry::PreviewEntry;
use crate::structs::content::proposed_change::ProposedChange;

/// Field names chosen for commit, per entry.
///
/// Each entry maps to an ordered list without duplicates. Seeding from a
/// preview only ever picks policy-approved changes; manual toggles are plain
/// set membership and are not checked against the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionLedger {
    selections: BTreeMap<String, Vec<String>>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_preview(preview: &[PreviewEntry]) -> Self {
        let mut ledger = Self::new();
        ledger.initialize(preview);
        ledger
    }

    /// Replaces all state with the default-approved fields of `preview`.
    pub fn initialize(&mut self, preview: &[PreviewEntry]) {
        self.selections.clear();

        for entry in preview {
            let fields = self.selections.entry(entry.entry_id.clone()).or_default();
            for field_name in entry.approvable_fields() {
                if !fields.iter().any(|f| f == field_name) {
                    fields.push(field_name.to_string());
                }
            }
        }
    }

    pub fn toggle_field(&mut self, entry_id: &str, field_name: &str, selected: bool) {
        if selected {
            let fields = self.selections.entry(entry_id.to_string()).or_default();
            if !fields.iter().any(|f| f == field_name) {
                fields.push(field_name.to_string());
            }
        } else if let Some(fields) = self.selections.get_mut(entry_id) {
            fields.retain(|f| f != field_name);
        }
    }

    /// Sets `entry_id` to every approvable field of `changes`, or to nothing.
    /// Policy-rejected changes are never part of "select all".
    pub fn select_all_for_entry(&mut self, entry_id: &str, changes: &[ProposedChange], selected: bool) {
        let fields = if selected {
            let mut fields: Vec<String> = Vec::new();
            for change in changes.iter().filter(|c| c.is_default_approved()) {
                if !fields.contains(&change.field_name) {
                    fields.push(change.field_name.clone());
                }
            }
            fields
        } else {
            Vec::new()
        };

        self.selections.insert(entry_id.to_string(), fields);
    }

    pub fn select_all(&mut self, preview: &[PreviewEntry], selected: bool) {
        for entry in preview {
            self.select_all_for_entry(&entry.entry_id, &entry.changes, selected);
        }
    }

    pub fn count_selected(&self, entry_id: &str) -> usize {
        self.selections.get(entry_id).map_or(0, Vec::len)
    }

    pub fn count_approvable(&self, _entry_id: &str, changes: &[ProposedChange]) -> usize {
        let mut seen: Vec<&str> = Vec::new();
        for change in changes.iter().filter(|c| c.is_default_approved()) {
            if !seen.contains(&change.field_name.as_str()) {
                seen.push(&change.field_name);
            }
        }
        seen.len()
    }

    /// Whether the per-entry "select all" control shows as checked.
    pub fn is_all_selected(&self, entry_id: &str, changes: &[ProposedChange]) -> bool {
        let approvable = self.count_approvable(entry_id, changes);
        approvable > 0 && self.count_selected(entry_id) == approvable
    }

    pub fn is_selected(&self, entry_id: &str, field_name: &str) -> bool {
        self.selections
            .get(entry_id)
            .is_some_and(|fields| fields.iter().any(|f| f == field_name))
    }

    pub fn fields_for(&self, entry_id: &str) -> &[String] {
        self.selections.get(entry_id).map_or(&[], Vec::as_slice)
    }

    pub fn has_selection(&self) -> bool {
        self.selections.values().any(|fields| !fields.is_empty())
    }

    pub fn total_selected(&self) -> usize {
        self.selections.values().map(Vec::len).sum()
    }

    /// Drops entries and fields that do not exist in `preview` anymore.
    pub fn reconcile(&mut self, preview: &[PreviewEntry]) {
        self.selections.retain(|entry_id, fields| {
            match preview.iter().find(|entry| &entry.entry_id == entry_id) {
                Some(entry) => {
                    fields.retain(|field| entry.find_change(field).is_some());
                    true
                }
                None => false,
            }
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.selections.iter().map(|(entry_id, fields)| (entry_id.as_str(), fields.as_slice()))
    }

    pub fn reset(&mut self) {
        self.selections.clear();
    }
}
