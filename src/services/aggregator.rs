use crate::enums::apply_status::ApplyStatus;
use crate::services::selection_ledger::SelectionLedger;
use crate::structs::content::apply_summary::ApplySummary;
use crate::structs::content::commit_item::CommitItem;
use crate::structs::content::preview_entry::PreviewEntry;
use crate::structs::content::scan_match::ScanMatch;
use crate::structs::workflow::apply_report::ApplyReport;
use crate::structs::workflow::match_group::MatchGroup;
use crate::structs::workflow::preview_statistics::PreviewStatistics;

pub struct Aggregator;

impl Aggregator {

    /// Changes to submit, in preview order then change order. An empty result
    /// means there is nothing to submit.
    pub fn build_commit_payload(preview: &[PreviewEntry], ledger: &SelectionLedger) -> Vec<CommitItem> {
        preview
            .iter()
            .flat_map(|entry| {
                entry
                    .changes
                    .iter()
                    .filter(|change| ledger.is_selected(&entry.entry_id, &change.field_name))
                    .map(|change| CommitItem {
                        entry_id: entry.entry_id.clone(),
                        field_name: change.field_name.clone(),
                        new_value: change.after_text.clone(),
                    })
            })
            .collect()
    }

    pub fn summarize_apply(summary: &ApplySummary) -> ApplyReport {
        let (updated, failed) = summary
            .records
            .iter()
            .cloned()
            .partition(|record| record.status == ApplyStatus::Updated);

        ApplyReport {
            total_updated: summary.total_updated,
            updated,
            failed,
        }
    }

    /// Groups scan matches by entry, keeping the order in which entries first
    /// appear.
    pub fn group_matches(matches: &[ScanMatch]) -> Vec<MatchGroup> {
        let mut groups: Vec<MatchGroup> = Vec::new();

        for scan_match in matches {
            match groups.iter_mut().find(|group| group.entry_id == scan_match.entry_id) {
                Some(group) => group.matches.push(scan_match.clone()),
                None => groups.push(MatchGroup {
                    entry_id: scan_match.entry_id.clone(),
                    entry_label: scan_match.entry_label.clone(),
                    matches: vec![scan_match.clone()],
                }),
            }
        }

        groups
    }

    pub fn summarize_preview(preview: &[PreviewEntry], ledger: &SelectionLedger) -> PreviewStatistics {
        let mut stats = PreviewStatistics {
            entry_count: preview.len(),
            ..PreviewStatistics::default()
        };

        for entry in preview {
            stats.total_changes += entry.changes.len();
            for change in &entry.changes {
                if change.is_default_approved() {
                    stats.approved_count += 1;
                } else {
                    stats.rejected_count += 1;
                }
            }
        }

        stats.selected_count = Self::build_commit_payload(preview, ledger).len();
        stats
    }
}
