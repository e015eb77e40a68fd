use crate::services::workflow_session::WorkflowSession;
use crate::structs::content::category::Category;
use crate::structs::content::entry::Entry;
use crate::structs::workflow::apply_report::ApplyReport;
use crate::structs::workflow::match_group::MatchGroup;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub struct WorkflowLogger {}

impl WorkflowLogger {

    pub fn print_categories(categories: &[Category]) {
        log::info!("\n📚 Categories:");
        log::info!("{}", "=".repeat(50));

        if categories.is_empty() {
            log::info!("⚠️ The content store returned no categories.");
            return;
        }

        for (i, category) in categories.iter().enumerate() {
            log::info!("{}. {} ({})", i + 1, category.label, category.id);
        }
    }

    pub fn print_entries(category_id: &str, entries: &[Entry]) {
        log::info!("\n🗂️ Entries in {}:", category_id);
        log::info!("{}", "=".repeat(50));

        for entry in entries {
            log::info!("   [{}] {}", entry.id, entry.label);
        }

        log::info!("📊 Total entries: {}", entries.len());
    }

    pub fn print_match_groups(total_matches: usize, groups: &[MatchGroup]) {
        log::info!("\n🔍 {} matches in {} entries", total_matches, groups.len());
        log::info!("{}", RULE);

        for group in groups {
            log::info!("\n📄 {} [{}] - {} matches", display_label(&group.entry_label, &group.entry_id), group.entry_id, group.matches.len());
            for scan_match in &group.matches {
                log::info!("   {:<20} | {}", scan_match.field_name, scan_match.before_text);
            }
        }

        log::info!("\n{}", RULE);
    }

    /// Prints every proposed change with its current selection mark.
    pub fn print_preview(session: &WorkflowSession) {
        log::info!("\n📝 Proposed changes:");
        log::info!("{}", RULE);

        for entry in session.preview() {
            let mark = if session.ledger().is_all_selected(&entry.entry_id, &entry.changes) { "[x]" } else { "[ ]" };
            log::info!("\n{} 📄 {} [{}]", mark, display_label(&entry.entry_label, &entry.entry_id), entry.entry_id);

            for change in &entry.changes {
                let selected = session.ledger().is_selected(&entry.entry_id, &change.field_name);
                let checkbox = if selected { "[x]" } else { "[ ]" };
                let policy = if change.is_default_approved() { "" } else { " 🚫 rejected by policy" };

                log::info!("  {} {}{}", checkbox, change.field_name, policy);
                log::info!("\x1b[31m      - {}\x1b[0m", change.before_text);
                log::info!("\x1b[32m      + {}\x1b[0m", change.after_text);
            }
        }

        log::info!("\n{}", RULE);
        session.preview_statistics().print_summary();
    }

    pub fn print_apply_report(report: &ApplyReport) {
        log::info!("\n📋 Apply Results:");
        log::info!("{}", RULE);
        log::info!("✅ Updated (reported by store): {}", report.total_updated);

        if !report.updated.is_empty() {
            log::info!("\n✅ Updated entries ({}):", report.updated.len());
            for record in &report.updated {
                let count = record.changes.as_ref().map_or(0, Vec::len);
                log::info!("   {} [{}] - {} fields", display_label(&record.entry_label, &record.entry_id), record.entry_id, count);
            }
        }

        if report.has_failures() {
            log::info!("\n❌ Failed entries ({}):", report.failed.len());
            for record in &report.failed {
                log::info!(
                    "   {} [{}] - {}",
                    display_label(&record.entry_label, &record.entry_id),
                    record.entry_id,
                    record.error.as_deref().unwrap_or("unknown error")
                );
            }
        }

        log::info!("\n{}", RULE);
    }
}

fn display_label<'a>(label: &'a str, fallback: &'a str) -> &'a str {
    if label.is_empty() { fallback } else { label }
}
