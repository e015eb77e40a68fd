#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewStatistics {
    pub entry_count: usize,
    pub total_changes: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub selected_count: usize,
}

impl PreviewStatistics {
    pub fn print_summary(&self) {
        log::info!("\n📊 Preview Summary:");
        log::info!("   Entries with changes: {}", self.entry_count);
        log::info!("   Proposed changes: {}", self.total_changes);
        log::info!("   ✅ Policy approved: {}", self.approved_count);
        log::info!("   🚫 Policy rejected: {}", self.rejected_count);
        log::info!("   ☑️  Selected for commit: {}", self.selected_count);
    }
}
