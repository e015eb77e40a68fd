use crate::structs::content::scan_match::ScanMatch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub entry_id: String,
    pub entry_label: String,
    pub matches: Vec<ScanMatch>,
}
