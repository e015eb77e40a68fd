use std::fmt;

/// User-initiated actions that reach the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowAction {
    LoadCategories,
    LoadEntries,
    Scan,
    Preview,
    Apply,
}

impl fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowAction::LoadCategories => write!(f, "load categories"),
            WorkflowAction::LoadEntries => write!(f, "load entries"),
            WorkflowAction::Scan => write!(f, "scan"),
            WorkflowAction::Preview => write!(f, "preview"),
            WorkflowAction::Apply => write!(f, "apply"),
        }
    }
}
