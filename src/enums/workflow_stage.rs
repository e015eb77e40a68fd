use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStage {
    #[default]
    Select,
    Scan,
    Preview,
    Apply,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowStage::Select => write!(f, "select"),
            WorkflowStage::Scan => write!(f, "scan"),
            WorkflowStage::Preview => write!(f, "preview"),
            WorkflowStage::Apply => write!(f, "apply"),
        }
    }
}
