use thiserror::Error;
use crate::enums::workflow_action::WorkflowAction;
use crate::enums::workflow_stage::WorkflowStage;

/// Why a transition did not fire. These are not failures: nothing was sent
/// to the content store and no state changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardRejection {
    #[error("another request is still in progress")]
    Busy,
    #[error("{action} is not available in the {stage} stage")]
    WrongStage { action: WorkflowAction, stage: WorkflowStage },
    #[error("no category selected")]
    NoCategory,
    #[error("search text is empty")]
    EmptyPattern,
    #[error("no entries selected")]
    NoEntries,
    #[error("replacement text is empty")]
    EmptyReplacement,
    #[error("no changes selected")]
    NothingSelected,
}
