use crate::enums::workflow_action::WorkflowAction;

/// Ticket for a boundary call that has been started but not completed.
///
/// The session only accepts a completion whose ticket matches the call it
/// currently has in flight for the same generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCall<R> {
    pub action: WorkflowAction,
    pub generation: u64,
    pub request: R,
}
