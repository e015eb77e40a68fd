use crate::errors::ReplaceError;

#[derive(Debug, Clone)]
pub enum CallOutcome {
    /// The response was stored and the workflow advanced.
    Applied,
    /// The call failed; state is exactly as before the call started.
    Failed(ReplaceError),
    /// The response belongs to an abandoned call and was discarded.
    Stale,
}

impl CallOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CallOutcome::Applied)
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, CallOutcome::Stale)
    }
}
