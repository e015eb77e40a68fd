use crate::structs::workflow::notice::Notice;

/// Non-blocking side channel for user-facing feedback.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
