use crate::enums::notice_level::NoticeLevel;
use crate::structs::workflow::notice::Notice;
use crate::traits::notifier::Notifier;

/// Delivers notices through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        let line = format!("{} {}", notice.level.emoji(), notice.message);
        match notice.level {
            NoticeLevel::Success => log::info!("{}", line),
            NoticeLevel::Warning => log::warn!("{}", line),
            NoticeLevel::Error => log::error!("{}", line),
        }
    }
}
