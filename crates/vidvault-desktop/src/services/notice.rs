//! Blocking-style user notices shown as native message dialogs.

use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    const fn title(self) -> &'static str {
        match self {
            Self::Info => "VidVault",
            Self::Warning => "VidVault - Warning",
            Self::Error => "VidVault - Error",
        }
    }

    const fn dialog_level(self) -> MessageLevel {
        match self {
            Self::Info => MessageLevel::Info,
            Self::Warning => MessageLevel::Warning,
            Self::Error => MessageLevel::Error,
        }
    }
}

/// Show `message` and wait until the user dismisses it.
pub async fn show_notice(level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    tracing::debug!("Showing {:?} notice: {}", level, message);
    AsyncMessageDialog::new()
        .set_level(level.dialog_level())
        .set_title(level.title())
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
