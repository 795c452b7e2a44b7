//! Cross-platform notification adapter using notify-rust

use async_trait::async_trait;

use crate::application::ports::{Notification, NotificationError, Notifier};

/// Desktop notifications through notify-rust (D-Bus, macOS or WinRT)
pub struct NotifyRustNotifier {
    app_name: String,
}

impl NotifyRustNotifier {
    pub fn new() -> Self {
        Self::with_app_name("Clipstash")
    }

    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let notification = notification.clone();
        let app_name = self.app_name.clone();
        let timeout_ms = u32::try_from(notification.timeout.as_millis()).unwrap_or(u32::MAX);

        // show() talks to the notification server synchronously
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&notification.title)
                .body(&notification.body)
                .icon(notification.icon.icon_name())
                .timeout(notify_rust::Timeout::Milliseconds(timeout_ms))
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_name() {
        assert_eq!(NotifyRustNotifier::default().app_name, "Clipstash");
        assert_eq!(NotifyRustNotifier::with_app_name("Other").app_name, "Other");
    }
}
