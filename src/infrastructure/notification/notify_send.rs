//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Notification, NotificationError, Notifier};

/// Desktop notifications by shelling out to `notify-send`
pub struct NotifySendNotifier {
    app_name: String,
}

impl NotifySendNotifier {
    pub fn new() -> Self {
        Self {
            app_name: "Clipstash".to_string(),
        }
    }

    fn args(&self, notification: &Notification) -> Vec<String> {
        vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            "--icon".to_string(),
            notification.icon.icon_name().to_string(),
            "--urgency".to_string(),
            notification.icon.urgency().to_string(),
            "--expire-time".to_string(),
            notification.timeout.as_millis().to_string(),
            notification.title.clone(),
            notification.body.clone(),
        ]
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let status = Command::new("notify-send")
            .args(self.args(notification))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::ToolNotFound("notify-send")
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NotificationIcon;
    use std::time::Duration;

    #[test]
    fn args_carry_urgency_and_timeout() {
        let notification = Notification {
            title: "Clipstash".to_string(),
            body: "Copied, but paste failed".to_string(),
            icon: NotificationIcon::Warning,
            timeout: Duration::from_millis(1500),
        };
        let args = NotifySendNotifier::new().args(&notification);
        assert_eq!(
            args,
            [
                "--app-name",
                "Clipstash",
                "--icon",
                "dialog-warning",
                "--urgency",
                "normal",
                "--expire-time",
                "1500",
                "Clipstash",
                "Copied, but paste failed",
            ]
        );
    }
}
