//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! with notify-send as a fallback on Linux.

mod notify_rust;
mod notify_send;

pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Notification, NotificationError, Notifier};

/// Tries each notifier in order until one succeeds
pub struct FallbackNotifier {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl FallbackNotifier {
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }
}

#[async_trait]
impl Notifier for FallbackNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let mut last_error = NotificationError::SendFailed("no notifier configured".to_string());
        for notifier in &self.notifiers {
            match notifier.notify(notification).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    debug!(error = %e, "notifier failed, trying next");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}

/// Create the default notifier for the current platform
///
/// Uses notify-rust (cross-platform) as the primary option.
pub fn create_notifier() -> Box<dyn Notifier> {
    if cfg!(target_os = "linux") {
        Box::new(FallbackNotifier::new(vec![
            Box::new(NotifyRustNotifier::new()),
            Box::new(NotifySendNotifier::new()),
        ]))
    } else {
        Box::new(NotifyRustNotifier::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NotificationIcon;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn sample() -> Notification {
        Notification {
            title: "Clipstash".to_string(),
            body: "Paste failed".to_string(),
            icon: NotificationIcon::Warning,
            timeout: Duration::from_secs(1),
        }
    }

    struct CountingNotifier {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for CountingNotifier {
        async fn notify(&self, _notification: &Notification) -> Result<(), NotificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(NotificationError::SendFailed("no bus".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn falls_through_to_next_notifier() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let notifier = FallbackNotifier::new(vec![
            Box::new(CountingNotifier {
                calls: Arc::clone(&first),
                fail: true,
            }),
            Box::new(CountingNotifier {
                calls: Arc::clone(&second),
                fail: false,
            }),
        ]);

        notifier
            .notify(&sample())
            .await
            .unwrap();
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reports_last_error_when_all_fail() {
        let notifier = FallbackNotifier::new(Vec::new());
        assert!(notifier.notify(&sample()).await.is_err());
    }
}
