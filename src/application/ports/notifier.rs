//! Notification port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::application::paste::{PasteFeedback, PasteOutcome};

/// How long a paste feedback bubble stays up
pub const FEEDBACK_TIMEOUT: Duration = Duration::from_secs(4);

const APP_TITLE: &str = "Clipstash";

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("{0} not found")]
    ToolNotFound(&'static str),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Severity shown with a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Info,
    Warning,
}

impl NotificationIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Warning => "dialog-warning",
        }
    }

    /// notify-send urgency level
    pub const fn urgency(&self) -> &'static str {
        match self {
            Self::Info => "low",
            Self::Warning => "normal",
        }
    }
}

/// A desktop notification ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: NotificationIcon,
    pub timeout: Duration,
}

impl Notification {
    /// Notification for a paste attempt, or `None` when it pasted fine
    pub fn for_feedback(feedback: &PasteFeedback) -> Option<Self> {
        let icon = match feedback.outcome {
            PasteOutcome::Pasted => return None,
            PasteOutcome::Skipped => NotificationIcon::Info,
            PasteOutcome::Failed => NotificationIcon::Warning,
        };
        Some(Self {
            title: APP_TITLE.to_string(),
            body: feedback.message.clone(),
            icon,
            timeout: FEEDBACK_TIMEOUT,
        })
    }
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.as_ref().notify(notification).await
    }
}
