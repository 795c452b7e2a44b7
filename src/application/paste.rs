//! Restore-then-paste actuation

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ports::{AppTarget, PasteError, PasteInjector};

/// Result of an auto-paste attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasteOutcome {
    Pasted,
    Skipped,
    Failed,
}

impl fmt::Display for PasteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pasted => "pasted",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Event emitted after every paste attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteFeedback {
    pub outcome: PasteOutcome,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl PasteFeedback {
    pub fn new(outcome: PasteOutcome, message: impl Into<String>, target: Option<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
            target,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == PasteOutcome::Pasted
    }
}

/// Drives a [`PasteInjector`] with bounded calls and focus fallback
pub struct PasteActuator<P: PasteInjector> {
    injector: P,
    timeout: Duration,
}

impl<P: PasteInjector> PasteActuator<P> {
    pub fn new(injector: P, timeout: Duration) -> Self {
        Self { injector, timeout }
    }

    pub fn injector(&self) -> &P {
        &self.injector
    }

    pub fn injector_name(&self) -> &'static str {
        self.injector.name()
    }

    /// The focused application, or None when it cannot be determined
    pub async fn frontmost(&self) -> Option<AppTarget> {
        match self.bounded("focus query", self.injector.frontmost_app()).await {
            Ok(app) => app,
            Err(e) => {
                debug!(error = %e, "could not determine frontmost application");
                None
            }
        }
    }

    /// Paste into `previous`, the app focused when the picker opened.
    ///
    /// Never fails; every outcome is reported as feedback.
    pub async fn paste(&self, previous: Option<AppTarget>) -> PasteFeedback {
        let recorded = previous.is_some();
        let target = match previous {
            Some(app) => Some(app),
            None => self.frontmost().await,
        };
        let target_name = target.as_ref().map(|t| t.name.clone());

        if let Some(app) = target.as_ref().filter(|app| app.is_desktop_shell()) {
            debug!(target = %app, "skipping paste into desktop shell");
            return PasteFeedback::new(
                PasteOutcome::Skipped,
                format!("Copied. {} does not accept pastes", app.name),
                target_name,
            );
        }

        if let Some(app) = target.as_ref().filter(|_| recorded) {
            if let Err(e) = self.bounded("activate", self.injector.activate(app)).await {
                warn!(target = %app, error = %e, "could not reactivate target, pasting into focused window");
            }
        }

        match self.bounded("paste", self.injector.send_paste()).await {
            Ok(()) => {
                let message = match &target_name {
                    Some(name) => format!("Pasted into {}", name),
                    None => "Pasted".to_string(),
                };
                PasteFeedback::new(PasteOutcome::Pasted, message, target_name)
            }
            Err(e @ PasteError::PermissionDenied(_)) => {
                warn!(tool = self.injector.name(), error = %e, "paste blocked by permissions");
                PasteFeedback::new(PasteOutcome::Failed, e.to_string(), target_name)
            }
            Err(e) => {
                warn!(tool = self.injector.name(), error = %e, "paste injection failed");
                PasteFeedback::new(
                    PasteOutcome::Failed,
                    format!("Copied, but paste failed: {}", e),
                    target_name,
                )
            }
        }
    }

    async fn bounded<T, F>(&self, what: &str, fut: F) -> Result<T, PasteError>
    where
        F: Future<Output = Result<T, PasteError>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| PasteError::Timeout(what.to_string()))?
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scriptable injector recording every call
    #[derive(Default)]
    pub(crate) struct FakeInjector {
        pub frontmost: Option<AppTarget>,
        pub activate_error: Option<PasteError>,
        pub paste_error: Option<PasteError>,
        pub paste_hangs: bool,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeInjector {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PasteInjector for FakeInjector {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
            self.calls.lock().unwrap().push("frontmost".to_string());
            Ok(self.frontmost.clone())
        }

        async fn activate(&self, target: &AppTarget) -> Result<(), PasteError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("activate {}", target.name));
            match &self.activate_error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        async fn send_paste(&self) -> Result<(), PasteError> {
            self.calls.lock().unwrap().push("paste".to_string());
            if self.paste_hangs {
                std::future::pending::<()>().await;
            }
            match &self.paste_error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn actuator(injector: FakeInjector) -> PasteActuator<FakeInjector> {
        PasteActuator::new(injector, Duration::from_millis(50))
    }

    #[tokio::test]
    async fn pastes_into_recorded_app() {
        let actuator = actuator(FakeInjector::default());
        let feedback = actuator.paste(Some(AppTarget::new("42", "editor"))).await;

        assert_eq!(feedback.outcome, PasteOutcome::Pasted);
        assert_eq!(feedback.target.as_deref(), Some("editor"));
        assert_eq!(actuator.injector.calls(), vec!["activate editor", "paste"]);
    }

    #[tokio::test]
    async fn skips_desktop_shell() {
        let actuator = actuator(FakeInjector::default());
        let feedback = actuator.paste(Some(AppTarget::new("1", "Finder"))).await;

        assert_eq!(feedback.outcome, PasteOutcome::Skipped);
        assert!(actuator.injector.calls().is_empty());
    }

    #[tokio::test]
    async fn checks_current_app_when_nothing_recorded() {
        let actuator = actuator(FakeInjector {
            frontmost: Some(AppTarget::new("9", "explorer.exe")),
            ..Default::default()
        });
        let feedback = actuator.paste(None).await;

        assert_eq!(feedback.outcome, PasteOutcome::Skipped);
        assert_eq!(actuator.injector.calls(), vec!["frontmost"]);
    }

    #[tokio::test]
    async fn no_activation_without_recorded_app() {
        let actuator = actuator(FakeInjector {
            frontmost: Some(AppTarget::new("9", "terminal")),
            ..Default::default()
        });
        let feedback = actuator.paste(None).await;

        assert!(feedback.is_success());
        assert_eq!(actuator.injector.calls(), vec!["frontmost", "paste"]);
    }

    #[tokio::test]
    async fn falls_back_when_activation_fails() {
        let actuator = actuator(FakeInjector {
            activate_error: Some(PasteError::Failed("window gone".to_string())),
            ..Default::default()
        });
        let feedback = actuator.paste(Some(AppTarget::new("42", "editor"))).await;

        assert_eq!(feedback.outcome, PasteOutcome::Pasted);
        assert_eq!(actuator.injector.calls(), vec!["activate editor", "paste"]);
    }

    #[tokio::test]
    async fn permission_denied_is_reported() {
        let actuator = actuator(FakeInjector {
            paste_error: Some(PasteError::PermissionDenied(
                "grant accessibility access".to_string(),
            )),
            ..Default::default()
        });
        let feedback = actuator.paste(Some(AppTarget::new("42", "editor"))).await;

        assert_eq!(feedback.outcome, PasteOutcome::Failed);
        assert!(feedback.message.contains("accessibility"));
    }

    #[tokio::test]
    async fn hung_injection_times_out() {
        let actuator = actuator(FakeInjector {
            paste_hangs: true,
            ..Default::default()
        });
        let feedback = actuator.paste(Some(AppTarget::new("42", "editor"))).await;

        assert_eq!(feedback.outcome, PasteOutcome::Failed);
        assert!(feedback.message.contains("timed out"));
    }

    #[test]
    fn feedback_serializes_lowercase_outcome() {
        let feedback = PasteFeedback::new(PasteOutcome::Skipped, "nope", None);
        let json = serde_json::to_value(&feedback).unwrap();
        assert_eq!(json["outcome"], "skipped");
        assert!(json.get("target").is_none());
    }
}
