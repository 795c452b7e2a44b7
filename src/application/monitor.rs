//! Poll loop driving the clipboard service

use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use super::ports::{PasteInjector, PersistenceStore, PickerView, SystemClipboard};
use super::service::{ClipboardService, PollOutcome, ServiceError};

/// Failures tolerated before the poll period starts growing
pub const MAX_CONSECUTIVE_ERRORS: u32 = 10;

/// Upper bound on the poll period while backing off
pub const MAX_BACKOFF: Duration = Duration::from_secs(5);

const MAX_BACKOFF_DOUBLINGS: u32 = 4;

/// Poll period bookkeeping across consecutive read failures
#[derive(Debug, Clone)]
pub struct PollBackoff {
    base: Duration,
    consecutive_errors: u32,
}

impl PollBackoff {
    pub fn new(base: Duration) -> Self {
        Self {
            base,
            consecutive_errors: 0,
        }
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.consecutive_errors
    }

    pub fn record_success(&mut self) {
        if self.consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
            info!(
                errors = self.consecutive_errors,
                "clipboard readable again, restoring poll interval"
            );
        }
        self.consecutive_errors = 0;
    }

    /// Count a failure. Returns true when it should be logged.
    pub fn record_failure(&mut self) -> bool {
        self.consecutive_errors = self.consecutive_errors.saturating_add(1);
        self.consecutive_errors == 1 || self.consecutive_errors % 10 == 0
    }

    /// Delay before the next tick
    pub fn interval(&self) -> Duration {
        if self.consecutive_errors < MAX_CONSECUTIVE_ERRORS {
            return self.base;
        }
        let doublings = (self.consecutive_errors - MAX_CONSECUTIVE_ERRORS).min(MAX_BACKOFF_DOUBLINGS);
        self.base
            .saturating_mul(2u32.pow(doublings))
            .min(MAX_BACKOFF.max(self.base))
    }
}

/// Poll until `shutdown` flips to true
pub async fn run_monitor<C, P, S, V>(
    service: &ClipboardService<C, P, S, V>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) where
    C: SystemClipboard,
    P: PasteInjector + 'static,
    S: PersistenceStore,
    V: PickerView,
{
    let mut backoff = PollBackoff::new(interval);
    info!(interval_ms = interval.as_millis() as u64, "clipboard monitor started");

    loop {
        match service.poll_once().await {
            Ok(PollOutcome::Inserted(item)) => {
                backoff.record_success();
                info!(id = item.id(), kind = %item.kind(), "new clipboard entry");
            }
            Ok(_) => backoff.record_success(),
            Err(ServiceError::Clipboard(e)) => {
                if backoff.record_failure() {
                    warn!(
                        error = %e,
                        errors = backoff.consecutive_errors(),
                        "failed to read clipboard"
                    );
                }
                if backoff.consecutive_errors() == MAX_CONSECUTIVE_ERRORS {
                    warn!("too many consecutive clipboard errors, reducing poll frequency");
                }
            }
            Err(e) => warn!(error = %e, "failed to record clipboard content"),
        }

        tokio::select! {
            _ = tokio::time::sleep(backoff.interval()) => {}
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("clipboard monitor stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_interval_until_threshold() {
        let mut backoff = PollBackoff::new(Duration::from_millis(500));
        for _ in 0..9 {
            backoff.record_failure();
        }
        assert_eq!(backoff.interval(), Duration::from_millis(500));
    }

    #[test]
    fn doubles_then_caps_at_five_seconds() {
        let mut backoff = PollBackoff::new(Duration::from_millis(500));
        let mut intervals = Vec::new();
        for _ in 0..15 {
            backoff.record_failure();
            intervals.push(backoff.interval().as_millis());
        }
        assert_eq!(&intervals[9..], &[500, 1000, 2000, 4000, 5000, 5000]);
    }

    #[test]
    fn success_resets() {
        let mut backoff = PollBackoff::new(Duration::from_millis(500));
        for _ in 0..12 {
            backoff.record_failure();
        }
        backoff.record_success();
        assert_eq!(backoff.consecutive_errors(), 0);
        assert_eq!(backoff.interval(), Duration::from_millis(500));
    }

    #[test]
    fn logs_first_and_every_tenth_failure() {
        let mut backoff = PollBackoff::new(Duration::from_millis(500));
        let logged: Vec<u32> = (1..=20)
            .filter(|_| backoff.record_failure())
            .collect();
        assert_eq!(logged, vec![1, 10, 20]);
    }
}
