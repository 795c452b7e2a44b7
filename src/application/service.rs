//! Clipboard history use case

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::clipboard::{
    ChangeDetector, Classification, ClipboardItem, ClipboardWrite, DedupPolicy, History,
    IdGenerator, ItemKind,
};
use crate::domain::config::AppConfig;
use crate::domain::error::ImageError;
use crate::domain::settings::Settings;

use super::events::{EventHub, Subscription};
use super::guard::InternalWriteGuard;
use super::paste::{PasteActuator, PasteFeedback};
use super::ports::{
    AppTarget, ClipboardError, PasteInjector, PersistenceStore, PickerView, SystemClipboard,
};

/// Errors from the clipboard service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("No history item with id {0}")]
    UnknownItem(u64),
}

/// Tunables for the service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_history: usize,
    pub dedup_window: usize,
    pub guard_delay: Duration,
    pub paste_delay: Duration,
    pub paste_timeout: Duration,
}

impl ServiceConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_history: config.max_history_or_default(),
            dedup_window: config.dedup_window_or_default(),
            guard_delay: config.guard_delay_or_default(),
            paste_delay: config.paste_delay_or_default(),
            paste_timeout: config.paste_timeout_or_default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::empty())
    }
}

/// What a single poll tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Monitoring is paused
    Paused,
    /// An internal write is in flight
    Guarded,
    /// Nothing new on the clipboard
    Unchanged,
    /// New content matched a recent entry
    Suppressed,
    /// A new entry was recorded
    Inserted(ClipboardItem),
}

/// Runtime status reported to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub monitoring: bool,
    pub history_len: usize,
    pub max_history: usize,
    pub auto_paste: bool,
    pub picker_visible: bool,
    pub paste_tool: String,
}

/// State shared by the poll loop and restores
struct MonitorState {
    detector: ChangeDetector,
    history: History,
    ids: IdGenerator,
    settings: Settings,
    previous_app: Option<AppTarget>,
}

/// Clipboard history service.
///
/// Owns the monitoring state; the poll loop and every user operation go
/// through one async mutex so only one of them mutates at a time.
pub struct ClipboardService<C, P, S, V>
where
    C: SystemClipboard,
    P: PasteInjector + 'static,
    S: PersistenceStore,
    V: PickerView,
{
    clipboard: C,
    store: S,
    picker: V,
    actuator: Arc<PasteActuator<P>>,
    state: Mutex<MonitorState>,
    guard: Arc<InternalWriteGuard>,
    monitoring: AtomicBool,
    events: EventHub,
    dedup: DedupPolicy,
    config: ServiceConfig,
}

impl<C, P, S, V> ClipboardService<C, P, S, V>
where
    C: SystemClipboard,
    P: PasteInjector + 'static,
    S: PersistenceStore,
    V: PickerView,
{
    /// Create the service, loading persisted history and settings.
    ///
    /// Unreadable storage is logged and replaced by empty history and
    /// default settings.
    pub async fn load(
        clipboard: C,
        injector: P,
        store: S,
        picker: V,
        config: ServiceConfig,
    ) -> Self {
        let items = store.load_history().await.unwrap_or_else(|e| {
            warn!(error = %e, "could not load history, starting empty");
            Vec::new()
        });
        let settings = store.load_settings().await.unwrap_or_else(|e| {
            warn!(error = %e, "could not load settings, using defaults");
            Settings::default()
        });

        let history = History::from_items(items, config.max_history);
        let ids = IdGenerator::seeded(history.max_id().unwrap_or_default());
        info!(
            items = history.len(),
            auto_paste = settings.auto_paste,
            "history loaded"
        );

        Self {
            clipboard,
            store,
            picker,
            actuator: Arc::new(PasteActuator::new(injector, config.paste_timeout)),
            state: Mutex::new(MonitorState {
                detector: ChangeDetector::new(),
                history,
                ids,
                settings,
                previous_app: None,
            }),
            guard: Arc::new(InternalWriteGuard::new()),
            monitoring: AtomicBool::new(true),
            events: EventHub::new(),
            dedup: DedupPolicy::new(config.dedup_window),
            config,
        }
    }

    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Run one monitoring tick: read, classify, detect, dedup, record.
    pub async fn poll_once(&self) -> Result<PollOutcome, ServiceError> {
        if !self.is_monitoring() {
            return Ok(PollOutcome::Paused);
        }
        if self.guard.is_engaged() {
            return Ok(PollOutcome::Guarded);
        }

        let mut state = self.state.lock().await;
        // A restore may have engaged the guard while we waited for the lock
        if self.guard.is_engaged() {
            return Ok(PollOutcome::Guarded);
        }

        let snapshot = self.clipboard.read().await?;
        let (kind, content) = match state.detector.detect(&snapshot) {
            None => return Ok(PollOutcome::Unchanged),
            Some(Classification::Image(image)) => (ItemKind::Image, image.to_data_url()?),
            Some(Classification::Html(html)) => (ItemKind::Html, html.to_string()),
            Some(Classification::Text(text)) => (ItemKind::Text, text.to_string()),
        };

        if self
            .dedup
            .is_duplicate(state.history.items(), kind, &content)
        {
            debug!(%kind, "suppressed recent duplicate");
            return Ok(PollOutcome::Suppressed);
        }

        let item = ClipboardItem::new(state.ids.next_id(), kind, content);
        state.history.insert(item.clone());
        let items = state.history.items().to_vec();
        self.persist_history(&items).await;
        drop(state);

        debug!(id = item.id(), %kind, "recorded clipboard item");
        self.events.publish_history(&items);
        Ok(PollOutcome::Inserted(item))
    }

    /// Ordered snapshot of the history
    pub async fn list(&self) -> Vec<ClipboardItem> {
        self.state.lock().await.history.items().to_vec()
    }

    /// Restore the item with `id`
    pub async fn copy_by_id(&self, id: u64) -> Result<ClipboardItem, ServiceError> {
        let item = self
            .state
            .lock()
            .await
            .history
            .find(id)
            .cloned()
            .ok_or(ServiceError::UnknownItem(id))?;
        self.copy_item(&item).await?;
        Ok(item)
    }

    /// Write an item back to the clipboard, hide the picker, and
    /// auto-paste into the previously focused app when enabled.
    pub async fn copy_item(&self, item: &ClipboardItem) -> Result<(), ServiceError> {
        let write = ClipboardWrite::from_item(item)?;

        let (auto_paste, previous) = {
            let mut state = self.state.lock().await;
            let generation = self.guard.engage();
            if let Err(e) = self.clipboard.write(&write).await {
                self.guard.release(generation);
                return Err(e.into());
            }
            state.detector.remember_written(&write);
            self.release_guard_later(generation);
            (state.settings.auto_paste, state.previous_app.clone())
        };
        debug!(id = item.id(), kind = %item.kind(), "restored item to clipboard");

        self.picker.hide();

        if auto_paste {
            let actuator = Arc::clone(&self.actuator);
            let events = self.events.clone();
            let delay = self.config.paste_delay;
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let feedback = actuator.paste(previous).await;
                debug!(outcome = %feedback.outcome, "paste attempt finished");
                events.publish_paste_feedback(&feedback);
            });
        }

        Ok(())
    }

    /// Remove one item; an unknown id leaves history untouched
    pub async fn delete_item(&self, id: u64) -> Vec<ClipboardItem> {
        let mut state = self.state.lock().await;
        if !state.history.delete(id) {
            debug!(id, "delete of unknown id ignored");
            return state.history.items().to_vec();
        }
        let items = state.history.items().to_vec();
        self.persist_history(&items).await;
        drop(state);

        self.events.publish_history(&items);
        items
    }

    pub async fn clear_history(&self) -> Vec<ClipboardItem> {
        let mut state = self.state.lock().await;
        state.history.clear();
        self.persist_history(&[]).await;
        drop(state);

        self.events.publish_history(&[]);
        Vec::new()
    }

    /// Record the focused application, then show the picker
    pub async fn show_picker(&self) {
        let previous = self.actuator.frontmost().await;
        debug!(previous = ?previous.as_ref().map(|a| a.name.as_str()), "showing picker");
        self.state.lock().await.previous_app = previous;
        self.picker.show();
    }

    pub fn hide_picker(&self) {
        self.picker.hide();
    }

    pub async fn auto_paste(&self) -> bool {
        self.state.lock().await.settings.auto_paste
    }

    /// Change and persist the auto-paste setting, echoing the new value
    pub async fn set_auto_paste(&self, enabled: bool) -> bool {
        let mut state = self.state.lock().await;
        state.settings.auto_paste = enabled;
        if let Err(e) = self.store.save_settings(&state.settings).await {
            warn!(error = %e, "failed to persist settings");
        }
        enabled
    }

    pub fn pause(&self) {
        if self.monitoring.swap(false, Ordering::SeqCst) {
            info!("clipboard monitoring paused");
        }
    }

    pub fn resume(&self) {
        if !self.monitoring.swap(true, Ordering::SeqCst) {
            info!("clipboard monitoring resumed");
        }
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring.load(Ordering::SeqCst)
    }

    pub async fn status(&self) -> ServiceStatus {
        let state = self.state.lock().await;
        ServiceStatus {
            monitoring: self.is_monitoring(),
            history_len: state.history.len(),
            max_history: state.history.cap(),
            auto_paste: state.settings.auto_paste,
            picker_visible: self.picker.is_visible(),
            paste_tool: self.actuator.injector_name().to_string(),
        }
    }

    pub fn subscribe_history<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&[ClipboardItem]) + Send + Sync + 'static,
    {
        self.events.subscribe_history(callback)
    }

    pub fn subscribe_paste_feedback<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PasteFeedback) + Send + Sync + 'static,
    {
        self.events.subscribe_paste_feedback(callback)
    }

    fn release_guard_later(&self, generation: u64) {
        let guard = Arc::clone(&self.guard);
        let delay = self.config.guard_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            guard.release(generation);
        });
    }

    async fn persist_history(&self, items: &[ClipboardItem]) {
        if let Err(e) = self.store.save_history(items).await {
            warn!(error = %e, "failed to persist history");
        }
    }
}
