//! Push notifications to history and paste-feedback subscribers

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::domain::clipboard::ClipboardItem;

use super::paste::PasteFeedback;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// One event stream with its registered callbacks
struct Topic<T: ?Sized> {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(u64, Callback<T>)>>,
}

impl<T: ?Sized + 'static> Topic<T> {
    fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn subscribe(self: &Arc<Self>, callback: Callback<T>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id, callback));

        let topic: Weak<Self> = Arc::downgrade(self);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(topic) = topic.upgrade() {
                    topic.remove(id);
                }
            })),
        }
    }

    fn remove(&self, id: u64) {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|(sub, _)| *sub != id);
    }

    fn publish(&self, event: &T) {
        // Callbacks run outside the lock so they may unsubscribe themselves
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();

        for callback in callbacks {
            callback(event);
        }
    }

    fn len(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

/// Handle returned by a subscribe call.
///
/// Dropping the handle unsubscribes; [`Subscription::unsubscribe`] does the
/// same explicitly.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Fan-out point for history snapshots and paste feedback
#[derive(Clone)]
pub struct EventHub {
    history: Arc<Topic<[ClipboardItem]>>,
    paste_feedback: Arc<Topic<PasteFeedback>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self {
            history: Arc::new(Topic::new()),
            paste_feedback: Arc::new(Topic::new()),
        }
    }

    /// Receive the full newest-first history after every mutation
    pub fn subscribe_history<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&[ClipboardItem]) + Send + Sync + 'static,
    {
        self.history.subscribe(Arc::new(callback))
    }

    /// Receive the outcome of every auto-paste attempt
    pub fn subscribe_paste_feedback<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PasteFeedback) + Send + Sync + 'static,
    {
        self.paste_feedback.subscribe(Arc::new(callback))
    }

    pub fn publish_history(&self, items: &[ClipboardItem]) {
        self.history.publish(items);
    }

    pub fn publish_paste_feedback(&self, feedback: &PasteFeedback) {
        self.paste_feedback.publish(feedback);
    }

    pub fn history_subscribers(&self) -> usize {
        self.history.len()
    }

    pub fn paste_feedback_subscribers(&self) -> usize {
        self.paste_feedback.len()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}
