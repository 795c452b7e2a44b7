//! Picker view adapters
//!
//! The daemon has no window of its own; visibility is tracked so clients
//! (and a future overlay) can query and drive it.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::application::ports::PickerView;

/// Picker that only tracks whether it is logically shown
#[derive(Debug, Default)]
pub struct HeadlessPicker {
    visible: AtomicBool,
}

impl HeadlessPicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PickerView for HeadlessPicker {
    fn show(&self) {
        if !self.visible.swap(true, Ordering::SeqCst) {
            debug!("picker shown");
        }
    }

    fn hide(&self) {
        if self.visible.swap(false, Ordering::SeqCst) {
            debug!("picker hidden");
        }
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}
