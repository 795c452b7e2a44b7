//! Picker window port interface

/// Port for the history picker UI surface
pub trait PickerView: Send + Sync {
    fn show(&self);

    fn hide(&self);

    fn is_visible(&self) -> bool;
}

impl PickerView for Box<dyn PickerView> {
    fn show(&self) {
        self.as_ref().show()
    }

    fn hide(&self) {
        self.as_ref().hide()
    }

    fn is_visible(&self) -> bool {
        self.as_ref().is_visible()
    }
}
