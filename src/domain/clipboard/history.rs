//! Ordered, capped clipboard history

use super::item::ClipboardItem;

/// Default number of retained entries
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Newest-first collection of clipboard items with a fixed cap
#[derive(Debug, Clone)]
pub struct History {
    items: Vec<ClipboardItem>,
    cap: usize,
}

impl History {
    pub fn new(cap: usize) -> Self {
        Self {
            items: Vec::new(),
            cap,
        }
    }

    /// Rebuild from persisted items, enforcing the cap
    pub fn from_items(mut items: Vec<ClipboardItem>, cap: usize) -> Self {
        items.truncate(cap);
        Self { items, cap }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ClipboardItem] {
        &self.items
    }

    pub fn find(&self, id: u64) -> Option<&ClipboardItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Highest id present, used to seed the id generator
    pub fn max_id(&self) -> Option<u64> {
        self.items.iter().map(ClipboardItem::id).max()
    }

    /// Prepend an item, evicting the oldest entries beyond the cap
    pub fn insert(&mut self, item: ClipboardItem) {
        self.items.insert(0, item);
        self.items.truncate(self.cap);
    }

    /// Remove the item with `id`. Returns false when nothing matched.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
