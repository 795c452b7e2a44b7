//! Near-duplicate suppression

use super::item::{ClipboardItem, ItemKind};

/// Number of most recent entries checked by default
pub const DEFAULT_DEDUP_WINDOW: usize = 3;

/// Suppresses a candidate equal to one of the most recent entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupPolicy {
    window: usize,
}

impl DedupPolicy {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Check a candidate against the newest-first history
    pub fn is_duplicate(&self, recent: &[ClipboardItem], kind: ItemKind, content: &str) -> bool {
        recent
            .iter()
            .take(self.window)
            .any(|item| item.same_payload(kind, content))
    }
}

impl Default for DedupPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DEDUP_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(contents: &[&str]) -> Vec<ClipboardItem> {
        contents
            .iter()
            .enumerate()
            .map(|(i, c)| ClipboardItem::new(100 - i as u64, ItemKind::Text, *c))
            .collect()
    }

    #[test]
    fn suppresses_within_window() {
        let policy = DedupPolicy::default();
        let recent = history(&["c", "b", "a"]);
        assert!(policy.is_duplicate(&recent, ItemKind::Text, "a"));
        assert!(policy.is_duplicate(&recent, ItemKind::Text, "c"));
    }

    #[test]
    fn allows_outside_window() {
        let policy = DedupPolicy::default();
        let recent = history(&["d", "c", "b", "a"]);
        assert!(!policy.is_duplicate(&recent, ItemKind::Text, "a"));
    }

    #[test]
    fn kind_is_part_of_identity() {
        let policy = DedupPolicy::default();
        let recent = history(&["<b>x</b>"]);
        assert!(!policy.is_duplicate(&recent, ItemKind::Html, "<b>x</b>"));
    }

    #[test]
    fn zero_window_never_suppresses() {
        let policy = DedupPolicy::new(0);
        assert!(!policy.is_duplicate(&history(&["a"]), ItemKind::Text, "a"));
    }
}
