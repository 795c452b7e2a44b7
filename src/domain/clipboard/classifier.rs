//! Content classification for clipboard snapshots

use once_cell::sync::Lazy;
use regex::Regex;

use super::content::{ClipboardSnapshot, RawImage};
use super::item::ItemKind;

/// HTML with this many tags or fewer is treated as a wrapper, not content
pub const TRIVIAL_HTML_MAX_TAGS: usize = 2;

static TAG_INSTANCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Result of classifying a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Image(&'a RawImage),
    Html(&'a str),
    Text(&'a str),
}

impl Classification<'_> {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Image(_) => ItemKind::Image,
            Self::Html(_) => ItemKind::Html,
            Self::Text(_) => ItemKind::Text,
        }
    }
}

/// Classify a snapshot. Image wins over any text or HTML also present.
pub fn classify(snapshot: &ClipboardSnapshot) -> Classification<'_> {
    match snapshot.present_image() {
        Some(image) => Classification::Image(image),
        None => classify_textual(snapshot),
    }
}

/// Classify only the textual representations of a snapshot
pub fn classify_textual(snapshot: &ClipboardSnapshot) -> Classification<'_> {
    let text = snapshot.text.as_deref().unwrap_or_default();
    match snapshot.html.as_deref() {
        Some(html) if is_real_html(html, text) => Classification::Html(html),
        _ => Classification::Text(text),
    }
}

/// Check whether an HTML representation carries structure worth keeping.
///
/// Some applications attach a trivial wrapper (a lone `<meta>` plus `<p>`) to
/// every plain-text copy; those are rejected.
pub fn is_real_html(html: &str, text: &str) -> bool {
    let trimmed = html.trim();
    if trimmed.is_empty() || trimmed == text.trim() {
        return false;
    }
    if !(trimmed.contains('<') && trimmed.contains('>')) {
        return false;
    }
    TAG_INSTANCE.find_iter(trimmed).count() > TRIVIAL_HTML_MAX_TAGS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> RawImage {
        RawImage::new(1, 1, vec![1, 2, 3, 255]).unwrap()
    }

    #[test]
    fn image_wins_over_text_and_html() {
        let snapshot = ClipboardSnapshot {
            text: Some("caption".to_string()),
            html: Some("<div><p><img src=x></p></div>".to_string()),
            image: Some(pixel()),
        };
        assert_eq!(classify(&snapshot).kind(), ItemKind::Image);
    }

    #[test]
    fn empty_image_falls_back_to_text() {
        let snapshot = ClipboardSnapshot {
            text: Some("plain".to_string()),
            html: None,
            image: Some(RawImage::new(0, 0, Vec::new()).unwrap()),
        };
        assert_eq!(classify(&snapshot), Classification::Text("plain"));
    }

    #[test]
    fn structured_html_is_html() {
        let html = "<ul><li>one</li><li>two</li></ul>";
        let snapshot = ClipboardSnapshot::html(html, "one\ntwo");
        assert_eq!(classify(&snapshot), Classification::Html(html));
    }

    #[test]
    fn trivial_wrapper_is_text() {
        let snapshot = ClipboardSnapshot::html("<meta charset='utf-8'><p>hi", "hi");
        assert_eq!(classify(&snapshot), Classification::Text("hi"));
    }

    #[test]
    fn two_tags_is_still_text() {
        let snapshot = ClipboardSnapshot::html("<b>bold</b>", "bold");
        assert_eq!(classify(&snapshot), Classification::Text("bold"));
    }

    #[test]
    fn html_identical_to_text_is_text() {
        let markup = "<a><b><c></c></b></a>";
        let snapshot = ClipboardSnapshot::html(markup, markup);
        assert_eq!(classify(&snapshot), Classification::Text(markup));
    }

    #[test]
    fn blank_html_is_text() {
        let snapshot = ClipboardSnapshot::html("   ", "words");
        assert_eq!(classify(&snapshot), Classification::Text("words"));
    }

    #[test]
    fn html_without_delimiters_is_text() {
        assert!(!is_real_html("just words here", "other"));
    }

    #[test]
    fn missing_text_classifies_as_empty_text() {
        let snapshot = ClipboardSnapshot::default();
        assert_eq!(classify(&snapshot), Classification::Text(""));
    }
}
