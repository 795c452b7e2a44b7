//! Change detection against the last-seen clipboard state

use super::classifier::{classify_textual, Classification};
use super::content::{ClipboardSnapshot, ClipboardWrite};

/// Last-seen value per content type.
///
/// Text and HTML are tracked in separate slots so an HTML copy followed by
/// its own plain-text representation is not reported twice.
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector {
    last_text: Option<String>,
    last_html: Option<String>,
    last_image_hash: Option<String>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare a fresh snapshot with the last-seen state.
    ///
    /// Returns the content to record, if any, and updates the slots.
    pub fn detect<'a>(&mut self, snapshot: &'a ClipboardSnapshot) -> Option<Classification<'a>> {
        match snapshot.present_image() {
            Some(image) => {
                let digest = image.digest();
                if self.last_image_hash.as_deref() != Some(digest.as_str()) {
                    self.last_image_hash = Some(digest);
                    // One copy may carry an image plus a caption; absorb the rest
                    self.last_text = snapshot.text.clone();
                    self.last_html = snapshot.html.clone();
                    return Some(Classification::Image(image));
                }
            }
            None => self.last_image_hash = None,
        }

        match classify_textual(snapshot) {
            Classification::Html(html) => {
                if self.last_html.as_deref() == Some(html) {
                    return None;
                }
                self.last_html = Some(html.to_string());
                self.last_text = snapshot.text.clone();
                Some(Classification::Html(html))
            }
            Classification::Text(text) => {
                if text.is_empty() || self.last_text.as_deref() == Some(text) {
                    return None;
                }
                self.last_text = Some(text.to_string());
                self.last_html = None;
                Some(Classification::Text(text))
            }
            Classification::Image(_) => None,
        }
    }

    /// Record content the application itself placed on the clipboard
    pub fn remember_written(&mut self, write: &ClipboardWrite) {
        match write {
            ClipboardWrite::Text(text) => {
                self.last_text = Some(text.clone());
                self.last_html = None;
            }
            ClipboardWrite::Html { html, alt_text } => {
                self.last_html = Some(html.clone());
                self.last_text = Some(alt_text.clone());
            }
            ClipboardWrite::Image(image) => {
                self.last_image_hash = Some(image.digest());
                self.last_text = None;
                self.last_html = None;
            }
        }
    }
}
