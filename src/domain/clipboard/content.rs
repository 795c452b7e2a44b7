//! Clipboard payload value objects

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use sha2::{Digest, Sha256};

use crate::domain::error::ImageError;

use super::item::{strip_tags, ClipboardItem, ItemKind};

/// Prefix of the self-describing image payload
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Raw RGBA image as exposed by the OS clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub width: usize,
    pub height: usize,
    pub bytes: Vec<u8>,
}

impl RawImage {
    /// Create an RGBA image, checking the buffer matches the dimensions
    pub fn new(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self, ImageError> {
        let expected = width.checked_mul(height).and_then(|px| px.checked_mul(4));
        if expected != Some(bytes.len()) {
            return Err(ImageError::InvalidDimensions {
                width,
                height,
                len: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty() || self.width == 0 || self.height == 0
    }

    /// SHA-256 of the raw pixel bytes, hex encoded
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }

    /// Encode as a PNG data URL
    pub fn to_data_url(&self) -> Result<String, ImageError> {
        let width = u32::try_from(self.width).map_err(|e| ImageError::Encode(e.to_string()))?;
        let height = u32::try_from(self.height).map_err(|e| ImageError::Encode(e.to_string()))?;

        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&self.bytes, width, height, ExtendedColorType::Rgba8)
            .map_err(|e| ImageError::Encode(e.to_string()))?;

        Ok(format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(png)))
    }

    /// Decode a PNG data URL back into RGBA pixels
    pub fn from_data_url(url: &str) -> Result<Self, ImageError> {
        let encoded = url
            .strip_prefix(PNG_DATA_URL_PREFIX)
            .ok_or(ImageError::InvalidDataUrl)?;
        let png = STANDARD
            .decode(encoded)
            .map_err(|e| ImageError::Decode(e.to_string()))?;

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .map_err(|e| ImageError::Decode(e.to_string()))?
            .into_rgba8();
        let (width, height) = decoded.dimensions();

        Self::new(width as usize, height as usize, decoded.into_raw())
    }
}

/// One sample of every representation currently on the clipboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    pub text: Option<String>,
    pub html: Option<String>,
    pub image: Option<RawImage>,
}

impl ClipboardSnapshot {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn html(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            html: Some(html.into()),
            image: None,
        }
    }

    pub fn image(image: RawImage) -> Self {
        Self {
            image: Some(image),
            ..Default::default()
        }
    }

    /// Image representation, if present and non-empty
    pub fn present_image(&self) -> Option<&RawImage> {
        self.image.as_ref().filter(|img| !img.is_empty())
    }
}

/// Payload the application writes back to the OS clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardWrite {
    Text(String),
    Html { html: String, alt_text: String },
    Image(RawImage),
}

impl ClipboardWrite {
    /// Build the clipboard payload that restores a history item
    pub fn from_item(item: &ClipboardItem) -> Result<Self, ImageError> {
        match item.kind() {
            ItemKind::Text => Ok(Self::Text(item.content().to_string())),
            ItemKind::Html => Ok(Self::Html {
                html: item.content().to_string(),
                alt_text: strip_tags(item.content()).trim().to_string(),
            }),
            ItemKind::Image => RawImage::from_data_url(item.content()).map(Self::Image),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Text(_) => ItemKind::Text,
            Self::Html { .. } => ItemKind::Html,
            Self::Image(_) => ItemKind::Image,
        }
    }
}
