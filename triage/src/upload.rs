//! The single image file staged for analysis.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// `accept` filter for the file picker. Advisory only; nothing enforces it.
pub const ACCEPT: &str = "image/*,.dcm";

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file picked by the user, with its bytes read into memory.
///
/// Bytes are shared so cloning workflow state stays cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
    preview_url: String,
}

impl SelectedFile {
    /// Stage a file. A blank `mime` is guessed from the file name.
    #[must_use]
    pub fn new(name: impl Into<String>, mime: &str, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = if mime.trim().is_empty() { guess_mime(&name) } else { mime.trim() }.to_owned();
        let preview_url = data_url(&mime, &bytes);
        Self { name, mime, bytes: bytes.into(), preview_url }
    }

    /// `data:` URL of the file contents for an `<img>` preview.
    #[must_use]
    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode `bytes` as a base64 `data:` URL.
#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Guess a MIME type from a file extension.
#[must_use]
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("dcm") => "application/dicom",
        _ => FALLBACK_MIME,
    }
}

/// Whether a file would pass the picker's [`ACCEPT`] filter.
#[must_use]
pub fn matches_accept(name: &str, mime: &str) -> bool {
    mime.starts_with("image/") || name.to_ascii_lowercase().ends_with(".dcm")
}
