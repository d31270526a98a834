//! View model for the per-feature result galleries.
//!
//! Each backend feature lists its history under a slightly different key
//! (`processed_url`, `enhanced_url`, `restored_url`, or nothing for
//! generated images); the conversions below fold them all into one shape
//! the gallery component can render.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::{EnhanceEntry, GeneratedEntry, PairEntry, RestoreEntry};

/// One gallery row: an original and, once processing has completed, the
/// processed counterpart.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub original_url: String,
    pub processed_url: Option<String>,
}

impl GalleryItem {
    /// Whether processing has completed for this entry.
    #[must_use]
    pub fn complete(&self) -> bool {
        self.processed_url.is_some()
    }
}

impl From<PairEntry> for GalleryItem {
    fn from(entry: PairEntry) -> Self {
        Self { original_url: entry.original_url, processed_url: entry.processed_url }
    }
}

impl From<EnhanceEntry> for GalleryItem {
    fn from(entry: EnhanceEntry) -> Self {
        Self { original_url: entry.original_url, processed_url: entry.enhanced_url }
    }
}

impl From<RestoreEntry> for GalleryItem {
    fn from(entry: RestoreEntry) -> Self {
        Self { original_url: entry.original_url, processed_url: entry.restored_url }
    }
}

impl From<GeneratedEntry> for GalleryItem {
    fn from(entry: GeneratedEntry) -> Self {
        Self { original_url: entry.original_url, processed_url: None }
    }
}
