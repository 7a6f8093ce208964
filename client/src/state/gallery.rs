//! Gallery state owned by the upload panel.
//!
//! DESIGN
//! ======
//! The list is newest first. Entries come from two places that can race: the
//! bucket listing fetched on mount and uploads finishing in this page view.
//! `merge_listing` reconciles them so a finished upload is never dropped and
//! an image deleted here never comes back from a stale listing.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::HashSet;

/// One stored image as shown in the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    /// Storage key, `{timestamp_millis}-{original_name}`.
    pub id: String,
    pub url: String,
    /// Original file name; not unique.
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub images: Vec<UploadedImage>,
    /// Uploads issued but not yet answered.
    pub pending_uploads: usize,
    pub is_dragging: bool,
    /// Initial listing in flight.
    pub loading: bool,
    removed: HashSet<String>,
}

impl GalleryState {
    /// Whether at least one upload is outstanding.
    pub fn uploading(&self) -> bool {
        self.pending_uploads > 0
    }

    pub fn begin_upload(&mut self) {
        self.pending_uploads += 1;
    }

    pub fn finish_upload(&mut self) {
        self.pending_uploads = self.pending_uploads.saturating_sub(1);
    }

    /// Put `image` at the front, replacing any entry with the same id.
    pub fn prepend(&mut self, image: UploadedImage) {
        self.removed.remove(&image.id);
        self.images.retain(|existing| existing.id != image.id);
        self.images.insert(0, image);
    }

    /// Drop the entry with `id`. Returns whether one was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.removed.insert(id.to_owned());
        let before = self.images.len();
        self.images.retain(|image| image.id != id);
        self.images.len() != before
    }

    /// Replace the list with a fresh bucket listing (newest first).
    ///
    /// Entries already shown but missing from the listing are uploads that
    /// finished after the listing was taken; they stay on top. Ids removed in
    /// this view are filtered out of the listing.
    pub fn merge_listing(&mut self, listed: Vec<UploadedImage>) {
        let listed_ids: HashSet<&str> = listed.iter().map(|image| image.id.as_str()).collect();
        let mut merged: Vec<UploadedImage> = self
            .images
            .iter()
            .filter(|image| !listed_ids.contains(image.id.as_str()))
            .cloned()
            .collect();
        merged.extend(listed.into_iter().filter(|image| !self.removed.contains(&image.id)));
        self.images = merged;
        self.loading = false;
    }

    pub fn drag_enter(&mut self) {
        self.is_dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    pub fn drop_files(&mut self) {
        self.is_dragging = false;
    }
}
