//! Upload panel controller: upload, delete, and list images in the bucket.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the gallery shown once the session gate lets the panel render.
//! Every method issues at most one storage call per file and writes the
//! outcome into [`GalleryState`] and [`ToastState`] through a [`Store`], so
//! the same code runs against reactive signals in the browser and plain
//! mutex cells in tests.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never propagate. They become an error toast plus a
//! console log line, and the gallery is left as it was. Nothing is retried.

#[cfg(test)]
#[path = "uploads_test.rs"]
mod uploads_test;

use std::sync::Arc;

use backend::{ListOptions, StorageProvider};
use futures::future::join_all;

use crate::services::clock::Clock;
use crate::state::gallery::{GalleryState, UploadedImage};
use crate::state::store::Store;
use crate::state::toast::ToastState;
use crate::util::file::{self, PickedFile};

pub const INVALID_TYPE_MESSAGE: &str = "Please select an image file.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading image";
pub const DELETE_FAILED_MESSAGE: &str = "Error deleting image";
pub const LIST_FAILED_MESSAGE: &str = "Could not load your images.";
pub const UPLOADED_MESSAGE: &str = "Image uploaded successfully!";
pub const DELETED_MESSAGE: &str = "Image deleted successfully!";

/// Result of a single `upload_image` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Not an image; the provider was not called.
    Rejected,
    Uploaded(UploadedImage),
    Failed,
}

#[derive(Clone)]
pub struct UploadService<G, T> {
    storage: Arc<dyn StorageProvider>,
    bucket: String,
    clock: Arc<dyn Clock>,
    gallery: G,
    toasts: T,
}

impl<G, T> UploadService<G, T>
where
    G: Store<GalleryState>,
    T: Store<ToastState>,
{
    pub fn new(
        storage: Arc<dyn StorageProvider>,
        bucket: impl Into<String>,
        clock: Arc<dyn Clock>,
        gallery: G,
        toasts: T,
    ) -> Self {
        Self { storage, bucket: bucket.into(), clock, gallery, toasts }
    }

    /// Load the bucket listing, newest first, into the gallery.
    pub async fn refresh(&self) {
        self.gallery.modify(|g| g.loading = true);
        match self.storage.list(&self.bucket, &ListOptions::default()).await {
            Ok(objects) => {
                let listed: Vec<UploadedImage> = objects
                    .into_iter()
                    .map(|object| UploadedImage {
                        url: self.storage.public_url(&self.bucket, &object.name),
                        name: file::display_name(&object.name).to_owned(),
                        id: object.name,
                    })
                    .collect();
                log::debug!("listed {} images in {}", listed.len(), self.bucket);
                self.gallery.modify(|g| g.merge_listing(listed));
            }
            Err(e) => {
                log::error!("listing bucket {} failed: {e}", self.bucket);
                self.gallery.modify(|g| g.loading = false);
                self.toasts.modify(|t| {
                    t.error(LIST_FAILED_MESSAGE);
                });
            }
        }
    }

    /// Upload one picked file and prepend it to the gallery on success.
    pub async fn upload_image(&self, picked: PickedFile) -> UploadOutcome {
        if !file::is_image_mime(&picked.mime) {
            self.toasts.modify(|t| {
                t.error(INVALID_TYPE_MESSAGE);
            });
            return UploadOutcome::Rejected;
        }

        let key = file::storage_key(self.clock.now_millis(), &picked.name);
        self.gallery.modify(GalleryState::begin_upload);
        let result = self.storage.upload(&self.bucket, &key, picked.bytes, &picked.mime).await;

        let outcome = match result {
            Ok(()) => {
                let image = UploadedImage {
                    url: self.storage.public_url(&self.bucket, &key),
                    id: key,
                    name: picked.name,
                };
                self.gallery.modify(|g| g.prepend(image.clone()));
                self.toasts.modify(|t| {
                    t.success(UPLOADED_MESSAGE);
                });
                UploadOutcome::Uploaded(image)
            }
            Err(e) => {
                log::error!("upload of {key} failed: {e}");
                self.toasts.modify(|t| {
                    t.error(UPLOAD_FAILED_MESSAGE);
                });
                UploadOutcome::Failed
            }
        };
        self.gallery.modify(GalleryState::finish_upload);
        outcome
    }

    /// Upload every file from one drop or picker selection concurrently.
    pub async fn upload_files(&self, files: Vec<PickedFile>) -> Vec<UploadOutcome> {
        join_all(files.into_iter().map(|picked| self.upload_image(picked))).await
    }

    /// Delete `id` from the bucket, then from the gallery.
    ///
    /// Returns whether the delete call succeeded.
    pub async fn remove_image(&self, id: &str) -> bool {
        match self.storage.remove(&self.bucket, &[id.to_owned()]).await {
            Ok(removed) => {
                if !removed.iter().any(|name| name == id) {
                    log::debug!("provider reported nothing removed for {id}");
                }
                self.gallery.modify(|g| {
                    g.remove(id);
                });
                self.toasts.modify(|t| {
                    t.success(DELETED_MESSAGE);
                });
                true
            }
            Err(e) => {
                log::error!("delete of {id} failed: {e}");
                self.toasts.modify(|t| {
                    t.error(DELETE_FAILED_MESSAGE);
                });
                false
            }
        }
    }
}
