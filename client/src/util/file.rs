//! Picked files and the naming rules applied before upload.
//!
//! Browser `File` handles are read into [`PickedFile`] up front so the upload
//! service works on plain bytes and stays testable off the browser.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

/// A file chosen by drag-and-drop or the picker, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    /// MIME type as reported by the browser; may be empty.
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Only `image/*` content is accepted.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Storage key for an upload: `{timestamp_millis}-{original_name}`.
pub fn storage_key(timestamp_millis: i64, name: &str) -> String {
    format!("{timestamp_millis}-{name}")
}

/// Original file name recovered from a storage key.
///
/// Keys that do not carry a numeric timestamp prefix are returned whole.
pub fn display_name(key: &str) -> &str {
    match key.split_once('-') {
        Some((stamp, rest)) if !stamp.is_empty() && !rest.is_empty() && stamp.bytes().all(|b| b.is_ascii_digit()) => {
            rest
        }
        _ => key,
    }
}

/// Read one browser `File` into memory.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: &web_sys::File) -> Option<PickedFile> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(PickedFile { name: file.name(), mime: file.type_(), bytes })
}

/// Read every file in a `FileList`, skipping any the browser fails to hand over.
#[cfg(feature = "hydrate")]
pub async fn read_file_list(list: web_sys::FileList) -> Vec<PickedFile> {
    let mut picked = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(file) = list.item(index) else {
            continue;
        };
        match read_file(&file).await {
            Some(p) => picked.push(p),
            None => log::warn!("could not read dropped file {}", file.name()),
        }
    }
    picked
}
