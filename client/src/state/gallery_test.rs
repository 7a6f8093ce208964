use super::*;

fn image(id: &str) -> UploadedImage {
    UploadedImage {
        id: id.to_owned(),
        url: format!("https://cdn.test/{id}"),
        name: id.split_once('-').map_or(id, |(_, n)| n).to_owned(),
    }
}

fn ids(state: &GalleryState) -> Vec<&str> {
    state.images.iter().map(|i| i.id.as_str()).collect()
}

// =============================================================
// Upload bookkeeping
// =============================================================

#[test]
fn uploading_tracks_outstanding_count() {
    let mut state = GalleryState::default();
    assert!(!state.uploading());
    state.begin_upload();
    state.begin_upload();
    state.finish_upload();
    assert!(state.uploading());
    state.finish_upload();
    assert!(!state.uploading());
}

#[test]
fn finish_upload_never_underflows() {
    let mut state = GalleryState::default();
    state.finish_upload();
    assert_eq!(state.pending_uploads, 0);
}

// =============================================================
// prepend / remove
// =============================================================

#[test]
fn prepend_puts_newest_first() {
    let mut state = GalleryState::default();
    state.prepend(image("1-a.png"));
    state.prepend(image("2-b.png"));
    assert_eq!(ids(&state), ["2-b.png", "1-a.png"]);
}

#[test]
fn prepend_same_id_replaces_instead_of_duplicating() {
    let mut state = GalleryState::default();
    state.prepend(image("1-a.png"));
    state.prepend(image("2-b.png"));
    state.prepend(image("1-a.png"));
    assert_eq!(ids(&state), ["1-a.png", "2-b.png"]);
}

#[test]
fn remove_only_touches_matching_entry() {
    let mut state = GalleryState::default();
    for id in ["1-a.png", "2-b.png", "3-c.png"] {
        state.prepend(image(id));
    }
    assert!(state.remove("2-b.png"));
    assert_eq!(ids(&state), ["3-c.png", "1-a.png"]);
}

#[test]
fn remove_twice_is_noop() {
    let mut state = GalleryState::default();
    state.prepend(image("1-a.png"));
    assert!(state.remove("1-a.png"));
    assert!(!state.remove("1-a.png"));
    assert!(state.images.is_empty());
}

// =============================================================
// merge_listing
// =============================================================

#[test]
fn merge_listing_replaces_empty_gallery() {
    let mut state = GalleryState { loading: true, ..GalleryState::default() };
    state.merge_listing(vec![image("2-b.png"), image("1-a.png")]);
    assert_eq!(ids(&state), ["2-b.png", "1-a.png"]);
    assert!(!state.loading);
}

#[test]
fn merge_listing_keeps_uploads_the_listing_missed() {
    let mut state = GalleryState::default();
    state.prepend(image("9-new.png"));
    state.merge_listing(vec![image("2-b.png"), image("1-a.png")]);
    assert_eq!(ids(&state), ["9-new.png", "2-b.png", "1-a.png"]);
}

#[test]
fn merge_listing_does_not_duplicate_known_entries() {
    let mut state = GalleryState::default();
    state.prepend(image("2-b.png"));
    state.merge_listing(vec![image("2-b.png"), image("1-a.png")]);
    assert_eq!(ids(&state), ["2-b.png", "1-a.png"]);
}

#[test]
fn merge_listing_hides_images_deleted_in_this_view() {
    let mut state = GalleryState::default();
    state.prepend(image("1-a.png"));
    state.remove("1-a.png");
    state.merge_listing(vec![image("2-b.png"), image("1-a.png")]);
    assert_eq!(ids(&state), ["2-b.png"]);
}

#[test]
fn reupload_after_delete_is_listed_again() {
    let mut state = GalleryState::default();
    state.remove("1-a.png");
    state.prepend(image("1-a.png"));
    state.merge_listing(vec![image("1-a.png")]);
    assert_eq!(ids(&state), ["1-a.png"]);
}

// =============================================================
// Drag flag
// =============================================================

#[test]
fn drag_flag_follows_enter_leave_drop() {
    let mut state = GalleryState::default();
    state.drag_enter();
    assert!(state.is_dragging);
    state.drag_leave();
    assert!(!state.is_dragging);
    state.drag_enter();
    state.drop_files();
    assert!(!state.is_dragging);
}
