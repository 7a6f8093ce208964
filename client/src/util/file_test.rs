use super::*;

#[test]
fn image_mime_requires_image_prefix() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("image/svg+xml"));
    assert!(!is_image_mime("application/pdf"));
    assert!(!is_image_mime("text/plain"));
    assert!(!is_image_mime(""));
    assert!(!is_image_mime("IMAGE/PNG"));
    assert!(!is_image_mime("video/image"));
}

#[test]
fn storage_key_prefixes_timestamp() {
    assert_eq!(storage_key(1_700_000_000_123, "cat.png"), "1700000000123-cat.png");
    assert_eq!(storage_key(5, "my photo.jpg"), "5-my photo.jpg");
}

#[test]
fn display_name_strips_timestamp_prefix() {
    assert_eq!(display_name("1700000000123-cat.png"), "cat.png");
    assert_eq!(display_name("1700-my-holiday-pic.jpg"), "my-holiday-pic.jpg");
}

#[test]
fn display_name_keeps_keys_without_timestamp() {
    assert_eq!(display_name("cat.png"), "cat.png");
    assert_eq!(display_name("abc-cat.png"), "abc-cat.png");
    assert_eq!(display_name("-cat.png"), "-cat.png");
    assert_eq!(display_name("123-"), "123-");
}
