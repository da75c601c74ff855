use super::*;

#[test]
fn preview_url_is_base64_data_url() {
    let file = SelectedFile::new("chest.png", "image/png", vec![0x89, b'P', b'N', b'G']);
    assert_eq!(file.preview_url(), "data:image/png;base64,iVBORw==");
    assert_eq!(file.len(), 4);
}

#[test]
fn blank_mime_is_guessed_from_name() {
    let file = SelectedFile::new("scan.DCM", " ", vec![1, 2, 3]);
    assert_eq!(file.mime, "application/dicom");
    assert!(file.preview_url().starts_with("data:application/dicom;base64,"));
}

#[test]
fn guess_mime_covers_picker_formats() {
    assert_eq!(guess_mime("a.jpg"), "image/jpeg");
    assert_eq!(guess_mime("a.JPEG"), "image/jpeg");
    assert_eq!(guess_mime("a.png"), "image/png");
    assert_eq!(guess_mime("noext"), "application/octet-stream");
}

#[test]
fn matches_accept_allows_images_and_dicom() {
    assert!(matches_accept("x.png", "image/png"));
    assert!(matches_accept("study.dcm", ""));
    assert!(!matches_accept("notes.txt", "text/plain"));
}

#[test]
fn clones_share_bytes() {
    let file = SelectedFile::new("a.png", "image/png", vec![0; 1024]);
    let copy = file.clone();
    assert!(std::sync::Arc::ptr_eq(&file.bytes, &copy.bytes));
}
