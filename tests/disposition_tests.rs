use ghostlink_ui::utils::{download_filename, filename_from_disposition, DEFAULT_DOWNLOAD_NAME};

#[test]
fn test_quoted_filename() {
    let name = filename_from_disposition(r#"attachment; filename="song.wav""#);
    assert_eq!(name.as_deref(), Some("song.wav"));
}

#[test]
fn test_unquoted_filename() {
    let name = filename_from_disposition("attachment; filename=song.wav");
    assert_eq!(name.as_deref(), Some("song.wav"));
}

#[test]
fn test_unquoted_filename_with_trailing_parameter() {
    let name = filename_from_disposition("attachment; filename=song.wav; size=1024");
    assert_eq!(name.as_deref(), Some("song.wav"));
}

#[test]
fn test_quoted_filename_with_spaces() {
    let name = filename_from_disposition(r#"attachment; filename="my song.wav""#);
    assert_eq!(name.as_deref(), Some("my song.wav"));
}

#[test]
fn test_no_filename_attribute() {
    assert_eq!(filename_from_disposition("inline"), None);
    assert_eq!(filename_from_disposition(""), None);
}

#[test]
fn test_empty_filename_value() {
    assert_eq!(filename_from_disposition(r#"attachment; filename="""#), None);
}

#[test]
fn test_download_filename_defaults() {
    assert_eq!(download_filename(None), DEFAULT_DOWNLOAD_NAME);
    assert_eq!(download_filename(Some("attachment")), DEFAULT_DOWNLOAD_NAME);
    assert_eq!(
        download_filename(Some(r#"attachment; filename="song.wav""#)),
        "song.wav"
    );
}
