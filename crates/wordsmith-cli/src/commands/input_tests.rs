use std::fs;
use std::io::Cursor;
use std::path::Path;

use super::Error;
use super::input::{is_stdin_path, load_text, read_stream};

#[test]
fn inline_text_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ignored.txt");
    fs::write(&path, "from file").unwrap();

    let text = load_text(Some("inline"), Some(&path)).unwrap();
    assert_eq!(text, "inline");
}

#[test]
fn reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "line one\nline two\n").unwrap();

    let text = load_text(None, Some(&path)).unwrap();
    assert_eq!(text, "line one\nline two\n");
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let err = load_text(None, Some(&path)).unwrap_err();
    assert!(matches!(err, Error::ReadFile { .. }));
    assert!(err.to_string().contains("nope.txt"), "{err}");
}

#[test]
fn empty_inline_text_is_valid() {
    assert_eq!(load_text(Some(""), None).unwrap(), "");
}

#[test]
fn dash_names_stdin() {
    assert!(is_stdin_path(Path::new("-")));
    assert!(!is_stdin_path(Path::new("-.txt")));
    assert!(!is_stdin_path(Path::new("./-")));
}

#[test]
fn reads_piped_stream() {
    let text = read_stream(Cursor::new("piped\ntext")).unwrap();
    assert_eq!(text, "piped\ntext");
}

#[test]
fn invalid_utf8_stream_is_an_error() {
    let err = read_stream(Cursor::new(vec![0xff, 0xfe])).unwrap_err();
    assert!(matches!(err, Error::ReadStdin(_)));
    assert!(err.to_string().starts_with("failed to read stdin"), "{err}");
}
