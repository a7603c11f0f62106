use snapline::error::{FileError, SnaplineError};
use snapline::file::load_lines;
use snapline::{App, Cursor, EditorOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_strips_line_terminators() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("crlf.txt");
    fs::write(&file_path, "first\r\nsecond\nthird\n").unwrap();

    let lines = load_lines(&file_path).unwrap();
    assert_eq!(lines, vec!["first", "second", "third"]);
}

#[test]
fn missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let lines = load_lines(temp_dir.path().join("new.txt")).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn directory_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_lines(temp_dir.path());

    assert!(matches!(
        result,
        Err(SnaplineError::File(FileError::InvalidPath { .. }))
    ));
}

#[test]
fn empty_file_opens_as_single_empty_line() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("empty.txt");
    fs::write(&file_path, "").unwrap();

    let options = EditorOptions {
        initial_file: Some(file_path.clone()),
        ..EditorOptions::default()
    };
    let app = App::new(&options).unwrap();

    assert_eq!(app.session().buffer().render(), vec![String::new()]);
    assert_eq!(app.session().cursor(), Cursor::new(0, 0));
    assert_eq!(app.file_path(), Some(&file_path));
}

#[test]
fn tabs_are_expanded_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("tabs.txt");
    fs::write(&file_path, "\tindented\n").unwrap();

    let options = EditorOptions {
        initial_file: Some(file_path),
        ..EditorOptions::default()
    };
    let app = App::new(&options).unwrap();

    assert_eq!(app.session().buffer().render(), vec!["    indented"]);
}
