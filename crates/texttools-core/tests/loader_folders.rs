use assert_fs::prelude::*;
use predicates::prelude::*;
use texttools_core::config::HostDirs;
use texttools_core::loader::{
    clean_path_input, list_files_response, list_text_files, load_folder_file, load_path,
    read_path, validate_folder_file, validate_path, LoadFolder,
};
use texttools_core::TextToolsError;

#[test]
fn test_listing_is_sorted_and_filtered() {
    let root = assert_fs::TempDir::new().unwrap();
    let input = root.child("input");
    input.child("b.md").write_str("b").unwrap();
    input.child("a.txt").write_str("a").unwrap();
    input.child("c.json").write_str("{}").unwrap();
    input.child("image.png").write_str("png").unwrap();
    input.child("nested").child("d.txt").write_str("d").unwrap();

    let dirs = HostDirs::under(root.path());
    assert_eq!(
        list_text_files(&dirs, LoadFolder::Input),
        vec!["a.txt", "b.md", "c.json"]
    );
}

#[test]
fn test_listing_missing_folder_is_empty_success() {
    let root = assert_fs::TempDir::new().unwrap();
    let dirs = HostDirs::under(root.path());

    let response = list_files_response(&dirs, "temp");
    assert!(response.success);
    assert!(response.files.is_empty());
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"files":[],"success":true}"#
    );
}

#[test]
fn test_output_text_folder_and_unknown_label() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("output/text/saved.txt").write_str("x").unwrap();
    root.child("input/in.txt").write_str("y").unwrap();
    let dirs = HostDirs::under(root.path());

    assert_eq!(list_files_response(&dirs, "output_text").files, vec!["saved.txt"]);
    // unknown labels list the input folder
    assert_eq!(list_files_response(&dirs, "downloads").files, vec!["in.txt"]);
}

#[test]
fn test_json_is_pretty_printed_on_load() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("input/data.json")
        .write_str(r#"{"name":"Zoë","tags":["a"]}"#)
        .unwrap();
    root.child("input/broken.json").write_str("{nope").unwrap();
    let dirs = HostDirs::under(root.path());

    assert_eq!(
        load_folder_file(&dirs, LoadFolder::Input, "data.json"),
        "{\n  \"name\": \"Zoë\",\n  \"tags\": [\n    \"a\"\n  ]\n}"
    );
    assert_eq!(load_folder_file(&dirs, LoadFolder::Input, "broken.json"), "{nope");
}

#[test]
fn test_folder_validation_order() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("input/photo.png").write_str("png").unwrap();
    let dirs = HostDirs::under(root.path());

    assert!(matches!(
        validate_folder_file(&dirs, LoadFolder::Input, ""),
        Err(TextToolsError::NoFileSpecified)
    ));
    assert!(matches!(
        validate_folder_file(&dirs, LoadFolder::Input, "missing.txt"),
        Err(TextToolsError::NotFoundInFolder { .. })
    ));
    assert!(matches!(
        validate_folder_file(&dirs, LoadFolder::Input, "photo.png"),
        Err(TextToolsError::UnsupportedExtension)
    ));
}

#[test]
fn test_missing_folder_file_returns_message() {
    let root = assert_fs::TempDir::new().unwrap();
    let dirs = HostDirs::under(root.path());

    let text = load_folder_file(&dirs, LoadFolder::Temp, "gone.md");
    assert!(predicate::str::starts_with("File not found: ").eval(&text));
    assert!(predicate::str::ends_with("gone.md").eval(&text));
}

#[test]
fn test_path_input_is_unquoted() {
    assert_eq!(clean_path_input("  \"C:/notes/a.txt\"  "), "C:/notes/a.txt");
    assert_eq!(clean_path_input("'/tmp/a.md'"), "/tmp/a.md");
    assert_eq!(clean_path_input("/tmp/plain.txt"), "/tmp/plain.txt");
}

#[test]
fn test_load_from_quoted_path() {
    let root = assert_fs::TempDir::new().unwrap();
    let file = root.child("notes.md");
    file.write_str("# Notes").unwrap();

    let quoted = format!("\"{}\"", file.path().display());
    assert!(validate_path(&quoted).is_ok());
    assert_eq!(load_path(&quoted), "# Notes");
}

#[test]
fn test_path_errors() {
    let root = assert_fs::TempDir::new().unwrap();
    let other = root.child("data.csv");
    other.write_str("a,b").unwrap();

    assert_eq!(load_path("   "), "No file path specified");
    assert!(matches!(
        validate_path(&other.path().display().to_string()),
        Err(TextToolsError::UnsupportedExtension)
    ));
    assert!(matches!(
        read_path(&root.path().display().to_string()),
        Err(TextToolsError::NotAFile(_))
    ));

    let missing = root.child("missing.txt").path().display().to_string();
    assert_eq!(load_path(&missing), format!("File not found: {}", missing));
}
