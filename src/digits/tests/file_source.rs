use crate::digits::{DigitSource, DigitSourceError, FileDigitSource};
use std::fs;

/// Helper function to write a temporary digit file unique to the calling test
fn write_temp_digits(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("pi_randomness_{}_{}.txt", name, std::process::id()));
    fs::write(&path, contents).expect("Failed to write temp digit file");
    path
}

#[test]
fn test_load_from_file() {
    let path = write_temp_digits("load", "3.1415\n9265\n");
    let digits = FileDigitSource::new(&path).load().expect("Failed to load digits");
    assert_eq!(digits.as_slice(), &[3, 1, 4, 1, 5, 9, 2, 6, 5]);
    fs::remove_file(&path).ok();
}

/// Tests a missing file surfaces as an I/O error carrying the path
#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("pi_randomness_does_not_exist.txt");
    let source = FileDigitSource::new(&path);
    match source.load() {
        Err(DigitSourceError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected I/O error, got {:?}", other),
    }
}
