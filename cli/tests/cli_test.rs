//! End-to-end tests for the pdfscope binary.

use std::io::Write;
use std::process::Command;

fn pdfscope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pdfscope"))
}

#[test]
fn test_missing_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowhere.pdf");

    let output = pdfscope().arg(&path).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains(&format!("File not found - {}", path.display())));
    assert!(!stdout.contains("PAGE"));

    let header = stdout.find("Analyzing PDF:").unwrap();
    let message = stdout.find("File not found").unwrap();
    assert!(header < message);
}

#[test]
fn test_non_pdf_exits_with_one() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello, plain text").unwrap();

    let output = pdfscope().arg(file.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("analyzing PDF: Unknown file format"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = pdfscope().output().unwrap();
    assert!(!output.status.success());
}
