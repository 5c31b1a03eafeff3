use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::write;
use tempfile::{tempdir, NamedTempFile};

fn create_minimal_config() -> NamedTempFile {
    let config = NamedTempFile::new().expect("Creating temp config file failed");
    write(
        config.path(),
        b"resume:\n  name: \"John Smith\"\n  email: \"john@x.com\"\n  target_title: \"Senior Developer\"\n",
    )
    .expect("Writing temp config failed");
    config
}

#[test]
fn help_lists_both_subcommands() {
    let mut cmd = Command::cargo_bin("cv-forge").expect("Binary exists");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate").and(predicate::str::contains("render")));
}

#[test]
fn generate_fails_cleanly_without_api_key() {
    let config = create_minimal_config();
    let mut cmd = Command::cargo_bin("cv-forge").expect("Binary exists");
    cmd.arg("generate")
        .arg("--config")
        .arg(config.path())
        .env_remove("GROQ_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GROQ_API_KEY"));
}

#[test]
fn generate_fails_cleanly_on_missing_config() {
    let mut cmd = Command::cargo_bin("cv-forge").expect("Binary exists");
    cmd.arg("generate")
        .arg("--config")
        .arg("does-not-exist.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn render_fails_cleanly_on_missing_input() {
    let mut cmd = Command::cargo_bin("cv-forge").expect("Binary exists");
    cmd.arg("render")
        .arg("--input")
        .arg("does-not-exist.txt")
        .arg("--name")
        .arg("John Smith")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read resume text"));
}

/// Full offline-authored flow against the live font host: renders edited
/// resume text to both artifacts. Needs network access for the font fetch.
#[test]
#[ignore]
fn render_writes_both_artifacts() {
    let out_dir = tempdir().unwrap();
    let input = NamedTempFile::new().unwrap();
    write(
        input.path(),
        b"JOHN SMITH\n+1 555 | New York | john@x.com\nSUMMARY\nBuilds reliable systems.\n- Shipped 3 products\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("cv-forge").expect("Binary exists");
    cmd.arg("render")
        .arg("--input")
        .arg(input.path())
        .arg("--name")
        .arg("John Smith")
        .arg("--out-dir")
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered"));

    let docx = std::fs::read(out_dir.path().join("John_Smith.docx")).unwrap();
    assert_eq!(&docx[0..2], b"PK");
    let pdf = std::fs::read(out_dir.path().join("John_Smith.pdf")).unwrap();
    assert_eq!(&pdf[0..4], b"%PDF");
}
