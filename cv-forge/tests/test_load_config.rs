use std::fs::write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// A complete config produces validated resume fields plus the optional
/// pipeline overrides.
#[test]
fn load_config_accepts_full_config() {
    let config_yaml = r#"
resume:
  name: "John Smith"
  email: "john@x.com"
  phone: "+1 555"
  city: "New York"
  target_title: "Senior Developer"
  skills: "Rust, SQL, Kafka"
  experience: |
    Data Analyst at Company X (2022-2023)
    - Cleaned data using Python
model: "llama-3.3-70b-versatile"
font_cache_dir: ./tmp/fonts
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let config = cv_forge::load_config::load_config(config_file.path())
        .expect("Config should load");

    assert_eq!(config.resume.name, "John Smith");
    assert_eq!(config.resume.target_title, "Senior Developer");
    assert_eq!(config.model.as_deref(), Some("llama-3.3-70b-versatile"));
    assert_eq!(config.font_cache_dir, Some(PathBuf::from("./tmp/fonts")));
    assert!(config.font_regular_url.is_none());
}

/// Optional wizard fields may be omitted entirely.
#[test]
fn load_config_defaults_optional_fields() {
    let config_yaml = r#"
resume:
  name: "Jane Doe"
  email: "jane@x.com"
  target_title: "Data Scientist"
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let config = cv_forge::load_config::load_config(config_file.path())
        .expect("Config should load with only required fields");
    assert!(config.resume.projects.is_empty());
    assert!(config.resume.target_job.is_empty());
    assert!(config.model.is_none());
}

/// Missing required fields must fail with a diagnostic naming the field.
#[test]
fn load_config_rejects_missing_required_fields() {
    let config_yaml = r#"
resume:
  name: "Jane Doe"
  email: "jane@x.com"
  target_title: ""
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let err = cv_forge::load_config::load_config(config_file.path()).unwrap_err();
    assert!(
        err.to_string().contains("resume.target_title"),
        "Error should name the empty field, got: {err}"
    );
}

/// Invalid YAML errors and reports as such.
#[test]
fn load_config_errors_for_invalid_file() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), b"not-yaml: [:::").unwrap();

    let err = cv_forge::load_config::load_config(config_file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("parse") || msg.contains("YAML"),
        "Parse error expected, got: {msg}"
    );
}
