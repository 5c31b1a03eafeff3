//! `load_config` module: loads and validates the static YAML config holding
//! the resume fields and optional pipeline overrides.
//!
//! This is the only place where untrusted YAML is parsed and mapped to the
//! strongly-typed core structs, and the only place field-presence validation
//! happens: the core pipeline assumes validated input. Secrets (the API key)
//! never live in the file; they are injected from the environment at the CLI
//! boundary.
//!
//! # Errors
//! All errors here use `anyhow::Error` with field-naming diagnostics, and
//! are surfaced at the CLI boundary.

use anyhow::Result;
use cv_forge_core::prompt::ResumeFields;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct CliConfig {
    pub resume: ResumeFields,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub font_cache_dir: Option<PathBuf>,
    #[serde(default)]
    pub font_regular_url: Option<String>,
    #[serde(default)]
    pub font_bold_url: Option<String>,
}

/// Loads the YAML config file and validates the required resume fields.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let config: CliConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => conf,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    validate(&config.resume)?;
    info!(config_path = ?path_ref, "Parsed and validated config");
    Ok(config)
}

/// The wizard's minimum: name, email and a target title must be present
/// before a generation is attempted.
fn validate(fields: &ResumeFields) -> Result<()> {
    for (field, value) in [
        ("resume.name", &fields.name),
        ("resume.email", &fields.email),
        ("resume.target_title", &fields.target_title),
    ] {
        if value.trim().is_empty() {
            return Err(anyhow::anyhow!("Required config field {field} is empty"));
        }
    }
    Ok(())
}
