//! CLI interface for cv-forge: command parsing, argument validation and the
//! async entrypoints used by both `main()` and the integration tests.
//!
//! All non-trivial business logic stays in `cv-forge-core`; this module only
//! wires config, environment secrets and the concrete collaborators into
//! the pipeline and writes the returned artifacts to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cv_forge_core::fonts::CachedFontStore;
use cv_forge_core::generate::{self, Artifact};
use cv_forge_core::rewrite::ChatClient;

use crate::load_config::{load_config, CliConfig};

/// CLI for cv-forge: AI resume rewriting rendered to DOCX and PDF.
#[derive(Parser)]
#[clap(
    name = "cv-forge",
    version,
    about = "Rewrite resume fields with a hosted LLM and render DOCX + PDF documents"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a resume from the fields in the given config file
    Generate {
        /// Path to the YAML config file with the resume fields
        #[clap(long)]
        config: PathBuf,
        /// Directory the rendered documents are written to
        #[clap(long, default_value = "out")]
        out_dir: PathBuf,
        /// Also generate Cover_Letter.docx
        #[clap(long)]
        cover_letter: bool,
        /// Also print an ATS score against resume.target_job
        #[clap(long)]
        ats: bool,
    },
    /// Render existing resume text (e.g. edited output) without an LLM call
    Render {
        /// Path to a plain-text resume file
        #[clap(long)]
        input: PathBuf,
        /// Display name used to derive the artifact file names
        #[clap(long)]
        name: String,
        /// Directory the rendered documents are written to
        #[clap(long, default_value = "out")]
        out_dir: PathBuf,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            config,
            out_dir,
            cover_letter,
            ats,
        } => {
            let config = load_config(config)?;
            tracing::info!(command = "generate", "Starting generation pipeline");

            let api_key = std::env::var("GROQ_API_KEY")
                .context("GROQ_API_KEY env var must be set for the rewriting service")?;
            let mut client = ChatClient::new(api_key);
            if let Some(model) = &config.model {
                client = client.with_model(model.clone());
            }
            if let Some(base_url) = &config.api_base_url {
                client = client.with_base_url(base_url.clone());
            }
            let fonts = font_store(&config);

            let report = generate::generate(&config.resume, &client, &fonts).await?;
            write_artifact(&out_dir, &report.documents.flow)?;
            write_artifact(&out_dir, &report.documents.fixed)?;
            println!(
                "Generated {} and {} in {}",
                report.documents.flow.filename,
                report.documents.fixed.filename,
                out_dir.display()
            );

            if cover_letter {
                let letter = generate::cover_letter(&config.resume, &client).await?;
                write_artifact(&out_dir, &letter)?;
                println!("Generated {}", letter.filename);
            }
            if ats {
                anyhow::ensure!(
                    !config.resume.target_job.trim().is_empty(),
                    "--ats requires resume.target_job in the config"
                );
                let analysis = generate::ats_analysis(
                    &report.resume_text,
                    &config.resume.target_job,
                    &client,
                )
                .await?;
                println!("\nATS analysis:\n{analysis}");
            }
            Ok(())
        }
        Commands::Render {
            input,
            name,
            out_dir,
        } => {
            tracing::info!(command = "render", input = ?input, "Rendering resume text");
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read resume text from {}", input.display()))?;
            let fonts = CachedFontStore::default_location();
            let documents = generate::render_documents(&text, &name, &fonts).await?;
            write_artifact(&out_dir, &documents.flow)?;
            write_artifact(&out_dir, &documents.fixed)?;
            println!(
                "Rendered {} and {} in {}",
                documents.flow.filename,
                documents.fixed.filename,
                out_dir.display()
            );
            Ok(())
        }
    }
}

fn font_store(config: &CliConfig) -> CachedFontStore {
    let cache_dir = config
        .font_cache_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("cv-forge-fonts"));
    match (&config.font_regular_url, &config.font_bold_url) {
        (Some(regular), Some(bold)) => {
            CachedFontStore::with_urls(cache_dir, regular.clone(), bold.clone())
        }
        _ => CachedFontStore::new(cache_dir),
    }
}

fn write_artifact(out_dir: &Path, artifact: &Artifact) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output dir {}", out_dir.display()))?;
    let path = out_dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write artifact {}", path.display()))?;
    tracing::info!(path = %path.display(), size = artifact.bytes.len(), "Wrote artifact");
    Ok(())
}
