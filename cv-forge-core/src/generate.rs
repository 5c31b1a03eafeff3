//! High-level pipeline: prompt assembly → collaborator call → classify →
//! render both document formats.
//!
//! One `generate` call is one synchronous pipeline run over an immutable
//! ResumeText snapshot. The pipeline holds no state of its own; everything
//! request-scoped (fields, collaborator, font source) is passed in, and a
//! "Regenerate" is simply a fresh call that discards the previous snapshot.
//! Orchestration is fail-fast: a collaborator error surfaces before any
//! renderer runs, and a font-resource failure fails the fixed-page render
//! closed.

use tracing::{error, info};

use crate::classify::classify_resume;
use crate::contract::{FontSource, Rewriter};
use crate::error::GenerateError;
use crate::filename::sanitize;
use crate::prompt::{self, ResumeFields};
use crate::{docx, pdf};

/// One downloadable output artifact: the buffer plus its suggested filename.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Both documents rendered from one ResumeText snapshot.
#[derive(Debug, Clone)]
pub struct RenderedDocuments {
    pub flow: Artifact,
    pub fixed: Artifact,
}

/// Result of a full generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The rewritten resume text, kept so the caller can offer editing and
    /// re-rendering without another collaborator call.
    pub resume_text: String,
    pub documents: RenderedDocuments,
}

/// Runs the full pipeline: assemble the prompt, call the rewriting
/// collaborator, then render both documents from the returned text.
pub async fn generate<R, F>(
    fields: &ResumeFields,
    rewriter: &R,
    fonts: &F,
) -> Result<GenerationReport, GenerateError>
where
    R: Rewriter,
    F: FontSource,
{
    info!(target_title = %fields.target_title, "Starting resume generation pipeline");
    let user_prompt = prompt::resume_prompt(fields);
    let resume_text = rewriter
        .rewrite(prompt::RESUME_SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(|e| {
            error!(error = %e, "Rewriting collaborator failed");
            e
        })?;

    let documents = render_documents(&resume_text, &fields.name, fonts).await?;
    info!(
        flow = %documents.flow.filename,
        fixed = %documents.fixed.filename,
        "Generation pipeline complete"
    );
    Ok(GenerationReport {
        resume_text,
        documents,
    })
}

/// Renders both document formats from one ResumeText snapshot. Also the
/// entry point for re-rendering user-edited text without a collaborator
/// call.
pub async fn render_documents<F>(
    resume_text: &str,
    display_name: &str,
    fonts: &F,
) -> Result<RenderedDocuments, GenerateError>
where
    F: FontSource,
{
    let resume = classify_resume(resume_text);
    let (flow_name, fixed_name) = artifact_filenames(display_name);

    let flow_bytes = docx::render(&resume)?;
    let font_set = fonts.ensure().await.map_err(|e| {
        error!(error = %e, "Font resource unavailable for fixed-page render");
        crate::error::RenderError::from(e)
    })?;
    let fixed_bytes = pdf::render(&resume, &font_set)?;

    Ok(RenderedDocuments {
        flow: Artifact {
            filename: flow_name,
            bytes: flow_bytes,
        },
        fixed: Artifact {
            filename: fixed_name,
            bytes: fixed_bytes,
        },
    })
}

/// Download names for one generation, derived from the display name.
pub fn artifact_filenames(display_name: &str) -> (String, String) {
    let base = sanitize(display_name);
    (format!("{base}.docx"), format!("{base}.pdf"))
}

/// Generates a cover letter and renders it through the flow renderer.
pub async fn cover_letter<R>(fields: &ResumeFields, rewriter: &R) -> Result<Artifact, GenerateError>
where
    R: Rewriter,
{
    info!(name = %fields.name, "Generating cover letter");
    let text = rewriter
        .rewrite(
            prompt::RESUME_SYSTEM_PROMPT,
            &prompt::cover_letter_prompt(fields),
        )
        .await?;
    let classified = classify_resume(&text);
    let bytes = docx::render(&classified)?;
    Ok(Artifact {
        filename: "Cover_Letter.docx".to_string(),
        bytes,
    })
}

/// Scores a generated resume against a job description. Plain text result;
/// nothing is rendered.
pub async fn ats_analysis<R>(
    resume_text: &str,
    job_description: &str,
    rewriter: &R,
) -> Result<String, GenerateError>
where
    R: Rewriter,
{
    info!("Requesting ATS analysis");
    let analysis = rewriter
        .rewrite(
            prompt::RESUME_SYSTEM_PROMPT,
            &prompt::ats_prompt(resume_text, job_description),
        )
        .await?;
    Ok(analysis)
}
