//! Error types for the cv-forge-core pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// The rewriting collaborator call failed. Surfaced verbatim to the caller;
/// never retried automatically, and never lets a renderer run on partial data.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("request to rewriting service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("rewriting service returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body did not match the chat-completions schema.
    #[error("rewriting service returned a malformed response: {0}")]
    Malformed(String),

    /// A syntactically valid response with no usable completion text.
    #[error("rewriting service returned an empty completion")]
    EmptyCompletion,
}

/// The font resource backing the fixed-page renderer is unusable.
///
/// Policy: the store attempts exactly one re-fetch per render; if the face is
/// still missing or invalid the fixed-page render fails closed instead of
/// falling back to a non-Unicode font.
#[derive(Error, Debug)]
pub enum FontResourceError {
    #[error("font cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to download font from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("font data at {path} is empty or not a TrueType/OpenType face")]
    Invalid { path: PathBuf },

    #[error("embedded font face '{face}' could not be parsed")]
    Unparseable { face: &'static str },
}

/// A renderer failed to produce its output buffer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The flow-document package could not be assembled.
    #[error("failed to package flow document: {0}")]
    FlowPack(String),

    #[error(transparent)]
    Font(#[from] FontResourceError),
}

/// Top-level pipeline failure, one variant per pipeline stage.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
