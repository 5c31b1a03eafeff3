//! # contract: interfaces to the pipeline's external collaborators
//!
//! The pipeline treats two resources as opaque collaborators behind async
//! traits: the text-rewriting service and the network-fetchable font family.
//! Both traits are annotated for `mockall` so the orchestration layer and its
//! consumers can be tested deterministically without network access.
//!
//! - Implement [`Rewriter`] for a concrete completion provider (see
//!   [`crate::rewrite::ChatClient`] for the default OpenAI-compatible one).
//! - Implement [`FontSource`] for a concrete font store (see
//!   [`crate::fonts::CachedFontStore`]).

use async_trait::async_trait;
use mockall::automock;

use crate::error::{CollaboratorError, FontResourceError};

/// The text-rewriting collaborator: a pure text-in/text-out boundary.
///
/// Accepts a system instruction and a user prompt and returns the rewritten
/// resume as newline-delimited plain text. Implementations must not retry
/// automatically; a failure is surfaced to the caller for a manual retry.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Rewriter: Send + Sync {
    async fn rewrite(&self, system: &str, prompt: &str) -> Result<String, CollaboratorError>;
}

/// Raw bytes of the regular and bold faces consumed by the fixed-page
/// renderer. Both faces must cover Latin and Arabic-script glyphs.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub regular: Vec<u8>,
    pub bold: Vec<u8>,
}

/// Provider of the font family backing the fixed-page renderer.
///
/// `ensure` loads the faces from a local cache, fetching and caching them
/// once when missing or invalid. A failed ensure fails the fixed-page render
/// closed; it never substitutes a non-Unicode fallback face.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait FontSource: Send + Sync {
    async fn ensure(&self) -> Result<FontSet, FontResourceError>;
}
