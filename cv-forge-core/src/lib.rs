#![doc = "cv-forge-core: classify-and-render pipeline for AI-rewritten resumes."]

//! This crate contains all business logic for cv-forge: prompt assembly for
//! the rewriting collaborator, line-role classification of the returned
//! text, bidi shaping, and the two document renderers (flow and fixed-page)
//! plus the font store and pipeline orchestration. CLI glue lives in the
//! `cv-forge` crate.
//!
//! # Usage
//! Construct a [`rewrite::ChatClient`] and a [`fonts::CachedFontStore`] (or
//! any other [`contract::Rewriter`] / [`contract::FontSource`]) and call
//! [`generate::generate`].

pub mod classify;
pub mod contract;
pub mod docx;
pub mod error;
pub mod filename;
pub mod fonts;
pub mod generate;
pub mod pdf;
pub mod prompt;
pub mod rewrite;
pub mod shape;
pub mod style;
