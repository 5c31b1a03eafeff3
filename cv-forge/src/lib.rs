#![doc = "cv-forge: CLI front-end over the cv-forge-core pipeline."]

//! All business logic (classification, shaping, rendering, collaborator
//! clients) lives in the `cv-forge-core` crate; this crate is strictly CLI
//! glue: argument parsing, config loading, artifact writing.

pub mod cli;
pub mod load_config;
