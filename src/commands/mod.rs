//! Commands module - the CLI entry points
//!
//! Provides:
//! - generate: numbered task scaffolding (batch and single)
//! - merge: discovery and annotated concatenation

pub mod generate;
pub mod merge;
