//! Citeline Core - common infrastructure for corpus import pipelines
//!
//! This crate provides the output sinks (CSV tables, Cypher statement files),
//! logging setup, and progress reporting shared by the corpus pipeline and
//! the CLI.

pub mod cypher;
pub mod logging;
pub mod progress;
pub mod sink;

// Re-exports for convenience
pub use cypher::{CypherFile, escape_literal, sanitize_id};
pub use logging::{IndicatifLogger, init_logging};
pub use progress::ProgressContext;
pub use sink::{CsvTable, cleanup_tmp_files};
