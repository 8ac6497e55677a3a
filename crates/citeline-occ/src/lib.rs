//! Citeline OCC - OpenCitations corpus import pipeline
//!
//! Converts the OCC JSON-LD dumps into flat relational CSV tables or, in the
//! alternate graph mode, Cypher upsert statements.
//!
//! # Features
//!
//! - Six entity kinds (br, id, ar, be, re, ra) with fixed column schemas
//! - BR type-tag resolution and one-to-many link extraction
//! - Tolerant of the corpus's schema surprises: records are never dropped,
//!   problems surface as warnings
//!
//! # Example
//!
//! ```ignore
//! use citeline_occ::{Config, run};
//!
//! let config = Config {
//!     data_dir: "data".into(),
//!     db_dir: "db".into(),
//!     ..Default::default()
//! };
//!
//! let summary = run(&config, &progress)?;
//! println!("Processed {} records", summary.records());
//! ```

pub mod config;
pub mod reader;
pub mod runner;
pub mod schema;
pub mod sink;
pub mod transform;
pub mod value;
pub mod warn;

// Re-exports
pub use config::Config;
pub use runner::{run, KindSummary, Summary};
pub use schema::{EntityKind, Relation};
pub use sink::SinkMode;
pub use warn::Warning;
