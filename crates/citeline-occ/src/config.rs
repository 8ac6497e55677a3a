//! OCC import configuration

use std::path::PathBuf;

use crate::sink::SinkMode;

/// Runtime configuration for one import run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the corpus tree, one subdirectory per entity kind
    pub data_dir: PathBuf,
    /// Database directory; outputs land in `<db_dir>/import`
    pub db_dir: PathBuf,
    /// Maximum files to process per kind (for testing)
    pub max_files: Option<usize>,
    /// Output format
    pub mode: SinkMode,
}

impl Config {
    /// Directory the output tables and statement files are written to
    pub fn import_dir(&self) -> PathBuf {
        self.db_dir.join("import")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            db_dir: PathBuf::from("db"),
            max_files: None,
            mode: SinkMode::Csv,
        }
    }
}
