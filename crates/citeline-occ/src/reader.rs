//! Corpus file discovery and record extraction
//!
//! Each corpus file is a single JSON document carrying its records as an
//! array under the `@graph` envelope key (OCC / Blazegraph syntax).

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Failure reading one corpus file.
///
/// Fatal at file scope only: the runner logs it, counts the file as failed,
/// and continues with the remaining files and kinds.
#[derive(Debug)]
pub enum ReadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// The document has no `@graph` array.
    MissingGraph,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO: {e}"),
            Self::Parse(e) => write!(f, "JSON: {e}"),
            Self::MissingGraph => write!(f, "no '@graph' array in document"),
        }
    }
}

impl std::error::Error for ReadError {}

/// Recursively find `.json` files beneath `dir`, in stable sorted order.
///
/// A missing or empty kind directory yields an empty list; the corpus dumps
/// do not always ship every kind.
pub fn find_json_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/**/*.json", dir.display());
    let mut files: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            log::warn!("Bad file pattern for {}: {e}", dir.display());
            Vec::new()
        }
    };
    files.sort();
    files
}

/// Read one corpus file and return its record array.
pub fn read_graph(path: &Path) -> Result<Vec<Value>, ReadError> {
    let content = std::fs::read_to_string(path).map_err(ReadError::Io)?;
    let mut doc: Value = serde_json::from_str(&content).map_err(ReadError::Parse)?;
    match doc.get_mut("@graph").map(Value::take) {
        Some(Value::Array(records)) => Ok(records),
        _ => Err(ReadError::MissingGraph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discovery_is_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.json", "{}");
        write(dir.path(), "nested/deep/a.json", "{}");
        write(dir.path(), "ignored.txt", "");

        let files = find_json_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("b.json"));
        assert!(files[1].ends_with("nested/deep/a.json"));
    }

    #[test]
    fn missing_directory_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        assert!(find_json_files(&dir.path().join("absent")).is_empty());
    }

    #[test]
    fn graph_records_come_back_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "br.json",
            r#"{"@graph": [{"iri": "gbr:1"}, {"iri": "gbr:2"}]}"#,
        );
        let records = read_graph(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["iri"], "gbr:1");
        assert_eq!(records[1]["iri"], "gbr:2");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "bad.json", "{ not json");
        assert!(matches!(read_graph(&path), Err(ReadError::Parse(_))));
    }

    #[test]
    fn missing_envelope_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "plain.json", r#"{"records": []}"#);
        assert!(matches!(read_graph(&path), Err(ReadError::MissingGraph)));

        let path = write(dir.path(), "scalar.json", r#"{"@graph": "oops"}"#);
        assert!(matches!(read_graph(&path), Err(ReadError::MissingGraph)));
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(read_graph(&path), Err(ReadError::Io(_))));
    }
}
