//! Cypher statement emission for the graph import mode
//!
//! Statements use MERGE throughout so re-running an import is idempotent.
//! Nodes are keyed by an `iri` property holding the record iri with `:`
//! stripped. The key property is never touched by `SET`, so a record field
//! that happens to be called `id` cannot clobber it.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Strip `:` from an iri to form a node id.
pub fn sanitize_id(iri: &str) -> String {
    iri.replace(':', "")
}

/// Escape a value for embedding in a single-quoted Cypher string literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Writes Cypher upsert statements for one entity kind, one statement per
/// line, with the same tmp→rename lifecycle as [`crate::CsvTable`].
pub struct CypherFile {
    writer: BufWriter<File>,
    tmp_path: PathBuf,
    final_path: PathBuf,
    statement_count: usize,
}

impl std::fmt::Debug for CypherFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CypherFile")
            .field("final_path", &self.final_path)
            .field("statement_count", &self.statement_count)
            .finish_non_exhaustive()
    }
}

impl CypherFile {
    /// Create a new statement file writing to a temporary file.
    pub fn create(output_dir: &Path, name: &str) -> io::Result<Self> {
        let final_path = output_dir.join(name);
        let tmp_path = output_dir.join(format!("{name}.tmp"));

        if tmp_path.exists() {
            fs::remove_file(&tmp_path)?;
        }

        Ok(Self {
            writer: BufWriter::new(File::create(&tmp_path)?),
            tmp_path,
            final_path,
            statement_count: 0,
        })
    }

    /// Upsert a node keyed by sanitized iri and set its non-empty properties.
    pub fn merge_node(&mut self, label: &str, iri: &str, props: &[(&str, &str)]) -> io::Result<()> {
        write!(
            self.writer,
            "MERGE (n:{label} {{iri: '{}'}})",
            escape_literal(&sanitize_id(iri))
        )?;
        for (key, value) in props {
            if value.is_empty() {
                continue;
            }
            write!(self.writer, " SET n.{key} = '{}'", escape_literal(value))?;
        }
        writeln!(self.writer, ";")?;
        self.statement_count += 1;
        Ok(())
    }

    /// Upsert a directed relationship between two sanitized node iris.
    pub fn merge_edge(&mut self, rel: &str, src: &str, dst: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "MERGE (a {{iri: '{}'}}) MERGE (b {{iri: '{}'}}) MERGE (a)-[:{rel}]->(b);",
            escape_literal(&sanitize_id(src)),
            escape_literal(&sanitize_id(dst)),
        )?;
        self.statement_count += 1;
        Ok(())
    }

    /// Number of statements written so far.
    pub fn statement_count(&self) -> usize {
        self.statement_count
    }

    /// Finalize: flush and atomically rename tmp → final.
    pub fn finalize(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        fs::rename(&self.tmp_path, &self.final_path)?;
        Ok(self.statement_count)
    }
}
