//! Per-kind output sinks
//!
//! Two implementations behind one write/finish lifecycle: CSV tables for the
//! relational import and Cypher statement files for the graph import. The
//! runner holds exactly one sink at a time; `finish` is the per-kind barrier
//! that renames tmp files into place before the next kind starts.

use std::io;
use std::path::Path;

use citeline_core::{CsvTable, CypherFile};

use crate::schema::{EntityKind, Relation};
use crate::transform::Emitted;

/// Which output format a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkMode {
    /// Flat CSV tables plus link tables.
    #[default]
    Csv,
    /// Cypher upsert statements, one file per kind.
    Graph,
}

/// Counts reported when a kind's sink finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkStats {
    pub rows: usize,
    pub links: usize,
}

/// Destination for processed records of one entity kind.
pub trait EntitySink {
    fn write(&mut self, emitted: &Emitted) -> io::Result<()>;

    /// Flush and rename outputs into place.
    fn finish(self: Box<Self>) -> io::Result<SinkStats>;
}

/// Create the sink for one kind in the given import directory.
pub fn create_sink(
    mode: SinkMode,
    import_dir: &Path,
    kind: EntityKind,
) -> io::Result<Box<dyn EntitySink>> {
    match mode {
        SinkMode::Csv => Ok(Box::new(CsvSink::create(import_dir, kind)?)),
        SinkMode::Graph => Ok(Box::new(GraphSink::create(import_dir, kind)?)),
    }
}

/// CSV mode: the kind's main table plus, for BR, one link table per relation.
///
/// Link tables are created up front so every run produces the full table set
/// with headers, even when no record carries that relation.
pub struct CsvSink {
    table: CsvTable,
    link_tables: Vec<(Relation, CsvTable)>,
}

impl CsvSink {
    pub fn create(import_dir: &Path, kind: EntityKind) -> io::Result<Self> {
        let table = CsvTable::create(import_dir, kind.table(), kind.columns())?;
        let mut link_tables = Vec::new();
        if kind == EntityKind::Br {
            for relation in Relation::all() {
                let table = CsvTable::create(import_dir, relation.table(), &["src", "dst"])?;
                link_tables.push((*relation, table));
            }
        }
        Ok(Self { table, link_tables })
    }
}

impl EntitySink for CsvSink {
    fn write(&mut self, emitted: &Emitted) -> io::Result<()> {
        self.table.write_row(&emitted.row)?;
        for link in &emitted.links {
            let table = self
                .link_tables
                .iter_mut()
                .find(|(relation, _)| *relation == link.relation)
                .map(|(_, table)| table)
                .ok_or_else(|| io::Error::other("link for a kind without link tables"))?;
            table.write_row([&link.src, &link.dst])?;
        }
        Ok(())
    }

    fn finish(self: Box<Self>) -> io::Result<SinkStats> {
        let rows = self.table.finalize()?;
        let mut links = 0;
        for (_, table) in self.link_tables {
            links += table.finalize()?;
        }
        Ok(SinkStats { rows, links })
    }
}

/// Graph mode: one Cypher statement file per kind.
///
/// Each record becomes a node upsert keyed by its sanitized iri with the
/// kind's columns as properties; each link becomes a relationship merge.
pub struct GraphSink {
    file: CypherFile,
    kind: EntityKind,
    rows: usize,
    links: usize,
}

impl GraphSink {
    pub fn create(import_dir: &Path, kind: EntityKind) -> io::Result<Self> {
        Ok(Self {
            file: CypherFile::create(import_dir, kind.statement_file())?,
            kind,
            rows: 0,
            links: 0,
        })
    }
}

impl EntitySink for GraphSink {
    fn write(&mut self, emitted: &Emitted) -> io::Result<()> {
        let iri = emitted.row.first().map(String::as_str).unwrap_or_default();
        let props: Vec<(&str, &str)> = self
            .kind
            .columns()
            .iter()
            .zip(&emitted.row)
            .skip(1)
            .map(|(column, value)| (*column, value.as_str()))
            .collect();
        self.file.merge_node(self.kind.node_label(), iri, &props)?;
        self.rows += 1;

        for link in &emitted.links {
            self.file
                .merge_edge(link.relation.graph_label(), &link.src, &link.dst)?;
            self.links += 1;
        }
        Ok(())
    }

    fn finish(self: Box<Self>) -> io::Result<SinkStats> {
        self.file.finalize()?;
        Ok(SinkStats {
            rows: self.rows,
            links: self.links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    use crate::transform::process_value;

    fn emit(kind: EntityKind, value: serde_json::Value) -> Emitted {
        process_value(kind, value).unwrap()
    }

    #[test]
    fn csv_sink_routes_links_to_relation_tables() {
        let dir = TempDir::new().unwrap();
        let mut sink: Box<dyn EntitySink> =
            create_sink(SinkMode::Csv, dir.path(), EntityKind::Br).unwrap();
        sink.write(&emit(
            EntityKind::Br,
            json!({
                "iri": "gbr:1",
                "a": ["article"],
                "contributor": ["gar:1", "gar:2"],
                "part_of": "gbr:9"
            }),
        ))
        .unwrap();
        let stats = sink.finish().unwrap();
        assert_eq!(stats, SinkStats { rows: 1, links: 3 });

        let contrib =
            std::fs::read_to_string(dir.path().join("br-contrib-link.csv")).unwrap();
        assert_eq!(contrib, "src,dst\ngbr:1,gar:1\ngbr:1,gar:2\n");
        let part = std::fs::read_to_string(dir.path().join("br-part-link.csv")).unwrap();
        assert_eq!(part, "src,dst\ngbr:1,gbr:9\n");
    }

    #[test]
    fn csv_sink_creates_all_br_link_tables() {
        let dir = TempDir::new().unwrap();
        let sink: Box<dyn EntitySink> =
            create_sink(SinkMode::Csv, dir.path(), EntityKind::Br).unwrap();
        sink.finish().unwrap();

        for relation in Relation::all() {
            let content = std::fs::read_to_string(dir.path().join(relation.table())).unwrap();
            assert_eq!(content, "src,dst\n", "{:?}", relation);
        }
    }

    #[test]
    fn csv_sink_non_br_has_no_link_tables() {
        let dir = TempDir::new().unwrap();
        let mut sink: Box<dyn EntitySink> =
            create_sink(SinkMode::Csv, dir.path(), EntityKind::Ra).unwrap();
        sink.write(&emit(EntityKind::Ra, json!({"iri": "gra:1", "a": "agent"})))
            .unwrap();
        let stats = sink.finish().unwrap();
        assert_eq!(stats, SinkStats { rows: 1, links: 0 });
        assert!(dir.path().join("ra.csv").exists());
        assert!(!dir.path().join("br-contrib-link.csv").exists());
    }

    #[test]
    fn graph_sink_emits_node_then_edges() {
        let dir = TempDir::new().unwrap();
        let mut sink: Box<dyn EntitySink> =
            create_sink(SinkMode::Graph, dir.path(), EntityKind::Br).unwrap();
        sink.write(&emit(
            EntityKind::Br,
            json!({
                "iri": "gbr:1",
                "a": ["article"],
                "title": "On Citing",
                "citation": ["gbr:2"]
            }),
        ))
        .unwrap();
        let stats = sink.finish().unwrap();
        assert_eq!(stats, SinkStats { rows: 1, links: 1 });

        let content = std::fs::read_to_string(dir.path().join("br.cypher")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("MERGE (n:br {iri: 'gbr1'})"));
        assert!(lines[0].contains("SET n.type = 'article'"));
        assert!(lines[0].contains("SET n.title = 'On Citing'"));
        assert!(lines[1].contains("-[:CITATION]->"));
    }

    #[test]
    fn graph_sink_id_column_cannot_clobber_node_key() {
        let dir = TempDir::new().unwrap();
        let mut sink: Box<dyn EntitySink> =
            create_sink(SinkMode::Graph, dir.path(), EntityKind::Id).unwrap();
        sink.write(&emit(
            EntityKind::Id,
            json!({"iri": "gid:1", "a": "identifier", "id": "10.1000/1"}),
        ))
        .unwrap();
        sink.finish().unwrap();

        let content = std::fs::read_to_string(dir.path().join("id.cypher")).unwrap();
        assert!(content.contains("{iri: 'gid1'}"));
        assert!(!content.contains("SET n.iri"));
        assert!(content.contains("SET n.id = '10.1000/1'"));
    }
}
