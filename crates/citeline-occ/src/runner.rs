//! Sequential import runner
//!
//! Kinds are processed one at a time, files in sorted order, records in
//! array order. Each kind's sink must finish (flush and rename into place)
//! before the next kind starts writing. A file that fails to read is logged
//! and counted; the run itself keeps going.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use citeline_core::ProgressContext;

use crate::config::Config;
use crate::reader;
use crate::schema::EntityKind;
use crate::sink::{create_sink, EntitySink};
use crate::transform;

/// Per-kind execution counts
#[derive(Debug)]
pub struct KindSummary {
    pub kind: EntityKind,
    pub total_files: usize,
    pub completed_files: usize,
    pub failed_files: usize,
    pub records: usize,
    pub links: usize,
    pub warnings: usize,
}

/// Import execution summary
#[derive(Debug)]
pub struct Summary {
    pub kinds: Vec<KindSummary>,
    pub elapsed: std::time::Duration,
}

impl Summary {
    pub fn records(&self) -> usize {
        self.kinds.iter().map(|k| k.records).sum()
    }

    pub fn links(&self) -> usize {
        self.kinds.iter().map(|k| k.links).sum()
    }

    pub fn warnings(&self) -> usize {
        self.kinds.iter().map(|k| k.warnings).sum()
    }

    pub fn failed_files(&self) -> usize {
        self.kinds.iter().map(|k| k.failed_files).sum()
    }
}

/// Run the import over every entity kind
pub fn run(config: &Config, progress: &ProgressContext) -> Result<Summary> {
    let start = Instant::now();

    let import_dir = config.import_dir();
    std::fs::create_dir_all(&import_dir).context("Failed to create import directory")?;
    citeline_core::cleanup_tmp_files(&import_dir).context("Failed to clean import directory")?;

    let mut kinds = Vec::new();
    for kind in EntityKind::all() {
        kinds.push(load_kind(*kind, config, &import_dir, progress)?);
    }

    let summary = Summary {
        kinds,
        elapsed: start.elapsed(),
    };

    // Log summary
    log::info!("=== OCC Import Summary ===");
    for k in &summary.kinds {
        log::info!(
            "{}: {} records from {}/{} files ({} failed), {} links, {} warnings",
            k.kind,
            k.records,
            k.completed_files,
            k.total_files,
            k.failed_files,
            k.links,
            k.warnings
        );
    }
    log::info!("Records: {}", summary.records());
    log::info!("Time: {:.1}s", summary.elapsed.as_secs_f64());

    Ok(summary)
}

/// Process all files of one kind into a freshly created sink.
fn load_kind(
    kind: EntityKind,
    config: &Config,
    import_dir: &Path,
    progress: &ProgressContext,
) -> Result<KindSummary> {
    let kind_dir = config.data_dir.join(kind.dir());
    let mut files = reader::find_json_files(&kind_dir);
    if let Some(limit) = config.max_files {
        files.truncate(limit);
    }
    let total_files = files.len();
    log::info!(
        "Loading {} from {} ({} files)",
        kind,
        kind_dir.display(),
        total_files
    );

    let mut sink = create_sink(config.mode, import_dir, kind)
        .with_context(|| format!("Failed to create {kind} sink"))?;

    let pb = progress.kind_bar(kind.dir(), total_files as u64);
    let mut completed_files = 0;
    let mut failed_files = 0;
    let mut records = 0;
    let mut warnings = 0;

    for file in &files {
        if let Some(name) = file.file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        match load_file(kind, file, sink.as_mut()) {
            Ok((file_records, file_warnings)) => {
                completed_files += 1;
                records += file_records;
                warnings += file_warnings;
            }
            Err(e) => {
                failed_files += 1;
                log::error!("{}: {e:#}", file.display());
            }
        }
        pb.inc(1);
    }

    // Per-kind barrier: outputs reach their final paths here
    let stats = sink
        .finish()
        .with_context(|| format!("Failed to finish {kind} sink"))?;
    pb.finish_and_clear();

    Ok(KindSummary {
        kind,
        total_files,
        completed_files,
        failed_files,
        records,
        links: stats.links,
        warnings,
    })
}

/// Process one file: returns (records written, warnings emitted).
fn load_file(
    kind: EntityKind,
    path: &Path,
    sink: &mut dyn EntitySink,
) -> Result<(usize, usize)> {
    let values = reader::read_graph(path)?;
    let mut records = 0;
    let mut warnings = 0;

    for value in values {
        let emitted = match transform::process_value(kind, value) {
            Ok(emitted) => emitted,
            Err(e) => {
                log::warn!("{kind}: skipping non-record entry in {}: {e}", path.display());
                continue;
            }
        };
        for warning in &emitted.warnings {
            log::warn!("{kind}: {warning}");
        }
        warnings += emitted.warnings.len();
        sink.write(&emitted)
            .with_context(|| format!("Failed to write {kind} output"))?;
        records += 1;
    }

    log::debug!("{}: {} records", path.display(), records);
    Ok((records, warnings))
}
