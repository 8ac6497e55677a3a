//! Output sinks — CSV table writer with atomic tmp→rename

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Buffered CSV writer for one output table.
///
/// The header row is written on creation. Rows accumulate in a `.tmp` file
/// that is renamed into place only on [`CsvTable::finalize`], so an
/// interrupted run never leaves a half-written table behind.
pub struct CsvTable {
    writer: csv::Writer<File>,
    tmp_path: PathBuf,
    final_path: PathBuf,
    row_count: usize,
}

impl std::fmt::Debug for CsvTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvTable")
            .field("final_path", &self.final_path)
            .field("row_count", &self.row_count)
            .finish_non_exhaustive()
    }
}

impl CsvTable {
    /// Create a new table writing to a temporary file, header included.
    pub fn create(output_dir: &Path, name: &str, header: &[&str]) -> io::Result<Self> {
        let final_path = output_dir.join(name);
        let tmp_path = output_dir.join(format!("{name}.tmp"));

        // Clean up stale tmp file
        if tmp_path.exists() {
            fs::remove_file(&tmp_path)?;
        }

        let file = File::create(&tmp_path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(header).map_err(io::Error::other)?;

        Ok(Self {
            writer,
            tmp_path,
            final_path,
            row_count: 0,
        })
    }

    /// Append one data row. Quoting and escaping are handled by the encoder.
    pub fn write_row<I, T>(&mut self, row: I) -> io::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.row_count += 1;
        self.writer.write_record(row).map_err(io::Error::other)
    }

    /// Number of data rows written so far (header excluded).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Finalize: flush and atomically rename tmp → final.
    pub fn finalize(self) -> io::Result<usize> {
        let row_count = self.row_count;
        self.writer.into_inner().map_err(io::Error::other)?;
        fs::rename(&self.tmp_path, &self.final_path)?;
        Ok(row_count)
    }
}

/// Remove stale .tmp files in the output directory
pub fn cleanup_tmp_files(output_dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "tmp") {
            log::warn!("Removing stale tmp file: {}", path.display());
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
