use crate::error::{RenameCfdError, Result};
use log::debug;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Append-only comma-separated report, one row per processed invoice.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discard the report left by a previous run. Call once, before the
    /// first `append`.
    pub fn prepare(&self) -> Result<()> {
        if self.path.is_file() {
            debug!("Removing previous report {}", self.path.display());
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Open the report, write one record and close it again.
    pub fn append(&self, record: &[String]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        writer
            .write_record(record)
            .map_err(|e| RenameCfdError::report(&self.path, e))?;
        writer.flush()?;

        Ok(())
    }
}
