use crate::error::RenameCfdError;
use crate::renamer::{CompanionStatus, RenameOutcome};
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};

/// Running tally of one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub total_files: usize,
    pub files_processed: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub pdfs_renamed: usize,
    pub missing: Vec<String>,
    pub errors: Vec<String>,
    #[serde(skip)]
    start_time: Instant,
}

impl BatchSummary {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            files_processed: 0,
            renamed: 0,
            skipped: 0,
            pdfs_renamed: 0,
            missing: Vec::new(),
            errors: Vec::new(),
            start_time: Instant::now(),
        }
    }

    pub fn record_outcome(&mut self, outcome: &RenameOutcome) {
        self.files_processed += 1;
        if outcome.xml_renamed {
            self.renamed += 1;
        } else {
            self.skipped += 1;
        }
        if matches!(outcome.companion, CompanionStatus::Renamed(_)) {
            self.pdfs_renamed += 1;
        }
    }

    pub fn record_missing(&mut self, path: &Path) {
        self.missing.push(path.display().to_string());
    }

    pub fn record_error(&mut self, path: &Path, error: &RenameCfdError) {
        self.errors.push(format!("{}: {}", path.display(), error));
    }

    pub fn has_problems(&self) -> bool {
        !self.missing.is_empty() || !self.errors.is_empty()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
