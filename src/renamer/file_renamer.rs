use crate::error::Result;
use crate::extractor::InvoiceFields;
use crate::renamer::naming::{destination_stem, name_segments};
use crate::renamer::{RenameOptions, ReportWriter};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const XML_EXTENSION: &str = "xml";
const PDF_EXTENSION: &str = "pdf";

/// What happened to the PDF that travels with an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionStatus {
    Renamed(PathBuf),
    /// A file already sits at the destination; the PDF was left alone.
    Skipped(PathBuf),
    Absent,
}

#[derive(Debug, Clone)]
pub struct RenameOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// False when the destination already existed and the XML was left alone.
    pub xml_renamed: bool,
    pub companion: CompanionStatus,
    pub segments: Vec<String>,
}

impl RenameOutcome {
    pub fn was_skipped(&self) -> bool {
        !self.xml_renamed
    }
}

pub struct Renamer {
    options: RenameOptions,
    report: Option<ReportWriter>,
}

impl Renamer {
    pub fn new(options: RenameOptions) -> Self {
        let report = options.report_path.clone().map(ReportWriter::new);
        Self { options, report }
    }

    pub fn options(&self) -> &RenameOptions {
        &self.options
    }

    pub fn report(&self) -> Option<&ReportWriter> {
        self.report.as_ref()
    }

    /// Destination XML and PDF paths, in the source file's directory.
    pub fn destination_paths(&self, source: &Path, fields: &InvoiceFields) -> (PathBuf, PathBuf) {
        let stem = destination_stem(fields, &self.options);
        let directory = source.parent().unwrap_or_else(|| Path::new(""));

        (
            directory.join(format!("{}.{}", stem, XML_EXTENSION)),
            directory.join(format!("{}.{}", stem, PDF_EXTENSION)),
        )
    }

    /// Rename `source` and its `.pdf` companion. An existing destination is
    /// never overwritten; the XML and PDF are checked independently.
    pub fn rename(&self, source: &Path, fields: &InvoiceFields) -> Result<RenameOutcome> {
        let (xml_destination, pdf_destination) = self.destination_paths(source, fields);

        let xml_renamed = if xml_destination.exists() {
            debug!(
                "{} already exists, leaving {} in place",
                xml_destination.display(),
                source.display()
            );
            false
        } else {
            fs::rename(source, &xml_destination)?;
            true
        };

        let companion = rename_companion(&source.with_extension(PDF_EXTENSION), pdf_destination)?;

        let segments = name_segments(fields, &self.options);
        if let Some(ref report) = self.report {
            report.append(&segments)?;
        }

        Ok(RenameOutcome {
            source: source.to_path_buf(),
            destination: xml_destination,
            xml_renamed,
            companion,
            segments,
        })
    }
}

fn rename_companion(pdf_source: &Path, pdf_destination: PathBuf) -> Result<CompanionStatus> {
    if pdf_destination.exists() {
        debug!("{} already exists", pdf_destination.display());
        return Ok(CompanionStatus::Skipped(pdf_destination));
    }

    if !pdf_source.is_file() {
        return Ok(CompanionStatus::Absent);
    }

    fs::rename(pdf_source, &pdf_destination)?;
    Ok(CompanionStatus::Renamed(pdf_destination))
}
