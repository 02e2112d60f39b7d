pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod renamer;
pub mod ui;

// Public API re-exports
pub use batch::BatchSummary;
pub use cli::{resolve_inputs, Cli, OutputFormat};
pub use config::{CliOverrides, Config, DisplayConfig, NamingConfig, ReportConfig};
pub use error::{RenameCfdError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{extract_fields, parse_fields, InvoiceFields, SchemaVariant};
pub use renamer::{CompanionStatus, RenameOptions, RenameOutcome, Renamer, ReportWriter};
pub use ui::{OutputFormatter, OutputMode};

use log::info;
use std::path::{Path, PathBuf};

/// Main library interface: renames a batch of invoices with one configuration.
pub struct RenameCfd {
    config: Config,
    output_formatter: OutputFormatter,
}

impl RenameCfd {
    pub fn new(config: Config, output_mode: OutputMode, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, config.display.verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create RenameCfd instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(config, output_mode, cli_args.quiet))
    }

    /// Rename every invoice in `inputs`, in order.
    ///
    /// The report (if any) is emptied once before the first file. Missing
    /// files and per-file failures are reported and counted; they never stop
    /// the batch. Only a failure to prepare the report is returned as an error.
    pub fn run(&self, inputs: &[PathBuf]) -> Result<BatchSummary> {
        let renamer = Renamer::new(self.config.rename_options());
        if let Some(report) = renamer.report() {
            report.prepare()?;
        }

        let mut summary = BatchSummary::new(inputs.len());
        info!("Processing {} input file(s)", inputs.len());

        for input in inputs {
            if !input.is_file() {
                let error = RenameCfdError::MissingFile {
                    path: input.display().to_string(),
                };
                self.output_formatter.missing_file(&error);
                summary.record_missing(input);
                continue;
            }

            match Self::process_file(&renamer, input) {
                Ok(outcome) => {
                    if outcome.was_skipped() {
                        self.output_formatter.info(&format!(
                            "{} already exists, {} left in place",
                            outcome.destination.display(),
                            outcome.source.display()
                        ));
                    }
                    self.output_formatter.print_rename(&outcome);
                    summary.record_outcome(&outcome);
                }
                Err(e) => {
                    self.output_formatter.file_error(input, &e);
                    summary.record_error(input, &e);
                }
            }
        }

        self.output_formatter.print_batch_summary(&summary);
        Ok(summary)
    }

    fn process_file(renamer: &Renamer, path: &Path) -> Result<RenameOutcome> {
        let fields = extract_fields(path)?;
        renamer.rename(path, &fields)
    }

    /// Write the default configuration to `output_path`.
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        Config::default().save_to_file(output_path)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &RenameCfdError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
