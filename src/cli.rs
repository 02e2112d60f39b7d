use crate::config::{CliOverrides, Config};
use crate::error::{RenameCfdError, Result};
use clap::{Parser, ValueEnum};
use log::warn;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "renamecfd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rename CFD/CFDI electronic invoices to a canonical filename")]
#[command(
    long_about = "RenameCFD reads Mexican CFD/CFDI invoice XML files and renames each one \
                  (and a .pdf with the same name, if present) to\n\
                  [RFCreceptor_]fecha_RFCemisor_serie_folio_subTotal_iva_total[_descuento]_tipoDeComprobante[_UUID]_.xml"
)]
#[command(after_help = "EXAMPLES:\n  \
    renamecfd factura.xml\n  \
    renamecfd -v -d \"facturas/*.xml\"\n  \
    renamecfd -r -U -o reporte.csv *.xml")]
pub struct Cli {
    /// Invoice XML files, or a single quoted glob pattern
    #[arg(value_name = "archivocfd.xml|*.xml")]
    pub files: Vec<String>,

    /// Add the invoice discount to the name
    #[arg(short, long)]
    pub descuentos: bool,

    /// Save a CSV report of the processed invoices
    #[arg(short, long, value_name = "archivoSalida.csv")]
    pub output: Option<PathBuf>,

    /// Prefix each name with the receiver's RFC
    #[arg(short, long)]
    pub receptorrfc: bool,

    /// Show every renamed file
    #[arg(short, long)]
    pub verbose: bool,

    /// Add the fiscal stamp UUID to the name
    #[arg(short = 'U', long = "UUID")]
    pub uuid: bool,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for console messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Quiet mode (suppress warnings and progress output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_receiver_tax_id(self.receptorrfc)
            .with_discount(self.descuentos)
            .with_uuid(self.uuid)
            .with_verbose(self.verbose)
            .with_report_path(self.output.clone())
    }

    pub fn has_inputs(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Turn command arguments into file paths. A lone argument containing `*` is
/// expanded as a glob pattern; anything else is taken literally.
pub fn resolve_inputs(args: &[String]) -> Result<Vec<PathBuf>> {
    match args {
        [pattern] if pattern.contains('*') => expand_pattern(pattern),
        _ => Ok(args.iter().map(PathBuf::from).collect()),
    }
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| RenameCfdError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.msg.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => warn!("Skipping unreadable path {}: {}", e.path().display(), e),
        }
    }

    Ok(paths)
}
