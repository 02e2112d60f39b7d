use crate::error::{RenameCfdError, Result};
use crate::renamer::RenameOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub naming: NamingConfig,
    pub report: ReportConfig,
    pub display: DisplayConfig,
}

/// Optional filename segments.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingConfig {
    pub receiver_tax_id: bool,
    pub discount: bool,
    pub uuid: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub verbose: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RenameCfdError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| RenameCfdError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| RenameCfdError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["renamecfd.toml", ".renamecfd.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    /// Flags can only switch options on; `--output` replaces the report path.
    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        self.naming.receiver_tax_id |= cli_args.receiver_tax_id;
        self.naming.discount |= cli_args.discount;
        self.naming.uuid |= cli_args.uuid;
        self.display.verbose |= cli_args.verbose;

        if let Some(ref report_path) = cli_args.report_path {
            self.report.path = Some(report_path.clone());
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| RenameCfdError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| RenameCfdError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref report_path) = self.report.path {
            if report_path.is_dir() {
                return Err(RenameCfdError::Config {
                    message: format!(
                        "Report path is a directory: {}",
                        report_path.display()
                    ),
                });
            }

            if let Some(parent) = report_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(RenameCfdError::Config {
                        message: format!(
                            "Report directory does not exist: {}",
                            parent.display()
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions::new()
            .with_receiver_tax_id(self.naming.receiver_tax_id)
            .with_discount(self.naming.discount)
            .with_uuid(self.naming.uuid)
            .with_report_path(self.report.path.clone())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub receiver_tax_id: bool,
    pub discount: bool,
    pub uuid: bool,
    pub verbose: bool,
    pub report_path: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_receiver_tax_id(mut self, enabled: bool) -> Self {
        self.receiver_tax_id = enabled;
        self
    }

    pub fn with_discount(mut self, enabled: bool) -> Self {
        self.discount = enabled;
        self
    }

    pub fn with_uuid(mut self, enabled: bool) -> Self {
        self.uuid = enabled;
        self
    }

    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    pub fn with_report_path(mut self, path: Option<PathBuf>) -> Self {
        self.report_path = path;
        self
    }
}
