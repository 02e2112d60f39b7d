use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameCfdError {
    #[error("File does not exist: {path}")]
    MissingFile { path: String },

    #[error("Malformed XML in {path}: {source}")]
    Xml {
        path: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("{path} is not valid {encoding} text")]
    Encoding { path: String, encoding: String },

    #[error("Missing element <{element}>")]
    MissingElement { element: String },

    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error("Unsupported CFD version: {version}")]
    UnsupportedVersion { version: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write report {path}: {message}")]
    Report { path: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl RenameCfdError {
    pub(crate) fn missing_attribute(element: &str, attribute: &str) -> Self {
        RenameCfdError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub(crate) fn report(path: &Path, error: csv::Error) -> Self {
        RenameCfdError::Report {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for RenameCfdError {
    fn user_message(&self) -> String {
        match self {
            RenameCfdError::MissingFile { path } => {
                format!("The file {} does not exist.", path)
            }
            RenameCfdError::Xml { path, source } => {
                format!("Could not parse {}: {}", path, source)
            }
            RenameCfdError::Encoding { path, encoding } => {
                format!("Could not decode {} as {}", path, encoding)
            }
            RenameCfdError::MissingElement { element } => {
                format!("The invoice has no <{}> element", element)
            }
            RenameCfdError::MissingAttribute { element, attribute } => {
                format!("The <{}> element has no '{}' attribute", element, attribute)
            }
            RenameCfdError::UnsupportedVersion { version } => {
                format!("The XML file is not a valid CFD version: '{}'", version)
            }
            RenameCfdError::Report { path, message } => {
                format!("Could not write report {}: {}", path, message)
            }
            RenameCfdError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            RenameCfdError::UnsupportedVersion { .. } => Some(
                "Only CFD versions 1.0, 2.0, 2.2 and CFDI versions 3.0, 3.2 are supported.".to_string()
            ),
            RenameCfdError::Xml { .. } => Some(
                "Check that the file is a complete, well-formed CFD/CFDI document.".to_string()
            ),
            RenameCfdError::Encoding { .. } => Some(
                "Check that the encoding in the <?xml ...?> declaration matches the file's actual encoding.".to_string()
            ),
            RenameCfdError::Config { .. } => Some(
                "Check your configuration file syntax, or run with --generate-config to create a fresh one.".to_string()
            ),
            RenameCfdError::InvalidPattern { .. } => Some(
                "Quote the pattern so the shell does not expand it, e.g. renamecfd \"facturas/*.xml\"".to_string()
            ),
            RenameCfdError::Report { .. } => Some(
                "Ensure the report path is writable and is not a directory.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for RenameCfdError {
    fn from(error: toml::de::Error) -> Self {
        RenameCfdError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenameCfdError>;
