use std::path::PathBuf;

/// Switches that shape the generated filename and the per-file side effects.
/// Fixed for the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOptions {
    /// Prefix the name with the receiver's RFC (`-r`).
    pub receiver_tax_id: bool,
    /// Add the discount segment (`-d`).
    pub discount: bool,
    /// Add the fiscal stamp UUID when the document has one (`-U`).
    pub uuid: bool,
    /// Append one comma-separated row per invoice to this file (`-o`).
    pub report_path: Option<PathBuf>,
}

impl RenameOptions {
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

    pub fn with_report_path(mut self, path: Option<PathBuf>) -> Self {
        self.report_path = path;
        self
    }
}
