pub mod file_renamer;
pub mod naming;
pub mod options;
pub mod report;

pub use file_renamer::{CompanionStatus, RenameOutcome, Renamer};
pub use naming::{destination_stem, name_segments};
pub use options::RenameOptions;
pub use report::ReportWriter;
