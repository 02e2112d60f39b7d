use crate::batch::BatchSummary;
use crate::error::{RenameCfdError, UserFriendlyError};
use crate::renamer::{CompanionStatus, RenameOutcome};
use console::{style, Emoji, Term};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: bool, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose: verbose && !quiet,
            quiet,
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Warning, message),
            OutputMode::Json => self.print_json_message("warning", message),
            OutputMode::Plain => println!("WARNING: {}", message),
        }
    }

    pub fn info(&self, message: &str) {
        if !self.verbose {
            return;
        }

        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Info, message),
            OutputMode::Json => self.print_json_message("info", message),
            OutputMode::Plain => println!("INFO: {}", message),
        }
    }

    /// `<old> => <new>` for one invoice; printed only in verbose mode.
    pub fn print_rename(&self, outcome: &RenameOutcome) {
        if !self.verbose {
            return;
        }

        match self.mode {
            OutputMode::Json => {
                let pdf = match outcome.companion {
                    CompanionStatus::Renamed(ref path) => {
                        serde_json::json!({ "status": "renamed", "path": path.display().to_string() })
                    }
                    CompanionStatus::Skipped(ref path) => {
                        serde_json::json!({ "status": "skipped", "path": path.display().to_string() })
                    }
                    CompanionStatus::Absent => serde_json::json!({ "status": "absent" }),
                };
                self.print_json_object(&serde_json::json!({
                    "type": "rename",
                    "source": outcome.source.display().to_string(),
                    "destination": outcome.destination.display().to_string(),
                    "xml_renamed": outcome.xml_renamed,
                    "pdf": pdf,
                }));
            }
            _ => println!(
                "{} => {}",
                outcome.source.display(),
                outcome.destination.display()
            ),
        }
    }

    pub fn missing_file(&self, error: &RenameCfdError) {
        self.warning(&error.user_message());
    }

    /// Per-file failure; the batch goes on.
    pub fn file_error(&self, path: &Path, error: &RenameCfdError) {
        self.error(&format!("{}: {}", path.display(), error.user_message()));
    }

    pub fn print_user_friendly_error(&self, error: &RenameCfdError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    eprintln!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    pub fn print_batch_summary(&self, summary: &BatchSummary) {
        if !self.verbose {
            return;
        }

        match self.mode {
            OutputMode::Human => self.print_human_summary(summary),
            OutputMode::Json => {
                let mut value = serde_json::to_value(summary).unwrap_or_default();
                if let Some(object) = value.as_object_mut() {
                    object.insert("type".to_string(), "summary".into());
                    object.insert(
                        "duration_ms".to_string(),
                        (summary.elapsed().as_millis() as u64).into(),
                    );
                }
                self.print_json_object(&value);
            }
            OutputMode::Plain => {
                println!("COMPLETED: {} of {} files", summary.files_processed, summary.total_files);
                println!("Renamed: {}", summary.renamed);
                println!("Skipped: {}", summary.skipped);
                println!("PDFs renamed: {}", summary.pdfs_renamed);
                if summary.has_problems() {
                    println!("Missing: {}", summary.missing.len());
                    println!("Errors: {}", summary.errors.len());
                }
            }
        }
    }

    fn print_human_summary(&self, summary: &BatchSummary) {
        println!();
        self.print_separator();

        let headline = format!(
            "Processed {} of {} files in {}",
            summary.files_processed,
            summary.total_files,
            format_duration(summary.elapsed())
        );
        if self.use_colors {
            println!("{}{}", CHECKMARK, style(headline).green().bold());
        } else {
            println!("✓ {}", headline);
        }

        println!("  Renamed:       {}", summary.renamed);
        println!("  Already named: {}", summary.skipped);
        println!("  PDFs renamed:  {}", summary.pdfs_renamed);
        if !summary.missing.is_empty() {
            println!("  Missing:       {}", summary.missing.len());
        }
        if !summary.errors.is_empty() {
            println!("  Errors:        {}", summary.errors.len());
        }

        self.print_separator();
    }

    fn print_separator(&self) {
        if self.use_colors {
            println!("{}", style("─".repeat(60)).dim());
        } else {
            println!("{}", "-".repeat(60));
        }
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        #[allow(clippy::type_complexity)]
        let (emoji, color_fn): (Emoji, Box<dyn Fn(&str) -> console::StyledObject<&str>>) =
            match msg_type {
                MessageType::Error => (CROSS, Box::new(|msg| style(msg).red().bold())),
                MessageType::Warning => (WARNING, Box::new(|msg| style(msg).yellow().bold())),
                MessageType::Info => (INFO, Box::new(|msg| style(msg).cyan())),
            };

        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, color_fn(message)),
                _ => println!("{}{}", emoji, color_fn(message)),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error => eprintln!("{} {}", prefix, message),
                _ => println!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Error,
    Warning,
    Info,
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
