use crate::error::{StripError, UserFriendlyError};
use crate::stripper::{FileOutcome, StripReport};
use console::{style, Emoji, Term};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

pub const DONE_MESSAGE: &str = "Done removing emojis!";

// Emojis with text fallbacks
static CROSS: Emoji = Emoji("✘ ", "x ");
static WARNING: Emoji = Emoji("⚠ ", "! ");

/// Renders the per-file lines and the closing line on stdout.
///
/// Human and plain modes print exactly `Processed: <path>`,
/// `Error processing <path>: <message>` and `Done removing emojis!`; human
/// mode only adds color when the terminal supports it. JSON mode prints one
/// object per line instead.
pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported(),
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
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
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Warning, message),
            OutputMode::Json => self.print_json_message("warning", message),
            OutputMode::Plain => eprintln!("WARNING: {}", message),
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}", style(message).cyan());
                    } else {
                        println!("{}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    // Per-file protocol lines
    pub fn print_file_outcome(&self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Processed {
                path,
                emojis_removed,
                bytes_written,
            } => {
                if self.quiet {
                    return;
                }
                match self.mode {
                    OutputMode::Human if self.use_colors => {
                        println!("{} {}", style("Processed:").green(), path.display());
                    }
                    OutputMode::Human | OutputMode::Plain => {
                        println!("Processed: {}", path.display());
                    }
                    OutputMode::Json => self.print_json_object(&serde_json::json!({
                        "type": "processed",
                        "path": path.display().to_string(),
                        "emojis_removed": emojis_removed,
                        "bytes_written": bytes_written,
                        "timestamp": chrono::Utc::now().to_rfc3339()
                    })),
                }
            }
            FileOutcome::Failed {
                path,
                kind,
                message,
            } => match self.mode {
                OutputMode::Human if self.use_colors => {
                    println!(
                        "{} {}: {}",
                        style("Error processing").red().bold(),
                        path.display(),
                        message
                    );
                }
                OutputMode::Human | OutputMode::Plain => {
                    println!("Error processing {}: {}", path.display(), message);
                }
                OutputMode::Json => self.print_json_object(&serde_json::json!({
                    "type": "error",
                    "path": path.display().to_string(),
                    "kind": kind,
                    "message": message,
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            },
        }
    }

    pub fn print_done(&self) {
        match self.mode {
            OutputMode::Human if self.use_colors => {
                println!("{}", style(DONE_MESSAGE).green().bold());
            }
            OutputMode::Human | OutputMode::Plain => println!("{}", DONE_MESSAGE),
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "done",
                "message": DONE_MESSAGE,
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        }
    }

    // Summary and reporting
    pub fn print_strip_summary(&self, report: &StripReport) {
        match self.mode {
            OutputMode::Json => self.print_json_summary(report),
            _ if !self.should_show_message(1) => {}
            OutputMode::Human => self.print_human_summary(report),
            OutputMode::Plain => self.print_plain_summary(report),
        }
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &StripError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!("{}", style(format!("Suggestion: {}", suggestion)).cyan());
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

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        let emoji = match msg_type {
            MessageType::Error => &CROSS,
            MessageType::Warning => &WARNING,
        };

        let line = if self.use_colors {
            let styled = match msg_type {
                MessageType::Error => style(message).red().bold(),
                MessageType::Warning => style(message).yellow().bold(),
            };
            format!("{}{}", emoji, styled)
        } else {
            format!("{}{}", emoji, message)
        };

        eprintln!("{}", line);
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

    fn print_human_summary(&self, report: &StripReport) {
        let count = |n: usize| {
            if self.use_colors {
                style(n).cyan().bold().to_string()
            } else {
                n.to_string()
            }
        };

        println!();
        println!("  Directory:       {}", report.directory.display());
        println!("  Files processed: {}", count(report.processed_count()));
        println!("  Files failed:    {}", count(report.failed_count()));
        println!("  Emojis removed:  {}", count(report.emojis_removed()));
        println!("  Time taken:      {}", format_duration(report.elapsed));
        println!();
    }

    fn print_plain_summary(&self, report: &StripReport) {
        println!("Directory: {}", report.directory.display());
        println!("Files processed: {}", report.processed_count());
        println!("Files failed: {}", report.failed_count());
        println!("Emojis removed: {}", report.emojis_removed());
        println!("Duration: {:?}", report.elapsed);
    }

    fn print_json_summary(&self, report: &StripReport) {
        self.print_json_object(&serde_json::json!({
            "type": "summary",
            "directory": report.directory.display().to_string(),
            "files_processed": report.processed_count(),
            "files_failed": report.failed_count(),
            "emojis_removed": report.emojis_removed(),
            "interrupted": report.interrupted,
            "duration_ms": report.elapsed.as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Error,
    Warning,
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
