pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod scanner;
pub mod stripper;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, DEFAULT_EMOJI_SET};
pub use error::{FileErrorKind, Result, StripError, UserFriendlyError};

// Core functionality re-exports
pub use scanner::{SuffixFilter, TargetFile, TargetScanner};
pub use stripper::{EmojiPattern, FileOutcome, FileStripper, StripReport, TextEncoding};
pub use ui::{GracefulShutdown, OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface: one configured run over one directory.
pub struct EmojiStrip {
    config: Config,
    stripper: FileStripper,
    output_formatter: OutputFormatter,
    shutdown: GracefulShutdown,
}

impl EmojiStrip {
    /// Validates `config` and installs the Ctrl+C handler.
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        Self::with_shutdown(config, output_mode, verbose, quiet, GracefulShutdown::default())
    }

    /// Create an instance for testing (no signal handler registration)
    pub fn new_for_test(
        config: Config,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
    ) -> Result<Self> {
        Self::with_shutdown(
            config,
            output_mode,
            verbose,
            quiet,
            GracefulShutdown::new_for_test(),
        )
    }

    fn with_shutdown(
        config: Config,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
        shutdown: GracefulShutdown,
    ) -> Result<Self> {
        config.validate()?;
        let stripper = FileStripper::from_config(&config)?;
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Ok(Self {
            config,
            stripper,
            output_formatter,
            shutdown,
        })
    }

    /// Create an instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = OutputMode::from(&cli_args.output_format);

        Self::new(config, output_mode, cli_args.verbose, cli_args.quiet)
    }

    /// Strip the configured target directory, printing one line per file.
    ///
    /// A directory that cannot be listed is returned as an error before any
    /// line is printed. The closing line is only printed when every target
    /// was attempted.
    pub fn run(&self) -> Result<StripReport> {
        self.shutdown.check_shutdown()?;

        let directory = &self.config.target_directory;
        self.output_formatter
            .info(&format!("Stripping emojis in {}", directory.display()));

        let print_outcome = |outcome: &FileOutcome| {
            self.output_formatter.print_file_outcome(outcome);
        };

        let report = self.stripper.process_directory_with(
            directory,
            Some(&print_outcome),
            Some(&self.shutdown),
        )?;

        self.output_formatter.print_strip_summary(&report);

        if report.interrupted {
            self.output_formatter.warning(&format!(
                "Interrupted: {} of {} target files were not processed",
                report.skipped_count(),
                report.targets_found
            ));
        } else {
            self.output_formatter.print_done();
        }

        Ok(report)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if shutdown has been requested
    pub fn is_running(&self) -> bool {
        self.shutdown.is_running()
    }

    /// Request graceful shutdown
    pub fn request_shutdown(&self) {
        self.shutdown.request_shutdown();
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &StripError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Strip `emoji_set` from the Markdown files directly inside `dir`, with no
/// output. Suffix and encoding take their defaults.
pub fn process_directory<P, S>(dir: P, emoji_set: &[S]) -> Result<StripReport>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let pattern = EmojiPattern::new(emoji_set)?;
    FileStripper::new(pattern).process_directory(dir.as_ref())
}
