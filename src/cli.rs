use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emoji-strip")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Strip emoji glyphs from the Markdown files in a directory")]
#[command(
    long_about = "emoji-strip rewrites every Markdown file directly inside a directory, \
                  removing a configured set of emoji glyphs and collapsing the runs of \
                  spaces left behind. Files are changed in place and no backup is kept."
)]
#[command(after_help = "EXAMPLES:\n  \
    emoji-strip ./articles\n  \
    emoji-strip ./articles --emoji 🚀,✅ --emoji 🔧\n  \
    emoji-strip --config emoji-strip.toml --output-format json\n  \
    emoji-strip --generate-config --config emoji-strip.toml")]
pub struct Cli {
    /// Directory whose Markdown files are rewritten (defaults to the configured target_directory)
    pub directory: Option<PathBuf>,

    /// Emoji to remove, replacing the configured set (repeatable or comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub emoji: Option<Vec<String>>,

    /// File name suffix that selects target files
    #[arg(short, long, help = "File name suffix to process (default: .md)")]
    pub suffix: Option<String>,

    /// Text encoding label used to read and write files
    #[arg(long, help = "Text encoding of the files (default: utf-8)")]
    pub encoding: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors and the final line)
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
    /// JSON lines output
    Json,
    /// Plain text output
    Plain,
}

impl From<&OutputFormat> for OutputMode {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
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
        let emoji_set = self.emoji.as_ref().map(|emojis| {
            emojis
                .iter()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect()
        });

        CliOverrides::new()
            .with_target_directory(self.directory.clone())
            .with_emoji_set(emoji_set)
            .with_suffix(self.suffix.clone())
            .with_encoding(self.encoding.clone())
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
