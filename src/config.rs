use crate::error::{Result, StripError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Glyphs removed when no emoji set is configured.
pub const DEFAULT_EMOJI_SET: &[&str] = &[
    "\u{1F3D7}\u{FE0F}", // building construction
    "\u{1F4CA}",         // bar chart
    "\u{2705}",          // check mark button
    "\u{1F4C1}",         // file folder
    "\u{1F4C4}",         // page facing up
    "\u{274C}",          // cross mark
    "\u{1F680}",         // rocket
    "\u{1F4E6}",         // package
    "\u{1F6E0}\u{FE0F}", // hammer and wrench
    "\u{1F527}",         // wrench
    "\u{1F3AF}",         // direct hit
    "\u{26A1}",          // high voltage
    "\u{1F504}",         // counterclockwise arrows
    "\u{1F3A8}",         // artist palette
    "\u{1F4CB}",         // clipboard
    "\u{1F464}",         // bust in silhouette
    "\u{1F4BB}",         // laptop
    "\u{1F3C6}",         // trophy
    "\u{1F4BC}",         // briefcase
    "\u{1F517}",         // link
    "\u{1F4DD}",         // memo
    "\u{1F319}",         // crescent moon
    "\u{2728}",          // sparkles
    "\u{1F4F1}",         // mobile phone
    "\u{1F91D}",         // handshake
    "\u{1F4D6}",         // open book
    "\u{1F5A5}\u{FE0F}", // desktop computer
    "\u{2601}\u{FE0F}",  // cloud
    "\u{1F310}",         // globe with meridians
    "\u{1F3E0}",         // house
    "\u{1F4BE}",         // floppy disk
    "\u{1F3F7}\u{FE0F}", // label
    "\u{1F426}",         // bird
    "\u{1F4A1}",         // light bulb
    "\u{1F6E1}\u{FE0F}", // shield
];

pub const DEFAULT_SUFFIX: &str = ".md";
pub const DEFAULT_ENCODING: &str = "utf-8";

const DEFAULT_CONFIG_PATHS: &[&str] = &["emoji-strip.toml", ".emoji-strip.toml"];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub target_directory: PathBuf,
    pub emoji_set: Vec<String>,
    pub suffix: String,
    pub encoding: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_directory: PathBuf::from("."),
            emoji_set: DEFAULT_EMOJI_SET.iter().map(|e| e.to_string()).collect(),
            suffix: DEFAULT_SUFFIX.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(StripError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| StripError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| StripError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                for default_path in DEFAULT_CONFIG_PATHS {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref directory) = cli_args.target_directory {
            self.target_directory = directory.clone();
        }

        if let Some(ref emojis) = cli_args.emoji_set {
            self.emoji_set = emojis.clone();
        }

        if let Some(ref suffix) = cli_args.suffix {
            self.suffix = suffix.clone();
        }

        if let Some(ref encoding) = cli_args.encoding {
            self.encoding = encoding.trim().to_string();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| StripError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| StripError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.emoji_set.is_empty() {
            return Err(StripError::InvalidEmojiSet {
                message: "at least one emoji must be specified".to_string(),
            });
        }

        // An empty entry would match between every pair of characters.
        if let Some(index) = self.emoji_set.iter().position(|e| e.is_empty()) {
            return Err(StripError::InvalidEmojiSet {
                message: format!("entry {} is an empty string", index + 1),
            });
        }

        if self.suffix.is_empty() {
            return Err(StripError::Config {
                message: "File suffix must not be empty".to_string(),
            });
        }

        crate::stripper::TextEncoding::for_label(&self.encoding)?;

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub target_directory: Option<PathBuf>,
    pub emoji_set: Option<Vec<String>>,
    pub suffix: Option<String>,
    pub encoding: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_directory(mut self, directory: Option<PathBuf>) -> Self {
        self.target_directory = directory;
        self
    }

    pub fn with_emoji_set(mut self, emojis: Option<Vec<String>>) -> Self {
        self.emoji_set = emojis;
        self
    }

    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn with_encoding(mut self, encoding: Option<String>) -> Self {
        self.encoding = encoding;
        self
    }
}
