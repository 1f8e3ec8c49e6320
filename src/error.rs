use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot list directory {path}: {source}")]
    DirectoryListing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid emoji set: {message}")]
    InvalidEmojiSet { message: String },

    #[error("Unsupported text encoding: {label}")]
    UnsupportedEncoding { label: String },

    #[error("'{path}' is not valid {encoding} text")]
    Decode { path: String, encoding: String },

    #[error("'{path}' contains characters that cannot be written as {encoding}")]
    Encode { path: String, encoding: String },

    #[error("Operation was cancelled by user")]
    Cancelled,
}

impl StripError {
    /// Classifies an error raised inside the per-file boundary.
    pub fn file_error_kind(&self) -> FileErrorKind {
        match self {
            StripError::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => FileErrorKind::NotFound,
                std::io::ErrorKind::PermissionDenied => FileErrorKind::PermissionDenied,
                _ => FileErrorKind::Io,
            },
            StripError::Decode { .. } => FileErrorKind::Decode,
            StripError::Encode { .. } => FileErrorKind::Encode,
            _ => FileErrorKind::Io,
        }
    }

    /// The message printed after `Error processing <path>: `.
    ///
    /// IO errors surface with the bare platform message, the way the
    /// operating system reports them.
    pub fn file_message(&self) -> String {
        match self {
            StripError::Io(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileErrorKind {
    NotFound,
    PermissionDenied,
    Decode,
    Encode,
    Io,
}

impl std::fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileErrorKind::NotFound => "not found",
            FileErrorKind::PermissionDenied => "permission denied",
            FileErrorKind::Decode => "decode error",
            FileErrorKind::Encode => "encode error",
            FileErrorKind::Io => "io error",
        };
        f.write_str(name)
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for StripError {
    fn user_message(&self) -> String {
        match self {
            StripError::DirectoryListing { path, source } => {
                format!("Cannot read target directory {}: {}", path, source)
            }
            StripError::NotADirectory { path } => {
                format!("Target path is not a directory: {}", path)
            }
            StripError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            StripError::InvalidEmojiSet { message } => {
                format!("Invalid emoji set: {}", message)
            }
            StripError::UnsupportedEncoding { label } => {
                format!("Unsupported text encoding: {}", label)
            }
            StripError::Cancelled => "Operation was cancelled by user".to_string(),
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            StripError::DirectoryListing { .. } => Some(
                "Check that the directory exists and that you have permission to list it."
                    .to_string(),
            ),
            StripError::NotADirectory { .. } => Some(
                "Pass a directory, not a file. Files are selected from the directory by suffix."
                    .to_string(),
            ),
            StripError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config."
                    .to_string(),
            ),
            StripError::InvalidEmojiSet { .. } => Some(
                "Provide at least one non-empty emoji, e.g. --emoji 🚀 --emoji ✅".to_string(),
            ),
            StripError::UnsupportedEncoding { .. } => Some(
                "Use a WHATWG encoding label that can be written back, e.g. utf-8 or windows-1252."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
