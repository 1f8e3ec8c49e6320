use crate::config::Config;
use crate::error::{FileErrorKind, Result, StripError};
use crate::scanner::{SuffixFilter, TargetFile, TargetScanner};
use crate::stripper::{EmojiPattern, TextEncoding};
use crate::ui::GracefulShutdown;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Processed {
        path: PathBuf,
        emojis_removed: usize,
        bytes_written: u64,
    },
    Failed {
        path: PathBuf,
        kind: FileErrorKind,
        message: String,
    },
}

impl FileOutcome {
    fn failed(path: &Path, error: &StripError) -> Self {
        FileOutcome::Failed {
            path: path.to_path_buf(),
            kind: error.file_error_kind(),
            message: error.file_message(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Processed { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Processed { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StripReport {
    pub directory: PathBuf,
    pub targets_found: usize,
    pub outcomes: Vec<FileOutcome>,
    pub elapsed: Duration,
    pub interrupted: bool,
}

impl StripReport {
    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.processed_count()
    }

    /// Targets never attempted because the run was interrupted.
    pub fn skipped_count(&self) -> usize {
        self.targets_found - self.outcomes.len()
    }

    pub fn emojis_removed(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::Processed { emojis_removed, .. } => *emojis_removed,
                FileOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Every target was rewritten and the run was not interrupted.
    pub fn is_clean(&self) -> bool {
        !self.interrupted && self.failed_count() == 0
    }
}

/// Rewrites target files in place with their emojis removed.
pub struct FileStripper {
    pattern: EmojiPattern,
    encoding: TextEncoding,
    scanner: TargetScanner,
}

impl FileStripper {
    pub fn new(pattern: EmojiPattern) -> Self {
        Self {
            pattern,
            encoding: TextEncoding::default(),
            scanner: TargetScanner::default(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let pattern = EmojiPattern::new(&config.emoji_set)?;
        let encoding = TextEncoding::for_label(&config.encoding)?;

        Ok(Self::new(pattern)
            .with_encoding(encoding)
            .with_suffix(config.suffix.clone()))
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.scanner = TargetScanner::new(SuffixFilter::new(suffix));
        self
    }

    pub fn process_directory(&self, dir: &Path) -> Result<StripReport> {
        self.process_directory_with(dir, None, None)
    }

    /// Lists `dir`, then strips each target in listing order.
    ///
    /// `outcome_callback` sees every outcome as soon as its file is done.
    /// When `shutdown` reports a stop request, the remaining files are
    /// skipped and the report is marked interrupted.
    pub fn process_directory_with(
        &self,
        dir: &Path,
        outcome_callback: Option<&dyn Fn(&FileOutcome)>,
        shutdown: Option<&GracefulShutdown>,
    ) -> Result<StripReport> {
        let start_time = Instant::now();
        let targets = self.scanner.scan_directory(dir)?;

        tracing::info!(
            directory = %dir.display(),
            targets = targets.len(),
            emojis = self.pattern.emoji_count(),
            encoding = self.encoding.name(),
            "stripping emojis"
        );

        let mut outcomes = Vec::with_capacity(targets.len());
        let mut interrupted = false;

        for target in &targets {
            if shutdown.is_some_and(|s| !s.is_running()) {
                tracing::warn!(
                    remaining = targets.len() - outcomes.len(),
                    "stop requested, skipping remaining files"
                );
                interrupted = true;
                break;
            }

            let outcome = self.strip_file(target);

            if let Some(callback) = outcome_callback {
                callback(&outcome);
            }
            outcomes.push(outcome);
        }

        Ok(StripReport {
            directory: dir.to_path_buf(),
            targets_found: targets.len(),
            outcomes,
            elapsed: start_time.elapsed(),
            interrupted,
        })
    }

    /// Never fails: errors become a `Failed` outcome for this file only.
    pub fn strip_file(&self, target: &TargetFile) -> FileOutcome {
        match self.rewrite(&target.path) {
            Ok((emojis_removed, bytes_written)) => {
                tracing::debug!(
                    path = %target.display_path(),
                    emojis_removed,
                    bytes_written,
                    "rewrote file"
                );
                FileOutcome::Processed {
                    path: target.path.clone(),
                    emojis_removed,
                    bytes_written,
                }
            }
            Err(e) => {
                tracing::debug!(path = %target.display_path(), error = %e, "failed to rewrite file");
                FileOutcome::failed(&target.path, &e)
            }
        }
    }

    fn rewrite(&self, path: &Path) -> Result<(usize, u64)> {
        let content = self.read_text(path)?;
        let transformed = self.pattern.transform(&content);
        let bytes = self.encoding.encode(&transformed.text, path)?;
        self.write_bytes(path, &bytes)?;

        Ok((transformed.emojis_removed, bytes.len() as u64))
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let mut file = fs::File::open(path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        self.encoding.decode(&bytes, path)
    }

    // Truncates in place; there is no backup and no atomic rename.
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}
