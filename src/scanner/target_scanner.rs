use crate::error::{Result, StripError};
use crate::scanner::file_filter::SuffixFilter;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    pub path: PathBuf,
}

impl TargetFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Lists the direct children of a directory that pass the suffix filter.
pub struct TargetScanner {
    filter: SuffixFilter,
}

impl TargetScanner {
    pub fn new(filter: SuffixFilter) -> Self {
        Self { filter }
    }

    /// Entries come back in the order the platform lists them.
    ///
    /// Failing to open or list `root` itself is fatal. A single unreadable
    /// entry is logged and skipped.
    pub fn scan_directory<P: AsRef<Path>>(&self, root: P) -> Result<Vec<TargetFile>> {
        let root_path = root.as_ref();

        let metadata = fs::metadata(root_path).map_err(|source| StripError::DirectoryListing {
            path: root_path.display().to_string(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(StripError::NotADirectory {
                path: root_path.display().to_string(),
            });
        }

        let mut targets = Vec::new();

        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(StripError::DirectoryListing {
                        path: root_path.display().to_string(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };

            if self.filter.is_target(entry.path()) {
                targets.push(TargetFile::new(entry.into_path()));
            }
        }

        tracing::debug!(
            directory = %root_path.display(),
            targets = targets.len(),
            "scanned target directory"
        );

        Ok(targets)
    }
}

impl Default for TargetScanner {
    fn default() -> Self {
        Self::new(SuffixFilter::default())
    }
}
