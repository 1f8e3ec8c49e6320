use std::path::Path;

/// Selects target files by an exact, case-sensitive file name suffix.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
    suffix: String,
}

impl SuffixFilter {
    pub fn new<S: Into<String>>(suffix: S) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn is_target(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SUFFIX)
    }
}
