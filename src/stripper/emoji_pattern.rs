use crate::error::{Result, StripError};
use regex::Regex;

/// Result of running the text transform over one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    pub emojis_removed: usize,
}

/// Literal alternation over an emoji set, plus the space-run collapser that
/// runs after removal.
#[derive(Debug, Clone)]
pub struct EmojiPattern {
    emojis: Regex,
    space_run: Regex,
    emoji_count: usize,
}

impl EmojiPattern {
    pub fn new<S: AsRef<str>>(emoji_set: &[S]) -> Result<Self> {
        if emoji_set.is_empty() {
            return Err(StripError::InvalidEmojiSet {
                message: "at least one emoji must be specified".to_string(),
            });
        }

        let mut alternatives = Vec::with_capacity(emoji_set.len());
        for (index, emoji) in emoji_set.iter().enumerate() {
            let emoji = emoji.as_ref();
            if emoji.is_empty() {
                return Err(StripError::InvalidEmojiSet {
                    message: format!("entry {} is an empty string", index + 1),
                });
            }
            alternatives.push(regex::escape(emoji));
        }

        let emojis = Regex::new(&alternatives.join("|")).map_err(|e| {
            StripError::InvalidEmojiSet {
                message: format!("failed to build pattern: {}", e),
            }
        })?;

        // ASCII space only; tabs and newlines are left alone.
        let space_run = Regex::new(" {2,}").map_err(|e| StripError::InvalidEmojiSet {
            message: format!("failed to build space pattern: {}", e),
        })?;

        Ok(Self {
            emojis,
            space_run,
            emoji_count: emoji_set.len(),
        })
    }

    pub fn emoji_count(&self) -> usize {
        self.emoji_count
    }

    /// Removes every non-overlapping occurrence, leftmost-first.
    pub fn strip(&self, text: &str) -> (String, usize) {
        let mut removed = 0;
        let stripped = self.emojis.replace_all(text, |_: &regex::Captures<'_>| {
            removed += 1;
            ""
        });
        (stripped.into_owned(), removed)
    }

    pub fn collapse_spaces(&self, text: &str) -> String {
        self.space_run.replace_all(text, " ").into_owned()
    }

    pub fn transform(&self, text: &str) -> Transformed {
        let (stripped, emojis_removed) = self.strip(text);
        Transformed {
            text: self.collapse_spaces(&stripped),
            emojis_removed,
        }
    }
}
