pub mod emoji_pattern;
pub mod encoding;
pub mod file_stripper;

pub use emoji_pattern::{EmojiPattern, Transformed};
pub use encoding::TextEncoding;
pub use file_stripper::{FileOutcome, FileStripper, StripReport};
