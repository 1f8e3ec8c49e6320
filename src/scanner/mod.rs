pub mod file_filter;
pub mod target_scanner;

pub use file_filter::SuffixFilter;
pub use target_scanner::{TargetFile, TargetScanner};
