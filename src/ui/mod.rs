pub mod output;
pub mod signals;

pub use output::{OutputFormatter, OutputMode, DONE_MESSAGE};
pub use signals::GracefulShutdown;
