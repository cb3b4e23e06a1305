pub mod colorize;
pub mod confirm;
pub mod log;

pub use colorize::colorize;
pub use confirm::confirm;
pub use log::{LogLevel, Logger};
