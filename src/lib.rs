//! Facade over the [`cssel`] parser crate.
//!
//! Re-exports the parser and adds [`log_init`], the logger bootstrap used by
//! the demos and by applications that want to see the parser's trace output.

pub mod log_init;

pub use cssel::{Checkpoint, CsselError, Cursor, NoMatch, cursor, error, parser};
pub use cssel::parser::{parse_stylesheet, read_stylesheet};
pub use log_init::{LoggerConfig, init_logger};

// Re-export the log crate so users can use cssel_rs::log::info!, etc.
pub use log;
