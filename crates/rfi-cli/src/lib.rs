//! RFI Review CLI - library surface for the `rfi-review` binary.

pub mod cli;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::Formatter;
