//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the memelyco binary.

mod check;
mod commands;
mod list;
mod upload;

pub use check::handle_check;
pub use commands::{Cli, Commands, OutputFormat};
pub use list::handle_list;
pub use upload::handle_upload;
