//! Cyber Cell in the terminal.
//!
//! The site's pages, navigation and effects come from the runtime crates;
//! this crate adds the command line, the console output and the
//! interactive browser.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
