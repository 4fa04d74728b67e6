//! Testing infrastructure for cybercell integration tests.
//!
//! - `TestWorld`: an isolated data directory plus command configuration
//! - `assertions`: checks over the JSON output of `render`, `resolve` and `routes`

pub mod assertions;
pub mod world;

pub use world::{CliResult, TestWorld};
