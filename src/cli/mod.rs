//! Command line interface for the spellcheckrs binary.

pub mod args;
pub mod commands;
pub mod prompt;

pub use args::*;
pub use commands::*;
