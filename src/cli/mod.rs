//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, EditorArgs};
pub use output::{format_config, format_language_list};
