//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "print-divider")]
#[command(about = "Insert a language-appropriate divider print statement", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: <config dir>/print-divider/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The document acting as the active editor
#[derive(Args, Debug, Clone, Default)]
pub struct EditorArgs {
    /// File to edit; without it there is no active editor
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Language id (default: guessed from the file extension)
    #[arg(short, long, value_name = "ID")]
    pub language: Option<String>,

    /// Cursor line, 1-based (default: end of file)
    #[arg(long)]
    pub line: Option<usize>,

    /// Cursor column in characters, 1-based (default: 1)
    #[arg(long)]
    pub column: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set the divider token
    Configure {
        #[command(flatten)]
        editor: EditorArgs,

        /// New token; prompts on stdin when omitted
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Insert a divider print statement at the cursor
    Insert {
        #[command(flatten)]
        editor: EditorArgs,
    },

    /// Print the statement that insert would produce
    Preview {
        /// Language id (unknown ids give the bare divider)
        #[arg(short, long, default_value = "plaintext")]
        language: String,
    },

    /// Show the current divider token
    Show,

    /// List languages with a known print statement
    Languages,
}
