//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod logging;
pub mod terminal;

pub use config::{ConfigStore, DividerConfig, FileConfigStore};
pub use editor::{EditorHost, FileEditor, Position, TextEditor, PLAINTEXT};
pub use logging::init_logging;
pub use terminal::TerminalHost;
