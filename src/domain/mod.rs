//! Domain layer - Divider construction and print statement selection

pub mod divider;
pub mod language;

pub use divider::{build_divider, DividerToken, DEFAULT_TOKEN, PRINT_WIDTH};
pub use language::{print_statement, Language, StatementTemplate};
