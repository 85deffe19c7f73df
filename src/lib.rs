//! print-divider - Insert divider print statements
//!
//! Builds an 80-character divider line from a configurable token and wraps
//! it in the print statement of the active document's language.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PrintDividerError;
