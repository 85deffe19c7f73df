//! Application layer - Use cases and orchestration

pub mod configure_divider;
pub mod insert_divider;
pub mod service;

pub use configure_divider::{configure_divider, TOKEN_PROMPT};
pub use insert_divider::{insert_divider, render_statement};
pub use service::{Command, CommandService};
