//! Divider token and divider line construction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token used when none is configured or the configured one is empty
pub const DEFAULT_TOKEN: &str = "-";

/// Width of every generated divider, in characters
pub const PRINT_WIDTH: usize = 80;

/// The string repeated to build a divider line.
///
/// Never empty: an empty string collapses to [`DEFAULT_TOKEN`] on
/// construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DividerToken(String);

impl DividerToken {
    /// Create a token, falling back to the default for an empty string
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            DividerToken::default()
        } else {
            DividerToken(token)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build a divider of `width` characters from this token
    pub fn divider(&self, width: usize) -> String {
        build_divider(&self.0, width)
    }
}

impl Default for DividerToken {
    fn default() -> Self {
        DividerToken(DEFAULT_TOKEN.to_string())
    }
}

impl From<String> for DividerToken {
    fn from(token: String) -> Self {
        DividerToken::new(token)
    }
}

impl From<&str> for DividerToken {
    fn from(token: &str) -> Self {
        DividerToken::new(token)
    }
}

impl From<DividerToken> for String {
    fn from(token: DividerToken) -> Self {
        token.0
    }
}

impl fmt::Display for DividerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repeat `token` and truncate the result to exactly `width` characters.
///
/// Widths are counted in `char`s, so multi-byte tokens never get split in
/// the middle of a character. An empty token builds from [`DEFAULT_TOKEN`].
pub fn build_divider(token: &str, width: usize) -> String {
    let token = if token.is_empty() { DEFAULT_TOKEN } else { token };
    token.chars().cycle().take(width).collect()
}
