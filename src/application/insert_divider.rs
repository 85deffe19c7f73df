//! Insert divider use case

use crate::domain::{print_statement, DividerToken, PRINT_WIDTH};
use crate::error::{PrintDividerError, Result};
use crate::infrastructure::{ConfigStore, EditorHost, TextEditor};

/// The print statement for `language_id` using the given token
pub fn render_statement(token: &DividerToken, language_id: &str) -> String {
    let divider = token.divider(PRINT_WIDTH);
    print_statement(language_id, &divider)
}

/// Insert a print-divider statement at the active editor's cursor.
/// Returns the inserted text.
pub fn insert_divider<S, H>(store: &S, host: &mut H) -> Result<String>
where
    S: ConfigStore,
    H: EditorHost,
{
    let editor = host
        .active_editor()
        .ok_or(PrintDividerError::NoActiveEditor)?;

    let config = store.load()?;
    let statement = render_statement(&config.token, editor.language_id());
    tracing::debug!(
        language = editor.language_id(),
        token = %config.token,
        "rendered print statement"
    );

    editor.insert_at_cursor(&statement)?;
    Ok(statement)
}
