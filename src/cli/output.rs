//! Output formatting utilities

use crate::domain::Language;
use crate::infrastructure::DividerConfig;

/// Format the current configuration for display
pub fn format_config(config: &DividerConfig) -> String {
    let mut output = format!("token = \"{}\"\n", config.token);
    if let Some(updated) = config.updated {
        output.push_str(&format!("updated = {}\n", updated.to_rfc3339()));
    }
    output
}

/// Format the supported languages, one `id  example` pair per line
pub fn format_language_list(languages: &[Language]) -> String {
    let width = languages
        .iter()
        .map(|lang| lang.id().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for language in languages {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            language.id(),
            language.template().render("..."),
            width = width
        ));
    }
    output
}
