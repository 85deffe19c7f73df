//! Configure divider token use case

use crate::domain::DividerToken;
use crate::error::{PrintDividerError, Result};
use crate::infrastructure::{ConfigStore, EditorHost};

pub const TOKEN_PROMPT: &str = "Enter the token for the divider (e.g., -, =, *)";

/// Prompt for a new divider token and persist it globally.
///
/// The prompt is pre-filled with the current token. Dismissing it, or
/// answering with an empty string, stores the default token.
pub fn configure_divider<S, H>(store: &S, host: &mut H) -> Result<DividerToken>
where
    S: ConfigStore,
    H: EditorHost,
{
    if host.active_editor().is_none() {
        return Err(PrintDividerError::NoActiveEditor);
    }

    let mut config = store.load()?;
    let answer = host.show_input_box(TOKEN_PROMPT, config.token.as_str())?;
    if answer.is_none() {
        tracing::debug!("token prompt dismissed");
    }

    let token = DividerToken::new(answer.unwrap_or_default());
    config.set_token(token.clone());
    store.save(&config)?;

    tracing::info!(token = %token, "divider token updated");
    host.show_information_message(&format!("Divider token set to \"{}\".", token));

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeHost, MemoryStore};
    use crate::infrastructure::DividerConfig;

    #[test]
    fn test_configure_stores_answer() {
        let store = MemoryStore::default();
        let mut host = FakeHost::with_editor("rust").answering(Some("="));

        let token = configure_divider(&store, &mut host).unwrap();

        assert_eq!(token.as_str(), "=");
        assert_eq!(store.current().token.as_str(), "=");
        assert!(store.current().updated.is_some());
        assert_eq!(host.infos, vec!["Divider token set to \"=\".".to_string()]);
        assert!(host.errors.is_empty());
    }

    #[test]
    fn test_prompt_prefilled_with_current_token() {
        let store = MemoryStore::with_config(DividerConfig::new(DividerToken::new("*")));
        let mut host = FakeHost::with_editor("python").answering(Some("#"));

        configure_divider(&store, &mut host).unwrap();

        assert_eq!(
            host.prompts,
            vec![(TOKEN_PROMPT.to_string(), "*".to_string())]
        );
    }

    #[test]
    fn test_dismissed_prompt_stores_default() {
        let store = MemoryStore::with_config(DividerConfig::new(DividerToken::new("*")));
        let mut host = FakeHost::with_editor("go").answering(None);

        let token = configure_divider(&store, &mut host).unwrap();

        assert_eq!(token.as_str(), "-");
        assert_eq!(store.current().token.as_str(), "-");
        assert_eq!(host.infos, vec!["Divider token set to \"-\".".to_string()]);
    }

    #[test]
    fn test_empty_answer_stores_default() {
        let store = MemoryStore::default();
        let mut host = FakeHost::with_editor("go").answering(Some(""));

        let token = configure_divider(&store, &mut host).unwrap();
        assert_eq!(token.as_str(), "-");
    }

    #[test]
    fn test_no_active_editor_changes_nothing() {
        let store = MemoryStore::with_config(DividerConfig::new(DividerToken::new("*")));
        let mut host = FakeHost::without_editor().answering(Some("="));

        let result = configure_divider(&store, &mut host);

        assert!(matches!(result, Err(PrintDividerError::NoActiveEditor)));
        assert_eq!(store.current().token.as_str(), "*");
        assert_eq!(store.saves(), 0);
        assert!(host.prompts.is_empty());
        assert!(host.infos.is_empty());
    }
}
