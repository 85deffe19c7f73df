//! Command dispatch

use crate::application::configure_divider::configure_divider;
use crate::application::insert_divider::{insert_divider, render_statement};
use crate::domain::DividerToken;
use crate::error::Result;
use crate::infrastructure::{ConfigStore, EditorHost};

/// User-invocable commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ConfigureDivider,
    InsertDivider,
}

impl Command {
    /// Registered command identifier
    pub fn id(&self) -> &'static str {
        match self {
            Command::ConfigureDivider => "print-divider.configureDivider",
            Command::InsertDivider => "print-divider.insertDivider",
        }
    }
}

/// Runs commands against a config store and an editor host
pub struct CommandService<S, H> {
    store: S,
    host: H,
}

impl<S: ConfigStore, H: EditorHost> CommandService<S, H> {
    pub fn new(store: S, host: H) -> Self {
        tracing::debug!("print-divider is now active");
        CommandService { store, host }
    }

    /// Run a command, reporting any failure through the host's error message
    pub fn run(&mut self, command: Command) -> Result<()> {
        tracing::debug!(command = command.id(), "running command");

        let result = match command {
            Command::ConfigureDivider => self.configure_divider().map(|_| ()),
            Command::InsertDivider => self.insert_divider().map(|_| ()),
        };

        if let Err(e) = &result {
            tracing::debug!(command = command.id(), error = %e, "command failed");
            self.host.show_error_message(&e.to_string());
        }
        result
    }

    pub fn configure_divider(&mut self) -> Result<DividerToken> {
        configure_divider(&self.store, &mut self.host)
    }

    pub fn insert_divider(&mut self) -> Result<String> {
        insert_divider(&self.store, &mut self.host)
    }

    /// The configured token, or the default when none is stored
    pub fn current_token(&self) -> Result<DividerToken> {
        Ok(self.store.load()?.token)
    }

    /// The statement `insert_divider` would produce for `language_id`
    pub fn preview(&self, language_id: &str) -> Result<String> {
        Ok(render_statement(&self.current_token()?, language_id))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
