//! Terminal implementation of the editor host

use crate::error::Result;
use crate::infrastructure::editor::{EditorHost, FileEditor};
use std::io::{self, BufRead, Write};

/// Host that talks to the user over standard streams.
///
/// Prompts and errors go to `err`, information to `out`. The active editor
/// is whatever file was opened on the command line.
pub struct TerminalHost<R, O, E> {
    editor: Option<FileEditor>,
    answer: Option<String>,
    input: R,
    out: O,
    err: E,
}

impl TerminalHost<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    /// Host bound to the process's stdin, stdout and stderr
    pub fn stdio(editor: Option<FileEditor>) -> Self {
        TerminalHost::new(editor, io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, O: Write, E: Write> TerminalHost<R, O, E> {
    pub fn new(editor: Option<FileEditor>, input: R, out: O, err: E) -> Self {
        TerminalHost {
            editor,
            answer: None,
            input,
            out,
            err,
        }
    }

    /// Answer the next prompt with `answer` instead of reading input
    pub fn with_answer(mut self, answer: Option<String>) -> Self {
        self.answer = answer;
        self
    }

    pub fn editor(&self) -> Option<&FileEditor> {
        self.editor.as_ref()
    }

    pub fn into_parts(self) -> (Option<FileEditor>, O, E) {
        (self.editor, self.out, self.err)
    }
}

impl<R: BufRead, O: Write, E: Write> EditorHost for TerminalHost<R, O, E> {
    type Editor = FileEditor;

    fn active_editor(&mut self) -> Option<&mut FileEditor> {
        self.editor.as_mut()
    }

    fn show_input_box(&mut self, prompt: &str, value: &str) -> Result<Option<String>> {
        if let Some(answer) = self.answer.take() {
            return Ok(Some(answer));
        }

        write!(self.err, "{} [{}]: ", prompt, value)?;
        self.err.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF dismisses the prompt
            writeln!(self.err)?;
            return Ok(None);
        }

        let line = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line.as_str());

        if line.is_empty() {
            Ok(Some(value.to_string()))
        } else {
            Ok(Some(line.to_string()))
        }
    }

    fn show_information_message(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            tracing::warn!(error = %e, "failed to write message");
        }
    }

    fn show_error_message(&mut self, message: &str) {
        if let Err(e) = writeln!(self.err, "Error: {}", message) {
            tracing::warn!(error = %e, "failed to write error message");
        }
    }
}
