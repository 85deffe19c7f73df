//! Editor host capabilities and the file-backed editor

use crate::domain::Language;
use crate::error::{PrintDividerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Language id reported for files with no recognised extension
pub const PLAINTEXT: &str = "plaintext";

/// A document open for editing, with a cursor
pub trait TextEditor {
    /// Identifier of the document's language (e.g. "rust", "plaintext")
    fn language_id(&self) -> &str;

    /// Insert text at the active cursor position
    fn insert_at_cursor(&mut self, text: &str) -> Result<()>;
}

/// The user-facing primitives a command needs from its host
pub trait EditorHost {
    type Editor: TextEditor;

    /// The focused editor, if any
    fn active_editor(&mut self) -> Option<&mut Self::Editor>;

    /// Ask the user for a value, pre-filled with `value`.
    /// Returns `None` when the prompt is dismissed.
    fn show_input_box(&mut self, prompt: &str, value: &str) -> Result<Option<String>>;

    fn show_information_message(&mut self, message: &str);

    fn show_error_message(&mut self, message: &str);
}

/// 1-based cursor position; columns count characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Result<Self> {
        if line == 0 {
            return Err(PrintDividerError::InvalidPosition(
                "line numbers start at 1".to_string(),
            ));
        }
        if column == 0 {
            return Err(PrintDividerError::InvalidPosition(
                "column numbers start at 1".to_string(),
            ));
        }
        Ok(Position { line, column })
    }

    /// Build a position from optional command-line values.
    /// No line means "end of document"; a line without a column means column 1.
    pub fn from_args(line: Option<usize>, column: Option<usize>) -> Result<Option<Self>> {
        match (line, column) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(PrintDividerError::InvalidPosition(
                "--column requires --line".to_string(),
            )),
            (Some(line), column) => Position::new(line, column.unwrap_or(1)).map(Some),
        }
    }

    /// Byte offset of this position in `text`, clamped to the document
    pub fn byte_offset(&self, text: &str) -> usize {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));

        let line = self.line - 1;
        let Some(&start) = starts.get(line) else {
            return text.len();
        };
        let end = starts.get(line + 1).map_or(text.len(), |next| next - 1);
        let content = &text[start..end];
        let content = content.strip_suffix('\r').unwrap_or(content);

        content
            .char_indices()
            .nth(self.column - 1)
            .map_or(start + content.len(), |(i, _)| start + i)
    }
}

/// A file on disk acting as the active editor.
/// Each insertion is written back immediately.
#[derive(Debug, Clone)]
pub struct FileEditor {
    path: PathBuf,
    contents: String,
    language_id: String,
    cursor: Option<Position>,
}

impl FileEditor {
    /// Open a file; the language id is taken from `language` or guessed
    /// from the extension
    pub fn open(path: &Path, language: Option<String>, cursor: Option<Position>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| PrintDividerError::Document {
            path: path.to_path_buf(),
            source,
        })?;

        let language_id = language.unwrap_or_else(|| Self::detect_language(path));
        tracing::debug!(path = %path.display(), language = %language_id, "opened document");

        Ok(FileEditor {
            path: path.to_path_buf(),
            contents,
            language_id,
            cursor,
        })
    }

    /// Map a file extension to a language id
    pub fn detect_language(path: &Path) -> String {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Language::from_extension)
            .map_or_else(|| PLAINTEXT.to_string(), |lang| lang.id().to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    fn cursor_offset(&self) -> usize {
        self.cursor
            .map_or(self.contents.len(), |pos| pos.byte_offset(&self.contents))
    }
}

impl TextEditor for FileEditor {
    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn insert_at_cursor(&mut self, text: &str) -> Result<()> {
        let offset = self.cursor_offset();
        self.contents.insert_str(offset, text);
        fs::write(&self.path, &self.contents)?;

        tracing::info!(
            path = %self.path.display(),
            offset,
            bytes = text.len(),
            "inserted text"
        );
        Ok(())
    }
}
