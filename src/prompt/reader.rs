use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Source of interactive answers
pub trait LineReader {
    /// Returns `None` once the user closes the input (Ctrl-D / Ctrl-C)
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal reader backed by rustyline
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
