//! The editing session for the one open document

use super::error::SessionError;
use super::file_ref::{FileReference, LocalFile};
use super::markdown::is_markdown_path;

/// Text buffer plus the file it is associated with, if any
#[derive(Debug)]
pub struct DocumentSession<F = LocalFile> {
    text: String,
    backing_file: Option<F>,
}

impl<F> Default for DocumentSession<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> DocumentSession<F> {
    /// Create an empty session with no backing file
    pub fn new() -> Self {
        Self {
            text: String::new(),
            backing_file: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer after an edit
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn backing_file(&self) -> Option<&F> {
        self.backing_file.as_ref()
    }

    /// Whether `save` can be used, i.e. the buffer has a backing file
    pub fn save_enabled(&self) -> bool {
        self.backing_file.is_some()
    }

    /// Drop the buffer and its file association
    pub fn new_buffer(&mut self) {
        self.text.clear();
        self.backing_file = None;
    }
}

impl<F: FileReference> DocumentSession<F> {
    /// Load `source` into the buffer and associate it with the session
    ///
    /// The file is not checked for a markdown extension. On failure the
    /// session is left exactly as it was.
    pub fn load(&mut self, source: F) -> Result<String, SessionError> {
        let bytes = source
            .read()
            .map_err(|e| SessionError::io(source.path(), e))?;
        let text = String::from_utf8(bytes).map_err(|e| {
            SessionError::io(
                source.path(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;

        self.text = text.clone();
        self.backing_file = Some(source);
        Ok(text)
    }

    /// Write the buffer to its backing file
    pub fn save(&self) -> Result<(), SessionError> {
        let file = self
            .backing_file
            .as_ref()
            .ok_or(SessionError::NoBackingFile)?;
        file.write(self.text.as_bytes())
            .map_err(|e| SessionError::io(file.path(), e))
    }

    /// Write the buffer to `destination` and make it the backing file
    pub fn save_as(&mut self, destination: F) -> Result<(), SessionError> {
        if !is_markdown_path(destination.path()) {
            return Err(SessionError::InvalidExtension {
                path: destination.path().to_path_buf(),
            });
        }

        destination
            .write(self.text.as_bytes())
            .map_err(|e| SessionError::io(destination.path(), e))?;
        self.backing_file = Some(destination);
        Ok(())
    }

    /// Title suffix naming the backing file, empty for an unsaved buffer
    pub fn display_suffix(&self) -> String {
        self.backing_file
            .as_ref()
            .map(|file| format!(" - {}", file.display_name()))
            .unwrap_or_default()
    }
}
