//! Markdown file naming rules shared by the dialogs and the session

use std::path::Path;

/// Extensions recognized as markdown, lowercase and without the dot
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Name suggested by the save dialog for a never-saved buffer
pub const DEFAULT_FILE_NAME: &str = "untitled.md";

/// Label shown next to the extension filter in file dialogs
pub const FILTER_LABEL: &str = "Markdown";

/// Check whether a path ends in a markdown extension, ignoring case
///
/// A file named only `.md` counts as well.
pub fn is_markdown_path(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    MARKDOWN_EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(&format!(".{ext}")))
}
