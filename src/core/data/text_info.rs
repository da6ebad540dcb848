use std::path::{Path, PathBuf};

/// A translatable text found in a source file.
///
/// Every extraction path (C# call sites, XAML markup extensions) produces this
/// record. Two records with the same `id` are the same catalog entry; which of
/// them survives is decided by the catalog, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizableTextInfo {
    /// Absolute path of the file the text was found in.
    pub file_path: PathBuf,
    /// 1-based line of the enclosing expression or element.
    pub line: usize,
    /// Disambiguation context (`msgctxt`).
    pub context_id: Option<String>,
    /// The translatable text (`msgid`).
    pub id: String,
    /// Plural form of the text (`msgid_plural`).
    pub plural_id: Option<String>,
    /// Extracted comment (`#.`). No extraction path fills it yet.
    pub comment: Option<String>,
}

impl LocalizableTextInfo {
    pub fn new(file_path: impl AsRef<Path>, line: usize, id: impl Into<String>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            line,
            context_id: None,
            id: id.into(),
            plural_id: None,
            comment: None,
        }
    }

    pub fn with_context(mut self, context_id: impl Into<String>) -> Self {
        self.context_id = Some(context_id.into());
        self
    }

    pub fn with_plural(mut self, plural_id: impl Into<String>) -> Self {
        self.plural_id = Some(plural_id.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
