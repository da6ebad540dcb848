//! gettext PO rendering of a catalog.
//!
//! Output layout:
//!
//! ```text
//! msgid ""
//! msgstr ""
//! "Language: en-US\n"
//! "MIME-Version: 1.0\n"
//! "Content-Type: text/plain; charset=UTF-8\n"
//! "Plural-Forms: nplurals=2; plural=(n != 1);\n"
//!
//! #: Views/MainView.xaml:3
//! msgctxt "menu"
//! msgid "Open"
//! msgstr ""
//! ```
//!
//! Plural entries carry `msgid_plural` followed by `msgstr[0]` and `msgstr[1]`.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};

use super::{Catalog, CatalogEntry};
use crate::config::Config;

/// Header metadata written in the catalog's first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoHeader {
    pub language: String,
    pub plural_forms: String,
}

impl From<&Config> for PoHeader {
    fn from(config: &Config) -> Self {
        Self {
            language: config.language.clone(),
            plural_forms: config.plural_forms.clone(),
        }
    }
}

impl Default for PoHeader {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Render the catalog as PO text.
pub fn render(catalog: &Catalog, header: &PoHeader) -> String {
    let mut out = String::new();

    out.push_str("msgid \"\"\n");
    out.push_str("msgstr \"\"\n");
    let _ = writeln!(out, "\"Language: {}\\n\"", escape(&header.language));
    out.push_str("\"MIME-Version: 1.0\\n\"\n");
    out.push_str("\"Content-Type: text/plain; charset=UTF-8\\n\"\n");
    let _ = writeln!(out, "\"Plural-Forms: {}\\n\"", escape(&header.plural_forms));

    for entry in catalog.entries() {
        out.push('\n');
        render_entry(&mut out, entry);
    }

    out
}

fn render_entry(out: &mut String, entry: &CatalogEntry) {
    let info = &entry.info;

    if let Some(comment) = &info.comment {
        for line in comment.lines() {
            let _ = writeln!(out, "#. {}", line);
        }
    }
    let _ = writeln!(out, "#: {}", entry.reference);
    if let Some(context) = &info.context_id {
        let _ = writeln!(out, "msgctxt \"{}\"", escape(context));
    }
    let _ = writeln!(out, "msgid \"{}\"", escape(&info.id));
    match &info.plural_id {
        None => out.push_str("msgstr \"\"\n"),
        Some(plural) => {
            let _ = writeln!(out, "msgid_plural \"{}\"", escape(plural));
            out.push_str("msgstr[0] \"\"\n");
            out.push_str("msgstr[1] \"\"\n");
        }
    }
}

/// Escape a value for a PO string literal.
///
/// Text without backslashes, quotes or control characters passes unchanged.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Write the rendered catalog, replacing any existing file.
pub fn write_catalog(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
