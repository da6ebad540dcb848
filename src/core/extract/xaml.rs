//! Markup extension extraction from XAML attributes.
//!
//! An attribute value such as `{res:Localize 'menu//Open'}` marks a localized
//! text: the quoted argument holds the id, optionally preceded by a context
//! and `//`. The extension prefix (`res:` here) is not checked.

use std::{fs, path::Path};

use regex::Regex;

use crate::config::Config;
use crate::core::LocalizableTextInfo;
use crate::core::error::{ExtractError, Result};
use crate::core::extract::{Occurrences, SourceKind, TextExtractor};
use crate::core::parsers::xaml::parse_xaml_source;

pub struct XamlExtractor {
    marker: String,
    pattern: Regex,
}

impl XamlExtractor {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            marker: config.markup_marker.clone(),
            pattern: markup_pattern(&config.markup_marker)?,
        })
    }

    /// Scan XAML content already loaded into memory.
    pub fn extract_source(&mut self, path: &Path, content: &str) -> Result<Occurrences> {
        let elements = parse_xaml_source(path, content)?;

        let marker = self.marker.clone();
        let pattern = self.pattern.clone();
        let file_path = path.to_path_buf();

        Ok(Occurrences::new(
            elements
                .into_iter()
                .flat_map(|element| {
                    let line = element.line;
                    element
                        .attribute_values
                        .into_iter()
                        .map(move |value| (line, value))
                })
                .filter(move |(_, value)| value.contains(marker.as_str()))
                .filter_map(move |(line, value)| {
                    let (context_id, id) = capture_markup(&pattern, &value)?;
                    let info = LocalizableTextInfo::new(&file_path, line, id);
                    Some(match context_id {
                        Some(context) => info.with_context(context),
                        None => info,
                    })
                }),
        ))
    }
}

impl TextExtractor for XamlExtractor {
    fn source_kind(&self) -> SourceKind {
        SourceKind::Xaml
    }

    fn extract(&mut self, path: &Path) -> Result<Occurrences> {
        let content = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
        self.extract_source(path, &content)
    }
}

/// `{prefix:Localize 'context//id'}`, capturing context (optional) and id.
fn markup_pattern(marker: &str) -> Result<Regex> {
    let source = format!(r"\{{\S+:{} +'(?:(.*?)//)?(.*?)'\}}", regex::escape(marker));
    Ok(Regex::new(&source)?)
}

/// The first markup extension in `value` as `(context_id, id)`.
fn capture_markup(pattern: &Regex, value: &str) -> Option<(Option<String>, String)> {
    let caps = pattern.captures(value)?;
    let id = caps.get(2)?.as_str();
    if id.is_empty() {
        return None;
    }
    let context_id = caps.get(1).map(|m| m.as_str().to_string());
    Some((context_id, id.to_string()))
}
