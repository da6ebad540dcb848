use anyhow::{Context, Result, bail};
use glob::Pattern;

/// File-name pattern selecting C# sources.
pub const CSHARP_FILE_PATTERN: &str = "*.cs";

/// File-name pattern selecting XAML sources.
pub const XAML_FILE_PATTERN: &str = "*.xaml";

/// Member name of the localization call: `Texts.GetText("...")`.
pub const LOCALIZE_CALL_NAME: &str = "GetText";

/// Type name of the localized text object: `new LocalizedText("...")`.
pub const LOCALIZED_TEXT_TYPE_NAME: &str = "LocalizedText";

/// Markup extension name used in XAML: `{res:Localize 'id'}`.
pub const MARKUP_EXTENSION_NAME: &str = "Localize";

/// Settings shared by the extraction pipeline.
///
/// There is no configuration file; every field comes from [`Config::default`].
/// Keeping them in one value lets tests run the pipeline with other names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub csharp_pattern: String,
    pub xaml_pattern: String,
    pub call_name: String,
    pub type_name: String,
    pub markup_marker: String,
    pub language: String,
    pub plural_forms: String,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_plural_forms() -> String {
    "nplurals=2; plural=(n != 1);".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csharp_pattern: CSHARP_FILE_PATTERN.to_string(),
            xaml_pattern: XAML_FILE_PATTERN.to_string(),
            call_name: LOCALIZE_CALL_NAME.to_string(),
            type_name: LOCALIZED_TEXT_TYPE_NAME.to_string(),
            markup_marker: MARKUP_EXTENSION_NAME.to_string(),
            language: default_language(),
            plural_forms: default_plural_forms(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a file pattern is not a valid glob or an
    /// identifier used for matching is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in [&self.csharp_pattern, &self.xaml_pattern] {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid file pattern: \"{}\"", pattern))?;
        }

        for (field, value) in [
            ("call_name", &self.call_name),
            ("type_name", &self.type_name),
            ("markup_marker", &self.markup_marker),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }

        Ok(())
    }

    pub fn csharp_file_pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.csharp_pattern)
            .with_context(|| format!("Invalid file pattern: \"{}\"", self.csharp_pattern))
    }

    pub fn xaml_file_pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.xaml_pattern)
            .with_context(|| format!("Invalid file pattern: \"{}\"", self.xaml_pattern))
    }
}
