//! Fatal extraction errors.
//!
//! Every variant aborts the run: no catalog is written once one of these is
//! returned. Candidates that merely fail to match a call shape or the markup
//! pattern are skipped and never reach this type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// C# file whose syntax tree contains an error or missing node.
    #[error("the file \"{}\" contains errors (line {line}, column {column})", .path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    /// XAML file rejected by the XML reader.
    #[error("the file \"{}\" is not well-formed XML at byte {position}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    /// XAML file that reads cleanly but is not a single-rooted document.
    #[error("the file \"{}\" is not a valid XML document (line {line}): {reason}", .path.display())]
    Markup {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("failed to read \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid markup pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The C# grammar could not be loaded into the parser.
    #[error("failed to initialise the C# parser: {0}")]
    Language(String),
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn markup(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::Markup {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
