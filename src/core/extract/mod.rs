//! File-level extraction of localizable text.
//!
//! Each source syntax has one extractor:
//! - `csharp`: `GetText(...)` member calls and `new LocalizedText(...)` objects
//! - `xaml`: `{prefix:Localize '...'}` markup extensions in attribute values
//!
//! Both produce `LocalizableTextInfo` records through [`Occurrences`]. A file is
//! parsed and validated completely before its first record is yielded, so a
//! malformed file fails without contributing anything to the catalog.

pub mod csharp;
pub mod raw_call;
pub mod xaml;

use std::{fmt, path::Path};

use enum_dispatch::enum_dispatch;

use crate::core::LocalizableTextInfo;
use crate::core::error::Result;

pub use csharp::CSharpExtractor;
pub use raw_call::RawLocalizeCall;
pub use xaml::XamlExtractor;

/// Records extracted from one file.
///
/// A single-pass iterator: it is drained once by the catalog and cannot be
/// restarted or cloned.
pub struct Occurrences {
    inner: Box<dyn Iterator<Item = LocalizableTextInfo>>,
}

impl Occurrences {
    pub fn new(iter: impl Iterator<Item = LocalizableTextInfo> + 'static) -> Self {
        Self {
            inner: Box::new(iter),
        }
    }
}

impl Iterator for Occurrences {
    type Item = LocalizableTextInfo;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl fmt::Debug for Occurrences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Occurrences").finish_non_exhaustive()
    }
}

/// Source syntax handled by an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    CSharp,
    Xaml,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::CSharp => "C#",
            SourceKind::Xaml => "XAML",
        }
    }
}

/// Interface shared by the per-syntax extractors.
#[enum_dispatch]
pub trait TextExtractor {
    fn source_kind(&self) -> SourceKind;

    /// Read, parse and scan one file.
    fn extract(&mut self, path: &Path) -> Result<Occurrences>;
}

/// An extractor for one of the supported source syntaxes.
#[enum_dispatch(TextExtractor)]
pub enum Extractor {
    CSharp(CSharpExtractor),
    Xaml(XamlExtractor),
}
