//! Core extraction engine.
//!
//! The pipeline runs in three steps, all on one thread:
//!
//! 1. **Scan**: enumerate `*.cs` then `*.xaml` files under the source root
//! 2. **Extract**: parse each file and turn qualifying call sites and markup
//!    extensions into `LocalizableTextInfo` records
//! 3. **Catalog**: deduplicate by id in first-seen order and render gettext PO
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog aggregation and PO serialization
//! - `data`: LocalizableTextInfo
//! - `error`: fatal extraction errors
//! - `extract`: per-syntax extractors
//! - `file_scanner`: source file enumeration
//! - `localize`: the pipeline driver
//! - `parsers`: C# and XAML parsers
//! - `utils`: line index

pub mod catalog;
pub mod data;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod localize;
pub mod parsers;
pub mod utils;

pub use catalog::{Catalog, CatalogEntry};
pub use data::LocalizableTextInfo;
pub use error::ExtractError;
pub use localize::{LocalizeOptions, LocalizeSummary, localize};
