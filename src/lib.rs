//! haf-tools - gettext catalog extraction for C# and XAML projects
//!
//! haf-tools walks a source directory, finds localizable text in C# code
//! (`Texts.GetText("...")`, `new LocalizedText("...")`) and in XAML markup
//! extensions (`{res:Localize '...'}`), and writes it to a gettext PO catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, reporting)
//! - `config`: Extraction settings
//! - `core`: Parsing, extraction and catalog engine

pub mod cli;
pub mod config;
pub mod core;
