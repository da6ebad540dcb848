//! File parsers for source files.
//!
//! This module provides parsers for the two source syntaxes:
//! - `csharp`: C# source file parser (uses tree-sitter for syntax trees)
//! - `xaml`: XAML markup parser (uses quick-xml, tracks element lines)

pub mod csharp;
pub mod xaml;
