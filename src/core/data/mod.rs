//! Core data types shared by the extraction pipeline.
//!
//! ## Module Structure
//!
//! - `text_info`: LocalizableTextInfo, the canonical extracted-text record

pub mod text_info;

pub use text_info::LocalizableTextInfo;
