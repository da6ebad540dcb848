//! Raw localization call data collected while walking a C# syntax tree.
//!
//! A `RawLocalizeCall` records the shape of a qualifying call site (how many
//! arguments, which of them are string literals) without interpreting it.
//! [`RawLocalizeCall::into_text_info`] turns that shape into a
//! `LocalizableTextInfo`, which is the only place argument positions are
//! given a meaning.

use std::path::Path;

use crate::core::LocalizableTextInfo;

/// A qualifying call site with its literal arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLocalizeCall {
    /// 1-based line of the invocation or creation expression.
    pub line: usize,
    /// Values of the arguments that are plain string literals, in order.
    pub literals: Vec<String>,
    /// Total number of arguments, literal or not.
    pub argument_count: usize,
}

impl RawLocalizeCall {
    /// Interpret the literal arguments by count.
    ///
    /// | literals | arguments | result                     |
    /// |----------|-----------|----------------------------|
    /// | 1        | any       | id                         |
    /// | 2        | 3         | id, plural id              |
    /// | 2        | other     | context id, id             |
    /// | 3        | any       | context id, id, plural id  |
    /// | 0, 4+    | any       | none                       |
    ///
    /// With two literals among three arguments the third argument is taken to
    /// be the plural count. An empty id yields `None`.
    pub fn into_text_info(self, file_path: &Path) -> Option<LocalizableTextInfo> {
        let line = self.line;
        let mut literals = self.literals.into_iter();

        let info = match (literals.len(), self.argument_count) {
            (1, _) => LocalizableTextInfo::new(file_path, line, literals.next()?),
            (2, 3) => {
                let id = literals.next()?;
                LocalizableTextInfo::new(file_path, line, id).with_plural(literals.next()?)
            }
            (2, _) => {
                let context = literals.next()?;
                LocalizableTextInfo::new(file_path, line, literals.next()?).with_context(context)
            }
            (3, _) => {
                let context = literals.next()?;
                let id = literals.next()?;
                LocalizableTextInfo::new(file_path, line, id)
                    .with_context(context)
                    .with_plural(literals.next()?)
            }
            _ => return None,
        };

        (!info.id.is_empty()).then_some(info)
    }
}
