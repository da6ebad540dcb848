//! Catalog aggregation.
//!
//! The catalog owns everything one run accumulates: the entries in first-seen
//! order and the set of ids already taken. Entries are keyed by `id` alone, so
//! a later occurrence with a different context or plural form is dropped along
//! with its source reference.

pub mod po;

use std::{collections::HashSet, path::Path};

use crate::core::LocalizableTextInfo;

/// One catalog entry: the first occurrence of an id plus its source reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub info: LocalizableTextInfo,
    /// `relative/path.cs:line`
    pub reference: String,
}

/// Ordered, deduplicated collection of localizable texts.
#[derive(Debug)]
pub struct Catalog {
    root: String,
    seen_ids: HashSet<String>,
    entries: Vec<CatalogEntry>,
    duplicate_count: usize,
}

impl Catalog {
    /// Create an empty catalog whose references are relative to `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_string_lossy().into_owned(),
            seen_ids: HashSet::new(),
            entries: Vec::new(),
            duplicate_count: 0,
        }
    }

    /// Add one record. Returns `false` if its id is already in the catalog.
    pub fn insert(&mut self, info: LocalizableTextInfo) -> bool {
        if self.seen_ids.contains(&info.id) {
            self.duplicate_count += 1;
            return false;
        }
        self.seen_ids.insert(info.id.clone());
        let reference = source_reference(&self.root, &info);
        self.entries.push(CatalogEntry { info, reference });
        true
    }

    /// Drain the records of one file. Returns `(found, added)`.
    pub fn extend(
        &mut self,
        records: impl IntoIterator<Item = LocalizableTextInfo>,
    ) -> (usize, usize) {
        let mut found = 0;
        let mut added = 0;
        for info in records {
            found += 1;
            if self.insert(info) {
                added += 1;
            }
        }
        (found, added)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of occurrences dropped because their id was already present.
    pub fn duplicate_count(&self) -> usize {
        self.duplicate_count
    }
}

/// `path:line` with the root prefix removed and separators/spaces trimmed.
fn source_reference(root: &str, info: &LocalizableTextInfo) -> String {
    let path = info.file_path.to_string_lossy();
    let relative = path.strip_prefix(root).unwrap_or(path.as_ref());
    let relative = relative.trim_matches(|c| c == '\\' || c == '/' || c == ' ');
    format!("{}:{}", relative, info.line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn references(catalog: &Catalog) -> Vec<&str> {
        catalog
            .entries()
            .iter()
            .map(|e| e.reference.as_str())
            .collect()
    }

    #[test]
    fn test_reference_is_relative_to_root() {
        let mut catalog = Catalog::new(Path::new("/src"));
        catalog.insert(LocalizableTextInfo::new("/src/file.cs", 10, "hello"));
        catalog.insert(LocalizableTextInfo::new("/src/Views/view.xaml", 3, "world"));

        assert_eq!(
            references(&catalog),
            vec!["file.cs:10", "Views/view.xaml:3"]
        );
    }

    #[test]
    fn test_reference_with_trailing_separator_root() {
        let mut catalog = Catalog::new(Path::new("/src/"));
        catalog.insert(LocalizableTextInfo::new("/src/file.cs", 1, "a"));
        assert_eq!(references(&catalog), vec!["file.cs:1"]);
    }

    #[test]
    fn test_reference_outside_root_is_kept_whole() {
        let mut catalog = Catalog::new(Path::new("/src"));
        catalog.insert(LocalizableTextInfo::new("/other/file.cs", 2, "a"));
        assert_eq!(references(&catalog), vec!["other/file.cs:2"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut catalog = Catalog::new(Path::new("/src"));
        let (found, added) = catalog.extend(vec![
            LocalizableTextInfo::new("/src/a.cs", 1, "Open").with_context("menu"),
            LocalizableTextInfo::new("/src/a.cs", 2, "Save"),
        ]);
        assert_eq!((found, added), (2, 2));

        let (found, added) = catalog.extend(vec![
            LocalizableTextInfo::new("/src/b.xaml", 5, "Open"),
            LocalizableTextInfo::new("/src/b.xaml", 6, "Save").with_plural("Saves"),
            LocalizableTextInfo::new("/src/b.xaml", 7, "Close"),
        ]);
        assert_eq!((found, added), (3, 1));

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.duplicate_count(), 2);
        assert_eq!(references(&catalog), vec!["a.cs:1", "a.cs:2", "b.xaml:7"]);

        let open = &catalog.entries()[0].info;
        assert_eq!(open.context_id.as_deref(), Some("menu"));
        let save = &catalog.entries()[1].info;
        assert_eq!(save.plural_id, None);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Path::new("/src"));
        assert!(catalog.is_empty());
        assert_eq!(catalog.duplicate_count(), 0);
    }
}
