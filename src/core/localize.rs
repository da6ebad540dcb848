use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;

use crate::{
    config::Config,
    core::{
        Catalog,
        catalog::po::{self, PoHeader},
        extract::{CSharpExtractor, Extractor, SourceKind, TextExtractor, XamlExtractor},
        file_scanner::scan_files,
    },
};

/// Options of one extraction run, as delivered by the CLI.
#[derive(Debug, Clone)]
pub struct LocalizeOptions {
    pub source_directory: PathBuf,
    pub target_file_path: PathBuf,
    /// Print one line per scanned file to stderr.
    pub verbose: bool,
}

/// Counters of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizeSummary {
    pub csharp_files: usize,
    pub xaml_files: usize,
    /// Occurrences found before deduplication.
    pub texts_found: usize,
    /// Entries written to the catalog.
    pub entry_count: usize,
    pub duplicate_count: usize,
    pub target_file_path: PathBuf,
}

impl LocalizeSummary {
    pub fn file_count(&self) -> usize {
        self.csharp_files + self.xaml_files
    }
}

/// Extract every localizable text under the source directory and write the
/// PO catalog.
///
/// C# files are processed before XAML files. The first fatal error aborts the
/// run before anything is written; the target file is only touched once all
/// files were extracted.
pub fn localize(options: &LocalizeOptions, config: &Config) -> Result<LocalizeSummary> {
    config.validate()?;

    let root = std::path::absolute(&options.source_directory).with_context(|| {
        format!(
            "Invalid source directory: {}",
            options.source_directory.display()
        )
    })?;

    let mut catalog = Catalog::new(&root);
    let mut summary = LocalizeSummary {
        target_file_path: options.target_file_path.clone(),
        ..Default::default()
    };

    let passes: [(Pattern, Extractor); 2] = [
        (
            config.csharp_file_pattern()?,
            CSharpExtractor::new(config)?.into(),
        ),
        (config.xaml_file_pattern()?, XamlExtractor::new(config)?.into()),
    ];

    for (pattern, mut extractor) in passes {
        let files = scan_files(&root, &pattern)?;
        for file in &files {
            let occurrences = extractor.extract(file)?;
            let (found, added) = catalog.extend(occurrences);
            summary.texts_found += found;

            if options.verbose {
                eprintln!(
                    "{} {} {} ({} texts, {} new)",
                    "scanning".bold().green(),
                    extractor.source_kind().as_str().dimmed(),
                    relative_display(&root, file),
                    found,
                    added
                );
            }
        }

        match extractor.source_kind() {
            SourceKind::CSharp => summary.csharp_files = files.len(),
            SourceKind::Xaml => summary.xaml_files = files.len(),
        }
    }

    summary.entry_count = catalog.len();
    summary.duplicate_count = catalog.duplicate_count();

    let content = po::render(&catalog, &PoHeader::from(config));
    po::write_catalog(&options.target_file_path, &content)?;

    Ok(summary)
}

fn relative_display(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .into_owned()
}
