use std::path::Path;

use colbox::{ColumnAnalysis, ColumnOptions, Document};
use tracing::info;

use crate::page_range::parse_page_range;

/// Open an extraction dump with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing,
/// is not a dump, or contains malformed geometry.
pub fn open_document(file: &Path) -> Result<Document, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    Document::open_file(file).map_err(|e| {
        eprintln!("Error: failed to load {}: {e}", file.display());
        1
    })
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// If `pages` is `None`, returns all pages.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((0..page_count).collect()),
    }
}

/// Run detection on one page, reporting failures on stderr.
pub fn analyze_page(
    doc: &Document,
    index: usize,
    options: &ColumnOptions,
) -> Result<ColumnAnalysis, i32> {
    let analysis = doc.analyze(index, options).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    info!(page = index + 1, columns = analysis.columns.len(), "page done");
    Ok(analysis)
}
