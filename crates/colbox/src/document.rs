//! Multi-page documents loaded from extraction dumps.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use colbox_core::{ColumnAnalysis, ColumnOptions, IRect, PageLayout, analyze_columns};
use tracing::{debug, info};

use crate::dump::DumpDocument;
use crate::error::DocumentError;

/// A validated document: one [`PageLayout`] per page.
///
/// Pages are independent; detection on one page never reads or writes
/// another page's data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pages: Vec<PageLayout>,
}

impl Document {
    /// Build a document from pages that are already in core form.
    ///
    /// The pages are validated when detection runs on them.
    pub fn from_pages(pages: Vec<PageLayout>) -> Self {
        Self { pages }
    }

    /// Parse and validate an extraction dump.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if the text is not a dump and
    /// [`DocumentError::Page`] if a page has malformed geometry.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Self::from_dump(serde_json::from_str(json)?)
    }

    /// Parse and validate an extraction dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Self::from_dump(serde_json::from_reader(reader)?)
    }

    /// Open an extraction dump file.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let doc = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), pages = doc.page_count(), "loaded extraction dump");
        Ok(doc)
    }

    fn from_dump(dump: DumpDocument) -> Result<Self, DocumentError> {
        let pages = dump
            .pages
            .into_iter()
            .enumerate()
            .map(|(index, page)| {
                PageLayout::try_from(page).map_err(|e| DocumentError::on_page(index, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pages })
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[PageLayout] {
        &self.pages
    }

    /// The page at 0-based `index`.
    pub fn page(&self, index: usize) -> Result<&PageLayout, DocumentError> {
        self.pages
            .get(index)
            .ok_or(DocumentError::PageOutOfRange {
                index,
                count: self.pages.len(),
            })
    }

    /// Columns of one page together with its obstacles.
    pub fn analyze(
        &self,
        index: usize,
        options: &ColumnOptions,
    ) -> Result<ColumnAnalysis, DocumentError> {
        let page = self.page(index)?;
        let analysis =
            analyze_columns(page, options).map_err(|e| DocumentError::on_page(index, e))?;
        debug!(
            page = index + 1,
            columns = analysis.columns.len(),
            "detected columns"
        );
        Ok(analysis)
    }

    /// Column rectangles of one page, in reading order.
    pub fn columns(&self, index: usize, options: &ColumnOptions) -> Result<Vec<IRect>, DocumentError> {
        self.analyze(index, options).map(|analysis| analysis.columns)
    }

    /// Column rectangles of every page, stopping at the first error.
    pub fn columns_all(&self, options: &ColumnOptions) -> Result<Vec<Vec<IRect>>, DocumentError> {
        (0..self.page_count())
            .map(|index| self.columns(index, options))
            .collect()
    }

    /// Detect columns on all pages in parallel using rayon.
    ///
    /// The returned Vec is ordered by page index.
    #[cfg(feature = "parallel")]
    pub fn columns_parallel(
        &self,
        options: &ColumnOptions,
    ) -> Vec<Result<Vec<IRect>, DocumentError>> {
        use rayon::prelude::*;

        (0..self.page_count())
            .into_par_iter()
            .map(|index| self.columns(index, options))
            .collect()
    }
}
