use std::collections::BTreeSet;

use thiserror::Error;

/// Why a `--pages` value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("invalid page number: '{0}'")]
    InvalidNumber(String),
    #[error("page 0 is invalid (pages start at 1)")]
    Zero,
    #[error("page {page} exceeds document page count ({count})")]
    OutOfRange { page: usize, count: usize },
    #[error("range {start}-{end} runs backwards")]
    Reversed { start: usize, end: usize },
}

/// Parse a 1-indexed selection like `"1,3-5"` into sorted, distinct
/// 0-indexed page numbers.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, PageRangeError> {
    let mut selected = BTreeSet::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((a, b)) => (page_number(a, page_count)?, page_number(b, page_count)?),
            None => {
                let page = page_number(part, page_count)?;
                (page, page)
            }
        };
        if start > end {
            return Err(PageRangeError::Reversed { start, end });
        }
        selected.extend((start..=end).map(|page| page - 1));
    }

    Ok(selected.into_iter().collect())
}

fn page_number(text: &str, page_count: usize) -> Result<usize, PageRangeError> {
    let text = text.trim();
    let page: usize = text
        .parse()
        .map_err(|_| PageRangeError::InvalidNumber(text.to_string()))?;
    match page {
        0 => Err(PageRangeError::Zero),
        p if p > page_count => Err(PageRangeError::OutOfRange {
            page: p,
            count: page_count,
        }),
        p => Ok(p),
    }
}
