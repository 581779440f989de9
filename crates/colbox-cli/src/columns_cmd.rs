use std::fmt::Write;
use std::path::Path;

use colbox::{ColumnOptions, IRect};

use crate::cli::OutputFormat;
use crate::shared::{analyze_page, open_document, resolve_pages};

/// Columns detected on one page; `page` is 1-indexed.
struct PageColumns {
    page: usize,
    columns: Vec<IRect>,
}

pub fn run(
    file: &Path,
    pages: Option<&str>,
    format: OutputFormat,
    options: &ColumnOptions,
) -> Result<(), i32> {
    let doc = open_document(file)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;

    let mut results = Vec::with_capacity(page_indices.len());
    for idx in page_indices {
        let analysis = analyze_page(&doc, idx, options)?;
        results.push(PageColumns {
            page: idx + 1,
            columns: analysis.columns,
        });
    }

    let output = match format {
        OutputFormat::Text => format_text(&results),
        OutputFormat::Json => format_json(&results).map_err(|e| {
            eprintln!("Error: failed to encode JSON: {e}");
            1
        })?,
        OutputFormat::Csv => format_csv(&results),
    };
    print!("{output}");
    Ok(())
}

fn format_text(results: &[PageColumns]) -> String {
    let mut out = String::new();
    for result in results {
        let _ = writeln!(out, "--- Page {} ---", result.page);
        for (i, c) in result.columns.iter().enumerate() {
            let _ = writeln!(out, "{i}\t{}\t{}\t{}\t{}", c.x0, c.y0, c.x1, c.y1);
        }
    }
    out
}

fn format_json(results: &[PageColumns]) -> Result<String, serde_json::Error> {
    let pages_json: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            serde_json::json!({
                "page": result.page,
                "columns": result.columns,
            })
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&pages_json)?;
    out.push('\n');
    Ok(out)
}

fn format_csv(results: &[PageColumns]) -> String {
    let mut out = String::from("page,index,x0,y0,x1,y1\n");
    for result in results {
        for (i, c) in result.columns.iter().enumerate() {
            let _ = writeln!(out, "{},{i},{},{},{},{}", result.page, c.x0, c.y0, c.x1, c.y1);
        }
    }
    out
}
