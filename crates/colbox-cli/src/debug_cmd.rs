use std::fs;
use std::path::{Path, PathBuf};

use colbox::{ColumnOptions, DrawStyle, SvgOptions, SvgRenderer};

use crate::shared::{analyze_page, open_document, resolve_pages};

pub fn run(
    file: &Path,
    pages: Option<&str>,
    output: &Path,
    scale: f64,
    obstacles: bool,
    options: &ColumnOptions,
) -> Result<(), i32> {
    if !(scale.is_finite() && scale > 0.0) {
        eprintln!("Error: scale must be a positive number, got {scale}");
        return Err(1);
    }

    let doc = open_document(file)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;
    let multi_page = page_indices.len() > 1;
    let svg_options = SvgOptions {
        scale,
        ..SvgOptions::default()
    };

    for &idx in &page_indices {
        let analysis = analyze_page(&doc, idx, options)?;
        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;

        let mut renderer = SvgRenderer::new(page.width, page.height);
        if obstacles {
            renderer.draw_rects(&analysis.images, &DrawStyle::images_default());
            renderer.draw_rects(&analysis.vertical, &DrawStyle::vertical_default());
        }
        renderer.draw_columns(&analysis.columns, &DrawStyle::columns_default());
        let svg = renderer.to_svg(&svg_options);

        let out_path = page_output_path(output, idx, multi_page);
        fs::write(&out_path, &svg).map_err(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            1
        })?;

        eprintln!("Wrote {}", out_path.display());
    }

    Ok(())
}

/// With several pages, `out.svg` becomes `out_pageN.svg` (1-indexed).
fn page_output_path(output: &Path, idx: usize, multi_page: bool) -> PathBuf {
    if !multi_page {
        return output.to_path_buf();
    }
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("debug");
    let ext = output.extension().and_then(|s| s.to_str()).unwrap_or("svg");
    output.with_file_name(format!("{stem}_page{}.{ext}", idx + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_uses_output_as_is() {
        let out = Path::new("dir/overlay.svg");
        assert_eq!(page_output_path(out, 4, false), PathBuf::from("dir/overlay.svg"));
    }

    #[test]
    fn multi_page_appends_page_number() {
        let out = Path::new("dir/overlay.svg");
        assert_eq!(
            page_output_path(out, 1, true),
            PathBuf::from("dir/overlay_page2.svg")
        );
    }

    #[test]
    fn missing_extension_defaults_to_svg() {
        assert_eq!(
            page_output_path(Path::new("overlay"), 0, true),
            PathBuf::from("overlay_page1.svg")
        );
    }
}
