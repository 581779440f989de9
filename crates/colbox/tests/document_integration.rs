//! Loading extraction dumps from disk and running detection on them.

use std::io::Write;

use colbox::{ColumnOptions, Document, DocumentError, IRect};

/// A two-column page with a header line, a footer page number, a rotated
/// margin note and a figure with a caption drawn over it.
const ARTICLE: &str = r#"{"pages": [{"width": 612, "height": 792,
  "images": [[320, 420, 560, 600]],
  "blocks": [
    {"type": 0, "bbox": [72, 30, 540, 42], "lines": [
      {"bbox": [72, 30, 540, 42], "dir": [1, 0], "spans": [{"text": "Journal of Examples"}]}]},
    {"type": 0, "bbox": [12, 200, 28, 600], "lines": [
      {"bbox": [12, 200, 28, 600], "dir": [0, -1], "spans": [{"text": "arXiv:2401.00001"}]}]},
    {"type": 0, "bbox": [50, 100, 290.4, 400.2], "lines": [
      {"bbox": [50, 100, 290.4, 112], "dir": [1, 0], "spans": [{"text": "First "}, {"text": "column"}]},
      {"bbox": [50, 388, 250, 400.2], "dir": [1, 0], "spans": [{"text": "continues"}]}]},
    {"type": 0, "bbox": [320, 100, 560, 400], "lines": [
      {"bbox": [320, 100, 560, 400], "dir": [1, 0], "spans": [{"text": "Second column"}]}]},
    {"type": 0, "bbox": [50, 410, 290, 700], "lines": [
      {"bbox": [50, 410, 290, 700], "dir": [1, 0], "spans": [{"text": "More of the first"}]}]},
    {"type": 0, "bbox": [330, 500, 500, 512], "lines": [
      {"bbox": [330, 500, 500, 512], "dir": [1, 0], "spans": [{"text": "Figure label"}]}]},
    {"type": 1, "bbox": [320, 420, 560, 600]},
    {"type": 0, "bbox": [300, 760, 312, 772], "lines": [
      {"bbox": [300, 760, 312, 772], "dir": [1, 0], "spans": [{"text": "1"}]}]}
  ]}]}"#;

fn write_temp_dump(json: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn open_file_and_detect_columns() {
    let f = write_temp_dump(ARTICLE);
    let doc = Document::open_file(f.path()).unwrap();
    assert_eq!(doc.page_count(), 1);

    let cols = doc.columns(0, &ColumnOptions::default()).unwrap();
    assert_eq!(
        cols,
        vec![IRect::new(50, 100, 291, 700), IRect::new(320, 100, 612, 400)]
    );
}

#[test]
fn obstacles_reported_with_columns() {
    let doc = Document::from_json_str(ARTICLE).unwrap();
    let analysis = doc.analyze(0, &ColumnOptions::default()).unwrap();
    assert_eq!(analysis.vertical.len(), 1);
    assert_eq!(analysis.images.len(), 1);
    for col in &analysis.columns {
        let rect = col.to_rect();
        assert!(!rect.intersects(&analysis.vertical[0]));
        assert!(!rect.intersects(&analysis.images[0]));
    }
}

#[test]
fn caption_inside_figure_kept_when_allowed() {
    let doc = Document::from_json_str(ARTICLE).unwrap();
    let opts = ColumnOptions {
        no_image_text: false,
        ..ColumnOptions::default()
    };
    let cols = doc.columns(0, &opts).unwrap();
    assert!(cols.contains(&IRect::new(330, 500, 500, 512)));
}

#[test]
fn open_missing_file() {
    let err = Document::open_file("/nonexistent/dump.json").unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}

#[test]
fn empty_document() {
    let doc = Document::from_json_str("{}").unwrap();
    assert_eq!(doc.page_count(), 0);
    assert!(doc.columns_all(&ColumnOptions::default()).unwrap().is_empty());
}
