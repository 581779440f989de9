//! Extraction dump format.
//!
//! A dump is the JSON a text-extraction backend produces for a document,
//! in the nested "dict" shape: pages hold blocks, blocks hold lines, lines
//! hold spans. Rectangles are `[x0, y0, x1, y1]` arrays in page space with
//! a top-left origin. Fields the column detector does not read (fonts,
//! colors, span origins) are accepted and ignored.
//!
//! ```json
//! { "pages": [ { "width": 612, "height": 792,
//!     "images": [[400, 100, 560, 300]],
//!     "blocks": [ { "type": 0, "bbox": [72, 100, 300, 140],
//!         "lines": [ { "bbox": [72, 100, 300, 112], "dir": [1, 0],
//!                      "spans": [ { "text": "Hello" } ] } ] } ] } ] }
//! ```

use colbox_core::{ColumnError, Direction, PageLayout, Rect, TextBlock, TextLine};
use serde::{Deserialize, Serialize};

/// Block `type` of text blocks. Other types (images) are skipped.
pub const TEXT_BLOCK: u8 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DumpDocument {
    #[serde(default)]
    pub pages: Vec<DumpPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpPage {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub images: Vec<[f64; 4]>,
    #[serde(default)]
    pub blocks: Vec<DumpBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpBlock {
    #[serde(rename = "type", default)]
    pub kind: u8,
    pub bbox: [f64; 4],
    #[serde(default)]
    pub lines: Vec<DumpLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpLine {
    pub bbox: [f64; 4],
    #[serde(default = "horizontal")]
    pub dir: [f64; 2],
    #[serde(default)]
    pub spans: Vec<DumpSpan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DumpSpan {
    #[serde(default)]
    pub text: String,
}

fn horizontal() -> [f64; 2] {
    [Direction::HORIZONTAL.dx, Direction::HORIZONTAL.dy]
}

fn rect([x0, y0, x1, y1]: [f64; 4]) -> Result<Rect, ColumnError> {
    Rect::try_new(x0, y0, x1, y1)
}

impl TryFrom<DumpLine> for TextLine {
    type Error = ColumnError;

    fn try_from(line: DumpLine) -> Result<Self, Self::Error> {
        let [dx, dy] = line.dir;
        Ok(TextLine::from_spans(
            rect(line.bbox)?,
            Direction::new(dx, dy),
            line.spans.iter().map(|span| span.text.as_str()),
        ))
    }
}

impl TryFrom<DumpBlock> for TextBlock {
    type Error = ColumnError;

    fn try_from(block: DumpBlock) -> Result<Self, Self::Error> {
        let bbox = rect(block.bbox)?;
        let lines = block
            .lines
            .into_iter()
            .map(TextLine::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TextBlock::new(bbox, lines))
    }
}

impl TryFrom<DumpPage> for PageLayout {
    type Error = ColumnError;

    fn try_from(page: DumpPage) -> Result<Self, Self::Error> {
        let images = page
            .images
            .into_iter()
            .map(rect)
            .collect::<Result<Vec<_>, _>>()?;
        let blocks = page
            .blocks
            .into_iter()
            .filter(|block| block.kind == TEXT_BLOCK)
            .map(TextBlock::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let layout = PageLayout::new(page.width, page.height)
            .with_images(images)
            .with_blocks(blocks);
        layout.validate()?;
        Ok(layout)
    }
}
