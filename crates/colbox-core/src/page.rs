//! Page content as delivered by a text-extraction backend.
//!
//! These types describe one page: its size, the rectangles covered by
//! images, and text grouped into blocks and lines. They carry only what
//! column detection needs; fonts, colors and span styling stay with the
//! extraction backend.

use crate::error::ColumnError;
use crate::geometry::Rect;

/// Writing direction of a text line as a unit vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub dx: f64,
    pub dy: f64,
}

impl Direction {
    /// Left-to-right horizontal text.
    pub const HORIZONTAL: Direction = Direction { dx: 1.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// True only for the canonical `(1, 0)` vector.
    pub fn is_horizontal(&self) -> bool {
        *self == Self::HORIZONTAL
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::HORIZONTAL
    }
}

/// A text line: its rectangle, direction and concatenated text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextLine {
    pub bbox: Rect,
    pub dir: Direction,
    /// Text of all spans, each trimmed, joined without separators.
    pub text: String,
}

impl TextLine {
    pub fn new(bbox: Rect, dir: Direction, text: impl Into<String>) -> Self {
        Self {
            bbox,
            dir,
            text: text.into(),
        }
    }

    /// Build a line from raw span texts, trimming each span.
    pub fn from_spans<'a>(
        bbox: Rect,
        dir: Direction,
        spans: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let text = spans.into_iter().map(str::trim).collect::<String>();
        Self { bbox, dir, text }
    }

    /// Lines of one character or less are stray marks and carry no geometry.
    pub fn is_significant(&self) -> bool {
        self.text.trim().chars().nth(1).is_some()
    }
}

/// A text block: lines the extraction backend grouped together.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBlock {
    pub bbox: Rect,
    /// Lines in extraction order.
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    pub fn new(bbox: Rect, lines: Vec<TextLine>) -> Self {
        Self { bbox, lines }
    }

    /// Classification by the first line's direction; `None` without lines.
    pub fn is_horizontal(&self) -> Option<bool> {
        self.lines.first().map(|line| line.dir.is_horizontal())
    }
}

/// Everything column detection reads from one page.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    /// Rectangles occupied by embedded images.
    pub images: Vec<Rect>,
    pub blocks: Vec<TextBlock>,
}

impl PageLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_images(mut self, images: Vec<Rect>) -> Self {
        self.images = images;
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<TextBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    /// The full page rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Reject pages the algorithm cannot reason about.
    ///
    /// Page size must be positive and finite; every image, block and line
    /// rectangle must pass [`Rect::validate`].
    pub fn validate(&self) -> Result<(), ColumnError> {
        let size_ok = |v: f64| v.is_finite() && v > 0.0;
        if !size_ok(self.width) || !size_ok(self.height) {
            return Err(ColumnError::InvalidPageSize {
                width: self.width,
                height: self.height,
            });
        }
        for image in &self.images {
            image.validate()?;
        }
        for block in &self.blocks {
            block.bbox.validate()?;
            for line in &block.lines {
                line.bbox.validate()?;
            }
        }
        Ok(())
    }
}
