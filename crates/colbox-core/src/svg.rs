//! SVG overlay for visually checking detected columns.
//!
//! Draws the page boundary, optionally the obstacles, and each column
//! rectangle labelled with its position in reading order. The renderer
//! only reads the column list it is given.

use std::fmt::Write;

use crate::geometry::{IRect, Rect};

/// Options for SVG generation.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Optional fixed width for the SVG output. If `None`, uses the page width.
    pub width: Option<f64>,
    /// Optional fixed height for the SVG output. If `None`, uses the page height.
    pub height: Option<f64>,
    /// Scale factor for the SVG output. Default is `1.0`.
    pub scale: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            scale: 1.0,
        }
    }
}

/// Stroke and fill for one kind of overlay rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub stroke: String,
    pub stroke_width: f64,
    /// Fill color, `None` for an outline only.
    pub fill: Option<String>,
    pub fill_opacity: f64,
}

impl DrawStyle {
    /// Red outlines, the color the index labels are drawn in as well.
    pub fn columns_default() -> Self {
        Self {
            stroke: "red".to_string(),
            stroke_width: 1.0,
            fill: None,
            fill_opacity: 0.0,
        }
    }

    pub fn images_default() -> Self {
        Self {
            stroke: "blue".to_string(),
            stroke_width: 0.5,
            fill: Some("blue".to_string()),
            fill_opacity: 0.1,
        }
    }

    pub fn vertical_default() -> Self {
        Self {
            stroke: "green".to_string(),
            stroke_width: 0.5,
            fill: Some("green".to_string()),
            fill_opacity: 0.1,
        }
    }
}

/// Offset of a column's index label from its top-left corner.
const LABEL_OFFSET: (f64, f64) = (5.0, 15.0);

/// Renders a page with column overlays as SVG 1.1 markup.
///
/// The SVG coordinate system matches the page's top-left origin.
pub struct SvgRenderer {
    page_width: f64,
    page_height: f64,
    /// Markup of everything drawn so far, in drawing order.
    body: String,
}

impl SvgRenderer {
    pub fn new(page_width: f64, page_height: f64) -> Self {
        Self {
            page_width,
            page_height,
            body: String::new(),
        }
    }

    /// Draw plain rectangles, e.g. image or vertical-text obstacles.
    pub fn draw_rects(&mut self, rects: &[Rect], style: &DrawStyle) {
        for rect in rects {
            self.push_rect(rect, style);
        }
    }

    /// Draw column rectangles, each labelled with its index.
    pub fn draw_columns(&mut self, columns: &[IRect], style: &DrawStyle) {
        for (index, column) in columns.iter().enumerate() {
            self.push_rect(&column.to_rect(), style);
            let _ = writeln!(
                self.body,
                "  <text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"{}\">{index}</text>",
                column.x0 as f64 + LABEL_OFFSET.0,
                column.y0 as f64 + LABEL_OFFSET.1,
                style.stroke,
            );
        }
    }

    fn push_rect(&mut self, rect: &Rect, style: &DrawStyle) {
        let fill = match &style.fill {
            Some(color) => format!("fill=\"{color}\" fill-opacity=\"{}\"", style.fill_opacity),
            None => "fill=\"none\"".to_string(),
        };
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {fill} \
             stroke=\"{}\" stroke-width=\"{}\"/>",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            style.stroke,
            style.stroke_width,
        );
    }

    /// Generate the complete SVG document.
    pub fn to_svg(&self, options: &SvgOptions) -> String {
        let view_width = self.page_width;
        let view_height = self.page_height;
        let svg_width = options.width.unwrap_or(self.page_width * options.scale);
        let svg_height = options.height.unwrap_or(self.page_height * options.scale);

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
             width=\"{svg_width}\" height=\"{svg_height}\" \
             viewBox=\"0 0 {view_width} {view_height}\">\n"
        ));
        svg.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{view_width}\" height=\"{view_height}\" \
             fill=\"white\" stroke=\"black\" stroke-width=\"0.5\"/>\n"
        ));
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}
