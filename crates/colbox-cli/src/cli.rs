use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colbox::ColumnOptions;

/// Detect reading columns in pages of an extraction dump.
#[derive(Debug, Parser)]
#[command(name = "colbox", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print column rectangles for each page, in reading order
    Columns {
        /// Path to the extraction dump (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        detection: DetectionArgs,
    },

    /// Write an SVG overlay of the detected columns for each page
    Debug {
        /// Path to the extraction dump (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output SVG path; with several pages, `_pageN` is added to the stem
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,

        /// Scale factor for the SVG size
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Also draw images and vertical text
        #[arg(long)]
        obstacles: bool,

        #[command(flatten)]
        detection: DetectionArgs,
    },
}

/// Options shared by every subcommand that runs detection.
#[derive(Debug, Clone, Args)]
pub struct DetectionArgs {
    /// Height trimmed from the bottom of each page (default: 50)
    #[arg(long, default_value_t = 50.0)]
    pub footer_margin: f64,

    /// Height trimmed from the top of each page (default: 50)
    #[arg(long, default_value_t = 50.0)]
    pub header_margin: f64,

    /// Keep text that lies entirely inside an image
    #[arg(long)]
    pub include_image_text: bool,
}

impl DetectionArgs {
    pub fn options(&self) -> ColumnOptions {
        ColumnOptions {
            footer_margin: self.footer_margin,
            header_margin: self.header_margin,
            no_image_text: !self.include_image_text,
        }
    }
}

/// Output format for column listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated, one section per page
    Text,
    /// JSON array of pages
    Json,
    /// CSV with one row per column
    Csv,
}
