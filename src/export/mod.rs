//! Export module - turns live proposal HTML into a paginated A4 PDF.
//!
//! The pipeline has three stages:
//! - `raster` - render the HTML to a single tall JPEG via a headless rasterizer
//! - `paginate` - plan how the tall image is sliced across A4 pages
//! - `pdf` - assemble the final document, one page per slice
//!
//! The rasterizer is a trait so tests can substitute a fixed image.

pub mod handlers;
pub mod paginate;
pub mod pdf;
pub mod raster;

pub use paginate::{plan_pages, PageGeometry, PagePlacement, PaginationPlan};
pub use pdf::assemble_pdf;
pub use raster::{HtmlRasterizer, RasterImage, RasterOptions, WkhtmlRasterizer};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Errors that can occur while exporting a proposal to PDF.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create staging directory: {0}")]
    StagingDir(#[source] std::io::Error),
    #[error("failed to write staged HTML: {0}")]
    WriteHtml(#[source] std::io::Error),
    #[error("rasterizer execution failed: {0}")]
    RasterizerIo(#[source] std::io::Error),
    #[error("rasterizer exited with status {0}")]
    RasterizerExit(i32),
    #[error("failed to read rendered image: {0}")]
    ReadImage(#[source] std::io::Error),
    #[error("failed to decode rendered image: {0}")]
    Decode(String),
    #[error("rendered document is empty")]
    EmptyDocument,
}

/// Build the download filename for an exported proposal.
///
/// Whitespace runs in the client name collapse to single underscores,
/// then the whole name is sanitized for the filesystem.
pub fn export_filename(proposal_id: &str, client_name: &str) -> String {
    let client_part = WHITESPACE_RUN.replace_all(client_name.trim(), "_");
    sanitize_filename::sanitize(format!("{}_{}.pdf", proposal_id, client_part))
}
