//! Whole-document entry points
//!
//! Parse an HTML string and convert every table the configured selector
//! matches, in document order. Nested tables match independently, so an
//! outer table's grid also contains the rows of the tables inside it.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::config::FrameOptions;
use crate::error::TableResult;
use crate::frame::DataFrame;
use crate::frame_builder::html_table_to_frame;

/// Table elements in `document` matched by the options' selector.
pub fn select_tables<'a>(document: &'a Html, options: &FrameOptions) -> Vec<ElementRef<'a>> {
    document.select(options.table_selector()).collect()
}

/// Convert every selected table of a parsed document.
///
/// # Errors
///
/// Stops at the first table that fails to convert and returns its error.
pub fn frames_from_document(document: &Html, options: &FrameOptions) -> TableResult<Vec<DataFrame>> {
    let tables = select_tables(document, options);
    debug!(tables = tables.len(), "Converting document tables");

    tables
        .iter()
        .map(|table| html_table_to_frame(table, options))
        .collect()
}

/// Parse a full HTML document and convert every selected table.
///
/// # Errors
///
/// See [`frames_from_document`].
pub fn read_html(html: &str, options: &FrameOptions) -> TableResult<Vec<DataFrame>> {
    let document = Html::parse_document(html);
    frames_from_document(&document, options)
}

/// Parse an HTML fragment and convert every selected table.
///
/// # Errors
///
/// See [`frames_from_document`].
pub fn read_html_fragment(html: &str, options: &FrameOptions) -> TableResult<Vec<DataFrame>> {
    let document = Html::parse_fragment(html);
    frames_from_document(&document, options)
}
