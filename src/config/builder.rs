//! Fluent builder for `FrameOptions`
//!
//! The table selector is kept as a string until `build()`, where it is
//! parsed once so an invalid selector is reported up front instead of on
//! every document.

use anyhow::{Result, anyhow};
use scraper::Selector;

use super::types::FrameOptions;
use crate::extract::ExtractOptions;
use crate::transform::CellTransform;
use crate::utils::DEFAULT_TABLE_SELECTOR;

/// Parse a CSS selector, mapping the parser's borrowed error into `anyhow`.
///
/// # Errors
///
/// Returns an error if `css` is not a valid selector.
fn compile_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid table selector '{css}': {e}"))
}

#[derive(Debug, Clone)]
pub struct FrameOptionsBuilder {
    row_label_cols: Vec<usize>,
    col_label_rows: Vec<usize>,
    transform: CellTransform,
    expand_spans: bool,
    table_selector: String,
}

impl Default for FrameOptionsBuilder {
    fn default() -> Self {
        Self {
            row_label_cols: Vec::new(),
            col_label_rows: Vec::new(),
            transform: CellTransform::identity(),
            expand_spans: false,
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
        }
    }
}

impl FrameOptions {
    /// Create a builder for configuring `FrameOptions` with a fluent interface
    #[must_use]
    pub fn builder() -> FrameOptionsBuilder {
        FrameOptionsBuilder::default()
    }
}

impl FrameOptionsBuilder {
    /// Grid columns to move into the row index, in level order
    #[must_use]
    pub fn row_labels(mut self, cols: impl IntoIterator<Item = usize>) -> Self {
        self.row_label_cols = cols.into_iter().collect();
        self
    }

    /// Grid rows to use as column labels, in level order
    #[must_use]
    pub fn column_label_rows(mut self, rows: impl IntoIterator<Item = usize>) -> Self {
        self.col_label_rows = rows.into_iter().collect();
        self
    }

    #[must_use]
    pub fn transform(mut self, transform: CellTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Copy `colspan`/`rowspan` cells into every slot they cover
    #[must_use]
    pub fn expand_spans(mut self, expand: bool) -> Self {
        self.expand_spans = expand;
        self
    }

    /// CSS selector used by the document entry points to find tables
    #[must_use]
    pub fn table_selector(mut self, css: impl Into<String>) -> Self {
        self.table_selector = css.into();
        self
    }

    /// # Errors
    ///
    /// Returns an error if the table selector does not parse.
    pub fn build(self) -> Result<FrameOptions> {
        let table_selector = compile_selector(&self.table_selector)?;

        Ok(FrameOptions {
            row_label_cols: self.row_label_cols,
            col_label_rows: self.col_label_rows,
            extract: ExtractOptions {
                transform: self.transform,
                expand_spans: self.expand_spans,
            },
            table_selector,
        })
    }
}
