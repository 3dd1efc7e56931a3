//! Core configuration type for frame construction

use scraper::Selector;

use crate::extract::ExtractOptions;
use crate::utils::DEFAULT_TABLE_SELECTOR;

/// Options for turning a table node into a frame
#[derive(Debug, Clone)]
pub struct FrameOptions {
    /// Grid column positions whose values become the row index, in the
    /// order they become index levels
    pub(crate) row_label_cols: Vec<usize>,

    /// Grid row positions whose values become the column labels, in the
    /// order they become label levels
    pub(crate) col_label_rows: Vec<usize>,

    /// Forwarded to the table extractor
    pub(crate) extract: ExtractOptions,

    /// Selects table elements in a whole document; unused when a table
    /// node is passed in directly
    pub(crate) table_selector: Selector,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            row_label_cols: Vec::new(),
            col_label_rows: Vec::new(),
            extract: ExtractOptions::default(),
            table_selector: Selector::parse(DEFAULT_TABLE_SELECTOR)
                .expect("BUG: hardcoded selector 'table' is statically valid"),
        }
    }
}
