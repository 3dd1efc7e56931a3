//! Getter methods for `FrameOptions`

use scraper::Selector;

use super::types::FrameOptions;
use crate::extract::ExtractOptions;
use crate::transform::CellTransform;

impl FrameOptions {
    #[must_use]
    pub fn row_label_cols(&self) -> &[usize] {
        &self.row_label_cols
    }

    #[must_use]
    pub fn col_label_rows(&self) -> &[usize] {
        &self.col_label_rows
    }

    #[must_use]
    pub fn extract_options(&self) -> &ExtractOptions {
        &self.extract
    }

    #[must_use]
    pub fn transform(&self) -> &CellTransform {
        &self.extract.transform
    }

    #[must_use]
    pub fn expand_spans(&self) -> bool {
        self.extract.expand_spans
    }

    #[must_use]
    pub fn table_selector(&self) -> &Selector {
        &self.table_selector
    }
}
