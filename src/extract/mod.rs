//! Cell and table extraction
//!
//! Turns a table node into a row-major grid of cell strings:
//! - every `tr` descendant of the table is a row, in document order, at any
//!   nesting depth (rows of `thead`, `tbody` and `tfoot` are flattened into
//!   one sequence)
//! - every `th`/`td` descendant of a row is a cell, in document order
//! - rows keep the number of cells they actually have, so grids may be ragged
//!
//! Missing rows or cells are never an error; they produce empty sequences.

pub mod spans;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{TableError, TableResult};
use crate::node::TableNode;
use crate::transform::CellTransform;
use crate::utils::ROW_TAG;

/// Tag-name pattern for header and data cells.
///
/// Anchored on both ends so only `th` and `td` match, never `thead` or
/// `path`.
pub static CELL_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^t[hd]$").expect("BUG: hardcoded cell tag regex is statically valid")
});

/// Row-major cell text of one table.
pub type Grid = Vec<Vec<String>>;

/// Options forwarded from the frame builder to the extractors.
#[derive(Clone, Debug, Default)]
pub struct ExtractOptions {
    /// Applied to the raw text of every cell
    pub transform: CellTransform,
    /// Copy `colspan`/`rowspan` cells into every grid slot they cover
    pub expand_spans: bool,
}

impl ExtractOptions {
    #[must_use]
    pub fn with_transform(transform: CellTransform) -> Self {
        Self {
            transform,
            expand_spans: false,
        }
    }
}

#[inline]
pub fn is_cell_tag(name: &str) -> bool {
    CELL_TAG.is_match(name)
}

#[inline]
pub fn is_row_tag(name: &str) -> bool {
    name == ROW_TAG
}

/// Parse a row node into the raw text of its cells.
pub fn parse_row<N: TableNode>(row: &N) -> Vec<String> {
    row.find_all(is_cell_tag)
        .iter()
        .map(TableNode::text)
        .collect()
}

/// Parse a row node into the transformed text of its cells.
///
/// # Errors
///
/// Returns `TableError::Transform` for the first cell the transform rejects.
/// The reported row is always 0; use [`parse_table_with`] to get positions
/// relative to a whole table.
pub fn parse_row_with<N: TableNode>(row: &N, transform: &CellTransform) -> TableResult<Vec<String>> {
    parse_row_at(row, 0, transform)
}

fn parse_row_at<N: TableNode>(
    row: &N,
    row_idx: usize,
    transform: &CellTransform,
) -> TableResult<Vec<String>> {
    row.find_all(is_cell_tag)
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            transform
                .apply(cell.text())
                .map_err(|source| TableError::Transform {
                    row: row_idx,
                    column,
                    source,
                })
        })
        .collect()
}

/// Parse a table node into a grid of raw cell text.
pub fn parse_table<N: TableNode>(table: &N) -> Grid {
    table.find_all(is_row_tag).iter().map(parse_row).collect()
}

/// Parse a table node into a grid, applying the extraction options.
///
/// # Errors
///
/// Returns `TableError::Transform` if the transform fails on any cell, and
/// `TableError::TableTooLarge` if span expansion exceeds the grid limits.
pub fn parse_table_with<N: TableNode>(table: &N, options: &ExtractOptions) -> TableResult<Grid> {
    let grid = if options.expand_spans {
        spans::expand_table(table, &options.transform)?
    } else {
        table
            .find_all(is_row_tag)
            .iter()
            .enumerate()
            .map(|(row_idx, row)| parse_row_at(row, row_idx, &options.transform))
            .collect::<TableResult<Grid>>()?
    };

    debug!(
        rows = grid.len(),
        max_cols = grid.iter().map(Vec::len).max().unwrap_or(0),
        expand_spans = options.expand_spans,
        "Parsed table grid"
    );

    Ok(grid)
}
