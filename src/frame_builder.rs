//! Table node to frame conversion
//!
//! The grid is extracted first, then shaped in three steps:
//! 1. the designated grid rows are zipped column-wise into column labels
//! 2. every other row, in order, becomes a body record
//! 3. the designated columns, resolved against the new column labels, are
//!    moved into the row index
//!
//! Shape errors from the frame layer (short records, bad positions) are
//! returned unchanged.

use tracing::debug;

use crate::config::FrameOptions;
use crate::error::{TableError, TableResult};
use crate::extract::{Grid, parse_table_with};
use crate::frame::{DataFrame, Label};
use crate::node::TableNode;

/// Convert a table node into a frame.
///
/// # Errors
///
/// - `TableError::Transform` if the cell transform fails
/// - `TableError::HeaderRowOutOfRange` if a column-label row is past the grid
/// - `TableError::LengthMismatch` if a body row does not match the header width
/// - `TableError::ColumnOutOfRange` if a row-label column is past the labels
/// - `TableError::DuplicateColumn` if a row-label column's label is not unique
pub fn html_table_to_frame<N: TableNode>(table: &N, options: &FrameOptions) -> TableResult<DataFrame> {
    let grid = parse_table_with(table, options.extract_options())?;
    frame_from_grid(grid, options.row_label_cols(), options.col_label_rows())
}

/// Shape an already extracted grid into a frame.
///
/// # Errors
///
/// Same shape errors as [`html_table_to_frame`].
pub fn frame_from_grid(
    grid: Grid,
    row_label_cols: &[usize],
    col_label_rows: &[usize],
) -> TableResult<DataFrame> {
    let columns = header_labels(&grid, col_label_rows)?;

    let body: Grid = grid
        .into_iter()
        .enumerate()
        .filter(|(pos, _)| !col_label_rows.contains(pos))
        .map(|(_, row)| row)
        .collect();

    debug!(
        header_rows = col_label_rows.len(),
        body_rows = body.len(),
        labeled = columns.is_some(),
        "Building frame from grid"
    );

    let frame = DataFrame::from_records(body, columns)?;

    if row_label_cols.is_empty() {
        return Ok(frame);
    }

    let keys = row_label_cols
        .iter()
        .map(|&pos| {
            frame
                .columns()
                .get(pos)
                .cloned()
                .ok_or(TableError::ColumnOutOfRange {
                    index: pos,
                    columns: frame.n_cols(),
                })
        })
        .collect::<TableResult<Vec<Label>>>()?;

    debug!(?keys, "Setting row index");

    frame.set_index(&keys)
}

/// Column labels from the designated grid rows, or `None` when no rows are
/// designated.
///
/// Column `j` is labeled with `grid[r][j]` for each designated `r`, in the
/// order given. Labels stop at the shortest designated row.
fn header_labels(grid: &Grid, col_label_rows: &[usize]) -> TableResult<Option<Vec<Label>>> {
    if col_label_rows.is_empty() {
        return Ok(None);
    }

    let header_rows = col_label_rows
        .iter()
        .map(|&pos| {
            grid.get(pos).ok_or(TableError::HeaderRowOutOfRange {
                index: pos,
                rows: grid.len(),
            })
        })
        .collect::<TableResult<Vec<_>>>()?;

    let width = header_rows.iter().map(|row| row.len()).min().unwrap_or(0);

    let labels = (0..width)
        .map(|col| {
            Label::from_header_parts(header_rows.iter().map(|row| row[col].clone()).collect())
        })
        .collect();

    Ok(Some(labels))
}
