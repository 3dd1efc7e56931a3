//! Colspan/rowspan expansion
//!
//! Plain extraction reads each cell once, so a cell spanning three columns
//! contributes a single value and shifts everything after it. With expansion
//! enabled the cell text is copied into every grid slot the span covers,
//! which keeps columns aligned across rows.
//!
//! A rowspan never creates rows past the last `tr` of the table. Slots that
//! no cell covers are trimmed from the end of a row (keeping the source
//! raggedness). Interior slots no cell covers become empty strings: a grid
//! row is plain text, so it cannot hold a missing marker. Frames only use
//! `None` for cells past the end of a short record.

use tracing::debug;

use super::{Grid, is_cell_tag, is_row_tag};
use crate::error::{TableError, TableResult};
use crate::node::TableNode;
use crate::transform::CellTransform;
use crate::utils::{MAX_GRID_COLS, MAX_GRID_ROWS, MAX_SPAN, MAX_TOTAL_CELLS};

type SparseRow = Vec<Option<String>>;

/// Parse a table into a grid with spanning cells expanded.
///
/// # Errors
///
/// - `TableError::TableTooLarge` if the table has more than `MAX_GRID_ROWS`
///   rows, a row would exceed `MAX_GRID_COLS` columns, or the grid would
///   exceed `MAX_TOTAL_CELLS` cells
/// - `TableError::Transform` if the transform fails on any source cell
pub fn expand_table<N: TableNode>(table: &N, transform: &CellTransform) -> TableResult<Grid> {
    let rows = table.find_all(is_row_tag);
    if rows.len() > MAX_GRID_ROWS {
        return Err(TableError::TableTooLarge(format!(
            "{} rows (maximum allowed: {MAX_GRID_ROWS})",
            rows.len()
        )));
    }
    let row_limit = rows.len();

    let mut grid: Vec<SparseRow> = vec![Vec::new(); row_limit];
    let mut total_cells = 0usize;

    for (row_idx, row) in rows.iter().enumerate() {
        let mut col_idx = 0usize;

        for (cell_idx, cell) in row.find_all(is_cell_tag).iter().enumerate() {
            // Skip slots already filled by a rowspan from above
            while is_occupied(&grid[row_idx], col_idx) {
                col_idx += 1;
            }

            let colspan = span_attr(cell, "colspan");
            let rowspan = span_attr(cell, "rowspan");

            let end_col = col_idx.saturating_add(colspan);
            if end_col > MAX_GRID_COLS {
                return Err(TableError::TableTooLarge(format!(
                    "row {row_idx} needs {end_col} columns (maximum allowed: {MAX_GRID_COLS})"
                )));
            }

            let end_row = row_idx.saturating_add(rowspan).min(row_limit);
            total_cells = total_cells.saturating_add(colspan.saturating_mul(end_row - row_idx));
            if total_cells > MAX_TOTAL_CELLS {
                return Err(TableError::TableTooLarge(format!(
                    "exceeds maximum {MAX_TOTAL_CELLS} cells (attempted {total_cells})"
                )));
            }

            let text = transform
                .apply(cell.text())
                .map_err(|source| TableError::Transform {
                    row: row_idx,
                    column: cell_idx,
                    source,
                })?;

            if colspan > 1 || rowspan > 1 {
                debug!(
                    row = row_idx,
                    col = col_idx,
                    colspan,
                    rowspan,
                    "Expanding spanning cell"
                );
            }

            for target in &mut grid[row_idx..end_row] {
                if target.len() < end_col {
                    target.resize(end_col, None);
                }
                for slot in &mut target[col_idx..end_col] {
                    *slot = Some(text.clone());
                }
            }

            col_idx = end_col;
        }
    }

    Ok(grid.into_iter().map(finish_row).collect())
}

fn is_occupied(row: &SparseRow, col: usize) -> bool {
    row.get(col).is_some_and(Option::is_some)
}

/// Read a span attribute, clamped to `1..=MAX_SPAN`.
fn span_attr<N: TableNode>(cell: &N, name: &str) -> usize {
    cell.attr(name)
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

fn finish_row(mut row: SparseRow) -> Vec<String> {
    while row.last().is_some_and(Option::is_none) {
        row.pop();
    }
    row.into_iter().map(Option::unwrap_or_default).collect()
}
