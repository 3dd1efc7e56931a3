//! In-memory structured table
//!
//! A `DataFrame` holds a rectangular body of text cells, one label per
//! column, and a row index. Cells are `Option<String>`: `None` marks a slot
//! that a short record did not fill. No type inference is performed; every
//! value stays the text it was extracted as.

mod display;
mod index;
mod label;

pub use index::Index;
pub use label::Label;

use serde::Serialize;
use tracing::debug;

use crate::error::{TableError, TableResult};

/// One body cell. `None` is a missing value.
pub type Cell = Option<String>;

/// Labeled, indexed table of text cells.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataFrame {
    columns: Vec<Label>,
    index: Index,
    data: Vec<Vec<Cell>>,
}

impl DataFrame {
    /// Frame with no rows and no columns.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            index: Index::range(0),
            data: Vec::new(),
        }
    }

    /// Build a frame from row-major records.
    ///
    /// With `columns`, every record must carry exactly one value per label.
    /// Without, the frame is as wide as the longest record, shorter records
    /// are padded with missing cells, and columns get positional labels.
    /// The index is always positional.
    ///
    /// # Errors
    ///
    /// Returns `TableError::LengthMismatch` for the first record whose
    /// length differs from the number of declared columns.
    pub fn from_records(records: Vec<Vec<String>>, columns: Option<Vec<Label>>) -> TableResult<Self> {
        let columns = match columns {
            Some(columns) => {
                if let Some((row, record)) = records
                    .iter()
                    .enumerate()
                    .find(|(_, record)| record.len() != columns.len())
                {
                    return Err(TableError::LengthMismatch {
                        row,
                        expected: columns.len(),
                        found: record.len(),
                    });
                }
                columns
            }
            None => {
                let width = records.iter().map(Vec::len).max().unwrap_or(0);
                (0..width).map(Label::Position).collect()
            }
        };

        let width = columns.len();
        let data: Vec<Vec<Cell>> = records
            .into_iter()
            .map(|record| {
                let mut row: Vec<Cell> = record.into_iter().map(Some).collect();
                row.resize(width, None);
                row
            })
            .collect();

        debug!(rows = data.len(), cols = width, "Built frame from records");

        Ok(Self {
            columns,
            index: Index::range(data.len()),
            data,
        })
    }

    /// Move the given columns out of the body and into the row index.
    ///
    /// One key yields a single-level index named by that column; several
    /// keys yield a multi-level index in the given order. Missing cells in
    /// a key column become empty strings. Any existing index is replaced.
    ///
    /// # Errors
    ///
    /// Returns `TableError::ColumnNotFound` if a key matches no column and
    /// `TableError::DuplicateColumn` if it matches more than one.
    pub fn set_index(self, keys: &[Label]) -> TableResult<Self> {
        if keys.is_empty() {
            return Ok(self);
        }

        let positions = keys
            .iter()
            .map(|key| self.column_position(key))
            .collect::<TableResult<Vec<_>>>()?;

        let key_of = |row: &[Cell]| -> Vec<String> {
            positions
                .iter()
                .map(|&pos| row[pos].clone().unwrap_or_default())
                .collect()
        };

        let index = if let [pos] = positions.as_slice() {
            Index::Labels {
                name: keys[0].clone(),
                values: self
                    .data
                    .iter()
                    .map(|row| row[*pos].clone().unwrap_or_default())
                    .collect(),
            }
        } else {
            Index::Multi {
                names: keys.to_vec(),
                keys: self.data.iter().map(|row| key_of(row.as_slice())).collect(),
            }
        };

        let keep = |pos: &usize| !positions.contains(pos);
        let columns = self
            .columns
            .iter()
            .enumerate()
            .filter(|(pos, _)| keep(pos))
            .map(|(_, label)| label.clone())
            .collect();
        let data = self
            .data
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .enumerate()
                    .filter(|(pos, _)| keep(pos))
                    .map(|(_, cell)| cell)
                    .collect()
            })
            .collect();

        debug!(levels = keys.len(), "Set frame index");

        Ok(Self {
            columns,
            index,
            data,
        })
    }

    /// Position of the unique column carrying `label`.
    ///
    /// # Errors
    ///
    /// `TableError::ColumnNotFound` or `TableError::DuplicateColumn`.
    pub fn column_position(&self, label: &Label) -> TableResult<usize> {
        let mut matches = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, l)| *l == label)
            .map(|(pos, _)| pos);
        match (matches.next(), matches.next()) {
            (Some(pos), None) => Ok(pos),
            (None, _) => Err(TableError::ColumnNotFound(label.to_string())),
            (Some(_), Some(_)) => Err(TableError::DuplicateColumn(label.to_string())),
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[Label] {
        &self.columns
    }

    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// `(rows, columns)` of the body.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// True when the body has no rows or no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0 || self.n_cols() == 0
    }

    /// Body cells of row `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.data.get(row).map(Vec::as_slice)
    }

    /// All rows of the body.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.data
    }

    /// Cells of the column carrying `label`, top to bottom.
    ///
    /// # Errors
    ///
    /// Same as [`DataFrame::column_position`].
    pub fn column(&self, label: &Label) -> TableResult<Vec<Option<&str>>> {
        let pos = self.column_position(label)?;
        Ok(self.data.iter().map(|row| row[pos].as_deref()).collect())
    }

    /// Text of one cell; `None` if the cell is missing or out of range.
    #[must_use]
    pub fn get(&self, row: usize, label: &Label) -> Option<&str> {
        let pos = self.column_position(label).ok()?;
        self.data.get(row)?.get(pos)?.as_deref()
    }

    /// Index key followed by body values for every row, missing cells as
    /// empty strings. A positional index contributes the row number.
    #[must_use]
    pub fn to_records(&self) -> Vec<Vec<String>> {
        self.data
            .iter()
            .enumerate()
            .map(|(pos, row)| {
                let mut record = self.index.key(pos).unwrap_or_default();
                record.extend(row.iter().map(|cell| cell.clone().unwrap_or_default()));
                record
            })
            .collect()
    }

    /// Serialize as `{"columns": [...], "index": {...}, "data": [[...]]}`.
    ///
    /// # Errors
    ///
    /// `TableError::Serialization` if `serde_json` fails.
    pub fn to_json(&self) -> TableResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for DataFrame {
    fn default() -> Self {
        Self::empty()
    }
}
