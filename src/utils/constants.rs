//! Shared constants for table extraction and rendering
//!
//! Grid limits only apply when colspan/rowspan expansion is enabled. Plain
//! extraction copies exactly the cells present in the markup and needs no
//! limits beyond the size of the document itself.

/// Maximum source rows accepted by span expansion
///
/// A longer table is an error rather than a truncated grid, matching the
/// column and cell limits.
pub const MAX_GRID_ROWS: usize = 1000;

/// Maximum grid columns produced by span expansion
pub const MAX_GRID_COLS: usize = 100;

/// Maximum total cells produced by span expansion
///
/// Limit: 100,000 cells. Exceeding it is an error, since a partial grid would
/// silently change the shape of the resulting frame.
pub const MAX_TOTAL_CELLS: usize = 100_000;

/// Largest colspan or rowspan honored for a single cell
pub const MAX_SPAN: usize = 100;

/// Tag name of a table row
pub const ROW_TAG: &str = "tr";

/// Default CSS selector used to locate tables in a document
pub const DEFAULT_TABLE_SELECTOR: &str = "table";

/// Maximum characters of a single cell shown by `Display` for frames
pub const DISPLAY_CELL_WIDTH: usize = 24;

/// Placeholder rendered for a missing cell
pub const MISSING_CELL: &str = "NaN";
