//! Extract HTML `<table>` markup into labeled, structured data frames.
//!
//! ```
//! use html_table_frame::{FrameOptions, Label, read_html_fragment};
//!
//! let html = "<table>\
//!     <tr><th>City</th><th>Pop</th></tr>\
//!     <tr><td>Oslo</td><td>709000</td></tr>\
//! </table>";
//! let options = FrameOptions::builder()
//!     .column_label_rows([0])
//!     .row_labels([0])
//!     .build()?;
//! let frames = read_html_fragment(html, &options)?;
//! assert_eq!(frames[0].columns(), &[Label::name("Pop")]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod frame;
pub mod frame_builder;
pub mod node;
pub mod transform;
pub mod utils;

pub use config::{FrameOptions, FrameOptionsBuilder};
pub use document::{frames_from_document, read_html, read_html_fragment, select_tables};
pub use error::{TableError, TableResult};
pub use extract::{
    CELL_TAG, ExtractOptions, Grid, parse_row, parse_row_with, parse_table, parse_table_with,
};
pub use frame::{Cell, DataFrame, Index, Label};
pub use frame_builder::{frame_from_grid, html_table_to_frame};
pub use node::TableNode;
pub use transform::CellTransform;
