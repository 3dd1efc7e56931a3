//! Plain-text rendering of a frame

use std::fmt;

use super::{DataFrame, Label};
use crate::utils::{DISPLAY_CELL_WIDTH, MISSING_CELL, display_width, safe_truncate_chars};

fn clip(text: &str) -> String {
    if display_width(text) > DISPLAY_CELL_WIDTH {
        let mut clipped = safe_truncate_chars(text, DISPLAY_CELL_WIDTH - 1).to_string();
        clipped.push('…');
        clipped
    } else {
        text.to_string()
    }
}

impl fmt::Display for DataFrame {
    /// Index columns first, then body columns, left-aligned and separated by
    /// two spaces. The first line holds the labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_names: Vec<String> = if self.index.is_positional() {
            vec![String::new()]
        } else {
            self.index.names().iter().map(Label::to_string).collect()
        };

        let mut lines: Vec<Vec<String>> = Vec::with_capacity(self.n_rows() + 1);
        lines.push(
            index_names
                .iter()
                .map(|name| clip(name))
                .chain(self.columns.iter().map(|label| clip(&label.to_string())))
                .collect(),
        );
        for (pos, row) in self.data.iter().enumerate() {
            let key = self.index.key(pos).unwrap_or_default();
            lines.push(
                key.iter()
                    .map(|part| clip(part))
                    .chain(
                        row.iter()
                            .map(|cell| clip(cell.as_deref().unwrap_or(MISSING_CELL))),
                    )
                    .collect(),
            );
        }

        let n_fields = lines.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..n_fields)
            .map(|i| {
                lines
                    .iter()
                    .filter_map(|line| line.get(i))
                    .map(|s| display_width(s))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for line in &lines {
            let rendered: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(text, &width)| {
                    let pad = width.saturating_sub(display_width(text));
                    format!("{text}{}", " ".repeat(pad))
                })
                .collect();
            writeln!(f, "{}", rendered.join("  ").trim_end())?;
        }
        Ok(())
    }
}
