//! Row index of a frame

use serde::Serialize;

use super::Label;

/// Row index.
///
/// `Range` is the default positional index `0..n`. Setting an index from one
/// column yields `Labels`; from several columns, `Multi`, whose keys hold one
/// value per level in the order the columns were given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Index {
    Range { len: usize },
    Labels { name: Label, values: Vec<String> },
    Multi { names: Vec<Label>, keys: Vec<Vec<String>> },
}

impl Index {
    #[must_use]
    pub fn range(len: usize) -> Self {
        Index::Range { len }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Index::Range { len } => *len,
            Index::Labels { values, .. } => values.len(),
            Index::Multi { keys, .. } => keys.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_positional(&self) -> bool {
        matches!(self, Index::Range { .. })
    }

    /// Labels of the index levels; empty for a positional index.
    #[must_use]
    pub fn names(&self) -> Vec<Label> {
        match self {
            Index::Range { .. } => Vec::new(),
            Index::Labels { name, .. } => vec![name.clone()],
            Index::Multi { names, .. } => names.clone(),
        }
    }

    /// Number of levels: 1 for `Range` and `Labels`.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Index::Range { .. } | Index::Labels { .. } => 1,
            Index::Multi { names, .. } => names.len(),
        }
    }

    /// Key of row `row`, one string per level.
    #[must_use]
    pub fn key(&self, row: usize) -> Option<Vec<String>> {
        match self {
            Index::Range { len } => (row < *len).then(|| vec![row.to_string()]),
            Index::Labels { values, .. } => values.get(row).map(|v| vec![v.clone()]),
            Index::Multi { keys, .. } => keys.get(row).cloned(),
        }
    }

    /// Position of the first row whose key equals `key`.
    pub fn position<S: AsRef<str>>(&self, key: &[S]) -> Option<usize> {
        match self {
            Index::Range { len } => match key {
                [single] => single
                    .as_ref()
                    .parse::<usize>()
                    .ok()
                    .filter(|pos| pos < len),
                _ => None,
            },
            Index::Labels { values, .. } => match key {
                [single] => values.iter().position(|v| v == single.as_ref()),
                _ => None,
            },
            Index::Multi { keys, .. } => keys.iter().position(|k| {
                k.len() == key.len() && k.iter().zip(key).all(|(a, b)| a == b.as_ref())
            }),
        }
    }
}
