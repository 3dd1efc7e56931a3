//! Column labels

use std::fmt;

use serde::Serialize;

/// Label of one column.
///
/// Frames built without header rows use `Position`. A single header row
/// yields `Name`; several header rows yield a `Tuple` with one part per row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Label {
    Position(usize),
    Name(String),
    Tuple(Vec<String>),
}

impl Label {
    pub fn name(name: impl Into<String>) -> Self {
        Label::Name(name.into())
    }

    pub fn tuple<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Label::Tuple(parts.into_iter().map(Into::into).collect())
    }

    /// Build a label from the header parts of one column, collapsing a
    /// single part to a plain name.
    pub(crate) fn from_header_parts(mut parts: Vec<String>) -> Self {
        if parts.len() == 1 {
            Label::Name(parts.remove(0))
        } else {
            Label::Tuple(parts)
        }
    }

    /// Number of header levels this label spans.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Label::Position(_) | Label::Name(_) => 1,
            Label::Tuple(parts) => parts.len(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Position(pos) => write!(f, "{pos}"),
            Label::Name(name) => f.write_str(name),
            Label::Tuple(parts) => write!(f, "({})", parts.join(", ")),
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::Name(name)
    }
}

impl From<usize> for Label {
    fn from(pos: usize) -> Self {
        Label::Position(pos)
    }
}
