//! Per-cell text transforms
//!
//! A transform is applied independently to the raw text of every cell. It
//! sees one string and returns one string; it carries no state between cells.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::utils::collapse_whitespace;

type TransformFn = dyn Fn(&str) -> Result<String> + Send + Sync;

/// Function applied to the text of each extracted cell.
///
/// Cloning is cheap; clones share the same underlying function.
#[derive(Clone)]
pub struct CellTransform {
    func: Option<Arc<TransformFn>>,
}

impl CellTransform {
    /// Leave cell text exactly as the parser produced it.
    #[must_use]
    pub fn identity() -> Self {
        Self { func: None }
    }

    /// Wrap a fallible function. The first error aborts extraction.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            func: Some(Arc::new(func)),
        }
    }

    /// Wrap a function that cannot fail.
    pub fn infallible<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::new(move |text| Ok(func(text)))
    }

    /// Strip leading and trailing whitespace.
    #[must_use]
    pub fn trim() -> Self {
        Self::infallible(|text| text.trim().to_string())
    }

    /// Collapse internal whitespace runs to one space and trim.
    #[must_use]
    pub fn normalize_whitespace() -> Self {
        Self::infallible(collapse_whitespace)
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.func.is_none()
    }

    /// Apply the transform to one cell's text.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function returns.
    pub fn apply(&self, text: String) -> Result<String> {
        match &self.func {
            None => Ok(text),
            Some(func) => func(&text),
        }
    }
}

impl Default for CellTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for CellTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            f.write_str("CellTransform(identity)")
        } else {
            f.write_str("CellTransform(<fn>)")
        }
    }
}
