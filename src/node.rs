//! Narrow view of a parsed HTML tree node
//!
//! Extraction only needs to read a node's text, its tag name, an attribute
//! or two, and to search its descendants by tag name. Any tree type that can
//! do those four things can feed the extractors; `scraper::ElementRef` is the
//! implementation shipped with the crate.

use scraper::ElementRef;

/// Read-only capabilities the extractors require from a tree node.
pub trait TableNode: Sized {
    /// Lowercase tag name of the element, e.g. `"td"`.
    fn tag_name(&self) -> &str;

    /// Text content of the node and all its descendants, in document order,
    /// without trimming or whitespace normalization.
    fn text(&self) -> String;

    /// Value of an attribute, if present.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Every descendant element (the node itself excluded) whose tag name
    /// satisfies `predicate`, in document order, at any nesting depth.
    fn find_all<P>(&self, predicate: P) -> Vec<Self>
    where
        P: Fn(&str) -> bool;
}

impl TableNode for ElementRef<'_> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn find_all<P>(&self, predicate: P) -> Vec<Self>
    where
        P: Fn(&str) -> bool,
    {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| predicate(el.value().name()))
            .collect()
    }
}
