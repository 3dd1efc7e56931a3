//! UTF-8-safe string helpers used by transforms and frame rendering

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Never splits a multi-byte character.
///
/// # Examples
/// ```
/// # use html_table_frame::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("Größe", 3), "Grö");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Number of characters a string occupies when rendered.
#[inline]
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// # Examples
/// ```
/// # use html_table_frame::utils::string_utils::collapse_whitespace;
/// assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
