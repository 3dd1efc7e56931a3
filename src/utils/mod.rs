pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{collapse_whitespace, display_width, safe_truncate_chars};
