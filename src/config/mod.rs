//! Configuration for table-to-frame conversion
//!
//! This module provides the `FrameOptions` struct and its builder. Every
//! field has a default, so `FrameOptions::default()` reproduces the plain
//! conversion: no header rows, no index columns, identity transform.

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::FrameOptionsBuilder;
pub use types::FrameOptions;
