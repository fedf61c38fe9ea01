//! Terminal output.
//!
//! This module provides:
//! - [`Output`] - stage/success/error writer honoring `--quiet`
//! - [`Theme`] - console styles, auto-disabled off-terminal

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::Theme;
