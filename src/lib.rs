//! Gatelint - gateway configuration validation.
//!
//! Gatelint checks a gateway's declarative JSON configuration before it is
//! deployed: it parses the file, optionally lints it against a JSON Schema
//! (bundled, hosted, or user-supplied), optionally dumps a structured debug
//! view, and optionally registers the configured routes on the real routing
//! layer to catch structural conflicts without serving traffic.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the check pipeline
//! - [`config`] - Configuration parsing and the gateway model
//! - [`dump`] - Structured debug view of a parsed configuration
//! - [`error`] - Error types and result alias
//! - [`lint`] - Schema source resolution, loading and validation
//! - [`sim`] - Bounded, panic-isolated route registration simulation
//! - [`ui`] - Terminal output and styling
//!
//! # Example
//!
//! ```
//! use gatelint::lint::source::version_minor;
//!
//! // The hosted schema URL tracks the major.minor release line.
//! assert_eq!(version_minor("1.4.2"), "1.4");
//! ```

pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod lint;
pub mod sim;
pub mod ui;

pub use error::{CheckError, Result};
