//! Configuration linting against a JSON Schema.
//!
//! # Data Flow
//! ```text
//! raw config bytes (parser's last source, or the file on disk)
//!     → parsed as JSON
//! schema flags (--schema / --online) + bundled text
//!     → source.rs (pick exactly one schema source)
//!     → loader.rs (file / http / https / embedded dispatch)
//!     → validator.rs (compile once, validate, collect all violations)
//! ```

pub mod loader;
pub mod source;
pub mod validator;

pub use loader::SchemaLoader;
pub use source::{resolve, SchemaSource};

/// Schema text bundled into the binary, when the build carries one.
#[cfg(feature = "embedded-schema")]
pub const EMBEDDED_SCHEMA: Option<&str> = Some(include_str!("../../schema/gateway.json"));

/// Schema text bundled into the binary, when the build carries one.
#[cfg(not(feature = "embedded-schema"))]
pub const EMBEDDED_SCHEMA: Option<&str> = None;
