//! Error types for gatelint operations.
//!
//! This module defines [`CheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CheckError` for pipeline errors that need distinct handling
//! - Use `anyhow::Error` (via `CheckError::Other`) for unexpected errors
//! - Every error is terminal for the current run; nothing is retried

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gatelint operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// No configuration file path was supplied.
    #[error("no configuration file given, use --config to point at one")]
    MissingConfigPath,

    /// Failed to parse the configuration file.
    #[error("failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// The raw configuration content could not be obtained for linting.
    #[error("failed to load the configuration content: {message}")]
    RawContentUnavailable { message: String },

    /// The configuration content is not valid JSON.
    #[error("configuration content is not valid JSON: {message}")]
    InvalidJson { message: String },

    /// --schema and --online were combined.
    #[error("--schema and --online are mutually exclusive, pick one")]
    ConflictingSchemaFlags,

    /// The schema document did not compile.
    #[error("failed to compile schema: {message}")]
    SchemaCompile { message: String },

    /// The configuration does not conform to the schema.
    #[error("configuration does not conform to the schema:\n{}", .violations.join("\n"))]
    SchemaValidation { violations: Vec<String> },

    /// Transport-level failure while fetching a remote schema.
    #[error("failed to fetch schema from {url}: {message}")]
    SchemaFetch { url: String, message: String },

    /// A remote schema endpoint answered with a non-OK status.
    #[error("{url} returned status code {status}")]
    SchemaStatus { url: String, status: u16 },

    /// The schema location could not be loaded.
    #[error("failed to load schema from {location}: {message}")]
    SchemaLoad { location: String, message: String },

    /// Writing the debug dump failed.
    #[error("failed to dump the configuration: {message}")]
    Dump { message: String },

    /// Route registration simulation reported or recovered a failure.
    #[error("route registration failed: {message}")]
    Simulation { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gatelint operations.
pub type Result<T> = std::result::Result<T, CheckError>;
