//! Schema document loading.
//!
//! Schemas can live on disk (`file://` or a bare path), behind HTTP(S), or
//! inside the binary. [`SchemaLoader`] dispatches on the location's scheme
//! and returns the parsed document. The same loader doubles as the `$ref`
//! resolver handed to the schema compiler, so references inside a schema go
//! through the identical dispatch.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use jsonschema::{SchemaResolver, SchemaResolverError};
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::error::{CheckError, Result};
use crate::lint::source::SchemaSource;

/// Client-side timeout for remote schema fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads schema documents from file, http and https locations.
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    client: reqwest::blocking::Client,
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLoader {
    /// Create a loader with the fixed fetch timeout.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Load the document behind a resolved schema source.
    pub fn load_source(&self, source: &SchemaSource) -> Result<Value> {
        match source {
            SchemaSource::Custom(location) | SchemaSource::Online(location) => {
                self.load(location)
            }
            SchemaSource::Embedded(text) => load_embedded(text),
        }
    }

    /// Load a schema document from a path or URL.
    pub fn load(&self, location: &str) -> Result<Value> {
        match Url::parse(location) {
            Ok(url) => match url.scheme() {
                "http" | "https" => self.fetch(url.as_str()),
                "file" => {
                    let path = url.to_file_path().map_err(|_| CheckError::SchemaLoad {
                        location: location.to_string(),
                        message: "not a valid file URL".to_string(),
                    })?;
                    read_schema_file(&path)
                }
                scheme => Err(CheckError::SchemaLoad {
                    location: location.to_string(),
                    message: format!("unsupported scheme '{}'", scheme),
                }),
            },
            // Not a URL at all: treat it as a filesystem path.
            Err(_) => read_schema_file(Path::new(location)),
        }
    }

    /// GET a schema over HTTP(S).
    ///
    /// Anything other than a 200 fails without the body ever being read; the
    /// connection is released when the response is dropped, on every path.
    fn fetch(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().map_err(|e| CheckError::SchemaFetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CheckError::SchemaStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().map_err(|e| CheckError::SchemaLoad {
            location: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl SchemaResolver for SchemaLoader {
    fn resolve(
        &self,
        _root_schema: &Value,
        url: &Url,
        _original_reference: &str,
    ) -> std::result::Result<Arc<Value>, SchemaResolverError> {
        self.load(url.as_str())
            .map(Arc::new)
            .map_err(anyhow::Error::from)
    }
}

/// Parse the bundled schema text; no network or storage access happens.
pub fn load_embedded(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| CheckError::SchemaLoad {
        location: "embedded schema".to_string(),
        message: e.to_string(),
    })
}

fn read_schema_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| CheckError::SchemaLoad {
        location: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| CheckError::SchemaLoad {
        location: path.display().to_string(),
        message: e.to_string(),
    })
}
