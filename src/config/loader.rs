//! Configuration file loading.
//!
//! The pipeline consumes the parser through the [`ConfigParser`] trait so the
//! check command can be driven by any source of [`GatewayConfig`] values in
//! tests. Parsers that reconstruct their input (e.g. after interpolation) can
//! expose the exact bytes they parsed through the optional `last_source`
//! capability; the linter prefers those bytes over re-reading the file so
//! that what gets validated matches what the gateway would load.

use std::fs;
use std::path::Path;

use crate::config::interpolation::resolve_env;
use crate::config::schema::GatewayConfig;
use crate::error::{CheckError, Result};

/// A source of parsed gateway configurations.
pub trait ConfigParser {
    /// Parse the configuration at `path`.
    fn parse(&mut self, path: &Path) -> Result<GatewayConfig>;

    /// The exact bytes the last `parse` call consumed, when the parser is
    /// able to reproduce them. Defaults to absent.
    fn last_source(&self) -> Option<Vec<u8>> {
        None
    }
}

/// Parses gateway configuration files from disk, applying `${VAR}`
/// environment interpolation to the raw text first.
#[derive(Debug, Default)]
pub struct FileConfigParser {
    last_source: Option<Vec<u8>>,
}

impl FileConfigParser {
    /// Create a new file-backed parser.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigParser for FileConfigParser {
    fn parse(&mut self, path: &Path) -> Result<GatewayConfig> {
        let raw = fs::read_to_string(path).map_err(|e| CheckError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let interpolated = resolve_env(&raw)?;

        let config: GatewayConfig =
            serde_json::from_str(&interpolated).map_err(|e| CheckError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        self.last_source = Some(interpolated.into_bytes());
        Ok(config)
    }

    fn last_source(&self) -> Option<Vec<u8>> {
        self.last_source.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_valid_config() {
        let file = write_config(r#"{"version": 1, "name": "demo", "port": 9000}"#);
        let mut parser = FileConfigParser::new();
        let cfg = parser.parse(file.path()).unwrap();
        assert_eq!(cfg.name, "demo");
        assert_eq!(cfg.port, 9000);
    }

    #[test]
    fn parse_failure_names_the_path() {
        let file = write_config("{not json");
        let mut parser = FileConfigParser::new();
        let err = parser.parse(file.path()).unwrap_err();
        assert!(matches!(err, CheckError::ConfigParse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn last_source_absent_before_parse() {
        let parser = FileConfigParser::new();
        assert!(parser.last_source().is_none());
    }

    #[test]
    fn last_source_reflects_interpolation() {
        std::env::set_var("GATELINT_TEST_NAME", "prod-gw");
        let file = write_config(r#"{"version": 1, "name": "${GATELINT_TEST_NAME}"}"#);
        let mut parser = FileConfigParser::new();
        parser.parse(file.path()).unwrap();

        let source = parser.last_source().unwrap();
        let text = String::from_utf8(source).unwrap();
        assert!(text.contains("prod-gw"));
        assert!(!text.contains("${GATELINT_TEST_NAME}"));
    }

    #[test]
    fn missing_file_is_a_parse_error() {
        let mut parser = FileConfigParser::new();
        let err = parser.parse(Path::new("/nonexistent/gateway.json")).unwrap_err();
        assert!(matches!(err, CheckError::ConfigParse { .. }));
    }
}
