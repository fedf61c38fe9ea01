//! Check command implementation.
//!
//! The `gatelint check` command runs the validation pipeline: parse the
//! configuration, optionally lint it against a JSON Schema, optionally dump
//! a structured view, and optionally register its routes on the routing
//! layer. The first failing stage terminates the run; nothing is retried.

use std::fs;
use std::io;

use serde_json::Value;

use crate::cli::args::CheckArgs;
use crate::config::{ConfigParser, FileConfigParser};
use crate::dump::Dumper;
use crate::error::{CheckError, Result};
use crate::lint::{self, validator, SchemaLoader};
use crate::sim;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Report a stage failure and terminate the pipeline with exit code 1.
    fn fail(&self, out: &Output, stage: &str, err: &CheckError) -> Result<CommandResult> {
        out.error(&format!("ERROR {}: {}", stage, err));
        Ok(CommandResult::failure(1))
    }

    /// Obtain the raw bytes the linter validates: the parser's reconstituted
    /// source when the capability is present, the file on disk otherwise.
    fn raw_content(&self, parser: &dyn ConfigParser) -> Result<Vec<u8>> {
        if let Some(bytes) = parser.last_source() {
            return Ok(bytes);
        }
        let path = self.args.config.as_ref().ok_or(CheckError::MissingConfigPath)?;
        fs::read(path).map_err(|e| CheckError::RawContentUnavailable {
            message: e.to_string(),
        })
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let Some(path) = self.args.config.as_deref() else {
            out.error(
                "Provide the path to the configuration file with --config, or see all the options with --help",
            );
            return Ok(CommandResult::failure(1));
        };

        out.status(&format!("Parsing configuration file: {}", path.display()));
        let mut parser = FileConfigParser::new();
        let config = match parser.parse(path) {
            Ok(config) => config,
            Err(e) => return self.fail(out, "parsing the configuration file", &e),
        };
        tracing::debug!(endpoints = config.endpoints.len(), "configuration parsed");

        if self.args.lint {
            out.status("Linting configuration file...");

            let data = match self.raw_content(&parser) {
                Ok(data) => data,
                Err(e) => return self.fail(out, "loading the configuration content", &e),
            };

            let raw: Value = match serde_json::from_slice(&data) {
                Ok(raw) => raw,
                Err(e) => {
                    let err = CheckError::InvalidJson { message: e.to_string() };
                    return self.fail(out, "converting the configuration content to JSON", &err);
                }
            };

            let source = match lint::resolve(
                self.args.schema.as_deref(),
                self.args.online,
                lint::EMBEDDED_SCHEMA,
                env!("CARGO_PKG_VERSION"),
            ) {
                Ok(source) => source,
                Err(e) => return self.fail(out, "resolving the schema source", &e),
            };
            out.status(&format!("Using schema {}", source.location()));

            let loader = SchemaLoader::new();
            let document = match loader.load_source(&source) {
                Ok(document) => document,
                Err(e) => return self.fail(out, "loading the schema", &e),
            };

            let schema = match validator::compile(&loader, &document) {
                Ok(schema) => schema,
                Err(e) => return self.fail(out, "compiling the schema", &e),
            };

            if let Err(e) = validator::validate(&schema, &raw) {
                return self.fail(out, "linting the configuration file", &e);
            }
        }

        if self.args.debug > 0 {
            let dumper = Dumper::new(self.args.debug);
            let stdout = io::stdout();
            if let Err(e) = dumper.dump(&config, &mut stdout.lock()) {
                return self.fail(out, "checking the configuration file", &e);
            }
        }

        if self.args.test_routes {
            out.status("Testing route registration...");
            if let Err(e) = sim::simulate_routes(&config, self.args.debug > 0, self.args.port) {
                return self.fail(out, "testing the configuration file", &e);
            }
        }

        out.success("Syntax OK!");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use std::path::Path;

    struct StaticParser {
        source: Option<Vec<u8>>,
    }

    impl ConfigParser for StaticParser {
        fn parse(&mut self, _path: &Path) -> Result<GatewayConfig> {
            Ok(GatewayConfig::default())
        }

        fn last_source(&self) -> Option<Vec<u8>> {
            self.source.clone()
        }
    }

    #[test]
    fn raw_content_prefers_the_parser_capability() {
        let cmd = CheckCommand::new(CheckArgs::default());
        let parser = StaticParser {
            source: Some(b"{\"version\": 1}".to_vec()),
        };
        let data = cmd.raw_content(&parser).unwrap();
        assert_eq!(data, b"{\"version\": 1}");
    }

    #[test]
    fn raw_content_falls_back_to_the_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"version\": 2}").unwrap();

        let cmd = CheckCommand::new(CheckArgs {
            config: Some(file.path().to_path_buf()),
            ..CheckArgs::default()
        });
        let parser = StaticParser { source: None };
        let data = cmd.raw_content(&parser).unwrap();
        assert_eq!(data, b"{\"version\": 2}");
    }

    #[test]
    fn raw_content_without_capability_or_file_fails() {
        let cmd = CheckCommand::new(CheckArgs {
            config: Some("/nonexistent/gateway.json".into()),
            ..CheckArgs::default()
        });
        let parser = StaticParser { source: None };
        let err = cmd.raw_content(&parser).unwrap_err();
        assert!(matches!(err, CheckError::RawContentUnavailable { .. }));
    }
}
