//! Schema command implementation.
//!
//! The `gatelint schema` command resolves and prints the schema document the
//! linter would validate against, so operators can inspect exactly what a
//! `check --lint` run will enforce.

use crate::cli::args::SchemaArgs;
use crate::error::Result;
use crate::lint::{self, SchemaLoader};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

impl Command for SchemaCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let source = match lint::resolve(
            self.args.schema.as_deref(),
            self.args.online,
            lint::EMBEDDED_SCHEMA,
            env!("CARGO_PKG_VERSION"),
        ) {
            Ok(source) => source,
            Err(e) => {
                out.error(&format!("ERROR resolving the schema source: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };
        out.status(&format!("Using schema {}", source.location()));

        let loader = SchemaLoader::new();
        let document = match loader.load_source(&source) {
            Ok(document) => document,
            Err(e) => {
                out.error(&format!("ERROR loading the schema: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };

        let pretty = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("failed to render schema: {}", e))?;
        println!("{}", pretty);

        Ok(CommandResult::success())
    }
}
