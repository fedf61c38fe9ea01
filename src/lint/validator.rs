//! Schema compilation and configuration validation.
//!
//! Compilation and validation are both pure with respect to their inputs:
//! the same schema and document always produce the same outcome. Validation
//! reports every violation found, not just the first, so one lint run
//! surfaces the full repair list.

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::error::{CheckError, Result};
use crate::lint::loader::SchemaLoader;

/// Compile a schema document into an executable validator.
///
/// `$ref`s to other documents resolve through the loader's scheme dispatch.
/// The document's `$id` is the identifier diagnostics reference.
pub fn compile(loader: &SchemaLoader, document: &Value) -> Result<JSONSchema> {
    let mut options = JSONSchema::options();
    options.with_draft(Draft::Draft7);
    options.with_resolver(loader.clone());

    options.compile(document).map_err(|e| CheckError::SchemaCompile {
        message: format!("{} (schema location: '{}')", e, e.instance_path),
    })
}

/// Validate the configuration's JSON form against a compiled schema.
///
/// On non-conformance every violation is reported, each annotated with the
/// JSON pointer into the configuration and the schema rule that fired.
pub fn validate(schema: &JSONSchema, instance: &Value) -> Result<()> {
    if let Err(errors) = schema.validate(instance) {
        let violations: Vec<String> = errors
            .map(|e| format!("at '{}': {} (schema: {})", e.instance_path, e, e.schema_path))
            .collect();
        return Err(CheckError::SchemaValidation { violations });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service_schema() -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "required": ["version"],
            "properties": {
                "version": { "type": "integer" },
                "port": { "type": "integer", "minimum": 1 }
            }
        })
    }

    #[test]
    fn conforming_document_passes() {
        let loader = SchemaLoader::new();
        let schema = compile(&loader, &service_schema()).unwrap();
        validate(&schema, &json!({"version": 1, "port": 8080})).unwrap();
    }

    #[test]
    fn missing_required_field_names_it() {
        let loader = SchemaLoader::new();
        let schema = compile(&loader, &service_schema()).unwrap();

        let err = validate(&schema, &json!({"port": 8080})).unwrap_err();
        match err {
            CheckError::SchemaValidation { violations } => {
                assert_eq!(violations.len(), 1);
                assert!(violations[0].contains("version"));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn every_violation_is_collected() {
        let loader = SchemaLoader::new();
        let schema = compile(&loader, &service_schema()).unwrap();

        // Missing required field and out-of-range port at once.
        let err = validate(&schema, &json!({"port": 0})).unwrap_err();
        match err {
            CheckError::SchemaValidation { violations } => {
                assert_eq!(violations.len(), 2);
                assert!(violations.iter().any(|v| v.contains("version")));
                assert!(violations.iter().any(|v| v.contains("/port")));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn repeated_validation_is_identical() {
        let loader = SchemaLoader::new();
        let schema = compile(&loader, &service_schema()).unwrap();
        let instance = json!({"port": 0});

        let first = format!("{:?}", validate(&schema, &instance).unwrap_err());
        let second = format!("{:?}", validate(&schema, &instance).unwrap_err());
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_schema_fails_compilation() {
        let loader = SchemaLoader::new();
        let document = json!({"type": 12});
        let err = compile(&loader, &document).unwrap_err();
        assert!(matches!(err, CheckError::SchemaCompile { .. }));
    }
}
