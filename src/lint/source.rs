//! Schema source resolution.
//!
//! Decides which schema document the linter validates against: an explicit
//! path or URL, the hosted schema for this release line, or the text bundled
//! into the binary. Exactly one source is active per run.

use crate::error::{CheckError, Result};

/// Template for the hosted schema URL; the placeholder is the major.minor
/// release line.
const ONLINE_SCHEMA_TEMPLATE: &str = "https://www.gatelint.dev/schema/v{version}/gateway.json";

/// The schema document to lint against.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaSource {
    /// User-supplied path or URL.
    Custom(String),
    /// Hosted schema for the running release line.
    Online(String),
    /// Raw schema text bundled into the binary.
    Embedded(&'static str),
}

impl SchemaSource {
    /// Printable location for the "Using schema ..." announcement.
    pub fn location(&self) -> &str {
        match self {
            SchemaSource::Custom(loc) | SchemaSource::Online(loc) => loc,
            SchemaSource::Embedded(_) => "embedded schema",
        }
    }
}

/// Pick the schema source for this run.
///
/// `--schema` and `--online` are mutually exclusive. The hosted schema is
/// used when `--online` is set or no schema was bundled into the binary;
/// otherwise an explicit location wins over the bundled text.
pub fn resolve(
    custom: Option<&str>,
    force_online: bool,
    embedded: Option<&'static str>,
    version: &str,
) -> Result<SchemaSource> {
    let custom = custom.filter(|s| !s.is_empty());

    if custom.is_some() && force_online {
        return Err(CheckError::ConflictingSchemaFlags);
    }

    if force_online || embedded.is_none() {
        return Ok(SchemaSource::Online(online_schema_url(version)));
    }

    if let Some(location) = custom {
        return Ok(SchemaSource::Custom(location.to_string()));
    }

    match embedded {
        Some(text) => Ok(SchemaSource::Embedded(text)),
        None => Ok(SchemaSource::Online(online_schema_url(version))),
    }
}

/// Hosted schema URL for the release line of `version`.
pub fn online_schema_url(version: &str) -> String {
    ONLINE_SCHEMA_TEMPLATE.replace("{version}", &version_minor(version))
}

/// Reduce a version string to its major.minor line.
///
/// Strings with fewer than two dot-separated components pass through
/// verbatim rather than failing; patch and pre-release parts are dropped
/// with the third component.
pub fn version_minor(version: &str) -> String {
    let comps: Vec<&str> = version.split('.').collect();
    if comps.len() < 2 {
        return version.to_string();
    }
    format!("{}.{}", comps[0], comps[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMBEDDED: Option<&str> = Some("{}");

    #[test]
    fn custom_with_online_always_conflicts() {
        for embedded in [EMBEDDED, None] {
            let err = resolve(Some("/tmp/schema.json"), true, embedded, "1.4.0").unwrap_err();
            assert!(matches!(err, CheckError::ConflictingSchemaFlags));
        }
    }

    #[test]
    fn empty_custom_does_not_conflict() {
        let source = resolve(Some(""), true, EMBEDDED, "1.4.0").unwrap();
        assert!(matches!(source, SchemaSource::Online(_)));
    }

    #[test]
    fn online_flag_selects_hosted_schema() {
        let source = resolve(None, true, EMBEDDED, "1.4.2").unwrap();
        assert_eq!(
            source,
            SchemaSource::Online("https://www.gatelint.dev/schema/v1.4/gateway.json".into())
        );
    }

    #[test]
    fn missing_embedded_falls_back_to_hosted_schema() {
        let source = resolve(None, false, None, "1.4.0").unwrap();
        assert!(matches!(source, SchemaSource::Online(_)));
    }

    #[test]
    fn custom_wins_over_embedded() {
        let source = resolve(Some("./gateway.schema.json"), false, EMBEDDED, "1.4.0").unwrap();
        assert_eq!(source, SchemaSource::Custom("./gateway.schema.json".into()));
    }

    #[test]
    fn embedded_is_the_default() {
        let source = resolve(None, false, EMBEDDED, "1.4.0").unwrap();
        assert!(matches!(source, SchemaSource::Embedded(_)));
        assert_eq!(source.location(), "embedded schema");
    }

    #[test]
    fn version_minor_drops_patch_and_prerelease() {
        assert_eq!(version_minor("1.4.2"), "1.4");
        assert_eq!(version_minor("1.4.0-rc.1"), "1.4");
        assert_eq!(version_minor("10.0.0"), "10.0");
    }

    #[test]
    fn version_minor_passes_short_strings_through() {
        assert_eq!(version_minor("2"), "2");
        assert_eq!(version_minor(""), "");
        assert_eq!(version_minor("nightly"), "nightly");
    }
}
