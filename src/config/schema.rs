//! Gateway configuration model.
//!
//! This module defines the declarative configuration structure the checker
//! understands: service-level settings plus the endpoint/backend topology.
//! All types derive Serde traits for deserialization from JSON.
//!
//! Unrecognized keys are kept in `extra` maps rather than rejected; the JSON
//! Schema lint is the strictness layer, not serde.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root configuration for a gateway service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Configuration format version.
    pub version: u32,

    /// Service name, used in logs and the debug dump.
    pub name: String,

    /// Port the gateway listens on.
    pub port: u16,

    /// Default backend hosts, inherited by backends that declare none.
    pub host: Vec<String>,

    /// Global request timeout (duration string, e.g. "2s").
    pub timeout: String,

    /// Response cache TTL (duration string).
    pub cache_ttl: String,

    /// Default output encoding for endpoints.
    pub output_encoding: String,

    /// Debug endpoints enabled.
    pub debug: bool,

    /// Exposed endpoints.
    pub endpoints: Vec<EndpointConfig>,

    /// Keys this model does not understand, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            name: String::new(),
            port: 8080,
            host: Vec::new(),
            timeout: "2s".to_string(),
            cache_ttl: "0s".to_string(),
            output_encoding: "json".to_string(),
            debug: false,
            endpoints: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// A single exposed endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Path pattern the endpoint is registered under (e.g. `/users/{id}`).
    pub endpoint: String,

    /// HTTP method accepted by the endpoint.
    #[serde(default = "default_method")]
    pub method: String,

    /// Output encoding override for this endpoint.
    #[serde(default)]
    pub output_encoding: Option<String>,

    /// Number of backend calls fired concurrently.
    #[serde(default = "default_concurrent_calls")]
    pub concurrent_calls: u32,

    /// Timeout override for this endpoint (duration string).
    #[serde(default)]
    pub timeout: Option<String>,

    /// Backends queried to build the endpoint response.
    #[serde(rename = "backend", default)]
    pub backends: Vec<BackendConfig>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A backend a gateway endpoint fans out to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Path pattern on the backend service.
    pub url_pattern: String,

    /// Hosts for this backend; falls back to the service-level hosts.
    #[serde(default)]
    pub host: Vec<String>,

    /// HTTP method used against the backend.
    #[serde(default = "default_method")]
    pub method: String,

    /// Encoding of the backend response.
    #[serde(default)]
    pub encoding: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_concurrent_calls() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let cfg: GatewayConfig = serde_json::from_str(r#"{"version": 1}"#).unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.timeout, "2s");
        assert!(cfg.endpoints.is_empty());
    }

    #[test]
    fn endpoint_defaults_method_and_concurrency() {
        let json = r#"{
            "version": 1,
            "endpoints": [
                {"endpoint": "/users/{id}", "backend": [{"url_pattern": "/v1/users/{id}"}]}
            ]
        }"#;
        let cfg: GatewayConfig = serde_json::from_str(json).unwrap();
        let ep = &cfg.endpoints[0];
        assert_eq!(ep.method, "GET");
        assert_eq!(ep.concurrent_calls, 1);
        assert_eq!(ep.backends[0].method, "GET");
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let json = r#"{"version": 1, "extra_config": {"plugin": true}}"#;
        let cfg: GatewayConfig = serde_json::from_str(json).unwrap();
        assert!(cfg.extra.contains_key("extra_config"));
    }
}
