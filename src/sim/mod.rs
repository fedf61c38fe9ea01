//! Route registration simulation.
//!
//! Boots the real routing layer against the parsed configuration without
//! serving traffic, to surface structural route errors (conflicting or
//! malformed paths, unroutable methods, unbindable ports) before deployment.
//!
//! The routing layer is allowed to run for at most one second and is torn
//! down regardless of outcome. Panics raised during registration are
//! converted into [`CheckError::Simulation`] at this boundary; they never
//! escape it.

use std::future::IntoFuture;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use anyhow::anyhow;
use axum::http::{Method, StatusCode};
use axum::routing::{on, MethodFilter};
use axum::Router;

use crate::config::GatewayConfig;
use crate::error::{CheckError, Result};

/// How long the routing layer may take to construct and start.
const STARTUP_DEADLINE: Duration = Duration::from_secs(1);

/// Path prefix the gateway claims for its debug endpoints.
const DEBUG_ROUTE: &str = "/__debug/{*rest}";

/// Build and start the routing layer for `config`, bounded and isolated.
///
/// The two overrides (debug flag, listening port) apply only to the copy
/// used here; the caller's config is left untouched. Reaching the deadline
/// counts as success: the routes registered and the listener came up.
pub fn simulate_routes(config: &GatewayConfig, debug: bool, port: Option<u16>) -> Result<()> {
    let mut cfg = config.clone();
    cfg.debug = cfg.debug || debug;
    if let Some(port) = port {
        cfg.port = port;
    }

    // Keep the routing layer's panic (e.g. an overlapping route) off the
    // operator's terminal; it comes back as a normal error below.
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| start_router(&cfg)));
    panic::set_hook(previous_hook);

    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(CheckError::Simulation { message: e.to_string() }),
        Err(payload) => Err(CheckError::Simulation {
            message: panic_message(payload),
        }),
    }
}

/// Register every endpoint and drive the server up to the deadline.
fn start_router(cfg: &GatewayConfig) -> anyhow::Result<()> {
    let router = build_router(cfg)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", cfg.port)).await?;
        match tokio::time::timeout(STARTUP_DEADLINE, axum::serve(listener, router).into_future())
            .await
        {
            // Deadline reached with the listener still healthy.
            Err(_elapsed) => Ok(()),
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(anyhow::Error::from(e)),
        }
    })
}

fn build_router(cfg: &GatewayConfig) -> anyhow::Result<Router> {
    let mut router = Router::new();

    for ep in &cfg.endpoints {
        let method = Method::from_bytes(ep.method.to_uppercase().as_bytes())
            .map_err(|_| anyhow!("endpoint {}: invalid method '{}'", ep.endpoint, ep.method))?;
        let filter = MethodFilter::try_from(method)
            .map_err(|_| anyhow!("endpoint {}: method '{}' is not routable", ep.endpoint, ep.method))?;
        router = router.route(&ep.endpoint, on(filter, not_serving));
    }

    if cfg.debug {
        router = router.route(DEBUG_ROUTE, on(MethodFilter::GET, not_serving));
    }

    Ok(router)
}

/// Stand-in for the proxy layer; nothing is ever proxied during a check.
async fn not_serving() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected fault during route registration".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointConfig;
    use serde_json::Map;

    fn endpoint(path: &str, method: &str) -> EndpointConfig {
        EndpointConfig {
            endpoint: path.to_string(),
            method: method.to_string(),
            output_encoding: None,
            concurrent_calls: 1,
            timeout: None,
            backends: Vec::new(),
            extra: Map::new(),
        }
    }

    fn config_with(endpoints: Vec<EndpointConfig>) -> GatewayConfig {
        GatewayConfig {
            // Ephemeral port so parallel tests never collide.
            port: 0,
            endpoints,
            ..GatewayConfig::default()
        }
    }

    #[test]
    fn accepts_a_clean_route_table() {
        let cfg = config_with(vec![
            endpoint("/users/{id}", "GET"),
            endpoint("/users/{id}", "POST"),
            endpoint("/health", "GET"),
        ]);
        simulate_routes(&cfg, false, None).unwrap();
    }

    #[test]
    fn conflicting_routes_become_an_error_not_a_crash() {
        let cfg = config_with(vec![
            endpoint("/users/{id}", "GET"),
            endpoint("/users/{id}", "GET"),
        ]);
        let err = simulate_routes(&cfg, false, None).unwrap_err();
        assert!(matches!(err, CheckError::Simulation { .. }));
    }

    #[test]
    fn malformed_path_becomes_an_error() {
        let cfg = config_with(vec![endpoint("users", "GET")]);
        let err = simulate_routes(&cfg, false, None).unwrap_err();
        assert!(matches!(err, CheckError::Simulation { .. }));
    }

    #[test]
    fn invalid_method_becomes_an_error() {
        let cfg = config_with(vec![endpoint("/users", "FE TCH")]);
        let err = simulate_routes(&cfg, false, None).unwrap_err();
        assert!(err.to_string().contains("invalid method"));
    }

    #[test]
    fn debug_override_registers_the_debug_route() {
        // The config claims the debug prefix itself, so enabling debug in
        // the simulation copy must collide.
        let cfg = config_with(vec![endpoint(DEBUG_ROUTE, "GET")]);
        simulate_routes(&cfg, false, None).unwrap();
        let err = simulate_routes(&cfg, true, None).unwrap_err();
        assert!(matches!(err, CheckError::Simulation { .. }));
    }

    #[test]
    fn caller_config_is_never_mutated() {
        let cfg = config_with(vec![endpoint("/ping", "GET")]);
        simulate_routes(&cfg, true, Some(0)).unwrap();
        assert!(!cfg.debug);
        assert_eq!(cfg.port, 0);
    }
}
