//! Structured debug view of a parsed configuration.
//!
//! Verbosity levels follow the `-d` flag count:
//! 1. service summary
//! 2. plus the endpoint table
//! 3. plus backend detail and unrecognized keys

use std::io::Write;

use crate::config::GatewayConfig;
use crate::error::{CheckError, Result};
use crate::ui::Theme;

/// Renders a structured view of the parsed config at a requested verbosity.
#[derive(Debug)]
pub struct Dumper {
    verbosity: u8,
    theme: Theme,
}

impl Dumper {
    /// Create a dumper for the given verbosity (clamped to 3).
    pub fn new(verbosity: u8) -> Self {
        Self {
            verbosity: verbosity.min(3),
            theme: Theme::new(),
        }
    }

    /// Write the debug view of `cfg` into `writer`.
    pub fn dump<W: Write>(&self, cfg: &GatewayConfig, writer: &mut W) -> Result<()> {
        self.write(cfg, writer).map_err(|e| CheckError::Dump {
            message: e.to_string(),
        })
    }

    fn write<W: Write>(&self, cfg: &GatewayConfig, w: &mut W) -> std::io::Result<()> {
        let name = if cfg.name.is_empty() { "<unnamed>" } else { &cfg.name };
        writeln!(
            w,
            "{} {} (config version {})",
            self.theme.header.apply_to("Service:"),
            self.theme.highlight.apply_to(name),
            cfg.version
        )?;
        writeln!(w, "  Port: {}", cfg.port)?;
        writeln!(w, "  Default hosts: {}", format_hosts(&cfg.host))?;
        writeln!(w, "  Timeout: {}", cfg.timeout)?;
        writeln!(w, "  Cache TTL: {}", cfg.cache_ttl)?;
        writeln!(w, "  Output encoding: {}", cfg.output_encoding)?;
        writeln!(w, "  Debug: {}", cfg.debug)?;

        if self.verbosity >= 2 {
            writeln!(
                w,
                "{} {}",
                self.theme.header.apply_to("Endpoints:"),
                cfg.endpoints.len()
            )?;
            for ep in &cfg.endpoints {
                writeln!(
                    w,
                    "  {} {} ({} backend{})",
                    ep.method,
                    self.theme.highlight.apply_to(&ep.endpoint),
                    ep.backends.len(),
                    if ep.backends.len() == 1 { "" } else { "s" }
                )?;
                if let Some(timeout) = &ep.timeout {
                    writeln!(w, "    {}", self.theme.dim.apply_to(format!("timeout: {}", timeout)))?;
                }

                if self.verbosity >= 3 {
                    for backend in &ep.backends {
                        let hosts = if backend.host.is_empty() {
                            format_hosts(&cfg.host)
                        } else {
                            format_hosts(&backend.host)
                        };
                        writeln!(w, "    {} {} @ {}", backend.method, backend.url_pattern, hosts)?;
                    }
                }
            }
        }

        if self.verbosity >= 3 && !cfg.extra.is_empty() {
            writeln!(w, "{}", self.theme.header.apply_to("Unrecognized keys:"))?;
            let pretty = serde_json::to_string_pretty(&cfg.extra).unwrap_or_default();
            for line in pretty.lines() {
                writeln!(w, "  {}", self.theme.dim.apply_to(line))?;
            }
        }

        Ok(())
    }
}

fn format_hosts(hosts: &[String]) -> String {
    if hosts.is_empty() {
        "(none)".to_string()
    } else {
        hosts.join(", ")
    }
}
