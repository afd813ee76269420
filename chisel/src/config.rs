//! Harness configuration, parsed from JSON5.

use std::path::Path;

use anyhow::Context;
use chisel_relay::RelayConfig;
use serde::Deserialize;

/// Configuration for the demo host.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// WebSocket URL of the OSC relay process.
    pub relay_url: String,
    /// Initial OSC receive port announced to the relay.
    pub receive_port: u16,
    /// Initial OSC send port announced to the relay.
    pub send_port: u16,
    /// Seed for the demo noise sweep; a random seed is drawn when absent.
    pub demo_seed: Option<f64>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            relay_url: "ws://127.0.0.1:8080".to_string(),
            receive_port: 4444,
            send_port: 4445,
            demo_seed: None,
        }
    }
}

impl HostConfig {
    /// Load configuration from a JSON5 file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json5::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// The relay-facing part of the configuration.
    #[must_use]
    pub fn relay(&self) -> RelayConfig {
        RelayConfig {
            url: self.relay_url.clone(),
            receive_port: self.receive_port,
            send_port: self.send_port,
        }
    }
}
