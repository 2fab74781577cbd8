// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5160,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Upstream TheAudioDB settings. `base_url: None` means the public
/// endpoint built into the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDbConfig {
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub trending_country: String,
    pub trending_source: String,
}

impl Default for AudioDbConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 10,
            trending_country: "us".to_string(),
            trending_source: "itunes".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub telemetry: TelemetryConfig,
    pub audiodb: AudioDbConfig,
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: MELODEX_).
pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("MELODEX_").split("__"));

    let config: AppConfig = figment.extract()?;
    info!(target: "config", "configuration loaded");
    Ok(config)
}
