//! Shell identity configuration.
//!
//! Every field has a default, so a TOML document only needs to name the
//! values it overrides.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identity strings rendered by the informational commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// First banner line shown when a session starts.
    pub banner: String,
    /// Second banner line.
    pub copyright: String,
    /// Host name reported by `systeminfo` and `whoami`.
    pub host_name: String,
    /// Account name reported by `whoami`.
    pub user_name: String,
    /// Product name reported by `ver` and `systeminfo`.
    pub product: String,
    /// Version string reported by `ver`.
    pub version: String,
    /// OS version line reported by `systeminfo`.
    pub os_version: String,
    pub manufacturer: String,
    /// Volume label used by `tree`.
    pub volume_label: String,
    pub network: NetworkConfig,
}

/// Adapter settings reported by `ipconfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub adapter: String,
    pub ipv4_address: String,
    pub subnet_mask: String,
    pub default_gateway: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: "Microsoft Windows [Version 10.0.19045.3570]".to_string(),
            copyright: "(c) NEXA Corporation. All rights reserved.".to_string(),
            host_name: "NEXA-SYSTEM".to_string(),
            user_name: "alikay_h".to_string(),
            product: "NEXA-OS".to_string(),
            version: "10.0.19045.3570".to_string(),
            os_version: "10.0.19045 Build 19045".to_string(),
            manufacturer: "NEXA Corporation".to_string(),
            volume_label: "NEXA".to_string(),
            network: NetworkConfig::default(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            adapter: "Ethernet".to_string(),
            ipv4_address: "192.168.1.101".to_string(),
            subnet_mask: "255.255.255.0".to_string(),
            default_gateway: "192.168.1.1".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        log::debug!("Loaded shell config for host {}", config.host_name);
        Ok(config)
    }

    /// The `host\user` account string.
    pub fn account(&self) -> String {
        format!("{}\\{}", self.host_name.to_lowercase(), self.user_name)
    }
}
