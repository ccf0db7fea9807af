use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("zbxprov"))
}

/// Environment variables that override the `[api]` section.
const ENV_URL: &str = "ZBXPROV_URL";
const ENV_USERNAME: &str = "ZBXPROV_USERNAME";
const ENV_PASSWORD: &str = "ZBXPROV_PASSWORD";

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub hosts: HostsConfig,
    #[serde(default)]
    pub snmp: SnmpConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Endpoint URL, e.g. `http://zabbix.example.com/zabbix/api_jsonrpc.php`
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostsConfig {
    /// Templates linked to every created agent host.
    pub templates: Vec<String>,
    /// Whether created hosts start enabled. Off by default so freshly
    /// provisioned hosts do not alert before they are ready.
    pub enabled: bool,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            templates: vec!["YUYAMA_Template_IRIS".to_string()],
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnmpConfig {
    /// Templates linked to every created SNMP host.
    pub templates: Vec<String>,
    /// Whether created hosts start enabled.
    pub enabled: bool,
    /// SNMPv3 interface security descriptor.
    pub security: SnmpSecurity,
}

impl Default for SnmpConfig {
    fn default() -> Self {
        Self {
            templates: vec!["FortiGate by SNMP".to_string()],
            enabled: false,
            security: SnmpSecurity::default(),
        }
    }
}

/// SNMPv3 security descriptor attached to SNMP interfaces.
///
/// Serialized verbatim into the interface `details` object, so field names
/// and string-typed values follow the Zabbix API. The passphrases have no
/// default and belong in the config file, not in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnmpSecurity {
    pub version: String,
    pub bulk: String,
    pub securityname: String,
    /// 2 = authPriv
    pub securitylevel: String,
    pub authpassphrase: String,
    pub privpassphrase: String,
    /// 3 = SHA256
    pub authprotocol: String,
    /// 3 = AES192
    pub privprotocol: String,
    pub contextname: String,
    pub max_repetitions: String,
}

impl Default for SnmpSecurity {
    fn default() -> Self {
        Self {
            version: "3".to_string(),
            bulk: "1".to_string(),
            securityname: "ZabbixUser".to_string(),
            securitylevel: "2".to_string(),
            authpassphrase: String::new(),
            privpassphrase: String::new(),
            authprotocol: "3".to_string(),
            privprotocol: "3".to_string(),
            contextname: String::new(),
            max_repetitions: "10".to_string(),
        }
    }
}

impl Config {
    /// Load the config from `path`, or from `~/.config/zbxprov/config.toml`
    /// when no path is given. `ZBXPROV_URL`/`ZBXPROV_USERNAME`/
    /// `ZBXPROV_PASSWORD` override the `[api]` section.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_dir()?.join("config.toml"),
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config format in {}", path.display()))?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_URL) {
            self.api.url = url;
        }
        if let Ok(username) = std::env::var(ENV_USERNAME) {
            self.api.username = username;
        }
        if let Ok(password) = std::env::var(ENV_PASSWORD) {
            self.api.password = password;
        }
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.api.url.is_empty(),
            "api.url is not set (config file or {})",
            ENV_URL
        );
        anyhow::ensure!(
            !self.api.username.is_empty(),
            "api.username is not set (config file or {})",
            ENV_USERNAME
        );
        Ok(())
    }

    /// Initial status value for created agent hosts (0=enabled, 1=disabled).
    pub fn host_status(&self) -> u8 {
        u8::from(!self.hosts.enabled)
    }

    /// Initial status value for created SNMP hosts.
    pub fn snmp_status(&self) -> u8 {
        u8::from(!self.snmp.enabled)
    }
}
