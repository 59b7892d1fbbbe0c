//! `config.yaml` loading.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. The YAML file
//! 3. Environment variables (`BSV_TOOLS_*`, nested keys split on `__`)
//!
//! Example: `BSV_TOOLS_ARC_TESTNET__API_KEY` -> `arc-testnet.api_key`

use std::path::{Path, PathBuf};
use std::time::Duration;

use bsv_arc::ArcConfig;
use bsv_primitives::Network;
use bsv_woc::WocConfig;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name looked up next to the executable and in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

const ENV_PREFIX: &str = "BSV_TOOLS_";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: file not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] figment::Error),

    #[error("ARC URL is required for {0} in config.yaml")]
    MissingArcUrl(Network),

    #[error("invalid duration {value:?} for {field}")]
    InvalidDuration { field: &'static str, value: String },
}

/// One ARC endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcSection {
    pub url: String,
    pub api_key: String,
    /// Go-style duration such as `"30s"`; empty means 30 seconds.
    pub timeout: String,
}

impl ArcSection {
    /// The HTTP timeout for this endpoint.
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        if self.timeout.trim().is_empty() {
            return Ok(DEFAULT_TIMEOUT);
        }
        parse_duration(&self.timeout).ok_or_else(|| ConfigError::InvalidDuration {
            field: "timeout",
            value: self.timeout.clone(),
        })
    }
}

/// Status polling parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub interval: String,
    pub max_retries: u32,
    pub backoff_factor: f64,
}

/// Which status the tools wait for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetsConfig {
    pub default: String,
    pub wait_for_mining: bool,
}

/// WhatsOnChain overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WocSection {
    pub base_url: Option<String>,
}

/// Everything `config.yaml` can hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "arc-mainnet")]
    pub arc_mainnet: ArcSection,
    #[serde(rename = "arc-testnet")]
    pub arc_testnet: ArcSection,
    pub polling: PollingConfig,
    pub targets: TargetsConfig,
    pub woc: WocSection,
}

impl Config {
    /// Where the configuration is read from.
    ///
    /// An explicit path wins; otherwise `config.yaml` next to the running
    /// executable if it exists, else `config.yaml` in the working directory.
    pub fn locate(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));
        match beside_exe {
            Some(candidate) if candidate.is_file() => candidate,
            _ => PathBuf::from(CONFIG_FILE_NAME),
        }
    }

    /// Locate and load the configuration. A missing file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(&Self::locate(explicit))
    }

    /// Like [`Config::load`], but a missing file yields the defaults plus
    /// any environment overrides.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = Self::locate(explicit);
        if path.is_file() {
            return Self::load_from(&path);
        }
        debug!(path = %path.display(), "no config file, using defaults");
        Ok(figment_for(None).extract()?)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        debug!(path = %path.display(), "loading configuration");
        let config: Config = figment_for(Some(path)).extract()?;
        debug!(
            mainnet_url = %config.arc_mainnet.url,
            testnet_url = %config.arc_testnet.url,
            "configuration loaded"
        );
        Ok(config)
    }

    /// The ARC section for `network`.
    pub fn arc(&self, network: Network) -> &ArcSection {
        match network {
            Network::Mainnet => &self.arc_mainnet,
            Network::Testnet => &self.arc_testnet,
        }
    }

    /// Require an ARC URL for `network`.
    pub fn validate(&self, network: Network) -> Result<(), ConfigError> {
        if self.arc(network).url.trim().is_empty() {
            return Err(ConfigError::MissingArcUrl(network));
        }
        Ok(())
    }

    /// Validated ARC client settings for `network`.
    pub fn arc_client(&self, network: Network) -> Result<ArcConfig, ConfigError> {
        self.validate(network)?;
        let section = self.arc(network);
        Ok(ArcConfig {
            base_url: section.url.trim().to_string(),
            api_key: Some(section.api_key.trim().to_string()).filter(|key| !key.is_empty()),
            timeout: section.timeout()?,
        })
    }

    /// WhatsOnChain client settings for `network`.
    pub fn woc_client(&self, network: Network) -> WocConfig {
        let mut config = WocConfig::for_network(network);
        if let Some(base_url) = self.woc.base_url.as_deref().filter(|url| !url.is_empty()) {
            config.base_url = base_url.to_string();
        }
        config
    }

    /// The configured polling interval, if any.
    pub fn poll_interval(&self) -> Result<Option<Duration>, ConfigError> {
        if self.polling.interval.trim().is_empty() {
            return Ok(None);
        }
        parse_duration(&self.polling.interval)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidDuration {
                field: "polling.interval",
                value: self.polling.interval.clone(),
            })
    }

    /// Monitor poll interval: the `--poll-rate` seconds when given, else
    /// `polling.interval`, else `fallback`. Never below one second.
    pub fn poll_rate(
        &self,
        flag_secs: Option<u64>,
        fallback: Duration,
    ) -> Result<Duration, ConfigError> {
        let rate = match flag_secs {
            Some(secs) => Duration::from_secs(secs),
            None => self.poll_interval()?.unwrap_or(fallback),
        };
        Ok(rate.max(Duration::from_secs(1)))
    }
}

fn figment_for(path: Option<&Path>) -> Figment {
    let mut figment = Figment::new();
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    // Section names are hyphenated in YAML but env var names cannot be.
    figment.merge(Env::prefixed(ENV_PREFIX).split("__").map(|key| {
        key.as_str()
            .replacen("arc_mainnet", "arc-mainnet", 1)
            .replacen("arc_testnet", "arc-testnet", 1)
            .into()
    }))
}

/// Parse a Go-style duration: one or more `<number><unit>` terms with units
/// `ms`, `s`, `m` or `h`, e.g. `"30s"`, `"1m30s"`, `"1.5s"`.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let mut rest = text.trim();
    if rest.is_empty() {
        return None;
    }
    let is_number = |c: char| c.is_ascii_digit() || c == '.';

    let mut total = Duration::ZERO;
    while !rest.is_empty() {
        let split = rest.find(|c: char| !is_number(c)).unwrap_or(rest.len());
        if split == 0 {
            return None;
        }
        let value: f64 = rest[..split].parse().ok()?;
        rest = &rest[split..];

        let unit_len = rest.find(is_number).unwrap_or(rest.len());
        let secs = match &rest[..unit_len] {
            "ms" => value / 1000.0,
            "s" => value,
            "m" => value * 60.0,
            "h" => value * 3600.0,
            _ => return None,
        };
        rest = &rest[unit_len..];
        total = total.checked_add(Duration::try_from_secs_f64(secs).ok()?)?;
    }
    Some(total)
}
