use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::DEFAULT_PREFIX;
use crate::models::PoolDimensions;

/// Plugin settings. Every field is optional; command-line flags are merged
/// over whatever the TOML file provides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub aws: AwsConfig,
    pub pool: PoolConfig,
    pub output: OutputConfig,
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
}

// Keeps the secret out of debug logs.
impl fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsConfig")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("region", &self.region)
            .finish()
    }
}

/// Dimension values. Left empty, queries go out with empty dimensions and
/// CloudWatch usually returns nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub pool_id: String,
    pub pool_client_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// State file for diff metrics. Unset or empty means a per-prefix file in
    /// the plugin work dir.
    pub tempfile: Option<PathBuf>,
    /// Distinguishes plugin instances when several run on one host.
    pub metric_key_prefix: Option<String>,
}

impl PluginConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: PluginConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Configured prefix, or `cognito-idp` when unset or empty.
    pub fn metric_key_prefix(&self) -> &str {
        self.output
            .metric_key_prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PREFIX)
    }

    /// Configured state file, `None` when unset or empty.
    pub fn tempfile(&self) -> Option<&Path> {
        self.output
            .tempfile
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn dimensions(&self) -> PoolDimensions {
        PoolDimensions::new(&self.pool.pool_id, &self.pool.pool_client_id)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let prefix = self.metric_key_prefix();
        anyhow::ensure!(
            !prefix.chars().any(char::is_whitespace),
            "output.metric_key_prefix must not contain whitespace, got {:?}",
            prefix
        );
        Ok(())
    }
}
