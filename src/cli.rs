// Command-line flags, merged over the optional TOML config file

use clap::Parser;
use std::path::PathBuf;

use crate::config::PluginConfig;
use crate::error::SetupError;

#[derive(Parser, Debug, Default)]
#[command(name = "cognito-idp-plugin", version)]
#[command(about = "mackerel-agent plugin for Amazon Cognito user pool metrics")]
pub struct Args {
    /// AWS Access Key ID
    #[arg(long)]
    pub access_key_id: Option<String>,

    /// AWS Secret Access Key
    #[arg(long)]
    pub secret_access_key: Option<String>,

    /// AWS Region
    #[arg(long)]
    pub region: Option<String>,

    /// User pool id (UserPool dimension)
    #[arg(long)]
    pub pool_id: Option<String>,

    /// User pool app client id (UserPoolClient dimension)
    #[arg(long)]
    pub pool_client_id: Option<String>,

    /// Temp file name (empty means the default path)
    #[arg(long)]
    pub tempfile: Option<String>,

    /// Metric key prefix [default: cognito-idp]
    #[arg(long)]
    pub metric_key_prefix: Option<String>,

    /// Optional TOML config file; flags take precedence over its values
    #[arg(long, env = "COGNITO_IDP_PLUGIN_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Load the config file (if any), apply flags on top, and validate.
    pub fn into_config(self) -> Result<PluginConfig, SetupError> {
        let source = self
            .config
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<command line>".into());
        let config_err = |e: anyhow::Error| SetupError::Config {
            path: source.clone(),
            message: format!("{e:#}"),
        };

        let mut config = match &self.config {
            Some(path) => PluginConfig::load(&path.to_string_lossy()).map_err(config_err)?,
            None => PluginConfig::default(),
        };

        override_with(&mut config.aws.access_key_id, self.access_key_id);
        override_with(&mut config.aws.secret_access_key, self.secret_access_key);
        override_with(&mut config.aws.region, self.region);
        override_with(&mut config.output.tempfile, self.tempfile.map(PathBuf::from));
        override_with(&mut config.output.metric_key_prefix, self.metric_key_prefix);
        if let Some(pool_id) = self.pool_id {
            config.pool.pool_id = pool_id;
        }
        if let Some(pool_client_id) = self.pool_client_id {
            config.pool.pool_client_id = pool_client_id;
        }

        config.validate().map_err(config_err)?;
        Ok(config)
    }
}

fn override_with<T>(slot: &mut Option<T>, flag: Option<T>) {
    if flag.is_some() {
        *slot = flag;
    }
}
