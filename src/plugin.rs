// The Cognito user pool plugin: graph schema plus one snapshot per run

use crate::catalog::{self, DEFAULT_PREFIX, METRICS};
use crate::cloudwatch_repo::MetricsBackend;
use crate::collector::build_snapshot;
use crate::config::PluginConfig;
use crate::models::{GraphSchema, PoolDimensions, Snapshot};
use chrono::{DateTime, Utc};
use std::future::Future;

/// What the agent output helper needs from a plugin.
pub trait MackerelPlugin {
    /// First segment of every graph and metric key.
    fn metric_key_prefix(&self) -> &str;

    fn graph_definition(&self) -> GraphSchema;

    /// Current values keyed by graph metric name. Never fails; missing
    /// metrics are simply absent.
    fn fetch_metrics(&self, now: DateTime<Utc>) -> impl Future<Output = Snapshot>;
}

pub struct CognitoIdpPlugin<B> {
    backend: B,
    dimensions: PoolDimensions,
    prefix: String,
}

impl<B: MetricsBackend> CognitoIdpPlugin<B> {
    /// An empty `prefix` falls back to `cognito-idp`.
    pub fn new(backend: B, dimensions: PoolDimensions, prefix: &str) -> Self {
        let prefix = if prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            prefix
        };
        Self {
            backend,
            dimensions,
            prefix: prefix.to_string(),
        }
    }

    pub fn from_config(backend: B, config: &PluginConfig) -> Self {
        Self::new(backend, config.dimensions(), config.metric_key_prefix())
    }

    pub fn schema(&self) -> GraphSchema {
        catalog::graph_schema()
    }

    pub async fn snapshot(&self, now: DateTime<Utc>) -> Snapshot {
        build_snapshot(&self.backend, &METRICS, &self.dimensions, now).await
    }
}

impl<B: MetricsBackend> MackerelPlugin for CognitoIdpPlugin<B> {
    fn metric_key_prefix(&self) -> &str {
        &self.prefix
    }

    fn graph_definition(&self) -> GraphSchema {
        self.schema()
    }

    async fn fetch_metrics(&self, now: DateTime<Utc>) -> Snapshot {
        self.snapshot(now).await
    }
}
