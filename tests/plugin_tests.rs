// Plugin wiring: prefix fallback, schema and snapshot through the plugin trait

mod common;

use common::{FakeBackend, Reply, at, sum_point};
use cognito_idp_plugin::config::PluginConfig;
use cognito_idp_plugin::models::*;
use cognito_idp_plugin::plugin::{CognitoIdpPlugin, MackerelPlugin};

#[test]
fn empty_prefix_falls_back_to_cognito_idp() {
    let plugin = CognitoIdpPlugin::new(FakeBackend::new(), PoolDimensions::default(), "");
    assert_eq!(plugin.metric_key_prefix(), "cognito-idp");
}

#[test]
fn explicit_prefix_is_kept() {
    let plugin = CognitoIdpPlugin::new(FakeBackend::new(), PoolDimensions::default(), "test-pool");
    assert_eq!(plugin.metric_key_prefix(), "test-pool");
}

#[test]
fn from_config_uses_pool_ids_and_default_prefix() {
    let config = PluginConfig::load_from_str(
        r#"
[pool]
pool_id = "us-east-1_pool"
pool_client_id = "client"
"#,
    )
    .unwrap();
    let plugin = CognitoIdpPlugin::from_config(FakeBackend::new(), &config);
    assert_eq!(plugin.metric_key_prefix(), "cognito-idp");
    assert_eq!(plugin.graph_definition(), plugin.schema());
    assert_eq!(plugin.schema().graphs.len(), 4);
}

#[tokio::test]
async fn fetch_metrics_returns_collected_values() {
    let backend = FakeBackend::new().reply(
        "TokenRefreshSuccesses",
        Statistic::Sum,
        Reply::Points(vec![sum_point(10, 12.0)]),
    );
    let plugin = CognitoIdpPlugin::new(backend, PoolDimensions::new("pool", "client"), "");
    let snapshot = plugin.fetch_metrics(at(1_000)).await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("TokenRefreshSuccesses"), Some(12.0));
}
