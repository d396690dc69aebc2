// Fixed metric catalog and graph definitions for Cognito user pools.
// Local names and labels (including their spelling) are what dashboards key on; do not change.

use crate::models::{GraphDef, GraphMetric, GraphSchema, MetricSpec, Statistic};

/// CloudWatch namespace for Cognito user pool metrics.
pub const NAMESPACE: &str = "AWS/Cognito";

/// Used when no metric key prefix is configured.
pub const DEFAULT_PREFIX: &str = "cognito-idp";

const GRAPH_UNIT: &str = "integer";

/// Every metric collected per run, in collection order.
pub const METRICS: [MetricSpec; 16] = [
    MetricSpec::new("SignUpSuccesses", Statistic::Sum, "SignUpSuccesses"),
    MetricSpec::new("SignUpSuccesses", Statistic::Average, "SignUpParcentageOfSuccessful"),
    MetricSpec::new("SignUpSuccesses", Statistic::SampleCount, "SignUpSampleCount"),
    MetricSpec::new("SignUpThrottles", Statistic::Sum, "SignUpThrottles"),
    MetricSpec::new("SignInSuccesses", Statistic::Sum, "SignInSuccesses"),
    MetricSpec::new("SignInSuccesses", Statistic::Average, "SignInParcentageOfSuccessful"),
    MetricSpec::new("SignInSuccesses", Statistic::SampleCount, "SignInSampleCount"),
    MetricSpec::new("SignInThrottles", Statistic::Sum, "SignInThrottles"),
    MetricSpec::new("TokenRefreshSuccesses", Statistic::Sum, "TokenRefreshSuccesses"),
    MetricSpec::new(
        "TokenRefreshSuccesses",
        Statistic::Average,
        "TokenRefreshParcentageOfSuccessful",
    ),
    MetricSpec::new(
        "TokenRefreshSuccesses",
        Statistic::SampleCount,
        "TokenRefreshSampleCount",
    ),
    MetricSpec::new("TokenRefreshThrottles", Statistic::Sum, "TokenRefreshThrottles"),
    MetricSpec::new("FederationSuccesses", Statistic::Sum, "FederationSuccesses"),
    MetricSpec::new(
        "FederationSuccesses",
        Statistic::Average,
        "FederationParcentageOfSuccessful",
    ),
    MetricSpec::new("FederationSuccesses", Statistic::SampleCount, "FederationSampleCount"),
    MetricSpec::new("FederationThrottles", Statistic::Sum, "FederationThrottles"),
];

/// (graph id, local name stem) per operation family.
const FAMILIES: [(&str, &str); 4] = [
    ("signup", "SignUp"),
    ("signin", "SignIn"),
    ("tokenRefresh", "TokenRefresh"),
    ("federation", "Federation"),
];

/// (local name suffix, label) for the four lines of every graph, in display order.
const LINES: [(&str, &str); 4] = [
    ("Successes", "Success Count"),
    ("ParcentageOfSuccessful", "Parcentage Of Successfull"),
    ("SampleCount", "Request Count"),
    ("Throttles", "Throttles Count"),
];

/// One graph per operation family, four metrics each.
pub fn graph_schema() -> GraphSchema {
    let graphs = FAMILIES
        .iter()
        .map(|(id, stem)| {
            let metrics = LINES
                .iter()
                .map(|(suffix, label)| GraphMetric::new(format!("{stem}{suffix}"), *label))
                .collect();
            let graph = GraphDef {
                label: (*id).to_string(),
                unit: GRAPH_UNIT.to_string(),
                metrics,
            };
            ((*id).to_string(), graph)
        })
        .collect();
    GraphSchema { graphs }
}
