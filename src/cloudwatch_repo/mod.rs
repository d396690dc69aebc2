// CloudWatch metric statistics via aws-sdk-cloudwatch

mod convert;

pub use convert::{classify_error, from_sdk_datapoint, is_auth_error_code};

use crate::catalog::NAMESPACE;
use crate::config::AwsConfig;
use crate::error::{FetchError, SetupError};
use crate::models::{Datapoint, MetricSpec, PoolDimensions, QueryWindow};
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::config::{Credentials, Region};
use aws_sdk_cloudwatch::types::Dimension;
use std::future::Future;
use tracing::instrument;

/// Source of datapoints for one catalog entry. Implemented by [`CloudWatchRepo`]
/// and by fakes in tests.
pub trait MetricsBackend {
    fn fetch_datapoints(
        &self,
        spec: &MetricSpec,
        dimensions: &PoolDimensions,
        window: &QueryWindow,
    ) -> impl Future<Output = Result<Vec<Datapoint>, FetchError>>;
}

pub struct CloudWatchRepo {
    client: Client,
}

impl CloudWatchRepo {
    /// Resolves credentials and region through the default AWS chain, with
    /// explicit settings taking precedence. Static credentials are used only
    /// when both key id and secret are given.
    pub async fn connect(aws: &AwsConfig) -> Result<Self, SetupError> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let (Some(key_id), Some(secret)) = (
            non_empty(aws.access_key_id.as_deref()),
            non_empty(aws.secret_access_key.as_deref()),
        ) {
            loader = loader.credentials_provider(Credentials::new(
                key_id,
                secret,
                None,
                None,
                "cognito-idp-plugin",
            ));
        }
        if let Some(region) = non_empty(aws.region.as_deref()) {
            loader = loader.region(Region::new(region.to_string()));
        }

        let sdk_config = loader.load().await;
        let region = sdk_config.region().ok_or(SetupError::MissingRegion)?;
        tracing::debug!(region = %region, "CloudWatch client ready");

        Ok(Self {
            client: Client::new(&sdk_config),
        })
    }
}

impl MetricsBackend for CloudWatchRepo {
    #[instrument(
        skip(self, dimensions, window),
        fields(repo = "cloudwatch", operation = "get_metric_statistics", metric = %spec.remote_name)
    )]
    async fn fetch_datapoints(
        &self,
        spec: &MetricSpec,
        dimensions: &PoolDimensions,
        window: &QueryWindow,
    ) -> Result<Vec<Datapoint>, FetchError> {
        let mut request = self
            .client
            .get_metric_statistics()
            .namespace(NAMESPACE)
            .metric_name(spec.remote_name)
            .start_time(convert::to_sdk_time(window.start))
            .end_time(convert::to_sdk_time(window.end))
            .period(window.period_secs)
            .statistics(spec.statistic.into());
        for (name, value) in dimensions.pairs() {
            request = request.dimensions(Dimension::builder().name(name).value(value).build());
        }

        let output = request.send().await.map_err(classify_error)?;
        let datapoints: Vec<Datapoint> = output
            .datapoints()
            .iter()
            .filter_map(from_sdk_datapoint)
            .collect();
        tracing::debug!(count = datapoints.len(), "datapoints fetched");
        Ok(datapoints)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
