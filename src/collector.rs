// Snapshot assembly: one fetch + reduce per catalog entry, failures logged and skipped

use crate::cloudwatch_repo::MetricsBackend;
use crate::models::{MetricSpec, PoolDimensions, QueryWindow, Snapshot};
use crate::reducer::latest_value;
use chrono::{DateTime, Utc};

/// Collects the latest value of every entry in `catalog`, one request at a time.
///
/// Never fails as a whole: an entry whose fetch errors or returns no data is
/// left out of the snapshot and logged. An empty snapshot is a valid result.
pub async fn build_snapshot<B: MetricsBackend>(
    backend: &B,
    catalog: &[MetricSpec],
    dimensions: &PoolDimensions,
    now: DateTime<Utc>,
) -> Snapshot {
    let window = QueryWindow::ending_at(now);
    let mut snapshot = Snapshot::new();

    for spec in catalog {
        let result = backend
            .fetch_datapoints(spec, dimensions, &window)
            .await
            .and_then(|datapoints| latest_value(&datapoints, spec.statistic));
        match result {
            Ok(value) => snapshot.insert(spec.local_name, value),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "build_snapshot",
                    metric = spec.local_name,
                    remote = spec.remote_name,
                    statistic = %spec.statistic,
                    "metric skipped"
                );
            }
        }
    }

    tracing::debug!(
        collected = snapshot.len(),
        requested = catalog.len(),
        "snapshot built"
    );
    snapshot
}
