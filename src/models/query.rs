// Query parameters shared by every catalog entry: time window and pool dimensions

use chrono::{DateTime, Duration, Utc};

/// Aggregation period in seconds (CloudWatch minimum for Cognito metrics).
pub const PERIOD_SECS: i32 = 300;

/// Number of periods covered by one query.
pub const WINDOW_PERIODS: i64 = 3;

/// Time range and period for one GetMetricStatistics call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub period_secs: i32,
}

impl QueryWindow {
    /// Window of `WINDOW_PERIODS` periods ending at `now`.
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        let span = Duration::seconds(i64::from(PERIOD_SECS) * WINDOW_PERIODS);
        Self {
            start: now - span,
            end: now,
            period_secs: PERIOD_SECS,
        }
    }
}

/// User pool and app client identifiers. Empty values are sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolDimensions {
    pub pool_id: String,
    pub pool_client_id: String,
}

impl PoolDimensions {
    pub const USER_POOL: &'static str = "UserPool";
    pub const USER_POOL_CLIENT: &'static str = "UserPoolClient";

    pub fn new(pool_id: impl Into<String>, pool_client_id: impl Into<String>) -> Self {
        Self {
            pool_id: pool_id.into(),
            pool_client_id: pool_client_id.into(),
        }
    }

    /// (name, value) pairs in the order they are sent.
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (Self::USER_POOL, self.pool_id.as_str()),
            (Self::USER_POOL_CLIENT, self.pool_client_id.as_str()),
        ]
    }
}
