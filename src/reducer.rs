// Latest-point reduction: many datapoints in, one scalar out

use crate::error::FetchError;
use crate::models::{Datapoint, Statistic};

/// Value of `statistic` on the most recent datapoint.
///
/// Input order is whatever CloudWatch returned and is not assumed sorted.
/// When several datapoints share the latest timestamp, the last of them in
/// input order is used. A missing field on the selected datapoint yields 0.0,
/// not an error.
pub fn latest_value(datapoints: &[Datapoint], statistic: Statistic) -> Result<f64, FetchError> {
    // max_by_key returns the last element among equal maxima
    let latest = datapoints
        .iter()
        .max_by_key(|dp| dp.timestamp)
        .ok_or(FetchError::NoData)?;
    Ok(latest.value(statistic).unwrap_or_default())
}
