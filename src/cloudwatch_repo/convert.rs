// SDK <-> model conversion and error classification

use crate::error::FetchError;
use crate::models::{Datapoint, Statistic};
use aws_sdk_cloudwatch::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudwatch::primitives::DateTime as SdkDateTime;
use aws_sdk_cloudwatch::types::{Datapoint as SdkDatapoint, Statistic as SdkStatistic};
use chrono::{DateTime, Utc};

/// Service error codes that mean the caller's credentials were rejected.
const AUTH_ERROR_CODES: [&str; 7] = [
    "AccessDenied",
    "AccessDeniedException",
    "InvalidClientTokenId",
    "ExpiredToken",
    "SignatureDoesNotMatch",
    "UnrecognizedClientException",
    "MissingAuthenticationToken",
];

impl From<Statistic> for SdkStatistic {
    fn from(s: Statistic) -> Self {
        match s {
            Statistic::Sum => SdkStatistic::Sum,
            Statistic::Average => SdkStatistic::Average,
            Statistic::Maximum => SdkStatistic::Maximum,
            Statistic::Minimum => SdkStatistic::Minimum,
            Statistic::SampleCount => SdkStatistic::SampleCount,
        }
    }
}

pub(super) fn to_sdk_time(t: DateTime<Utc>) -> SdkDateTime {
    SdkDateTime::from_secs_and_nanos(t.timestamp(), t.timestamp_subsec_nanos())
}

/// Convert an SDK datapoint. Returns None when it has no usable timestamp.
pub fn from_sdk_datapoint(dp: &SdkDatapoint) -> Option<Datapoint> {
    let Some(ts) = dp.timestamp() else {
        tracing::debug!("dropping datapoint without timestamp");
        return None;
    };
    let timestamp = DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())?;
    Some(Datapoint {
        timestamp,
        sum: dp.sum(),
        average: dp.average(),
        maximum: dp.maximum(),
        minimum: dp.minimum(),
        sample_count: dp.sample_count(),
    })
}

pub fn is_auth_error_code(code: &str) -> bool {
    AUTH_ERROR_CODES.contains(&code)
}

/// Map an SDK failure onto Auth (service rejected the credentials) or
/// Transport (everything else, including credentials that never resolved).
pub fn classify_error<E, R>(err: SdkError<E, R>) -> FetchError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if let SdkError::ServiceError(service) = &err {
        let code = service.err().code().unwrap_or("Unknown");
        let message = service.err().message().unwrap_or_default();
        let detail = format!("{code}: {message}");
        return if is_auth_error_code(code) {
            FetchError::Auth(detail)
        } else {
            FetchError::Transport(detail)
        };
    }
    FetchError::Transport(DisplayErrorContext(err).to_string())
}
