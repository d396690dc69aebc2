// Error types: setup failures abort the run, fetch failures skip one metric

use thiserror::Error;

/// Failure building the CloudWatch client or loading configuration. Fatal.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no AWS region configured (use --region, AWS_REGION or an AWS profile)")]
    MissingRegion,

    #[error("config {path}: {message}")]
    Config { path: String, message: String },
}

/// Failure collecting a single metric. The run continues without it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, timeout, or non-auth service error. Also covers credentials
    /// that could not be resolved locally, since no request was sent.
    #[error("transport error: {0}")]
    Transport(String),

    /// Credentials rejected by CloudWatch: invalid, expired, or not authorized.
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("fetched no datapoints")]
    NoData,
}
