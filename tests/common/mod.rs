// Shared test helpers: a scripted in-memory backend

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use cognito_idp_plugin::cloudwatch_repo::MetricsBackend;
use cognito_idp_plugin::error::FetchError;
use cognito_idp_plugin::models::*;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

pub fn sum_point(secs: i64, sum: f64) -> Datapoint {
    Datapoint {
        sum: Some(sum),
        ..Datapoint::at(at(secs))
    }
}

pub enum Reply {
    Points(Vec<Datapoint>),
    Transport(&'static str),
    Auth(&'static str),
}

/// One recorded GetMetricStatistics call.
#[derive(Debug, Clone)]
pub struct Call {
    pub remote_name: String,
    pub statistic: Statistic,
    pub dimensions: PoolDimensions,
    pub window: QueryWindow,
}

/// Replies keyed by (remote name, statistic); unscripted queries get no datapoints.
#[derive(Default)]
pub struct FakeBackend {
    replies: HashMap<(&'static str, Statistic), Reply>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, remote_name: &'static str, statistic: Statistic, reply: Reply) -> Self {
        self.replies.insert((remote_name, statistic), reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl MetricsBackend for FakeBackend {
    async fn fetch_datapoints(
        &self,
        spec: &MetricSpec,
        dimensions: &PoolDimensions,
        window: &QueryWindow,
    ) -> Result<Vec<Datapoint>, FetchError> {
        self.calls.lock().unwrap().push(Call {
            remote_name: spec.remote_name.to_string(),
            statistic: spec.statistic,
            dimensions: dimensions.clone(),
            window: *window,
        });
        match self.replies.get(&(spec.remote_name, spec.statistic)) {
            Some(Reply::Points(points)) => Ok(points.clone()),
            Some(Reply::Transport(msg)) => Err(FetchError::Transport(msg.to_string())),
            Some(Reply::Auth(msg)) => Err(FetchError::Auth(msg.to_string())),
            None => Ok(vec![]),
        }
    }
}

/// Fails every request.
pub struct FailingBackend;

impl MetricsBackend for FailingBackend {
    async fn fetch_datapoints(
        &self,
        _spec: &MetricSpec,
        _dimensions: &PoolDimensions,
        _window: &QueryWindow,
    ) -> Result<Vec<Datapoint>, FetchError> {
        Err(FetchError::Transport("connection refused".into()))
    }
}
