// One CloudWatch sample, decoupled from the SDK type

use chrono::{DateTime, Utc};

use super::Statistic;

/// A timestamped sample. Only the statistics that were requested are set.
#[derive(Debug, Clone, PartialEq)]
pub struct Datapoint {
    pub timestamp: DateTime<Utc>,
    pub sum: Option<f64>,
    pub average: Option<f64>,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
    pub sample_count: Option<f64>,
}

impl Datapoint {
    /// Sample at `timestamp` with every statistic unset.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            sum: None,
            average: None,
            maximum: None,
            minimum: None,
            sample_count: None,
        }
    }

    pub fn value(&self, statistic: Statistic) -> Option<f64> {
        match statistic {
            Statistic::Sum => self.sum,
            Statistic::Average => self.average,
            Statistic::Maximum => self.maximum,
            Statistic::Minimum => self.minimum,
            Statistic::SampleCount => self.sample_count,
        }
    }
}
