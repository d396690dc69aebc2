// Catalog entry models

use std::fmt;

/// CloudWatch statistic kind; `as_str` gives the API name (e.g. "SampleCount").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Sum,
    Average,
    Maximum,
    Minimum,
    SampleCount,
}

impl Statistic {
    /// Name as accepted by GetMetricStatistics.
    pub fn as_str(self) -> &'static str {
        match self {
            Statistic::Sum => "Sum",
            Statistic::Average => "Average",
            Statistic::Maximum => "Maximum",
            Statistic::Minimum => "Minimum",
            Statistic::SampleCount => "SampleCount",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One metric to collect: which CloudWatch metric, which statistic, and the
/// key it is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub remote_name: &'static str,
    pub statistic: Statistic,
    pub local_name: &'static str,
}

impl MetricSpec {
    pub const fn new(
        remote_name: &'static str,
        statistic: Statistic,
        local_name: &'static str,
    ) -> Self {
        Self {
            remote_name,
            statistic,
            local_name,
        }
    }
}

impl fmt::Display for MetricSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.local_name, self.statistic, self.remote_name
        )
    }
}
