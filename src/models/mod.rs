// Domain models: metric catalog entries, CloudWatch samples, snapshots, graph schema

mod datapoint;
mod graph;
mod metric;
mod query;
mod snapshot;

pub use datapoint::Datapoint;
pub(crate) use graph::graph_key;
pub use graph::{GraphDef, GraphMetric, GraphSchema};
pub use metric::{MetricSpec, Statistic};
pub use query::{PERIOD_SECS, PoolDimensions, QueryWindow, WINDOW_PERIODS};
pub use snapshot::Snapshot;
