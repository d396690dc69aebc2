// Graph schema models; JSON shape is the mackerel-agent plugin meta format

use serde::Serialize;
use std::collections::BTreeMap;

/// One line in a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphMetric {
    pub name: String,
    pub label: String,
    pub stacked: bool,
    /// Report per-minute rate of change instead of the raw value.
    #[serde(skip)]
    pub diff: bool,
}

impl GraphMetric {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            stacked: false,
            diff: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDef {
    pub label: String,
    pub unit: String,
    pub metrics: Vec<GraphMetric>,
}

/// Graphs keyed by id (unprefixed). BTreeMap keeps output order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSchema {
    pub graphs: BTreeMap<String, GraphDef>,
}

impl GraphSchema {
    pub fn has_diff(&self) -> bool {
        self.graphs
            .values()
            .any(|g| g.metrics.iter().any(|m| m.diff))
    }

    /// Graph keys as published: `<prefix>.<id>`.
    pub fn prefixed(&self, prefix: &str) -> BTreeMap<String, &GraphDef> {
        self.graphs
            .iter()
            .map(|(id, graph)| (graph_key(prefix, id), graph))
            .collect()
    }
}

pub(crate) fn graph_key(prefix: &str, id: &str) -> String {
    if prefix.is_empty() {
        id.to_string()
    } else {
        format!("{prefix}.{id}")
    }
}
