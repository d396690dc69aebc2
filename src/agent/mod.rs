// mackerel-agent plugin protocol: graph definitions on request, tab-separated values otherwise

mod value_store;

pub use value_store::{LastValues, MAX_DIFF_INTERVAL_SECS, per_minute_rate};

use crate::models::{GraphDef, GraphSchema, Snapshot, graph_key};
use crate::plugin::MackerelPlugin;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Set (non-empty) by the agent when it wants graph definitions instead of values.
pub const META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";

/// Directory for plugin state files; falls back to the OS temp dir.
pub const WORKDIR_ENV: &str = "MACKEREL_PLUGIN_WORKDIR";

const META_HEADER: &str = "# mackerel-agent-plugin";

#[derive(Serialize)]
struct GraphDefinitions<'a> {
    graphs: BTreeMap<String, &'a GraphDef>,
}

pub fn meta_requested() -> bool {
    std::env::var(META_ENV).is_ok_and(|v| !v.is_empty())
}

/// `<workdir>/mackerel-plugin-<prefix>`.
pub fn default_tempfile(prefix: &str) -> PathBuf {
    let dir = std::env::var_os(WORKDIR_ENV)
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    dir.join(format!("mackerel-plugin-{prefix}"))
}

/// Header line plus the schema as one line of JSON, graphs keyed `<prefix>.<id>`.
pub fn write_definitions<W: Write>(
    w: &mut W,
    prefix: &str,
    schema: &GraphSchema,
) -> anyhow::Result<()> {
    let defs = GraphDefinitions {
        graphs: schema.prefixed(prefix),
    };
    writeln!(w, "{META_HEADER}")?;
    serde_json::to_writer(&mut *w, &defs)?;
    writeln!(w)?;
    Ok(())
}

/// One `<prefix>.<graph>.<metric>\t<value>\t<unix secs>` line per graph metric
/// present in `snapshot`, graphs in id order and metrics in declared order.
/// Diff metrics are reported as a per-minute rate against `last` and skipped
/// when no rate can be computed.
pub fn write_values<W: Write>(
    w: &mut W,
    prefix: &str,
    schema: &GraphSchema,
    snapshot: &Snapshot,
    now: DateTime<Utc>,
    last: Option<&LastValues>,
) -> anyhow::Result<()> {
    let ts = now.timestamp();
    for (id, graph) in &schema.graphs {
        let key = graph_key(prefix, id);
        for metric in &graph.metrics {
            let Some(value) = snapshot.get(&metric.name) else {
                continue;
            };
            let value = if metric.diff {
                let Some(rate) = last.and_then(|l| l.rate(&metric.name, value, now)) else {
                    tracing::debug!(metric = %metric.name, "no previous value for diff; skipped");
                    continue;
                };
                rate
            } else {
                value
            };
            writeln!(w, "{key}.{}\t{value:.6}\t{ts}", metric.name)?;
        }
    }
    Ok(())
}

/// Fetch, persist state for diff metrics, and print values.
pub async fn output_values<P: MackerelPlugin, W: Write>(
    plugin: &P,
    tempfile: &Path,
    now: DateTime<Utc>,
    w: &mut W,
) -> anyhow::Result<()> {
    let schema = plugin.graph_definition();
    let snapshot = plugin.fetch_metrics(now).await;

    let last = if schema.has_diff() {
        let last = match LastValues::load(tempfile) {
            Ok(last) => last,
            Err(e) => {
                tracing::info!(error = %e, path = %tempfile.display(), "previous values unavailable (ignored)");
                None
            }
        };
        LastValues::from_snapshot(&snapshot, now).save(tempfile)?;
        last
    } else {
        None
    };

    write_values(
        w,
        plugin.metric_key_prefix(),
        &schema,
        &snapshot,
        now,
        last.as_ref(),
    )
}
