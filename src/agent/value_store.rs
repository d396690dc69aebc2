// Previous-run values for diff metrics, kept as JSON in the plugin temp file

use crate::models::Snapshot;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Diffs against values older than this are discarded.
pub const MAX_DIFF_INTERVAL_SECS: i64 = 600;

const LAST_TIME_KEY: &str = "_lastTime";

#[derive(Debug, Clone, PartialEq)]
pub struct LastValues {
    pub time: DateTime<Utc>,
    pub values: BTreeMap<String, f64>,
}

impl LastValues {
    pub fn from_snapshot(snapshot: &Snapshot, time: DateTime<Utc>) -> Self {
        Self {
            time,
            values: snapshot.iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    /// Ok(None) when the file does not exist yet.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let map: Map<String, Value> = serde_json::from_slice(&bytes)?;
        let secs = map
            .get(LAST_TIME_KEY)
            .and_then(Value::as_i64)
            .ok_or_else(|| anyhow::anyhow!("{LAST_TIME_KEY} missing"))?;
        let time = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| anyhow::anyhow!("{LAST_TIME_KEY} out of range: {secs}"))?;
        let values = map
            .iter()
            .filter(|(k, _)| k.as_str() != LAST_TIME_KEY)
            .filter_map(|(k, v)| v.as_f64().map(|v| (k.clone(), v)))
            .collect();
        Ok(Some(Self { time, values }))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let mut map = Map::new();
        map.insert(LAST_TIME_KEY.into(), Value::from(self.time.timestamp()));
        for (k, v) in &self.values {
            map.insert(k.clone(), Value::from(*v));
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_vec(&map)?)?;
        Ok(())
    }

    /// Per-minute rate of `name` between the stored value and `value` at `now`.
    pub fn rate(&self, name: &str, value: f64, now: DateTime<Utc>) -> Option<f64> {
        let last = *self.values.get(name)?;
        per_minute_rate(value, last, (now - self.time).num_seconds())
    }
}

/// `(value - last) * 60 / elapsed`. None when the interval is empty, longer
/// than [`MAX_DIFF_INTERVAL_SECS`], or the counter went backwards (reset).
pub fn per_minute_rate(value: f64, last: f64, elapsed_secs: i64) -> Option<f64> {
    if elapsed_secs <= 0 || elapsed_secs > MAX_DIFF_INTERVAL_SECS {
        return None;
    }
    if value < last {
        tracing::debug!(value, last, "counter seems to be reset");
        return None;
    }
    Some((value - last) * 60.0 / elapsed_secs as f64)
}
