use anyhow::Result;
use clap::Parser;
use cognito_idp_plugin::*;
use std::io::Write;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the agent protocol
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli::Args::parse().into_config()?;
    let prefix = config.metric_key_prefix().to_string();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Definitions are static; no AWS session needed.
    if agent::meta_requested() {
        agent::write_definitions(&mut out, &prefix, &catalog::graph_schema())?;
        out.flush()?;
        return Ok(());
    }

    let repo = cloudwatch_repo::CloudWatchRepo::connect(&config.aws).await?;
    let plugin = plugin::CognitoIdpPlugin::from_config(repo, &config);
    let tempfile = config
        .tempfile()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| agent::default_tempfile(&prefix));

    agent::output_values(&plugin, &tempfile, chrono::Utc::now(), &mut out).await?;
    out.flush()?;
    Ok(())
}
