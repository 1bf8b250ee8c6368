use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod monitor;
mod probe;
mod quotes;

use config::AppConfig;
use monitor::Monitor;

#[derive(Debug, Parser)]
#[command(name = "choppa-monitor", disable_help_flag = true)]
struct Cli {
    /// Seconds between reachability checks
    interval: Option<u64>,
}

fn usage_exit() -> ! {
    eprintln!("Usage: choppa-monitor [interval_in_seconds]");
    eprintln!("Example: choppa-monitor 10");
    std::process::exit(1);
}

/// Pick the check interval: positional argument wins over the configured
/// default; zero is rejected like any other unusable value.
fn resolve_interval(arg: Option<u64>, default_secs: u64) -> Option<u64> {
    match arg {
        Some(n) if n >= 1 => Some(n),
        Some(_) => None,
        None => Some(default_secs),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::try_parse().unwrap_or_else(|_| usage_exit());

    let config = AppConfig::load_default()?;
    let interval_secs = resolve_interval(cli.interval, config.monitor.default_interval_secs)
        .unwrap_or_else(|| usage_exit());

    info!(
        "starting choppa-monitor: target={}, interval={}s",
        config.probe.target, interval_secs
    );

    Monitor::new(config).run(interval_secs).await
}
