use crate::config::ProbeConfig;
use std::process::Stdio;
use tokio::process::Command;

/// Check reachability by sending a single ICMP echo to the configured target.
///
/// Any failure (spawn error, non-zero exit, ping's own timeout) collapses to
/// `false`; the next timer tick is the retry.
pub async fn icmp_reachable(cfg: &ProbeConfig) -> bool {
    let mut cmd = Command::new("ping");
    cmd.args(ping_args(cfg))
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match cmd.status().await {
        Ok(status) => status.success(),
        Err(e) => {
            tracing::debug!("ping spawn failed: {}", e);
            false
        }
    }
}

/// Platform-specific ping arguments: one echo request, bounded wait.
fn ping_args(cfg: &ProbeConfig) -> Vec<String> {
    if cfg!(windows) {
        // Windows: -n count, -w timeout in milliseconds
        vec![
            "-n".to_string(),
            "1".to_string(),
            "-w".to_string(),
            (cfg.timeout_secs * 1000).to_string(),
            cfg.target.clone(),
        ]
    } else {
        // Unix/Linux/Mac: -c count, -W timeout in seconds
        vec![
            "-c".to_string(),
            "1".to_string(),
            "-W".to_string(),
            cfg.timeout_secs.to_string(),
            cfg.target.clone(),
        ]
    }
}
