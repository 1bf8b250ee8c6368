use crate::config::AppConfig;
use crate::probe;
use crate::quotes;
use anyhow::Result;
use chrono::Local;
use std::time::Duration;

const BANNER_RULE_WIDTH: usize = 60;

/// Counters and flags that live for the whole monitoring session.
#[derive(Debug, Default)]
pub struct MonitorState {
    pub was_disconnected: bool,
    pub check_count: u64,
    pub failed_checks: u64,
}

pub struct Monitor {
    config: AppConfig,
    state: MonitorState,
}

impl Monitor {
    pub fn new(config: AppConfig) -> Self {
        Monitor {
            config,
            state: MonitorState::default(),
        }
    }

    /// Format one status block for a finished check. The caller prints it;
    /// keeping this side-effect free (apart from the counters) makes the
    /// lost/restored sequencing testable.
    pub fn render_status(&mut self, connected: bool) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        self.state.check_count += 1;

        let mut block = String::new();
        if connected {
            block.push_str(&format!(
                "[{}] Check #{}: ✅ CONNECTED\n",
                timestamp, self.state.check_count
            ));
            block.push_str("   WiFi is operational. All systems go!\n");
            if self.state.was_disconnected {
                block.push_str("   Connection restored! You're back in action! 💪\n");
                self.state.was_disconnected = false;
            }
        } else {
            block.push_str(&format!(
                "[{}] Check #{}: ❌ DISCONNECTED\n",
                timestamp, self.state.check_count
            ));
            block.push_str(&format!("   🚨 {}\n", quotes::random_quote()));
            block.push_str(&format!(
                "   Escape Route: {}\n",
                quotes::random_escape_route()
            ));
            self.state.was_disconnected = true;
            self.state.failed_checks += 1;
        }
        block
    }

    async fn tick(&mut self) {
        let connected = probe::icmp_reachable(&self.config.probe).await;
        println!("{}", self.render_status(connected));
    }

    /// Check once immediately, then once per interval until Ctrl+C.
    pub async fn run(mut self, interval_secs: u64) -> Result<()> {
        print_start_banner(interval_secs);

        // Register the signal listener once, up front: a Ctrl+C delivered
        // while a probe is in flight is buffered and observed on the next
        // poll instead of being dropped.
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        // interval() fires immediately, which is the spec'd first check
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));

        loop {
            tokio::select! {
                biased;
                _ = &mut ctrl_c => {
                    print_shutdown_banner();
                    tracing::info!(
                        "monitor stopped: {} checks, {} failures",
                        self.state.check_count,
                        self.state.failed_checks
                    );
                    return Ok(());
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }
    }
}

fn print_start_banner(interval_secs: u64) {
    println!("{}", "=".repeat(BANNER_RULE_WIDTH));
    println!("GET TO THE CHOPPA - WiFi Monitor Starting...");
    println!("{}", "=".repeat(BANNER_RULE_WIDTH));
    println!("Monitoring WiFi connection every {} seconds...", interval_secs);
    println!("Press Ctrl+C to stop.\n");
}

fn print_shutdown_banner() {
    println!("\n{}", "=".repeat(BANNER_RULE_WIDTH));
    println!("Monitor stopped. Stay connected out there! 💻");
    println!("{}", "=".repeat(BANNER_RULE_WIDTH));
}
