use std::process::{Command, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_choppa-monitor"))
}

fn assert_usage_failure(out: std::process::Output) {
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 2, "expected exactly two usage lines: {stderr:?}");
    assert_eq!(lines[0], "Usage: choppa-monitor [interval_in_seconds]");
    assert_eq!(lines[1], "Example: choppa-monitor 10");
}

#[test]
fn test_non_numeric_interval_exits_1_with_usage() {
    assert_usage_failure(bin().arg("abc").output().unwrap());
}

#[test]
fn test_zero_interval_exits_1_with_usage() {
    assert_usage_failure(bin().arg("0").output().unwrap());
}

#[test]
fn test_negative_interval_exits_1_with_usage() {
    assert_usage_failure(bin().arg("-3").output().unwrap());
}

#[cfg(unix)]
#[test]
fn test_sigint_shuts_down_cleanly_with_exit_0() {
    let mut child = bin()
        .arg("1")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Land the signal while the first probe is likely still in flight
    std::thread::sleep(std::time::Duration::from_millis(800));
    let kill = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(kill.success());

    let out = child.wait_with_output().unwrap();
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("GET TO THE CHOPPA - WiFi Monitor Starting..."));
    assert!(stdout.contains("Monitor stopped. Stay connected out there! 💻"));
    // Nothing renders after the shutdown banner
    let after = stdout.split("Monitor stopped").nth(1).unwrap();
    assert!(!after.contains("Check #"));
}
