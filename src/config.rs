use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_target() -> String {
    "8.8.8.8".to_string()
}

fn default_timeout_secs() -> u64 {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    #[serde(default = "default_interval_secs")]
    pub default_interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub probe: ProbeConfig,
    pub monitor: MonitorConfig,
}

impl AppConfig {
    pub fn load_default() -> anyhow::Result<Self> {
        let default = include_str!("../config/default.toml");
        let cfg: AppConfig = toml::from_str(default)?;
        Ok(cfg)
    }

    pub fn load_from(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let p = path.into();
        let s = fs::read_to_string(&p)?;
        let cfg: AppConfig = toml::from_str(&s)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_default_config() {
        let cfg = AppConfig::load_default().unwrap();
        assert_eq!(cfg.probe.target, "8.8.8.8");
        assert_eq!(cfg.probe.timeout_secs, 2);
        assert_eq!(cfg.monitor.default_interval_secs, 5);
    }

    #[test]
    fn test_load_from_file_with_overrides() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            "[probe]\ntarget = \"1.1.1.1\"\n\n[monitor]\ndefault_interval_secs = 30"
        )
        .unwrap();
        let cfg = AppConfig::load_from(f.path()).unwrap();
        assert_eq!(cfg.probe.target, "1.1.1.1");
        // Unset field falls back to the serde default
        assert_eq!(cfg.probe.timeout_secs, 2);
        assert_eq!(cfg.monitor.default_interval_secs, 30);
    }
}
