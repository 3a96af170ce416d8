use std::{fs, path::Path, time::Duration};

use reservation_core::{calendar::DEFAULT_BOOKING_HORIZON_DAYS, SimulatedSubmitter};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "reserve.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub submit_delay_ms: u64,
    pub booking_horizon_days: u32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submit_delay_ms: SimulatedSubmitter::DEFAULT_DELAY.as_millis() as u64,
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    submit_delay_ms: Option<u64>,
    booking_horizon_days: Option<u32>,
    log_filter: Option<String>,
}

pub fn load_settings() -> Settings {
    load_settings_with(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then environment overrides.
pub fn load_settings_with(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.submit_delay_ms {
                settings.submit_delay_ms = v;
            }
            if let Some(v) = file_cfg.booking_horizon_days {
                settings.booking_horizon_days = v;
            }
            if let Some(v) = file_cfg.log_filter {
                settings.log_filter = v;
            }
        }
    }

    for key in ["RESERVE_SUBMIT_DELAY_MS", "APP__SUBMIT_DELAY_MS"] {
        if let Some(parsed) = env(key).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.submit_delay_ms = parsed;
        }
    }

    if let Some(parsed) =
        env("APP__BOOKING_HORIZON_DAYS").and_then(|v| v.trim().parse::<u32>().ok())
    {
        settings.booking_horizon_days = parsed;
    }

    for key in ["RUST_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = env(key).filter(|v| !v.trim().is_empty()) {
            settings.log_filter = v;
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
