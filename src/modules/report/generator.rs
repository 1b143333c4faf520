// src/modules/report/generator.rs

use crate::common::env::CONFIG;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use sysinfo::System;

static STARTED_AT: OnceLock<DateTime<Utc>> = OnceLock::new();

// Stamped once from bootstrap so the report can state process uptime.
pub fn mark_start() {
    let _ = STARTED_AT.set(Utc::now());
}

// The single capability behind the report endpoint. Handlers only ever
// see this trait, so gating logic tests against a stub.
pub trait ReportGenerator: Send + Sync {
    fn generate(&self) -> Value;
}

// Full dump of the running process's configuration: versions, build
// facts, process and host state, active directives, environment table.
// No filtering and no redaction.
pub struct RuntimeReport;

impl ReportGenerator for RuntimeReport {
    fn generate(&self) -> Value {
        let sys = System::new_all();
        let cpu_brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_else(|| "Unknown CPU".to_string());

        let started = STARTED_AT.get().copied().unwrap_or_else(Utc::now);
        let uptime_secs = (Utc::now() - started).num_seconds().max(0) as u64;

        // Sorted so the dump reads the same way every time.
        let environment: BTreeMap<String, String> = std::env::vars().collect();

        json!({
            "server": {
                "name": "Loupe",
                "version": env!("CARGO_PKG_VERSION"),
                "stage": CONFIG.app_env.clone(),
            },
            "build": {
                "rustc": env!("LOUPE_RUSTC_VERSION"),
                "commit": env!("LOUPE_RUSTC_COMMIT"),
                "host": env!("LOUPE_RUSTC_HOST"),
                "target": env!("LOUPE_TARGET"),
                "profile": env!("LOUPE_PROFILE"),
                "opt_level": env!("LOUPE_OPT_LEVEL"),
            },
            "process": {
                "pid": std::process::id(),
                "started_at": started.to_rfc3339(),
                "uptime": format_uptime_short(uptime_secs),
                "parallelism": std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1),
            },
            "system": {
                "hostname": System::host_name().unwrap_or_else(|| "Unknown".to_string()),
                "os": System::long_os_version().unwrap_or_else(|| "Unknown".to_string()),
                "kernel": System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
                "arch": System::cpu_arch().unwrap_or_else(|| "Unknown".to_string()),
                "cpu": {
                    "brand": cpu_brand,
                    "cores": sys.cpus().len(),
                },
                "memory": {
                    "total_bytes": sys.total_memory(),
                    "used_bytes": sys.used_memory(),
                },
            },
            "config": {
                "app_env": CONFIG.app_env.clone(),
                "log_level": CONFIG.log_level.clone(),
            },
            "environment": environment,
        })
    }
}

fn format_uptime_short(uptime_secs: u64) -> String {
    let days = uptime_secs / 86_400;
    let hours = (uptime_secs % 86_400) / 3_600;
    let minutes = (uptime_secs % 3_600) / 60;
    let seconds = uptime_secs % 60;

    let mut parts = vec![];
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds));

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_carries_core_sections() {
        let report = RuntimeReport.generate();

        assert_eq!(report["server"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(!report["build"]["rustc"].as_str().unwrap().is_empty());
        assert!(report["process"]["pid"].as_u64().unwrap() > 0);
        assert!(report["environment"].is_object());
        assert!(report["config"]["log_level"].is_string());
    }

    #[test]
    fn uptime_formats_compactly() {
        assert_eq!(format_uptime_short(0), "0s");
        assert_eq!(format_uptime_short(5), "5s");
        assert_eq!(format_uptime_short(61), "1m 1s");
        assert_eq!(format_uptime_short(3 * 3_600 + 25 * 60 + 1), "3h 25m 1s");
        assert_eq!(format_uptime_short(2 * 86_400 + 30), "2d 30s");
    }
}
