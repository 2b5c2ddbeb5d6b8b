//! Performance Engine Binary
//!
//! Reads a JSON report request and prints the performance report as JSON.
//!
//! # Usage
//!
//! ```bash
//! performance-engine request.json
//! performance-engine - < request.json
//! ```
//!
//! # Environment Variables
//!
//! - `PERF_ENGINE_CONFIG`: Config file path (default: config.yaml, optional)
//! - `RUST_LOG`: Log filter (default: `observability.logging.level`)

use std::io::Read;

use anyhow::{Context, Result, anyhow};
use performance_engine::config::load_config_from_env;
use performance_engine::metrics::format_ratio;
use performance_engine::telemetry::init_telemetry;
use performance_engine::{EngineSettings, ReportRequest, build_report};
use tracing::info;

fn read_request(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).with_context(|| format!("Failed to read request '{source}'"))
}

fn main() -> Result<()> {
    let config = load_config_from_env().context("Failed to load configuration")?;
    init_telemetry(&config.observability.logging)
        .map_err(|e| anyhow!(e))
        .context("Failed to initialize logging")?;

    let source = std::env::args()
        .nth(1)
        .context("Usage: performance-engine <request.json | ->")?;

    info!(source = %source, "Building performance report");

    let raw = read_request(&source)?;
    let request: ReportRequest =
        serde_json::from_str(&raw).context("Failed to parse report request")?;

    let settings = EngineSettings::from(&config);
    let report = build_report(&request, &settings).context("Invalid report request")?;

    info!(
        method = %report.sharpe.method,
        sharpe = %format_ratio(report.sharpe.sharpe_ratio),
        consistency_passed = report.consistency.as_ref().map(|c| c.passed),
        "Report ready"
    );

    let output = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{output}");

    Ok(())
}
