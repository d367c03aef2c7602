//! Hilal CLI Binary
//!
//! Evaluates a serialized observation bundle and prints the verdict, the
//! derived diagnostics, and the full explanation. The observables file is a
//! TOML rendering of [`hilal::models::ObservationBundle`], typically produced
//! by an events-provider integration or written by hand for audit.
//!
//! # Usage
//!
//! ```bash
//! # Plain-text report
//! cargo run --bin hilal-cli --features cli -- observables.toml
//!
//! # Machine-readable JSON report
//! cargo run --bin hilal-cli --features cli -- observables.toml --json
//! ```
//!
//! # Environment Variables
//!
//! - `HILAL_CONFIG`: Path to an engine configuration file (default: search
//!   for `hilal.toml` in standard locations, falling back to the published
//!   criterion defaults)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::fs;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hilal::config::EngineConfig;
use hilal::models::{ObservationBundle, VisibilityAssessment};
use hilal::services::{evaluate, explain};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    let path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .context("usage: hilal-cli <observables.toml> [--json]")?;

    let config = match env::var("HILAL_CONFIG") {
        Ok(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        Err(_) => EngineConfig::from_default_location().unwrap_or_default(),
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read observables file {}", path))?;
    let bundle: ObservationBundle =
        toml::from_str(&content).context("failed to parse observables file")?;

    info!("evaluating observables from {}", path);

    let verdict = evaluate(&bundle, &config);
    let assessment = VisibilityAssessment::Evaluated(verdict);
    let report = explain(&assessment);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(verdict) = assessment.verdict() {
        println!(
            "Crescent visible: {}",
            if verdict.visible { "yes" } else { "no" }
        );
        if let Some(sunset) = report.sunset_utc {
            println!("Sunset (UTC): {}", sunset.format("%Y-%m-%d %H:%M:%S"));
        }
        println!("Crescent width: {:.2} km", verdict.crescent_width_km);
        match verdict.q_factor {
            Some(q) => println!("Yallop q-factor: {:.4}", q),
            None => println!("Yallop q-factor: not computed (basic requirements failed)"),
        }
        println!("Danjon limit: {:.2}°", verdict.min_elongation_deg);
        match verdict.extinction_factor {
            Some(x) => println!("Extinction factor: {:.2}", x),
            None => println!("Extinction factor: undefined (moon at or below -2°)"),
        }
        println!();
    }
    println!("{}", report);

    Ok(())
}
