//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `tenant_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use tenant_lookup::initialization::init_logger_with;
use tenant_lookup::{run_search, Config, LookupResult, OutputFormat, SearchReport};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output.clone();
    match run_search(config).await {
        Ok(report) => {
            if report.total == 0 {
                eprintln!("No syntactically valid domains in input");
                process::exit(1);
            }
            print_report(&report, &output)?;
            Ok(())
        }
        Err(e) => {
            eprintln!("tenant_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}

fn print_report(report: &SearchReport, output: &OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report.results)
                    .context("Failed to serialize results")?
            );
        }
        OutputFormat::Table => {
            for result in &report.results {
                print_result(result);
            }
            println!(
                "\n✅ Searched {} domain{} ({} tenant{} found, {} without a tenant, {} failed) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.found,
                if report.found == 1 { "" } else { "s" },
                report.no_tenant,
                report.failed,
                report.elapsed_seconds
            );
        }
    }
    Ok(())
}

fn print_result(result: &LookupResult) {
    match (&result.tenant_info, &result.error) {
        (Some(info), _) => {
            println!(
                "✅ {}  {}  ({}, {})",
                result.domain.bold(),
                info.tenant_id.green(),
                info.tenant_type,
                info.region
            );
            if let Some(brand) = &info.federation_brand {
                println!("   Brand: {brand}");
            }
            if !info.mx_records.is_empty() {
                let hosts: Vec<String> = info
                    .mx_records
                    .iter()
                    .map(|mx| format!("{} ({})", mx.host, mx.preference))
                    .collect();
                println!("   MX: {}", hosts.join(", "));
                if info.has_microsoft_mx {
                    println!("   Mail is routed through Microsoft");
                }
            }
            if let Some(spf) = &info.spf_record {
                println!("   SPF: {}", spf.record);
            }
        }
        (None, Some(error)) => {
            println!("❌ {}  {}", result.domain.bold(), error.red());
        }
        (None, None) => {
            println!("➖ {}  no Microsoft tenant", result.domain.bold());
        }
    }
}
