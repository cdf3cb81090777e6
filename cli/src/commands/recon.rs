use std::process::ExitCode;

use cdnmap_common::config::Config;
use cdnmap_common::{error, info};
use cdnmap_core::recon::{DnsDumpster, ReconReport};

use crate::terminal::{print, spinner};

/// Runs only the DNS-history step and prints the whole report.
pub async fn recon(domain: &str, json: bool, cfg: &Config) -> anyhow::Result<ExitCode> {
    if !json {
        print::header("dns history", cfg.quiet);
        info!("Searching DNS history for {domain}...");
    }

    let pb = spinner::start(format!("Querying DNS history for {domain}..."));
    let result = DnsDumpster::new()?.search(domain).await;
    pb.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            error!("DNS-history lookup failed: {err:#}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    print_report(&report, cfg);
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &ReconReport, cfg: &Config) {
    if report.is_empty() {
        info!("The history service returned no records for {}", report.domain);
        return;
    }

    for (section, records) in report.sections() {
        for record in records {
            print::found(section, record);
        }
    }

    for txt in &report.txt {
        print::found_txt(txt);
    }

    let on_provider = report
        .sections()
        .iter()
        .flat_map(|(_, records)| records.iter())
        .filter(|record| record.mentions_provider(&cfg.provider))
        .count();
    info!(
        "{} records total, {on_provider} on {}",
        report.host.len() + report.dns.len() + report.mx.len(),
        cfg.provider
    );
}
