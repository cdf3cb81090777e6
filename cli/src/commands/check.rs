use std::path::Path;
use std::process::ExitCode;

use colored::*;

use cdnmap_common::config::Config;
use cdnmap_common::{error, info, success, warn};
use cdnmap_core::detector;
use cdnmap_core::recon::{DnsDumpster, ReconReport};

use crate::commands::load_ranges;
use crate::terminal::{print, spinner};

/// The full workflow: resolve the domain, test it against the provider
/// ranges, and (only when fronted) hunt for hosts that bypass the CDN.
pub async fn check(domain: &str, ranges_file: Option<&Path>, cfg: &Config) -> anyhow::Result<ExitCode> {
    print::header("provider detection", cfg.quiet);
    info!("Fetching initial information for {}...", domain.bold());

    let ranges = load_ranges(ranges_file, cfg).await?;
    info!("Using {} ranges from {}", ranges.len(), ranges.source);

    let pb = spinner::start(format!("Resolving {domain}..."));
    let detection = detector::detect(domain, &ranges).await;
    pb.finish_and_clear();

    let detection = match detection {
        Ok(detection) => detection,
        Err(err) => {
            error!("{err:#}");
            return Ok(ExitCode::FAILURE);
        }
    };

    info!("Server IP: {}", detection.resolved.to_string().bold());
    info!(
        "Testing if {domain} is on the {} network...",
        cfg.provider.bold()
    );

    let Some(matched) = &detection.matched else {
        error!(
            "{domain} is not part of the {} network, quitting...",
            cfg.provider
        );
        return Ok(ExitCode::FAILURE);
    };

    success!(
        "{domain} is part of the {} network! (matched {})",
        cfg.provider,
        matched.subnetwork.bold()
    );

    print::header("dns history", cfg.quiet);
    info!("Hunting for hosts that bypass the CDN using dnsdumpster...");

    let pb = spinner::start(format!("Querying DNS history for {domain}..."));
    let report = DnsDumpster::new()?.search(domain).await;
    pb.finish_and_clear();

    match report {
        Ok(report) => print_bypass_candidates(&report, cfg),
        Err(err) => warn!("DNS-history lookup failed: {err:#}"),
    }

    print::end_of_program();
    Ok(ExitCode::SUCCESS)
}

/// Prints every record whose provider text does not mention the CDN;
/// those are the hosts worth probing directly.
fn print_bypass_candidates(report: &ReconReport, cfg: &Config) {
    let mut candidates = 0;

    for (section, records) in report.sections() {
        for record in records {
            if record.mentions_provider(&cfg.provider) {
                continue;
            }
            print::found(section, record);
            candidates += 1;
        }
    }

    if candidates == 0 {
        info!(
            "No bypass candidates surfaced; every record sits on {}.",
            cfg.provider
        );
    } else {
        success!("{candidates} bypass candidates found");
    }
}
