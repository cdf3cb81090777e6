use std::path::Path;
use std::process::ExitCode;

use colored::*;

use cdnmap_common::config::Config;
use cdnmap_common::info;

use crate::commands::load_ranges;
use crate::terminal::{colors, print};

/// Prints the effective range list with its provenance.
pub async fn ranges(file: Option<&Path>, json: bool, cfg: &Config) -> anyhow::Result<ExitCode> {
    let list = load_ranges(file, cfg).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(ExitCode::SUCCESS);
    }

    print::header("provider ranges", cfg.quiet);
    info!("{} ranges from {}", list.len(), list.source);
    for entry in &list.entries {
        print::print(&format!("  {}", entry.color(colors::ACCENT)));
    }

    Ok(ExitCode::SUCCESS)
}
