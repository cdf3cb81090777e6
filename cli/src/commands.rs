pub mod check;
pub mod ranges;
pub mod recon;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use cdnmap_common::config::Config;
use cdnmap_common::warn;
use cdnmap_core::ranges::RangeList;

#[derive(Parser)]
#[command(name = "cdnmap", version)]
#[command(about = "Detects whether a domain's origin hides behind a CDN.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Use a local CIDR list file instead of the published one
    #[arg(long, global = true, value_name = "PATH")]
    pub ranges_file: Option<PathBuf>,

    /// Marker looked for in DNS-history provider strings
    #[arg(long, global = true, default_value = "cloudflare")]
    pub provider: String,

    /// Never fetch the published range list
    #[arg(long, global = true)]
    pub offline: bool,

    /// Trim decorative output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a domain is fronted by the CDN, then hunt for bypass hosts
    #[command(alias = "c")]
    Check { domain: String },
    /// Run only the DNS-history reconnaissance step
    #[command(alias = "r")]
    Recon {
        domain: String,
        /// Emit the raw report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the provider range list in effect
    Ranges {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Resolves the effective range list: explicit file, else the published
/// endpoints, else the compiled-in snapshot.
pub(crate) async fn load_ranges(file: Option<&Path>, cfg: &Config) -> anyhow::Result<RangeList> {
    if let Some(path) = file {
        return RangeList::from_file(path);
    }
    if cfg.offline {
        return Ok(RangeList::builtin());
    }
    match RangeList::fetch_published().await {
        Ok(list) => Ok(list),
        Err(err) => {
            warn!("Falling back to the compiled-in range list: {err:#}");
            Ok(RangeList::builtin())
        }
    }
}
