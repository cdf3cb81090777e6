mod commands;
mod terminal;

use std::process::ExitCode;

use cdnmap_common::config::Config;
use commands::{CommandLine, Commands, check, ranges, recon};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        offline: commands.offline,
        provider: commands.provider.clone(),
    };

    print::banner(&cfg);

    match commands.command {
        Commands::Check { domain } => {
            check::check(&domain, commands.ranges_file.as_deref(), &cfg).await
        }
        Commands::Recon { domain, json } => recon::recon(&domain, json, &cfg).await,
        Commands::Ranges { json } => {
            ranges::ranges(commands.ranges_file.as_deref(), json, &cfg).await
        }
    }
}
