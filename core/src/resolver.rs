//! Hostname resolution for the detection workflow.
//!
//! The membership engine only ever sees address strings; this is the one
//! place that talks DNS for the target domain itself.

use std::net::IpAddr;
use std::time::Duration;

use anyhow::Context;
use hickory_resolver::Resolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves `domain` to its first A/AAAA answer.
///
/// IPv4 answers are preferred when present, matching what a browser
/// would connect to on a dual-stacked zone.
pub async fn resolve(domain: &str) -> anyhow::Result<IpAddr> {
    let mut options = ResolverOpts::default();
    options.timeout = LOOKUP_TIMEOUT;
    options.attempts = 2;

    let resolver = Resolver::builder_with_config(
        ResolverConfig::default(),
        TokioConnectionProvider::default(),
    )
    .with_options(options)
    .build();

    let lookup = resolver
        .lookup_ip(domain)
        .await
        .with_context(|| format!("resolving {domain}"))?;

    lookup
        .iter()
        .find(IpAddr::is_ipv4)
        .or_else(|| lookup.iter().next())
        .with_context(|| format!("{domain} resolved to no addresses"))
}
