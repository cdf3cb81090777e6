//! Provider CIDR range list sourcing.
//!
//! Three sources, in the order the driver prefers them:
//! 1. a flat file supplied on the command line,
//! 2. the provider's published endpoints, fetched live,
//! 3. the compiled-in snapshot, as a fallback when fetching fails or the
//!    run is offline.
//!
//! Lists are kept as ordered strings; validation happens in the
//! membership scan, which skips malformed entries per line.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

pub const PUBLISHED_V4_URL: &str = "https://www.cloudflare.com/ips-v4";
pub const PUBLISHED_V6_URL: &str = "https://www.cloudflare.com/ips-v6";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Cloudflare's announced ranges as of the last snapshot. Used whenever
/// the published endpoints are unreachable or fetching is disabled.
const BUILTIN_RANGES: &[&str] = &[
    "173.245.48.0/20",
    "103.21.244.0/22",
    "103.22.200.0/22",
    "103.31.4.0/22",
    "141.101.64.0/18",
    "108.162.192.0/18",
    "190.93.240.0/20",
    "188.114.96.0/20",
    "197.234.240.0/22",
    "198.41.128.0/17",
    "162.158.0.0/15",
    "104.16.0.0/13",
    "104.24.0.0/14",
    "172.64.0.0/13",
    "131.0.72.0/22",
    "2400:cb00::/32",
    "2606:4700::/32",
    "2803:f800::/32",
    "2405:b500::/32",
    "2405:8100::/32",
    "2a06:98c0::/29",
    "2c0f:f248::/32",
];

/// Where a [`RangeList`] came from, for status output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSource {
    Builtin,
    File(PathBuf),
    Published,
}

impl std::fmt::Display for RangeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeSource::Builtin => write!(f, "compiled-in snapshot"),
            RangeSource::File(path) => write!(f, "file {}", path.display()),
            RangeSource::Published => write!(f, "published endpoints"),
        }
    }
}

/// An ordered provider range list plus its provenance.
#[derive(Clone, Debug, Serialize)]
pub struct RangeList {
    pub entries: Vec<String>,
    pub source: RangeSource,
}

impl RangeList {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_RANGES.iter().map(|s| s.to_string()).collect(),
            source: RangeSource::Builtin,
        }
    }

    /// Reads a newline-delimited CIDR list. Blank lines and `#` comments
    /// are dropped here; anything else is kept verbatim for the scan to
    /// judge.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading range list {}", path.display()))?;
        Ok(Self {
            entries: collect_lines(&contents),
            source: RangeSource::File(path.to_path_buf()),
        })
    }

    /// Fetches the provider's published IPv4 and IPv6 lists.
    pub async fn fetch_published() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("building HTTP client")?;

        let mut entries = Vec::new();
        for url in [PUBLISHED_V4_URL, PUBLISHED_V6_URL] {
            let body = client
                .get(url)
                .send()
                .await
                .and_then(|resp| resp.error_for_status())
                .with_context(|| format!("fetching {url}"))?
                .text()
                .await
                .with_context(|| format!("reading body of {url}"))?;
            entries.extend(collect_lines(&body));
        }

        debug!("fetched {} published ranges", entries.len());
        Ok(Self {
            entries,
            source: RangeSource::Published,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn collect_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
