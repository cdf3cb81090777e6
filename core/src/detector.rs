//! The provider-detection workflow: resolve, then scan the range list.

use std::net::IpAddr;

use serde::Serialize;
use tracing::debug;

use crate::ranges::RangeList;
use crate::resolver;

/// Outcome of one detection run.
#[derive(Clone, Debug, Serialize)]
pub struct Detection {
    pub domain: String,
    pub resolved: IpAddr,
    /// Set when the resolved address fell inside a listed range.
    pub matched: Option<MatchedRange>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MatchedRange {
    pub index: usize,
    pub subnetwork: String,
}

impl Detection {
    /// Is the origin fronted by the provider?
    pub fn fronted(&self) -> bool {
        self.matched.is_some()
    }
}

/// Resolves `domain` and tests the address against `ranges`.
///
/// Resolution failure propagates; the caller terminates the workflow
/// early since no comparison is possible without an address.
pub async fn detect(domain: &str, ranges: &RangeList) -> anyhow::Result<Detection> {
    let resolved = resolver::resolve(domain).await?;
    Ok(detect_address(domain, resolved, ranges)?)
}

/// The resolution-free half of [`detect`], for callers that already
/// hold an address.
pub fn detect_address(
    domain: &str,
    resolved: IpAddr,
    ranges: &RangeList,
) -> Result<Detection, cdnmap_common::net::NetError> {
    let hit = cdnmap_common::net::scan::first_match(&resolved.to_string(), &ranges.entries)?;
    let matched = hit.map(|index| MatchedRange {
        index,
        subnetwork: ranges.entries[index].clone(),
    });

    match &matched {
        Some(m) => debug!("{resolved} matched {} (entry {})", m.subnetwork, m.index),
        None => debug!("{resolved} matched none of {} ranges", ranges.len()),
    }

    Ok(Detection {
        domain: domain.to_string(),
        resolved,
        matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn cf_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(104, 16, 1, 1))
    }

    #[test]
    fn builtin_ranges_front_a_known_edge_address() {
        let detection = detect_address("example.com", cf_ip(), &RangeList::builtin()).unwrap();
        assert!(detection.fronted());
        let matched = detection.matched.unwrap();
        assert_eq!(matched.subnetwork, "104.16.0.0/13");
    }

    #[test]
    fn unlisted_addresses_are_not_fronted() {
        let ip = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 7));
        let detection = detect_address("example.com", ip, &RangeList::builtin()).unwrap();
        assert!(!detection.fronted());
        assert!(detection.matched.is_none());
    }

    #[test]
    fn ipv6_edges_match_too() {
        let ip: IpAddr = "2606:4700::6810:85e5".parse().unwrap();
        let detection = detect_address("example.com", ip, &RangeList::builtin()).unwrap();
        assert!(detection.fronted());
        assert_eq!(detection.matched.unwrap().subnetwork, "2606:4700::/32");
    }
}
