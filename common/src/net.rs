//! # IP-to-CIDR Membership Engine
//!
//! Value types and pure functions for deciding whether an IP address
//! falls inside a CIDR subnetwork:
//! * [`AddrInt`] — an address normalized to an integer plus a family tag.
//! * [`AddrRange`] — the closed `[lower, upper]` interval of a subnetwork.
//! * [`scan::first_match`] — first-match-wins scan over a range list.
//!
//! Addresses and ranges of different families are never comparable; the
//! engine refuses the comparison instead of silently answering `false`.

pub mod addr;
pub mod range;
pub mod scan;

pub use addr::{AddrFamily, AddrInt};
pub use range::AddrRange;

use thiserror::Error;

/// Everything that can go wrong while parsing or comparing addresses.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NetError {
    /// The input is not a valid IPv4 or IPv6 literal under either
    /// family's strict grammar.
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),
    /// Missing `/` separator, unparseable prefix, or a prefix length
    /// that is not an integer within the family's bit width.
    #[error("invalid subnetwork: {0:?}")]
    InvalidSubnetwork(String),
    /// Address and subnetwork parsed fine but belong to different
    /// address families.
    #[error("incompatible address families: address is {addr}, range is {range}")]
    IncompatibleFamilies { addr: AddrFamily, range: AddrFamily },
}

/// Tests a textual address against a textual subnetwork.
///
/// Composes address parsing, subnetwork parsing and the inclusive range
/// comparison. Errors from any stage propagate untouched.
pub fn ip_in_subnetwork(address: &str, subnetwork: &str) -> Result<bool, NetError> {
    let addr: AddrInt = address.parse()?;
    let range: AddrRange = subnetwork.parse()?;
    range.contains(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_boundaries_are_inclusive() {
        assert_eq!(ip_in_subnetwork("10.0.0.0", "10.0.0.0/24"), Ok(true));
        assert_eq!(ip_in_subnetwork("10.0.0.255", "10.0.0.0/24"), Ok(true));
        assert_eq!(ip_in_subnetwork("10.0.1.0", "10.0.0.0/24"), Ok(false));
    }

    #[test]
    fn cross_family_comparison_is_refused() {
        assert_eq!(
            ip_in_subnetwork("::1", "10.0.0.0/8"),
            Err(NetError::IncompatibleFamilies {
                addr: AddrFamily::V6,
                range: AddrFamily::V4,
            })
        );
        assert_eq!(
            ip_in_subnetwork("1.2.3.4", "2606:4700::/32"),
            Err(NetError::IncompatibleFamilies {
                addr: AddrFamily::V4,
                range: AddrFamily::V6,
            })
        );
    }

    #[test]
    fn parse_failures_surface_as_typed_errors() {
        assert_eq!(
            ip_in_subnetwork("not-an-ip", "10.0.0.0/8"),
            Err(NetError::InvalidAddress("not-an-ip".into()))
        );
        assert_eq!(
            ip_in_subnetwork("10.0.0.1", "10.0.0.0"),
            Err(NetError::InvalidSubnetwork("10.0.0.0".into()))
        );
    }
}
