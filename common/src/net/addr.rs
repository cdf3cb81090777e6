//! Dual-stack address parsing.
//!
//! Converts a textual IPv4 or IPv6 literal into its integer form, tagged
//! with the family that parsed it. The family attempt order is fixed:
//! IPv4 first, then IPv6. Both are strict syntax parsers — no hostname
//! resolution, no octal octets, no partial addresses.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::NetError;

/// The addressing scheme an [`AddrInt`] or
/// [`AddrRange`](super::AddrRange) belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddrFamily {
    V4,
    V6,
}

impl AddrFamily {
    /// Bit width of addresses in this family.
    pub const fn bits(self) -> u32 {
        match self {
            AddrFamily::V4 => 32,
            AddrFamily::V6 => 128,
        }
    }
}

impl fmt::Display for AddrFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrFamily::V4 => write!(f, "IPv4"),
            AddrFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// An IP address normalized to an unsigned integer.
///
/// IPv4 values occupy the low 32 bits; IPv6 values use the full width.
/// Two `AddrInt`s are only meaningfully comparable when their family
/// tags match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrInt {
    pub value: u128,
    pub family: AddrFamily,
}

impl From<Ipv4Addr> for AddrInt {
    fn from(addr: Ipv4Addr) -> Self {
        Self {
            value: u32::from(addr) as u128,
            family: AddrFamily::V4,
        }
    }
}

impl From<Ipv6Addr> for AddrInt {
    fn from(addr: Ipv6Addr) -> Self {
        Self {
            value: u128::from(addr),
            family: AddrFamily::V6,
        }
    }
}

impl FromStr for AddrInt {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v4) = Ipv4Addr::from_str(s) {
            return Ok(v4.into());
        }
        if let Ok(v6) = Ipv6Addr::from_str(s) {
            return Ok(v6.into());
        }
        Err(NetError::InvalidAddress(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_quads_are_tagged_v4() {
        let addr: AddrInt = "10.0.0.5".parse().unwrap();
        assert_eq!(addr.family, AddrFamily::V4);
        assert_eq!(addr.value, (10 << 24) + 5);

        let zero: AddrInt = "0.0.0.0".parse().unwrap();
        assert_eq!(zero.value, 0);

        let max: AddrInt = "255.255.255.255".parse().unwrap();
        assert_eq!(max.value, u32::MAX as u128);
    }

    #[test]
    fn ipv6_literals_are_tagged_v6() {
        let loopback: AddrInt = "::1".parse().unwrap();
        assert_eq!(loopback.family, AddrFamily::V6);
        assert_eq!(loopback.value, 1);

        let cf: AddrInt = "2606:4700::".parse().unwrap();
        assert_eq!(cf.family, AddrFamily::V6);
        assert_eq!(cf.value, 0x2606_4700_u128 << 96);

        let max: AddrInt = "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff".parse().unwrap();
        assert_eq!(max.value, u128::MAX);
    }

    #[test]
    fn mapped_ipv4_stays_in_the_v6_family() {
        // "::ffff:1.2.3.4" is IPv6 syntax; no implicit mapping to V4.
        let mapped: AddrInt = "::ffff:1.2.3.4".parse().unwrap();
        assert_eq!(mapped.family, AddrFamily::V6);
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["", "999.1.1.1", "not-an-ip", "10.0.0", "1.2.3.4.5", "0x0a000001"] {
            assert_eq!(
                bad.parse::<AddrInt>(),
                Err(NetError::InvalidAddress(bad.to_string())),
                "expected {bad:?} to be rejected",
            );
        }
    }
}
