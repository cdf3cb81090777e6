//! CIDR subnetwork parsing and the range comparison itself.

use std::str::FromStr;

use super::addr::{AddrFamily, AddrInt};
use super::NetError;

/// The closed interval `[lower, upper]` described by a CIDR expression,
/// tagged with the family of its prefix.
///
/// Construction normalizes host bits away: `10.0.0.5/24` produces the
/// same range as `10.0.0.0/24`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrRange {
    lower: u128,
    upper: u128,
    family: AddrFamily,
}

impl AddrRange {
    pub fn lower(&self) -> u128 {
        self.lower
    }

    pub fn upper(&self) -> u128 {
        self.upper
    }

    pub fn family(&self) -> AddrFamily {
        self.family
    }

    /// Inclusive membership test.
    ///
    /// Refuses to compare across address families — an IPv4 address can
    /// never match an IPv6 range and vice versa, and pretending the
    /// answer is `false` would hide caller bugs.
    pub fn contains(&self, addr: AddrInt) -> Result<bool, NetError> {
        if addr.family != self.family {
            return Err(NetError::IncompatibleFamilies {
                addr: addr.family,
                range: self.family,
            });
        }
        Ok(self.lower <= addr.value && addr.value <= self.upper)
    }
}

impl FromStr for AddrRange {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NetError::InvalidSubnetwork(s.to_string());

        let (prefix, length) = s.split_once('/').ok_or_else(invalid)?;
        let prefix: AddrInt = prefix.parse().map_err(|_| invalid())?;
        let length: u32 = length.parse().map_err(|_| invalid())?;

        let bits = prefix.family.bits();
        if length > bits {
            return Err(invalid());
        }

        // Mask with the low (bits - length) host bits set. The shift is
        // computed from 128 so a /0 over either family stays in range.
        let host_bits = bits - length;
        let suffix_mask = if host_bits == 0 {
            0
        } else {
            u128::MAX >> (128 - host_bits)
        };

        let lower = prefix.value & !suffix_mask;
        Ok(Self {
            lower,
            upper: lower + suffix_mask,
            family: prefix.family,
        })
    }
}
