//! Sequential membership scan over an ordered CIDR list.
//!
//! Provider range lists come from third parties, so individual lines are
//! allowed to be malformed; a bad line is skipped, never fatal. The
//! target address itself must parse, or the whole scan is meaningless.

use tracing::trace;

use super::addr::AddrInt;
use super::range::AddrRange;
use super::NetError;

/// Scans `lines` in order and returns the index of the first subnetwork
/// containing `address`, or `None` when the list is exhausted.
///
/// Per-line behavior:
/// * blank lines and surrounding whitespace are tolerated,
/// * lines that fail to parse as a subnetwork are skipped,
/// * lines of the other address family are treated as non-matching
///   (provider lists mix IPv4 and IPv6 ranges).
///
/// An unparseable `address` aborts with [`NetError::InvalidAddress`].
pub fn first_match<I, S>(address: &str, lines: I) -> Result<Option<usize>, NetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let addr: AddrInt = address.trim().parse()?;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let range: AddrRange = match line.parse() {
            Ok(range) => range,
            Err(err) => {
                trace!("skipping unparseable range list entry {index}: {err}");
                continue;
            }
        };

        match range.contains(addr) {
            Ok(true) => return Ok(Some(index)),
            Ok(false) => {}
            Err(NetError::IncompatibleFamilies { .. }) => {}
            Err(err) => return Err(err),
        }
    }

    Ok(None)
}

/// Boolean wrapper over [`first_match`]: does `address` belong to at
/// least one listed range?
pub fn is_member<I, S>(address: &str, lines: I) -> Result<bool, NetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    first_match(address, lines).map(|hit| hit.is_some())
}
