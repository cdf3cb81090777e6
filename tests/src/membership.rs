//! Workflow-level tests: range list sourcing composed with the
//! membership scan, the way the `check` command drives them.

use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use cdnmap_common::net::{self, AddrFamily, NetError};
use cdnmap_core::detector;
use cdnmap_core::ranges::{RangeList, RangeSource};

/// Writes a throwaway range list file and returns its path.
fn write_list(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cdnmap-test-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("writing test range list");
    path
}

#[test]
fn file_backed_scan_skips_malformed_lines_and_matches_first() {
    let path = write_list("mixed", "bad-entry\n10.0.0.0/24\n10.0.0.0/8\n");
    let list = RangeList::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(list.source, RangeSource::File(path));
    // "bad-entry" survives loading; the scan is what skips it.
    assert_eq!(list.len(), 3);
    assert_eq!(
        net::scan::first_match("10.0.0.5", &list.entries),
        Ok(Some(1))
    );
}

#[test]
fn file_backed_scan_reports_non_membership() {
    let path = write_list("miss", "# edge ranges\n192.0.2.0/24\n\n198.51.100.0/24\n");
    let list = RangeList::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    // Comments and blanks are gone after loading.
    assert_eq!(list.len(), 2);
    assert_eq!(net::scan::is_member("10.0.0.5", &list.entries), Ok(false));
}

#[test]
fn detection_against_the_builtin_list_matches_known_edges() {
    let list = RangeList::builtin();

    let v4 = IpAddr::V4(Ipv4Addr::new(104, 16, 1, 1));
    let detection = detector::detect_address("example.com", v4, &list).unwrap();
    assert!(detection.fronted());

    let v6: IpAddr = "2400:cb00::1".parse().unwrap();
    let detection = detector::detect_address("example.com", v6, &list).unwrap();
    assert!(detection.fronted());

    let outside = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 9));
    let detection = detector::detect_address("example.com", outside, &list).unwrap();
    assert!(!detection.fronted());
}

#[test]
fn cross_family_refusal_is_typed_not_silent() {
    // The single-pair entry point refuses; the list scan treats the
    // mismatched entry as non-matching so mixed lists keep working.
    assert_eq!(
        net::ip_in_subnetwork("::1", "10.0.0.0/8"),
        Err(NetError::IncompatibleFamilies {
            addr: AddrFamily::V6,
            range: AddrFamily::V4,
        })
    );
    assert_eq!(net::scan::is_member("::1", ["10.0.0.0/8"]), Ok(false));
}

#[test]
fn target_parse_failure_aborts_even_with_a_valid_list() {
    let list = RangeList::builtin();
    assert!(matches!(
        net::scan::first_match("999.1.1.1", &list.entries),
        Err(NetError::InvalidAddress(_))
    ));
}
