//! Tests for record aggregation.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use crate::net::{AddressEnumerator, AddressKind, AddressRecord, EnumerateError};

use super::{InclusionPolicy, remote_candidates, summarize};

// ============================================================================
// Test Fixtures
// ============================================================================

/// An enumerator that replays a scripted record stream and counts how many
/// times the stream's backing "resource" is released.
struct ScriptedEnumerator {
    records: RefCell<Option<Vec<Result<AddressRecord, EnumerateError>>>>,
    releases: Rc<Cell<usize>>,
}

impl ScriptedEnumerator {
    fn new(records: Vec<Result<AddressRecord, EnumerateError>>) -> Self {
        Self {
            records: RefCell::new(Some(records)),
            releases: Rc::new(Cell::new(0)),
        }
    }

    fn release_count(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.releases)
    }
}

impl AddressEnumerator for ScriptedEnumerator {
    type Records = ScriptedRecords;

    fn enumerate(&self) -> Result<ScriptedRecords, EnumerateError> {
        let records = self
            .records
            .borrow_mut()
            .take()
            .expect("scripted stream consumed twice");

        Ok(ScriptedRecords {
            records: records.into_iter(),
            releases: Rc::clone(&self.releases),
        })
    }
}

struct ScriptedRecords {
    records: std::vec::IntoIter<Result<AddressRecord, EnumerateError>>,
    releases: Rc<Cell<usize>>,
}

impl Iterator for ScriptedRecords {
    type Item = Result<AddressRecord, EnumerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }
}

impl Drop for ScriptedRecords {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

/// An enumerator whose OS query itself fails.
struct FailingEnumerator;

impl AddressEnumerator for FailingEnumerator {
    type Records = std::iter::Empty<Result<AddressRecord, EnumerateError>>;

    fn enumerate(&self) -> Result<Self::Records, EnumerateError> {
        Err(EnumerateError::Enumeration {
            source: io::Error::other("getifaddrs failed"),
        })
    }
}

fn v6(interface: &str, up: bool, address: &str) -> Result<AddressRecord, EnumerateError> {
    Ok(AddressRecord::new(
        interface,
        up,
        AddressKind::V6(address.parse().unwrap()),
    ))
}

fn v4(interface: &str, up: bool, address: &str) -> Result<AddressRecord, EnumerateError> {
    Ok(AddressRecord::new(
        interface,
        up,
        AddressKind::V4(address.parse().unwrap()),
    ))
}

fn link(interface: &str, up: bool) -> Result<AddressRecord, EnumerateError> {
    Ok(AddressRecord::new(interface, up, AddressKind::Other(18)))
}

fn decode_failure(interface: &str) -> Result<AddressRecord, EnumerateError> {
    Err(EnumerateError::AddressDecode {
        interface: interface.to_string(),
        raw: vec![0xff, 0xfe],
    })
}

// ============================================================================
// Aggregation
// ============================================================================

mod aggregation {
    use super::*;

    #[test]
    fn reference_scenario_builds_expected_summary() {
        let enumerator = ScriptedEnumerator::new(vec![
            v6("en0", true, "fe80::1"),
            v4("en0", true, "192.168.1.5"),
            v6("en5", true, "fe80::2"),
        ]);

        let summary = summarize(&enumerator, &InclusionPolicy::default()).unwrap();

        assert_eq!(summary.len(), 2);

        let en0 = &summary["en0"];
        assert_eq!(
            en0.ipv6_addresses,
            vec!["fe80::1".parse::<std::net::Ipv6Addr>().unwrap()]
        );
        assert!(en0.has_ipv4);

        let en5 = &summary["en5"];
        assert_eq!(
            en5.ipv6_addresses,
            vec!["fe80::2".parse::<std::net::Ipv6Addr>().unwrap()]
        );
        assert!(!en5.has_ipv4);

        assert_eq!(remote_candidates(&summary), vec!["en5"]);
    }

    #[test]
    fn v4_before_v6_creates_entry_then_accumulates() {
        let enumerator = ScriptedEnumerator::new(vec![
            v4("en1", true, "10.0.0.2"),
            v6("en1", true, "fe80::3"),
        ]);

        let summary = summarize(&enumerator, &InclusionPolicy::default()).unwrap();

        let en1 = &summary["en1"];
        assert!(en1.has_ipv4);
        assert_eq!(en1.ipv6_addresses.len(), 1);
    }

    #[test]
    fn duplicate_v6_addresses_are_preserved_in_order() {
        let enumerator = ScriptedEnumerator::new(vec![
            v6("en2", true, "fe80::a"),
            v6("en2", true, "fd00::b"),
            v6("en2", true, "fe80::a"),
        ]);

        let summary = summarize(&enumerator, &InclusionPolicy::default()).unwrap();

        let expected: Vec<std::net::Ipv6Addr> = vec![
            "fe80::a".parse().unwrap(),
            "fd00::b".parse().unwrap(),
            "fe80::a".parse().unwrap(),
        ];
        assert_eq!(summary["en2"].ipv6_addresses, expected);
    }

    #[test]
    fn summary_preserves_first_seen_interface_order() {
        let enumerator = ScriptedEnumerator::new(vec![
            v6("en3", true, "fe80::1"),
            v6("en1", true, "fe80::2"),
            v4("en3", true, "10.0.0.3"),
            v6("en2", true, "fe80::3"),
        ]);

        let summary = summarize(&enumerator, &InclusionPolicy::default()).unwrap();

        let order: Vec<_> = summary.keys().map(String::as_str).collect();
        assert_eq!(order, ["en3", "en1", "en2"]);
    }

    #[test]
    fn other_families_are_ignored_without_error() {
        let enumerator = ScriptedEnumerator::new(vec![
            link("en0", true),
            v6("en0", true, "fe80::1"),
            link("en4", true),
        ]);

        let summary = summarize(&enumerator, &InclusionPolicy::default()).unwrap();

        // A link-layer-only interface never gets an entry
        assert_eq!(summary.len(), 1);
        assert!(summary.contains_key("en0"));
    }

    #[test]
    fn empty_stream_yields_empty_summary() {
        let enumerator = ScriptedEnumerator::new(vec![]);
        let summary = summarize(&enumerator, &InclusionPolicy::default()).unwrap();
        assert!(summary.is_empty());
    }
}

// ============================================================================
// Inclusion policy
// ============================================================================

mod inclusion {
    use super::*;

    #[test]
    fn down_interface_is_absent_from_summary() {
        let enumerator = ScriptedEnumerator::new(vec![
            v6("en1", false, "fe80::1"),
            v6("en0", true, "fe80::2"),
        ]);

        let summary = summarize(&enumerator, &InclusionPolicy::default()).unwrap();

        assert!(!summary.contains_key("en1"));
        assert!(summary.contains_key("en0"));
    }

    #[test]
    fn unprefixed_interface_is_absent_from_summary() {
        let enumerator = ScriptedEnumerator::new(vec![
            v6("lo0", true, "::1"),
            v6("en0", true, "fe80::1"),
        ]);

        let summary = summarize(&enumerator, &InclusionPolicy::default()).unwrap();

        assert!(!summary.contains_key("lo0"));
        assert_eq!(remote_candidates(&summary), vec!["en0"]);
    }

    #[test]
    fn liveness_requirement_can_be_disabled() {
        let enumerator = ScriptedEnumerator::new(vec![v6("en1", false, "fe80::1")]);
        let policy = InclusionPolicy::new("en", false);

        let summary = summarize(&enumerator, &policy).unwrap();

        assert!(summary.contains_key("en1"));
    }

    #[test]
    fn empty_prefix_admits_every_interface() {
        let enumerator = ScriptedEnumerator::new(vec![
            v6("lo0", true, "::1"),
            v6("utun3", true, "fe80::1"),
        ]);
        let policy = InclusionPolicy::new("", true);

        let summary = summarize(&enumerator, &policy).unwrap();

        assert_eq!(summary.len(), 2);
    }
}

// ============================================================================
// Errors and resource release
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn enumeration_error_propagates() {
        let result = summarize(&FailingEnumerator, &InclusionPolicy::default());

        assert!(matches!(
            result,
            Err(EnumerateError::Enumeration { .. })
        ));
    }

    #[test]
    fn decode_error_propagates_and_names_interface() {
        let enumerator =
            ScriptedEnumerator::new(vec![v6("en0", true, "fe80::1"), decode_failure("en7")]);

        let error = summarize(&enumerator, &InclusionPolicy::default()).unwrap_err();

        match error {
            EnumerateError::AddressDecode { interface, raw } => {
                assert_eq!(interface, "en7");
                assert_eq!(raw, vec![0xff, 0xfe]);
            }
            other => panic!("expected AddressDecode, got {other:?}"),
        }
    }

    #[test]
    fn release_occurs_exactly_once_on_success() {
        let enumerator = ScriptedEnumerator::new(vec![
            v6("en0", true, "fe80::1"),
            v4("en0", true, "192.168.1.5"),
        ]);
        let releases = enumerator.release_count();

        summarize(&enumerator, &InclusionPolicy::default()).unwrap();

        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn release_occurs_exactly_once_on_mid_stream_decode_error() {
        let enumerator = ScriptedEnumerator::new(vec![
            v6("en0", true, "fe80::1"),
            decode_failure("en7"),
            v6("en5", true, "fe80::2"),
        ]);
        let releases = enumerator.release_count();

        let result = summarize(&enumerator, &InclusionPolicy::default());

        assert!(result.is_err());
        assert_eq!(releases.get(), 1);
    }
}
