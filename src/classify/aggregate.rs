//! Aggregation of enumerated records into the summary mapping.

use crate::net::{AddressEnumerator, AddressKind, EnumerateError};

use super::{InclusionPolicy, SummaryMap};

/// Builds the per-interface address summary from a fresh enumeration.
///
/// Records failing the inclusion policy are skipped before they can create
/// an entry. IPv6 addresses accumulate in enumeration order; an IPv4
/// record only flips the interface's `has_ipv4` flag. Records of other
/// address families are ignored without error.
///
/// # Errors
///
/// Propagates [`EnumerateError`] from the enumerator immediately. The
/// record iterator is dropped on the way out, which releases whatever OS
/// resource it holds; there is no partial-result mode.
pub fn summarize<E: AddressEnumerator>(
    enumerator: &E,
    policy: &InclusionPolicy,
) -> Result<SummaryMap, EnumerateError> {
    let mut summary = SummaryMap::new();

    for record in enumerator.enumerate()? {
        let record = record?;
        if !policy.admits(&record) {
            continue;
        }

        match record.kind {
            AddressKind::V6(address) => {
                summary
                    .entry(record.interface)
                    .or_default()
                    .ipv6_addresses
                    .push(address);
            }
            AddressKind::V4(_) => {
                summary.entry(record.interface).or_default().has_ipv4 = true;
            }
            AddressKind::Other(_) => {}
        }
    }

    Ok(summary)
}
