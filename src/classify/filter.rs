//! Remote-candidate selection over the summary mapping.

use super::SummaryMap;

/// Selects the interfaces that look like remote-bridge tunnels.
///
/// An interface qualifies iff it carries exactly one IPv6 address and no
/// IPv4 address (see [`InterfaceSummary::is_remote_candidate`]). Output
/// order matches the summary's iteration order, which is first-seen
/// enumeration order - deliberately not sorted.
///
/// [`InterfaceSummary::is_remote_candidate`]: super::InterfaceSummary::is_remote_candidate
#[must_use]
pub fn remote_candidates(summary: &SummaryMap) -> Vec<String> {
    summary
        .iter()
        .filter(|(_, info)| info.is_remote_candidate())
        .map(|(name, _)| name.clone())
        .collect()
}
