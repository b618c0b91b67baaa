//! Per-interface address summary types.

use std::net::Ipv6Addr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from interface name to its observed address summary.
///
/// Iteration order is the order interfaces were first seen during
/// enumeration; candidate selection depends on it staying that way.
pub type SummaryMap = IndexMap<String, InterfaceSummary>;

/// Address families observed on a single interface.
///
/// Built fresh on every scan and never mutated after aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceSummary {
    /// IPv6 addresses in enumeration order; duplicates are preserved if the
    /// OS reports the same address more than once.
    pub ipv6_addresses: Vec<Ipv6Addr>,

    /// True if at least one IPv4 address was observed.
    pub has_ipv4: bool,
}

impl InterfaceSummary {
    /// Creates a summary from the observed addresses.
    #[must_use]
    pub const fn new(ipv6_addresses: Vec<Ipv6Addr>, has_ipv4: bool) -> Self {
        Self {
            ipv6_addresses,
            has_ipv4,
        }
    }

    /// Returns true if this interface looks like a remote-bridge tunnel:
    /// exactly one IPv6 address and no IPv4 address.
    ///
    /// Physical interfaces typically acquire IPv4 via DHCP, and multi-homed
    /// interfaces carry several IPv6 addresses; neither qualifies.
    #[must_use]
    pub fn is_remote_candidate(&self) -> bool {
        self.ipv6_addresses.len() == 1 && !self.has_ipv4
    }
}
