//! Inclusion predicates applied before aggregation.

use crate::net::AddressRecord;

/// Default interface-name prefix: BSD-style wired/wireless Ethernet naming.
pub const DEFAULT_NAME_PREFIX: &str = "en";

/// Decides which enumerated records participate in classification.
///
/// Interfaces that are administratively down, or whose name does not carry
/// the expected prefix, never reach the summary - not even as empty
/// entries.
///
/// # Example
///
/// ```
/// use ifscout::classify::InclusionPolicy;
/// use ifscout::net::{AddressKind, AddressRecord};
///
/// let policy = InclusionPolicy::default();
/// let en0 = AddressRecord::new("en0", true, AddressKind::V4("10.0.0.1".parse().unwrap()));
/// let lo0 = AddressRecord::new("lo0", true, AddressKind::V4("127.0.0.1".parse().unwrap()));
///
/// assert!(policy.admits(&en0));
/// assert!(!policy.admits(&lo0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionPolicy {
    /// Interface-name prefix that qualifies for classification.
    /// An empty prefix admits every name.
    pub name_prefix: String,

    /// Whether the interface must have the UP flag set.
    pub require_up: bool,
}

impl Default for InclusionPolicy {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            require_up: true,
        }
    }
}

impl InclusionPolicy {
    /// Creates a policy with the given prefix and liveness requirement.
    #[must_use]
    pub fn new(name_prefix: impl Into<String>, require_up: bool) -> Self {
        Self {
            name_prefix: name_prefix.into(),
            require_up,
        }
    }

    /// Returns true if the record should participate in classification.
    #[must_use]
    pub fn admits(&self, record: &AddressRecord) -> bool {
        (record.up || !self.require_up) && record.interface.starts_with(&self.name_prefix)
    }
}
