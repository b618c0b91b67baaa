//! Typed records produced by the enumeration boundary.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Address family of a single enumerated record, carrying the decoded
/// address for the families the classifier tracks.
///
/// Families other than IPv4/IPv6 (link-layer entries, for example) preserve
/// the raw family code for debugging; the classifier ignores them without
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// An IPv4 address.
    V4(Ipv4Addr),
    /// An IPv6 address.
    V6(Ipv6Addr),
    /// An address family the classifier does not track, preserving the
    /// original `sa_family` code.
    Other(i32),
}

impl AddressKind {
    /// Returns true if this is an IPv4 address.
    #[must_use]
    pub const fn is_v4(&self) -> bool {
        matches!(self, Self::V4(_))
    }

    /// Returns true if this is an IPv6 address.
    #[must_use]
    pub const fn is_v6(&self) -> bool {
        matches!(self, Self::V6(_))
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(address) => write!(f, "IPv4 {address}"),
            Self::V6(address) => write!(f, "IPv6 {address}"),
            Self::Other(family) => write!(f, "family {family}"),
        }
    }
}

/// One (interface, address) pair as reported by the operating system.
///
/// The enumeration boundary emits these in OS order; the same interface
/// name appears once per address it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// The OS-reported interface name (e.g., "en0", "lo0").
    pub interface: String,
    /// True if the interface had the UP flag set.
    pub up: bool,
    /// The record's address family and decoded address.
    pub kind: AddressKind,
}

impl AddressRecord {
    /// Creates a new address record.
    #[must_use]
    pub fn new(interface: impl Into<String>, up: bool, kind: AddressKind) -> Self {
        Self {
            interface: interface.into(),
            up,
            kind,
        }
    }
}
