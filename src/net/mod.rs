//! OS boundary for interface address enumeration.
//!
//! This module provides types and traits for:
//! - Typed per-address records ([`AddressRecord`], [`AddressKind`])
//! - Enumerating interface addresses ([`AddressEnumerator`])
//! - Platform-specific implementations ([`platform`])

mod enumerate;
pub mod platform;
mod record;

pub use enumerate::{AddressEnumerator, EnumerateError};
pub use record::{AddressKind, AddressRecord};
