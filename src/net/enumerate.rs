//! Enumeration trait and error types.

use std::io;

use thiserror::Error;

use super::AddressRecord;

/// Error type for interface address enumeration.
///
/// Describes what went wrong without dictating recovery strategy. Neither
/// variant is retried; callers treat both as fatal for the invocation.
#[derive(Debug, Error)]
pub enum EnumerateError {
    /// The OS-level interface query failed.
    #[error("Interface enumeration failed: {source}")]
    Enumeration {
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// An address record could not be decoded into its typed form.
    #[error("Could not decode address on interface '{interface}': {raw:02x?}")]
    AddressDecode {
        /// Name of the interface the record belonged to (decoded lossily if
        /// the name itself was the undecodable part).
        interface: String,
        /// The raw bytes that failed to decode.
        raw: Vec<u8>,
    },
}

/// Trait for enumerating per-interface address records.
///
/// # Design
///
/// - Enables dependency injection for testing with scripted record streams
/// - The record iterator owns whatever OS resource backs the records and
///   releases it exactly once when dropped, on every exit path - including
///   an error partway through consumption
/// - Platform-specific implementations provided in [`super::platform`]
///
/// # Example
///
/// ```
/// use ifscout::net::{AddressEnumerator, AddressRecord, EnumerateError};
///
/// struct FixedEnumerator {
///     records: Vec<AddressRecord>,
/// }
///
/// impl AddressEnumerator for FixedEnumerator {
///     type Records = Vec<Result<AddressRecord, EnumerateError>>;
///
///     fn enumerate(&self) -> Result<Self::Records, EnumerateError> {
///         Ok(self.records.iter().cloned().map(Ok).collect())
///     }
/// }
/// ```
pub trait AddressEnumerator {
    /// Iterator over the enumerated records.
    type Records: IntoIterator<Item = Result<AddressRecord, EnumerateError>>;

    /// Opens a fresh enumeration of all interface addresses on the host.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError::Enumeration`] when the OS query itself
    /// fails. Per-record decode failures surface as
    /// [`EnumerateError::AddressDecode`] items in the returned iterator.
    fn enumerate(&self) -> Result<Self::Records, EnumerateError>;
}
