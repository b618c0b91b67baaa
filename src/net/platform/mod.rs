//! Platform-specific enumerator implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`AddressEnumerator`] trait.
//!
//! # Platform Support
//!
//! - **Unix (macOS, Linux, BSDs)**: Uses `getifaddrs` via the `libc` crate.
//! - **Windows**: Planned for future (`GetAdaptersAddresses`).
//!
//! [`AddressEnumerator`]: super::AddressEnumerator

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use unix::IfaddrsEnumerator;

// Re-export platform-specific enumerator as PlatformEnumerator for convenience
#[cfg(unix)]
pub use unix::IfaddrsEnumerator as PlatformEnumerator;
