//! Unix interface enumeration using `getifaddrs`.
//!
//! All raw struct access happens in this module; the classifier core only
//! ever sees typed [`AddressRecord`]s.

use std::ffi::CStr;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::ptr;

use crate::net::{AddressEnumerator, AddressKind, AddressRecord, EnumerateError};

/// Interface flag bit for "administratively up" (from `net/if.h`).
const UP_FLAG: libc::c_uint = libc::IFF_UP as libc::c_uint;

/// Unix implementation of [`AddressEnumerator`] using `getifaddrs`.
///
/// This enumerator walks the linked list returned by the C library and
/// decodes each node into a typed [`AddressRecord`]. The list is freed via
/// its original head pointer when the record iterator is dropped, so the
/// whole allocation is returned no matter where iteration stopped.
///
/// # Example
///
/// ```no_run
/// use ifscout::net::AddressEnumerator;
/// use ifscout::net::platform::IfaddrsEnumerator;
///
/// let enumerator = IfaddrsEnumerator::new();
/// for record in enumerator.enumerate().expect("getifaddrs failed") {
///     println!("{:?}", record);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IfaddrsEnumerator {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl IfaddrsEnumerator {
    /// Creates a new `getifaddrs`-backed enumerator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressEnumerator for IfaddrsEnumerator {
    type Records = IfaddrsRecords;

    fn enumerate(&self) -> Result<IfaddrsRecords, EnumerateError> {
        let mut head: *mut libc::ifaddrs = ptr::null_mut();

        // SAFETY: getifaddrs is called per its contract: on success it
        // allocates a linked list and stores its head through the provided
        // out-pointer.
        let rc = unsafe { libc::getifaddrs(&mut head) };
        if rc != 0 {
            return Err(EnumerateError::Enumeration {
                source: io::Error::last_os_error(),
            });
        }

        Ok(IfaddrsRecords {
            cursor: head,
            _list: IfaddrsList { head },
        })
    }
}

/// Owner of the list allocated by `getifaddrs`.
///
/// Frees the original head pointer exactly once, never a traversal cursor.
struct IfaddrsList {
    head: *mut libc::ifaddrs,
}

impl Drop for IfaddrsList {
    fn drop(&mut self) {
        // SAFETY: `head` is the pointer produced by a successful getifaddrs
        // call, and this guard is the only place it is freed.
        unsafe { libc::freeifaddrs(self.head) };
    }
}

/// Iterator over decoded records.
///
/// Holds the underlying list alive while records are consumed and frees it
/// on drop, whether iteration finished, stopped early, or hit an error.
pub struct IfaddrsRecords {
    cursor: *mut libc::ifaddrs,
    _list: IfaddrsList,
}

impl Iterator for IfaddrsRecords {
    type Item = Result<AddressRecord, EnumerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.cursor.is_null() {
            // SAFETY: `cursor` is a valid node of the list owned by `_list`;
            // every node stays alive until the list is freed on drop.
            let node = unsafe { &*self.cursor };
            self.cursor = node.ifa_next;

            match decode_node(node) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }

        None
    }
}

/// Decodes one `ifaddrs` node into a typed record.
///
/// Returns `Ok(None)` for nodes without an address: some entries describe
/// an interface's link state only and carry a null `ifa_addr`.
#[allow(clippy::cast_ptr_alignment)]
fn decode_node(node: &libc::ifaddrs) -> Result<Option<AddressRecord>, EnumerateError> {
    let interface = decode_name(node.ifa_name)?;
    let up = node.ifa_flags & UP_FLAG != 0;

    if node.ifa_addr.is_null() {
        return Ok(None);
    }

    // SAFETY: `ifa_addr` is non-null and points to a sockaddr that lives as
    // long as the list. Only the family tag is read before dispatching.
    let family = i32::from(unsafe { (*node.ifa_addr).sa_family });

    let kind = match family {
        libc::AF_INET => {
            // SAFETY: family is AF_INET, so the sockaddr is a sockaddr_in.
            // The OS guarantees alignment of addresses it hands out.
            let sin = unsafe { &*node.ifa_addr.cast::<libc::sockaddr_in>() };
            // s_addr holds the address bytes in network order
            AddressKind::V4(Ipv4Addr::from(sin.sin_addr.s_addr.to_ne_bytes()))
        }
        libc::AF_INET6 => {
            // SAFETY: family is AF_INET6, so the sockaddr is a sockaddr_in6.
            let sin6 = unsafe { &*node.ifa_addr.cast::<libc::sockaddr_in6>() };
            AddressKind::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr))
        }
        _ => AddressKind::Other(family),
    };

    Ok(Some(AddressRecord::new(interface, up, kind)))
}

/// Decodes an interface name from the node's C string.
fn decode_name(name: *const libc::c_char) -> Result<String, EnumerateError> {
    // SAFETY: getifaddrs guarantees `ifa_name` points to a NUL-terminated
    // string that lives as long as the list.
    let name = unsafe { CStr::from_ptr(name) };

    name.to_str()
        .map(str::to_owned)
        .map_err(|_| EnumerateError::AddressDecode {
            interface: name.to_string_lossy().into_owned(),
            raw: name.to_bytes().to_vec(),
        })
}
