//! Interface classification core.
//!
//! This module turns the enumeration boundary's record stream into the
//! per-interface address summary and selects remote-bridge candidates:
//! - Per-interface summary types ([`InterfaceSummary`], [`SummaryMap`])
//! - Inclusion predicates ([`InclusionPolicy`])
//! - Record aggregation ([`summarize`])
//! - Candidate selection ([`remote_candidates`])

mod aggregate;
mod filter;
mod policy;
mod summary;

#[cfg(test)]
mod aggregate_tests;

pub use aggregate::summarize;
pub use filter::remote_candidates;
pub use policy::{DEFAULT_NAME_PREFIX, InclusionPolicy};
pub use summary::{InterfaceSummary, SummaryMap};
