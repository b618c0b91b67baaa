//! Application execution logic.
//!
//! One-shot flow: enumerate interface addresses, aggregate them into the
//! per-interface summary, select remote candidates, render the result.

use std::fmt::Write as _;

use serde::Serialize;
use thiserror::Error;

use ifscout::classify::{SummaryMap, remote_candidates, summarize};
use ifscout::config::{OutputFormat, ValidatedConfig};
use ifscout::net::platform::PlatformEnumerator;
use ifscout::net::{AddressEnumerator, EnumerateError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Interface enumeration or decoding failed.
    #[error("Failed to scan interfaces: {0}")]
    Scan(#[from] EnumerateError),

    /// The report could not be encoded as JSON.
    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Scans the host's interfaces and prints the result per the configuration.
///
/// # Errors
///
/// Returns [`RunError`] when enumeration fails or the report cannot be
/// encoded.
pub fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    let report = scan(&PlatformEnumerator::new(), config)?;
    print!("{report}");
    Ok(())
}

/// Builds the rendered report using the given enumerator.
fn scan<E: AddressEnumerator>(
    enumerator: &E,
    config: &ValidatedConfig,
) -> Result<String, RunError> {
    let summary = summarize(enumerator, &config.policy)?;
    let candidates = remote_candidates(&summary);

    tracing::debug!(
        interfaces = summary.len(),
        candidates = candidates.len(),
        "classification complete"
    );

    render(&summary, &candidates, config)
}

/// JSON report shape: the full summary plus the selected candidates.
#[derive(Serialize)]
struct Report<'a> {
    interfaces: &'a SummaryMap,
    candidates: &'a [String],
}

fn render(
    summary: &SummaryMap,
    candidates: &[String],
    config: &ValidatedConfig,
) -> Result<String, RunError> {
    match config.format {
        OutputFormat::Json => {
            let report = Report {
                interfaces: summary,
                candidates,
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text if config.summary => Ok(render_summary(summary)),
        OutputFormat::Text => Ok(render_candidates(candidates)),
    }
}

fn render_candidates(candidates: &[String]) -> String {
    let mut out = String::new();
    for name in candidates {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Renders the full summary, one interface per line; candidates are
/// marked with a trailing `*`.
fn render_summary(summary: &SummaryMap) -> String {
    let mut out = String::new();
    for (name, info) in summary {
        let ipv6 = info
            .ipv6_addresses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let ipv4 = if info.has_ipv4 { "yes" } else { "no" };
        let marker = if info.is_remote_candidate() { " *" } else { "" };
        let _ = writeln!(out, "{name}  ipv4={ipv4}  ipv6=[{ipv6}]{marker}");
    }
    out
}
