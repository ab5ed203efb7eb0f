//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Every console line of the program, order lines and milestones alike, is
//! emitted through it by the report actor's [`TracingSink`](crate::report::TracingSink)
//! under the [`REPORT_TARGET`] target.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format without the crate/module prefix
//! (`with_target(false)`), so an order line reads like:
//!
//! ```text
//! 2026-10-18T09:12:01.004Z  INFO Order 3: Validado.
//! ```
//!
//! Pipeline diagnostics (`debug!`/`warn!`) run inside an `order` span and show
//! it inline, e.g. `DEBUG order: Pipeline boundary caught error order_id=3`.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Order lines, milestones and warnings (default)
//! cargo run
//!
//! # Include pipeline diagnostics
//! RUST_LOG=debug cargo run
//!
//! # Report lines only, no diagnostics
//! RUST_LOG=off cargo run
//! ```
//!
//! `RUST_LOG` tunes diagnostics only. The report target is always enabled at
//! `info`, so no filter can hide the banner, the order lines or the milestones.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::report::REPORT_TARGET;

pub fn setup_tracing() {
    let diagnostics =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&diagnostics))
        .with_target(false)
        .compact()
        .init();
}

/// Builds the filter from a `RUST_LOG`-style string, with report lines forced on.
///
/// An unparsable string falls back to `info`.
pub fn log_filter(diagnostics: &str) -> EnvFilter {
    let filter = EnvFilter::try_new(diagnostics).unwrap_or_else(|_| EnvFilter::new("info"));
    match format!("{REPORT_TARGET}=info").parse::<Directive>() {
        Ok(report) => filter.add_directive(report),
        Err(_) => filter,
    }
}
