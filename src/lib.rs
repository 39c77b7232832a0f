//! # Spesen - on-location report exporter for Toggl
//!
//! A command-line utility that pulls a month of time entries from the
//! Toggl reporting API, keeps the ones tagged "on location" and prints a
//! per-day CSV summary (date, start, end, duration, client) to stdout.
//!
//! ## Pipeline
//!
//! - **Workspace Resolver**: one account API call for the workspace id
//! - **Report Fetcher**: paginated retrieval, filtered to the fixed tag
//! - **Day Aggregator**: per-day earliest start / latest end reduction
//! - **Formatter**: CSV lines with minute-truncated times and durations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spesen::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
