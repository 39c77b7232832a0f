//! CSV rendering of the per-day summaries.
//!
//! The writer is generic over `io::Write`; production code hands it
//! stdout, tests hand it a buffer. The header and column order match the
//! expense sheet the report is pasted into, hence the German labels.

use crate::libs::formatter::{format_duration, format_time, minute_floored_span};
use crate::libs::summary::DaySummary;
use anyhow::Result;
use std::io::Write;

/// Column header of the summary CSV.
pub const CSV_HEADER: [&str; 5] = ["Datum", "Anfang", "Ende", "Dauer", "Kunde"];

/// Writes the header line and one line per day.
///
/// An empty summary list still produces the header, so downstream tooling
/// always sees a well-formed (if empty) sheet.
pub fn write_csv<W: Write>(writer: W, days: &[DaySummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for day in days {
        wtr.write_record(&[
            day.date.format("%Y-%m-%d").to_string(),
            format_time(&day.start),
            format_time(&day.end),
            format_duration(&minute_floored_span(&day.start, &day.end)),
            day.client.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;

    Ok(())
}
