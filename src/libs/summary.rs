//! Per-day aggregation of fetched time entries.
//!
//! Grouping rule: an entry belongs to the calendar date its *start*
//! timestamp falls on, in that timestamp's own offset. An entry that runs
//! past midnight still belongs to the day it began, which is how
//! on-location days are billed.

use crate::api::reports::TimeEntry;
use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Aggregated span of one on-location day.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Earliest start among the day's entries.
    pub start: DateTime<FixedOffset>,
    /// Latest end among the day's entries, not necessarily from the same
    /// entry as `start`.
    pub end: DateTime<FixedOffset>,
    /// Client of the entry with the earliest start.
    pub client: Option<String>,
}

/// Reduces a list of time entries to one summary per day.
pub trait Summarize {
    fn into_day_summaries(self) -> Result<Vec<DaySummary>>;
}

impl Summarize for Vec<TimeEntry> {
    /// Sorts entries chronologically and folds them into day summaries,
    /// ordered by date.
    ///
    /// Timestamps are parsed up front; one malformed entry fails the whole
    /// run instead of silently skewing a day's span. The sort key includes
    /// end and client so the result does not depend on input order even
    /// when two entries share a start timestamp.
    fn into_day_summaries(self) -> Result<Vec<DaySummary>> {
        let mut parsed = self
            .into_iter()
            .map(|entry| {
                Ok(ParsedEntry {
                    start: entry.started_at()?,
                    end: entry.ended_at()?,
                    client: entry.client,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        parsed.sort_by(|a, b| (a.start, a.end, &a.client).cmp(&(b.start, b.end, &b.client)));

        let mut days: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();
        for entry in parsed {
            let date = entry.start.date_naive();
            match days.entry(date) {
                // Ascending starts: the first entry of a date carries the
                // day's start and client, later ones can only push the end
                Entry::Occupied(mut day) => {
                    let day = day.get_mut();
                    day.end = day.end.max(entry.end);
                }
                Entry::Vacant(slot) => {
                    slot.insert(DaySummary {
                        date,
                        start: entry.start,
                        end: entry.end,
                        client: entry.client,
                    });
                }
            }
        }

        Ok(days.into_values().collect())
    }
}

struct ParsedEntry {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    client: Option<String>,
}
