//! Reporting API client for fetching detailed time entries.
//!
//! The details endpoint is paginated; pages are requested sequentially
//! starting at 1 until the service returns an empty `data` array. Each
//! page is filtered down to entries carrying the on-location tag before
//! being accumulated, so untagged entries never reach the aggregation
//! stage.

use crate::api::API_TOKEN_PASSWORD;
use crate::libs::{config::Config, messages::Message, month::ReportMonth};
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;

/// The fixed tag selecting entries relevant to this report.
pub const ON_LOCATION_TAG: &str = "on location";

/// Client identification the reporting API requires on every request.
const USER_AGENT: &str = "spesen";

const DETAILS_URL: &str = "details";

/// Upper bound on pages fetched per run.
///
/// The loop normally stops at the first empty page; the bound turns a
/// service that keeps returning non-empty pages into an error instead of
/// an endless run. One month of on-location days fits in a fraction of it.
pub const MAX_REPORT_PAGES: u32 = 100;

/// One raw time entry from the reporting API.
///
/// Timestamps stay as the strings the API sent; the accessors parse them
/// on demand so a malformed value surfaces as an error with the offending
/// text instead of a skewed comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntry {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub client: Option<String>,
}

impl TimeEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Start timestamp parsed as RFC 3339, offset preserved.
    pub fn started_at(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.start)
    }

    /// End timestamp parsed as RFC 3339, offset preserved.
    pub fn ended_at(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.end)
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|_| msg_error_anyhow!(Message::MalformedTimestamp(value.to_string())))
}

#[derive(Debug, Deserialize)]
struct DetailsPage {
    data: Vec<TimeEntry>,
}

/// Client for the Toggl reporting API.
#[derive(Debug)]
pub struct Reports {
    client: Client,
    config: Config,
    month: ReportMonth,
}

impl Reports {
    pub fn new(config: &Config, month: ReportMonth) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            month,
        }
    }

    /// Fetches every on-location entry of the report month.
    pub async fn time_entries(&self, workspace_id: u64) -> Result<Vec<TimeEntry>> {
        collect_tagged_pages(ON_LOCATION_TAG, |page| self.fetch_page(workspace_id, page)).await
    }

    async fn fetch_page(&self, workspace_id: u64, page: u32) -> Result<Vec<TimeEntry>> {
        let (since, until) = self.month.range();
        let url = format!("{}/{}", self.config.reports_url, DETAILS_URL);

        let res = self
            .client
            .get(&url)
            .basic_auth(&self.config.api_token, Some(API_TOKEN_PASSWORD))
            .query(&[
                ("user_agent", USER_AGENT.to_string()),
                ("workspace_id", workspace_id.to_string()),
                ("page", page.to_string()),
                ("since", since.format("%Y-%m-%d").to_string()),
                ("until", until.format("%Y-%m-%d").to_string()),
                // The service filters tags by id, not name, so this is
                // informational; the authoritative filter runs client-side
                ("tags", ON_LOCATION_TAG.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = res.text().await?;
        let details: DetailsPage = serde_json::from_str(&body)?;
        Ok(details.data)
    }
}

/// Drains paginated results, keeping only entries carrying `tag`.
///
/// Pages are requested with a counter starting at 1 and the loop ends at
/// the first page whose entry list is empty, so the result is exactly the
/// concatenation of the non-empty pages, filtered. Running past
/// [`MAX_REPORT_PAGES`] is an error.
pub async fn collect_tagged_pages<F, Fut>(tag: &str, mut fetch_page: F) -> Result<Vec<TimeEntry>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<TimeEntry>>>,
{
    let mut gathered = Vec::new();

    for page in 1..=MAX_REPORT_PAGES {
        let entries = fetch_page(page).await?;
        if entries.is_empty() {
            return Ok(gathered);
        }
        msg_debug!(format!("Report page {} returned {} entries", page, entries.len()));
        gathered.extend(entries.into_iter().filter(|entry| entry.has_tag(tag)));
    }

    Err(msg_error_anyhow!(Message::ReportPageLimitExceeded(MAX_REPORT_PAGES)))
}
