//! Display implementation for user-facing messages.
//!
//! All message text lives here so wording stays in one place and the
//! variants themselves remain plain data.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            // === CONFIGURATION MESSAGES ===
            Message::MissingApiToken(var) => {
                format!("Environment variable {} is not set. Export it or add it to an .env file", var)
            }

            // === WORKSPACE MESSAGES ===
            Message::NoWorkspaceFound => "No workspace is associated with this account".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportPageLimitExceeded(limit) => {
                format!("Report API returned more than {} pages without an empty page, giving up", limit)
            }
            Message::MalformedTimestamp(value) => format!("Could not parse timestamp '{}'", value),

            // === QUERY WINDOW MESSAGES ===
            Message::InvalidMonth(month) => format!("Month must be between 1 and 12, got {}", month),
            Message::InvalidReportDate(year, month) => format!("No such calendar month: {}-{:02}", year, month),
        };
        write!(f, "{}", msg)
    }
}
