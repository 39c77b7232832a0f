//! Process-wide configuration for the exporter.
//!
//! The configuration is read once at startup and handed to every component
//! as an immutable value; nothing reads the process environment mid-run.
//! The API token is required, the endpoint URLs fall back to the public
//! Toggl servers and exist mainly so tests can point the clients at a
//! local stub.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dotenv::dotenv;
use std::env;

/// Environment variable holding the Toggl API token.
pub const API_TOKEN_ENV: &str = "TOGGL_API_TOKEN";

/// Optional override for the account API base URL.
pub const API_URL_ENV: &str = "TOGGL_API_URL";

/// Optional override for the reporting API base URL.
pub const REPORTS_URL_ENV: &str = "TOGGL_REPORTS_URL";

const DEFAULT_API_URL: &str = "https://www.toggl.com/api/v8";
const DEFAULT_REPORTS_URL: &str = "https://www.toggl.com/reports/api/v2";

/// Immutable runtime configuration shared by both API clients.
#[derive(Debug, Clone)]
pub struct Config {
    /// Toggl API token, used as the basic auth username.
    pub api_token: String,
    /// Base URL of the account API (workspaces).
    pub api_url: String,
    /// Base URL of the reporting API (detailed entries).
    pub reports_url: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// An `.env` file in the working directory is honored if present.
    /// A missing token fails here, before any request is made, rather
    /// than producing an unauthenticated call the API would reject.
    pub fn read() -> Result<Self> {
        dotenv().ok();

        let api_token = env::var(API_TOKEN_ENV).map_err(|_| msg_error_anyhow!(Message::MissingApiToken(API_TOKEN_ENV.to_string())))?;

        Ok(Self {
            api_token,
            api_url: env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            reports_url: env::var(REPORTS_URL_ENV).unwrap_or_else(|_| DEFAULT_REPORTS_URL.to_string()),
        })
    }
}
