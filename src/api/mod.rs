//! API client modules for the Toggl service.
//!
//! Two endpoints are involved: the account API, which resolves the
//! workspace, and the reporting API, which serves the detailed time
//! entries. Both authenticate the same way, with the API token as the
//! basic auth username and a fixed literal as the password.

pub mod reports;
pub mod toggl;

pub use reports::Reports;
pub use toggl::Toggl;

/// Fixed basic auth password the Toggl API expects alongside a token.
pub(crate) const API_TOKEN_PASSWORD: &str = "api_token";
