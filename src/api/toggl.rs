//! Account API client, used only to resolve the workspace.

use crate::api::API_TOKEN_PASSWORD;
use crate::libs::{config::Config, messages::Message};
use crate::msg_error_anyhow;
use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

const WORKSPACES_URL: &str = "workspaces";

#[derive(Debug, Deserialize)]
struct Workspace {
    id: u64,
}

/// Client for the Toggl account API.
#[derive(Debug)]
pub struct Toggl {
    client: Client,
    config: Config,
}

impl Toggl {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Resolves the id of the first workspace on the account.
    ///
    /// Report queries are scoped by workspace; accounts used with this
    /// tool have exactly one. An invalid token surfaces here as the HTTP
    /// error of the first request made in a run.
    pub async fn workspace_id(&self) -> Result<u64> {
        let url = format!("{}/{}", self.config.api_url, WORKSPACES_URL);
        let workspaces = self
            .client
            .get(&url)
            .basic_auth(&self.config.api_token, Some(API_TOKEN_PASSWORD))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Workspace>>()
            .await?;

        workspaces.first().map(|ws| ws.id).ok_or_else(|| msg_error_anyhow!(Message::NoWorkspaceFound))
    }
}
