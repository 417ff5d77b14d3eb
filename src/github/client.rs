// file: src/github/client.rs
// description: GitHub REST client for listing an organization's repositories
// reference: https://docs.github.com/en/rest/repos/repos#list-organization-repositories

use crate::config::Settings;
use crate::error::{Result, SynthError};
use crate::github::link;
use crate::github::pages::{Page, RawRepository, RepositoryPages};
use reqwest::Client;
use reqwest::header::{ACCEPT, LINK};
use tracing::debug;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

pub struct GitHubClient {
    client: Client,
    api_base_url: String,
    org: String,
    token: String,
    repo_type: String,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(
        settings: &Settings,
        org: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            org: org.into(),
            token: token.into(),
            repo_type: settings.repo_type.clone(),
            per_page: settings.per_page,
        })
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    fn repos_url(&self) -> String {
        format!("{}/orgs/{}/repos", self.api_base_url, self.org)
    }
}

impl RepositoryPages for GitHubClient {
    async fn fetch_page(&self, page: u32) -> Result<Page> {
        let url = self.repos_url();

        debug!(
            "Requesting {} (type={}, per_page={}, page={})",
            url, self.repo_type, self.per_page, page
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .query(&[
                ("type", self.repo_type.clone()),
                ("per_page", self.per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SynthError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(link::next_page);

        let repositories: Vec<RawRepository> = response.json().await?;

        Ok(Page {
            repositories,
            next_page,
        })
    }
}
