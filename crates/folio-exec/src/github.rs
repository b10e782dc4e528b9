//! Blocking client for the public GitHub repository listing.

use thiserror::Error;

use crate::source::Repository;
use crate::source::RepositorySource;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {code} {reason}")]
    Status { code: u16, reason: String },
    #[error("malformed repository listing: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `{api_base}/users/{account}/repos?sort=updated&per_page={limit}`
pub fn repos_url(api_base: &str, account: &str, limit: u8) -> String {
    format!(
        "{}/users/{}/repos?sort=updated&per_page={}",
        api_base.trim_end_matches('/'),
        account,
        limit
    )
}

pub fn parse_repositories(body: &str) -> Result<Vec<Repository>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::blocking::Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(api_base: impl Into<String>, user_agent: &str) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }
}

impl RepositorySource for GithubClient {
    fn recent_repositories(&self, account: &str, limit: u8) -> Result<Vec<Repository>, FetchError> {
        let url = repos_url(&self.api_base, account, limit);
        log::info!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("repository listing for {account} returned {status}");
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text()?;
        let mut repositories = parse_repositories(&body)?;
        // The API may ignore per_page for some accounts.
        repositories.truncate(usize::from(limit));
        log::info!("fetched {} repositories for {account}", repositories.len());
        Ok(repositories)
    }
}
