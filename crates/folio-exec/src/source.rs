use serde::Deserialize;

use crate::github::FetchError;

/// One public repository as the listing API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Repository {
    /// `updated_at` as a calendar day, when it parses as RFC 3339.
    pub fn updated_day(&self) -> Option<String> {
        let raw = self.updated_at.as_deref()?;
        match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(stamp) => Some(stamp.format("%Y-%m-%d").to_string()),
            Err(err) => {
                log::debug!("ignoring unparseable updated_at {raw:?}: {err}");
                None
            }
        }
    }
}

pub trait RepositorySource {
    /// Most recently updated public repositories of `account`, newest first.
    fn recent_repositories(&self, account: &str, limit: u8) -> Result<Vec<Repository>, FetchError>;
}
