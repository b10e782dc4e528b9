use folio_exec::FetchError;
use folio_exec::Repository;
use folio_exec::RepositorySource;

/// Serves a fixed listing without touching the network.
#[derive(Debug, Clone, Default)]
pub struct CannedRepositories {
    pub repositories: Vec<Repository>,
}

impl RepositorySource for CannedRepositories {
    fn recent_repositories(&self, _account: &str, limit: u8) -> Result<Vec<Repository>, FetchError> {
        Ok(self
            .repositories
            .iter()
            .take(usize::from(limit))
            .cloned()
            .collect())
    }
}

pub fn repository(name: &str, description: Option<&str>, updated_at: Option<&str>) -> Repository {
    Repository {
        name: name.to_string(),
        html_url: format!("https://github.com/rajvikash18113/{name}"),
        description: description.map(str::to_string),
        updated_at: updated_at.map(str::to_string),
    }
}
