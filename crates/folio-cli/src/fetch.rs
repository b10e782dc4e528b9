use folio_core::actions::RepoOutcome;
use folio_core::content::RepoSummary;
use folio_exec::Repository;
use folio_exec::RepositorySource;

/// Runs one listing request to completion and folds it into a reducer outcome.
pub fn resolve(source: &dyn RepositorySource, account: &str, limit: u8) -> RepoOutcome {
    match source.recent_repositories(account, limit) {
        Ok(repos) => RepoOutcome::Loaded(repos.into_iter().map(summarize).collect()),
        Err(err) => RepoOutcome::Failed(err.to_string()),
    }
}

fn summarize(repo: Repository) -> RepoSummary {
    let updated = repo.updated_day();
    RepoSummary {
        name: repo.name,
        html_url: repo.html_url,
        description: repo.description,
        updated,
    }
}
