//! One-shot, non-interactive dispatch: `folio exec <line>`.

use folio_core::transcript::Block;
use folio_core::transcript::BlockKind;
use folio_core::FolioAction;
use folio_core::FolioEffect;
use folio_core::FolioState;
use folio_core::RuntimeAction;
use folio_core::UserAction;
use folio_core::reduce;
use folio_exec::RepositorySource;

use crate::fetch;

/// Dispatches `line` and returns the rendered output blocks as plain text.
/// Repository listings are fetched inline before returning.
pub fn run_line(state: &mut FolioState, source: &dyn RepositorySource, line: &str) -> Vec<String> {
    reduce(state, FolioAction::Runtime(RuntimeAction::WelcomeFinished));
    state.interaction.input = line.to_string();

    for effect in reduce(state, FolioAction::User(UserAction::Submit)) {
        if let FolioEffect::FetchRepositories {
            placeholder,
            account,
            limit,
        } = effect
        {
            let outcome = fetch::resolve(source, &account, limit);
            reduce(
                state,
                FolioAction::Runtime(RuntimeAction::ResolveRepositories {
                    placeholder,
                    outcome,
                }),
            );
        }
    }

    state
        .transcript
        .iter()
        .filter(|block| block.kind != BlockKind::Echo)
        .map(Block::plain_text)
        .collect()
}
