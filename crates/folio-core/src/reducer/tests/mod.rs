use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use crate::actions::FolioAction;
pub(super) use crate::actions::RepoOutcome;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::config::Config;
pub(super) use crate::content::RepoSummary;
pub(super) use crate::reducer::FolioEffect;
pub(super) use crate::state::FolioState;
pub(super) use crate::state::UiTheme;
pub(super) use crate::state::WelcomePhase;
pub(super) use crate::transcript::Block;
pub(super) use crate::transcript::BlockId;
pub(super) use crate::transcript::BlockKind;

mod dispatch_flow;

/// A session whose welcome animation already ran.
fn state() -> FolioState {
    let mut state = FolioState::new(Config::default());
    run_runtime(&mut state, RuntimeAction::WelcomeFinished);
    state
}

fn run_user(state: &mut FolioState, action: UserAction) -> Vec<FolioEffect> {
    reduce(state, FolioAction::User(action))
}

fn run_runtime(state: &mut FolioState, action: RuntimeAction) {
    let effects = reduce(state, FolioAction::Runtime(action));
    assert_eq!(effects, vec![FolioEffect::RequestFrame]);
}

fn type_line(state: &mut FolioState, line: &str) {
    for c in line.chars() {
        run_user(state, UserAction::InputChar(c));
    }
}

fn submit(state: &mut FolioState, line: &str) -> Vec<FolioEffect> {
    type_line(state, line);
    run_user(state, UserAction::Submit)
}

fn texts(state: &FolioState) -> Vec<String> {
    state.transcript.iter().map(Block::plain_text).collect()
}

fn last_text(state: &FolioState) -> String {
    state
        .transcript
        .last()
        .map(Block::plain_text)
        .unwrap_or_default()
}

fn repo(name: &str, description: Option<&str>) -> RepoSummary {
    RepoSummary {
        name: name.to_string(),
        html_url: format!("https://github.com/rajvikash18113/{name}"),
        description: description.map(str::to_string),
        updated: None,
    }
}
