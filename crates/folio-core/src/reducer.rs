use super::actions::FolioAction;
use super::actions::RepoOutcome;
use super::actions::RuntimeAction;
use super::actions::UserAction;
use super::command_registry::CommandRegistry;
use super::content;
use super::dispatch::dispatch;
use super::dispatch::CommandContext;
use super::dispatch::DispatchOutcome;
use super::state::FolioState;
use super::state::WelcomePhase;
use super::transcript::BlockId;
use super::transcript::BlockKind;
use super::transcript::OutputSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioEffect {
    RequestFrame,
    FetchRepositories {
        placeholder: BlockId,
        account: String,
        limit: u8,
    },
}

pub fn reduce(state: &mut FolioState, action: FolioAction) -> Vec<FolioEffect> {
    match action {
        FolioAction::User(user) => reduce_user(state, user),
        FolioAction::Runtime(runtime) => {
            reduce_runtime(state, runtime);
            vec![FolioEffect::RequestFrame]
        }
    }
}

fn reduce_user(state: &mut FolioState, action: UserAction) -> Vec<FolioEffect> {
    match action {
        UserAction::ScrollTranscript(delta) => {
            state.selection.stick_to_bottom = false;
            state.selection.scroll = state.selection.scroll.saturating_add_signed(delta);
            return vec![FolioEffect::RequestFrame];
        }
        UserAction::SetScroll(scroll) => {
            state.selection.scroll = scroll;
            return vec![FolioEffect::RequestFrame];
        }
        UserAction::SetStickToBottom(stick) => {
            state.selection.stick_to_bottom = stick;
            return vec![FolioEffect::RequestFrame];
        }
        _ => {}
    }

    // A disabled input field swallows every editing key.
    if !state.interaction.input_enabled {
        return Vec::new();
    }

    match action {
        UserAction::InputChar(c) => {
            state.interaction.input.push(c);
        }
        UserAction::InputBackspace => {
            state.interaction.input.pop();
        }
        UserAction::InputClearLine => {
            state.interaction.input.clear();
        }
        UserAction::Complete => {
            if let Some(token) = CommandRegistry::complete(&state.interaction.input) {
                state.interaction.input = token.to_string();
            }
        }
        UserAction::HistoryUp => {
            if let Some(entry) = state.interaction.history.up() {
                state.interaction.input = entry.to_string();
            }
        }
        UserAction::HistoryDown => {
            if let Some(entry) = state.interaction.history.down() {
                state.interaction.input = entry.to_string();
            }
        }
        UserAction::Submit => return submit(state),
        UserAction::ScrollTranscript(_)
        | UserAction::SetScroll(_)
        | UserAction::SetStickToBottom(_) => {}
    }
    vec![FolioEffect::RequestFrame]
}

fn submit(state: &mut FolioState) -> Vec<FolioEffect> {
    let raw = std::mem::take(&mut state.interaction.input);
    let line = raw.trim().to_lowercase();
    state.transcript.echo(&state.prompt, &raw);
    state.selection.stick_to_bottom = true;

    let mut effects = vec![FolioEffect::RequestFrame];
    if line.is_empty() {
        return effects;
    }
    state.interaction.history.push(line.clone());

    let outcome = {
        let mut ctx = CommandContext {
            sink: &mut state.transcript,
            theme: &mut state.customization.theme,
            profile: &state.profile,
            catalog: &state.catalog,
        };
        dispatch(&line, &mut ctx)
    };
    if let DispatchOutcome::FetchRequested { placeholder } = outcome {
        state.interaction.pending_fetches += 1;
        effects.push(FolioEffect::FetchRepositories {
            placeholder,
            account: state.config.github.account.clone(),
            limit: state.config.github.repo_limit,
        });
    }
    effects
}

fn reduce_runtime(state: &mut FolioState, action: RuntimeAction) {
    match action {
        RuntimeAction::WelcomeLineStarted => {
            let block = state.transcript.append(BlockKind::Welcome, Vec::new());
            state.interaction.input_enabled = false;
            state.interaction.welcome = WelcomePhase::Typing { block };
        }
        RuntimeAction::WelcomeChar(c) => {
            if let WelcomePhase::Typing { block } = state.interaction.welcome {
                if !state.transcript.push_text(block, c) {
                    log::warn!("welcome line {block:?} is gone, dropping {c:?}");
                }
            }
        }
        RuntimeAction::WelcomeFinished => {
            if matches!(state.interaction.welcome, WelcomePhase::Typing { .. }) {
                state.transcript.append(BlockKind::Blank, Vec::new());
            }
            state.interaction.welcome = WelcomePhase::Done;
            state.interaction.input_enabled = true;
            state.interaction.input_focused = true;
        }
        RuntimeAction::ResolveRepositories {
            placeholder,
            outcome,
        } => {
            state.interaction.pending_fetches = state.interaction.pending_fetches.saturating_sub(1);
            let (kind, segments) = match outcome {
                RepoOutcome::Loaded(repos) => (BlockKind::Output, content::repo_list(&repos)),
                RepoOutcome::Failed(reason) => {
                    log::warn!("repository fetch failed: {reason}");
                    (BlockKind::Error, content::repo_error())
                }
            };
            if !state.transcript.replace(placeholder, kind, segments) {
                log::info!("placeholder {placeholder:?} was cleared before the fetch resolved");
            }
        }
    }
}

#[cfg(test)]
mod tests;
