use super::content::RepoSummary;
use super::transcript::BlockId;

#[derive(Debug, Clone)]
pub enum FolioAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    InputChar(char),
    InputBackspace,
    InputClearLine,
    /// Tab: complete the input to the first matching command token.
    Complete,
    HistoryUp,
    HistoryDown,
    Submit,
    ScrollTranscript(i16),
    SetScroll(u16),
    SetStickToBottom(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOutcome {
    Loaded(Vec<RepoSummary>),
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum RuntimeAction {
    WelcomeLineStarted,
    WelcomeChar(char),
    WelcomeFinished,
    ResolveRepositories {
        placeholder: BlockId,
        outcome: RepoOutcome,
    },
}
