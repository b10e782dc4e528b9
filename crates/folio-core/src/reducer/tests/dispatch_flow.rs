use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unknown_command_renders_help_pointer() {
    let mut state = state();
    submit(&mut state, "frobnicate");
    assert!(last_text(&state).contains("Command not found: frobnicate"));
}

#[test]
fn command_is_case_insensitive_end_to_end() {
    let mut state = state();
    submit(&mut state, "SKILLS");
    assert!(last_text(&state).starts_with("Languages:"));
}

#[test]
fn each_command_appends_echo_plus_one_block() {
    let mut state = state();
    submit(&mut state, "about");
    submit(&mut state, "contact");
    let kinds: Vec<BlockKind> = state.transcript.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Echo,
            BlockKind::Output,
            BlockKind::Echo,
            BlockKind::Output
        ]
    );
}

#[test]
fn clear_leaves_transcript_empty() {
    let mut state = state();
    submit(&mut state, "about");
    submit(&mut state, "banner");
    submit(&mut state, "clear");
    assert!(state.transcript.is_empty());
    assert_eq!(state.interaction.history.len(), 3);
}

#[test]
fn theme_commands_switch_session_theme() {
    let mut state = state();
    submit(&mut state, "light");
    submit(&mut state, "light");
    assert_eq!(state.customization.theme, UiTheme::Light);
    assert_eq!(state.customization.theme.root_classes(), &["light-theme"]);
    assert!(!state.rain_visible());

    submit(&mut state, "matrix");
    assert!(state.rain_visible());

    submit(&mut state, "dark");
    assert!(state.customization.theme.root_classes().is_empty());
    assert_eq!(last_text(&state), "Theme set to: dark");
}

#[test]
fn project_lookup_through_submit() {
    let mut state = state();
    submit(&mut state, "project 2");
    assert!(last_text(&state).starts_with("Smart Stock Portfolio Optimizer"));

    submit(&mut state, "project 9");
    assert!(last_text(&state).starts_with("Project not found: 9."));

    submit(&mut state, "project");
    assert!(last_text(&state).starts_with("Project not found."));
}

#[test]
fn github_emits_fetch_effect_with_configured_account() {
    let mut state = state();
    let effects = submit(&mut state, "github");

    let placeholder = state.transcript.last().map(|b| b.id).expect("placeholder");
    assert_eq!(
        effects,
        vec![
            FolioEffect::RequestFrame,
            FolioEffect::FetchRepositories {
                placeholder,
                account: "rajvikash18113".to_string(),
                limit: 3,
            }
        ]
    );
    assert_eq!(state.interaction.pending_fetches, 1);
}

#[test]
fn fresh_session_end_to_end() {
    let mut state = FolioState::new(Config::default());
    run_runtime(&mut state, RuntimeAction::WelcomeLineStarted);
    for c in "Hi".chars() {
        run_runtime(&mut state, RuntimeAction::WelcomeChar(c));
    }
    run_runtime(&mut state, RuntimeAction::WelcomeFinished);
    assert!(state.interaction.input_enabled);

    submit(&mut state, "command");
    let transcript = texts(&state);
    assert_eq!(transcript[0], "Hi");
    assert!(transcript
        .last()
        .is_some_and(|text| text.starts_with("Available commands:")));

    submit(&mut state, "clear");
    assert!(state.transcript.is_empty());
}
