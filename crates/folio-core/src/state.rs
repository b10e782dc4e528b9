use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::config::Config;
use super::content::Profile;
use super::projects::ProjectCatalog;
use super::transcript::BlockId;
use super::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
    Matrix,
}

impl UiTheme {
    pub const ALL: [UiTheme; 3] = [UiTheme::Dark, UiTheme::Light, UiTheme::Matrix];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Matrix => "matrix",
        }
    }

    /// Classes a document root carries for this theme. Dark is the bare root.
    pub fn root_classes(self) -> &'static [&'static str] {
        match self {
            Self::Dark => &[],
            Self::Light => &["light-theme"],
            Self::Matrix => &["matrix-theme"],
        }
    }
}

/// Session-scoped record of submitted command lines.
///
/// The cursor ranges over `0..=len`; `len` is the fresh, empty line.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Steps back one entry. `None` at the oldest entry.
    pub fn up(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps forward one entry; the fresh slot yields `""`. `None` once there.
    pub fn down(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries.get(self.cursor).map_or("", String::as_str))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomePhase {
    Pending,
    Typing { block: BlockId },
    Done,
}

#[derive(Debug, Clone)]
pub struct FolioInteraction {
    pub input: String,
    pub input_enabled: bool,
    pub input_focused: bool,
    pub history: HistoryBuffer,
    pub welcome: WelcomePhase,
    pub pending_fetches: usize,
}

#[derive(Debug, Clone)]
pub struct FolioCustomization {
    pub theme: UiTheme,
    pub rain_always: bool,
}

#[derive(Debug, Clone)]
pub struct FolioSelection {
    pub scroll: u16,
    pub stick_to_bottom: bool,
}

impl Default for FolioSelection {
    fn default() -> Self {
        Self {
            scroll: 0,
            stick_to_bottom: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FolioState {
    pub prompt: Arc<str>,
    pub interaction: FolioInteraction,
    pub customization: FolioCustomization,
    pub selection: FolioSelection,
    pub transcript: Transcript,
    pub profile: Profile,
    pub catalog: ProjectCatalog,
    pub config: Config,
}

impl FolioState {
    pub fn new(config: Config) -> Self {
        Self {
            prompt: config.profile.prompt.as_str().into(),
            interaction: FolioInteraction {
                input: String::new(),
                input_enabled: false,
                input_focused: false,
                history: HistoryBuffer::new(),
                welcome: WelcomePhase::Pending,
                pending_fetches: 0,
            },
            customization: FolioCustomization {
                theme: config.ui.theme,
                rain_always: config.ui.rain,
            },
            selection: FolioSelection::default(),
            transcript: Transcript::new(),
            profile: Profile::default(),
            catalog: ProjectCatalog::builtin(),
            config,
        }
    }

    pub fn rain_visible(&self) -> bool {
        self.customization.rain_always || self.customization.theme == UiTheme::Matrix
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn history_up_stops_at_oldest() {
        let mut history = HistoryBuffer::new();
        history.push("about");
        history.push("skills");
        assert_eq!(history.up(), Some("skills"));
        assert_eq!(history.up(), Some("about"));
        assert_eq!(history.up(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn history_down_reaches_fresh_slot_once() {
        let mut history = HistoryBuffer::new();
        history.push("about");
        history.push("skills");
        history.up();
        history.up();
        assert_eq!(history.down(), Some("skills"));
        assert_eq!(history.down(), Some(""));
        assert_eq!(history.down(), None);
        assert_eq!(history.cursor(), history.len());
    }

    #[test]
    fn history_push_resets_cursor_to_len() {
        let mut history = HistoryBuffer::new();
        history.push("a");
        history.push("b");
        history.up();
        history.up();
        history.push("c");
        assert_eq!(history.cursor(), 3);
    }

    #[test]
    fn empty_history_navigation_is_noop() {
        let mut history = HistoryBuffer::new();
        assert_eq!(history.up(), None);
        assert_eq!(history.down(), None);
    }

    #[test]
    fn theme_root_classes_are_exclusive() {
        for theme in UiTheme::ALL {
            assert!(theme.root_classes().len() <= 1);
        }
        assert!(UiTheme::Dark.root_classes().is_empty());
    }
}
