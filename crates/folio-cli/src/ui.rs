use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use ratatui::Terminal;

use folio_core::actions::{FolioAction, RepoOutcome, RuntimeAction, UserAction};
use folio_core::reducer::{reduce, FolioEffect};
use folio_core::state::{FolioState, UiTheme};
use folio_core::transcript::{BlockKind, Segment};
use folio_core::typewriter::{self, TypewriterEvent};
use folio_exec::RepositorySource;

use crate::fetch;
use crate::rain::{MatrixRain, RAIN_PERIOD, TRAIL_TICKS};

pub type SharedSource = Arc<dyn RepositorySource + Send + Sync>;

const INPUT_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const PAGE_LINES: i16 = 10;

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

pub fn run(mut state: FolioState, source: SharedSource) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let _guard = TuiGuard; // Restores the terminal on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, &mut state, source).map_err(|e| e.into())
}

enum UiEvent {
    Typewriter(TypewriterEvent),
    Repos {
        placeholder: folio_core::transcript::BlockId,
        outcome: RepoOutcome,
    },
}

#[derive(Clone, Copy)]
struct UiPalette {
    text: Color,
    accent: Color,
    prompt: Color,
    link: Color,
    danger: Color,
    muted: Color,
    border: Color,
    background: Color,
    rain_head: Color,
    rain_tail: Color,
}

fn palette_for(theme: UiTheme) -> UiPalette {
    match theme {
        UiTheme::Dark => UiPalette {
            text: Color::Gray,
            accent: Color::Cyan,
            prompt: Color::LightGreen,
            link: Color::LightBlue,
            danger: Color::LightRed,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            background: Color::Black,
            rain_head: Color::LightGreen,
            rain_tail: Color::Green,
        },
        UiTheme::Light => UiPalette {
            text: Color::Black,
            accent: Color::Blue,
            prompt: Color::Rgb(0, 110, 40),
            link: Color::Blue,
            danger: Color::Red,
            muted: Color::Gray,
            border: Color::Gray,
            background: Color::White,
            rain_head: Color::Rgb(0, 140, 60),
            rain_tail: Color::Rgb(150, 200, 160),
        },
        UiTheme::Matrix => UiPalette {
            text: Color::Green,
            accent: Color::LightGreen,
            prompt: Color::LightGreen,
            link: Color::LightGreen,
            danger: Color::LightRed,
            muted: Color::Rgb(0, 110, 0),
            border: Color::Green,
            background: Color::Black,
            rain_head: Color::Rgb(0, 255, 0),
            rain_tail: Color::Rgb(0, 90, 0),
        },
    }
}

fn kind_style(kind: BlockKind, palette: UiPalette) -> Style {
    let base = Style::default().fg(palette.text);
    match kind {
        BlockKind::Echo | BlockKind::Output | BlockKind::Blank => base,
        BlockKind::Welcome => base.fg(palette.accent),
        BlockKind::Loading => base.fg(palette.muted).add_modifier(Modifier::ITALIC),
        BlockKind::Error => base.fg(palette.danger),
    }
}

/// Flattens the transcript into terminal lines. Link targets are shown
/// after their label unless the label already is the target.
fn build_transcript_lines(state: &FolioState, palette: UiPalette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in state.transcript.iter() {
        let style = kind_style(block.kind, palette);
        let strong = if block.kind == BlockKind::Echo {
            style.fg(palette.prompt).add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::BOLD)
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for segment in &block.segments {
            match segment {
                Segment::Text(text) => spans.push(Span::styled(text.clone(), style)),
                Segment::Strong(text) => spans.push(Span::styled(text.clone(), strong)),
                Segment::Link { label, target } => {
                    spans.push(Span::styled(
                        label.clone(),
                        Style::default()
                            .fg(palette.link)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                    if label != target {
                        spans.push(Span::styled(
                            format!(" <{target}>"),
                            Style::default().fg(palette.muted),
                        ));
                    }
                }
                Segment::Break => lines.push(Line::from(std::mem::take(&mut spans))),
                Segment::Preformatted(text) => {
                    if !spans.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut spans)));
                    }
                    for row in text.lines() {
                        lines.push(Line::from(Span::styled(
                            row.to_string(),
                            Style::default().fg(palette.accent),
                        )));
                    }
                }
            }
        }
        let ends_preformatted = matches!(block.segments.last(), Some(Segment::Preformatted(_)));
        if !spans.is_empty() || !ends_preformatted {
            lines.push(Line::from(spans));
        }
    }
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Viewport {
    lines: u16,
    height: u16,
}

impl Viewport {
    fn bottom(self) -> u16 {
        self.lines.saturating_sub(self.height)
    }
}

fn transcript_body(state: &FolioState, palette: UiPalette) -> Paragraph<'static> {
    Paragraph::new(build_transcript_lines(state, palette)).wrap(Wrap { trim: false })
}

/// Rows the transcript occupies once wrapped to `width` columns.
fn wrapped_rows(body: &Paragraph<'_>, width: u16) -> u16 {
    u16::try_from(body.line_count(width)).unwrap_or(u16::MAX)
}

fn transcript_viewport(state: &FolioState, size: Size) -> Viewport {
    let body = transcript_body(state, palette_for(state.customization.theme));
    // Borders of the transcript block take two rows and two columns.
    Viewport {
        lines: wrapped_rows(&body, size.width.saturating_sub(2)),
        height: size
            .height
            .saturating_sub(INPUT_HEIGHT + FOOTER_HEIGHT)
            .saturating_sub(2),
    }
}

fn get_spinner() -> &'static str {
    let frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    frames[(millis / 100) as usize % frames.len()]
}

enum KeyHandlerResult {
    Continue(Vec<FolioEffect>),
    Exit,
}

fn handle_scroll_keys(
    key: event::KeyEvent,
    state: &mut FolioState,
    viewport: Viewport,
) -> Vec<FolioEffect> {
    let mut effects = Vec::new();
    match key.code {
        KeyCode::PageUp => {
            if state.selection.stick_to_bottom {
                let new_scroll = viewport.bottom().saturating_sub(PAGE_LINES as u16);
                effects.extend(reduce(
                    state,
                    FolioAction::User(UserAction::SetScroll(new_scroll)),
                ));
                effects.extend(reduce(
                    state,
                    FolioAction::User(UserAction::SetStickToBottom(false)),
                ));
            } else {
                effects.extend(reduce(
                    state,
                    FolioAction::User(UserAction::ScrollTranscript(-PAGE_LINES)),
                ));
            }
        }
        KeyCode::PageDown => {
            if !state.selection.stick_to_bottom {
                effects.extend(reduce(
                    state,
                    FolioAction::User(UserAction::ScrollTranscript(PAGE_LINES)),
                ));
                if state.selection.scroll >= viewport.bottom() {
                    effects.extend(reduce(
                        state,
                        FolioAction::User(UserAction::SetStickToBottom(true)),
                    ));
                }
            }
        }
        KeyCode::End => {
            effects.extend(reduce(
                state,
                FolioAction::User(UserAction::SetStickToBottom(true)),
            ));
        }
        _ => {}
    }
    effects
}

fn handle_input_keys(key: event::KeyEvent, state: &mut FolioState) -> Vec<FolioEffect> {
    let action = match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            UserAction::InputClearLine
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => return Vec::new(),
        KeyCode::Char(c) => UserAction::InputChar(c),
        KeyCode::Backspace => UserAction::InputBackspace,
        KeyCode::Tab => UserAction::Complete,
        KeyCode::Up => UserAction::HistoryUp,
        KeyCode::Down => UserAction::HistoryDown,
        KeyCode::Enter => UserAction::Submit,
        _ => return Vec::new(),
    };
    reduce(state, FolioAction::User(action))
}

fn handle_key_event(
    key: event::KeyEvent,
    state: &mut FolioState,
    viewport: Viewport,
) -> KeyHandlerResult {
    if key.kind != KeyEventKind::Press {
        return KeyHandlerResult::Continue(Vec::new());
    }
    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        return KeyHandlerResult::Exit;
    }

    match key.code {
        KeyCode::PageUp | KeyCode::PageDown | KeyCode::End => {
            KeyHandlerResult::Continue(handle_scroll_keys(key, state, viewport))
        }
        _ => KeyHandlerResult::Continue(handle_input_keys(key, state)),
    }
}

fn start_welcome(state: &mut FolioState, tx: &mpsc::Sender<UiEvent>) {
    let welcome = &state.config.welcome;
    if !welcome.enabled {
        reduce(state, FolioAction::Runtime(RuntimeAction::WelcomeFinished));
        return;
    }

    let messages = welcome.messages.clone();
    log::debug!(
        "typing {} welcome line(s) over {:?}",
        messages.len(),
        typewriter::total_duration(&messages)
    );
    let tx = tx.clone();
    thread::spawn(move || {
        typewriter::play(&messages, thread::sleep, |event| {
            let _ = tx.send(UiEvent::Typewriter(event));
        });
    });
}

fn spawn_fetch(
    source: &SharedSource,
    tx: &mpsc::Sender<UiEvent>,
    placeholder: folio_core::transcript::BlockId,
    account: String,
    limit: u8,
) {
    let source = Arc::clone(source);
    let tx = tx.clone();
    thread::spawn(move || {
        let outcome = fetch::resolve(source.as_ref(), &account, limit);
        if tx.send(UiEvent::Repos { placeholder, outcome }).is_err() {
            log::debug!("ui closed before repositories for {account} arrived");
        }
    });
}

fn apply_ui_event(state: &mut FolioState, event: UiEvent) {
    let action = match event {
        UiEvent::Typewriter(TypewriterEvent::LineStarted) => RuntimeAction::WelcomeLineStarted,
        UiEvent::Typewriter(TypewriterEvent::Char(c)) => RuntimeAction::WelcomeChar(c),
        UiEvent::Typewriter(TypewriterEvent::Finished) => RuntimeAction::WelcomeFinished,
        UiEvent::Repos {
            placeholder,
            outcome,
        } => RuntimeAction::ResolveRepositories {
            placeholder,
            outcome,
        },
    };
    reduce(state, FolioAction::Runtime(action));
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut FolioState,
    source: SharedSource,
) -> io::Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut rain = MatrixRain::new(0, 0);
    let mut last_rain = Instant::now();

    start_welcome(state, &tx);

    loop {
        // Background events (typewriter, repository fetches)
        while let Ok(event) = rx.try_recv() {
            apply_ui_event(state, event);
        }

        let size = terminal.size()?;
        if state.rain_visible() && last_rain.elapsed() >= RAIN_PERIOD {
            rain.resize(size.width / 2, size.height);
            rain.tick();
            last_rain = Instant::now();
        }

        let rain_layer = state.rain_visible().then_some(&rain);
        terminal.draw(|f| ui(f, state, rain_layer))?;

        if event::poll(Duration::from_millis(16))? {
            let mut effects = Vec::new();
            if let Event::Key(key) = event::read()? {
                match handle_key_event(key, state, transcript_viewport(state, size)) {
                    KeyHandlerResult::Continue(e) => effects.extend(e),
                    KeyHandlerResult::Exit => return Ok(()),
                }
            }

            for effect in effects {
                match effect {
                    FolioEffect::FetchRepositories {
                        placeholder,
                        account,
                        limit,
                    } => spawn_fetch(&source, &tx, placeholder, account, limit),
                    FolioEffect::RequestFrame => {}
                }
            }
        }
    }
}

/// Paints the rain grid; every glyph column is two cells wide.
struct RainLayer<'a> {
    rain: &'a MatrixRain,
    palette: UiPalette,
}

impl Widget for RainLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.rain.rows().min(area.height) {
            for column in 0..self.rain.columns() {
                let Some(cell) = self.rain.cell(column, row) else {
                    continue;
                };
                let x = area.x.saturating_add(column.saturating_mul(2));
                if x >= area.right() {
                    break;
                }
                let color = if cell.intensity == TRAIL_TICKS {
                    self.palette.rain_head
                } else {
                    self.palette.rain_tail
                };
                let mut style = Style::default().fg(color);
                if cell.intensity < TRAIL_TICKS / 2 {
                    style = style.add_modifier(Modifier::DIM);
                }
                if let Some(target) = buf.cell_mut((x, area.y + row)) {
                    target.set_char(cell.glyph).set_style(style);
                }
            }
        }
    }
}

fn ui(f: &mut ratatui::Frame, state: &FolioState, rain: Option<&MatrixRain>) {
    let palette = palette_for(state.customization.theme);
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );
    if let Some(rain) = rain {
        f.render_widget(RainLayer { rain, palette }, area);
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Transcript
            Constraint::Length(INPUT_HEIGHT),  // Input
            Constraint::Length(FOOTER_HEIGHT), // Footer
        ])
        .split(area);

    let body = transcript_body(state, palette);
    let scroll = if state.selection.stick_to_bottom {
        let rows = wrapped_rows(&body, chunks[0].width.saturating_sub(2));
        rows.saturating_sub(chunks[0].height.saturating_sub(2))
    } else {
        state.selection.scroll
    };
    let transcript = body
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(
                    format!(" {} ", state.profile.name),
                    Style::default().fg(palette.accent),
                )),
        )
        .scroll((scroll, 0));
    f.render_widget(transcript, chunks[0]);

    let interaction = &state.interaction;
    let input_style = if interaction.input_enabled {
        Style::default().fg(palette.text)
    } else {
        Style::default().fg(palette.muted)
    };
    let mut input_spans = vec![
        Span::styled(
            state.prompt.to_string(),
            Style::default()
                .fg(palette.prompt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(interaction.input.clone(), input_style),
    ];
    if interaction.input_enabled && interaction.input_focused {
        input_spans.push(Span::styled("█", Style::default().fg(palette.accent)));
    }
    let input = Paragraph::new(Line::from(input_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(
                format!(" {} ", state.customization.theme.label()),
                Style::default().fg(palette.muted),
            )),
    );
    f.render_widget(input, chunks[1]);

    let mut footer = vec![Span::styled(
        "Tab complete · ↑/↓ history · PgUp/PgDn scroll · Esc quit",
        Style::default().fg(palette.muted),
    )];
    if interaction.pending_fetches > 0 {
        footer.push(Span::styled(
            format!("  {} fetching", get_spinner()),
            Style::default().fg(palette.accent),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(footer)), chunks[2]);
}
