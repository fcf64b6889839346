//! Main TUI application state and logic

use crate::input::{self, random, InputData, InputError, PRESETS};
use crate::listing::Language;
use crate::playback::Player;
use crate::prefs::Preferences;
use crate::steps::{generate_steps, Step};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Auto-play delay at 1x
const BASE_INTERVAL: Duration = Duration::from_secs(1);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Array,
    HashMap,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> array -> hashmap)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Array,
            FocusedPane::Array => FocusedPane::HashMap,
            FocusedPane::HashMap => FocusedPane::Source,
        }
    }
}

/// Keyboard mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Editing the input line; `error` holds the last rejection
    Editing {
        buffer: String,
        error: Option<String>,
    },
}

/// The main application state
pub struct App {
    /// Input the current steps were generated from
    pub input: InputData,

    /// Generated steps for `input`
    pub steps: Vec<Step>,

    /// Playback position over `steps`
    pub player: Player,

    /// Display language of the source pane
    pub language: Language,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub source_scroll: super::panes::SourceScrollState,
    pub hashmap_scroll: super::panes::HashMapScrollState,

    pub mode: Mode,

    /// Next preset `p` will load
    pub next_preset: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app for an already validated input
    pub fn new(input: InputData, prefs: Preferences) -> Self {
        let steps = generate_steps(&input.nums, input.target);
        let mut player = Player::new(steps.len());
        player.set_rate(prefs.playback_rate);

        App {
            input,
            steps,
            player,
            language: prefs.language,
            focused_pane: FocusedPane::Source,
            source_scroll: super::panes::SourceScrollState::default(),
            hashmap_scroll: super::panes::HashMapScrollState::default(),
            mode: Mode::Normal,
            next_preset: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Preferences to persist on exit
    pub fn preferences(&self) -> Preferences {
        Preferences {
            playback_rate: self.player.rate(),
            language: self.language,
        }
    }

    /// Step currently shown
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.player.current_step_index())
    }

    /// Validate `data`, regenerate the steps and rewind the player
    pub fn load_input(&mut self, data: InputData) -> Result<(), InputError> {
        input::validate_input(&data)?;
        self.steps = generate_steps(&data.nums, data.target);
        self.player.load(self.steps.len());
        self.hashmap_scroll = super::panes::HashMapScrollState::default();
        tracing::info!(
            len = data.nums.len(),
            target = data.target,
            steps = self.steps.len(),
            "Loaded new input"
        );
        self.input = data;
        Ok(())
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.on_tick();

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance auto-play when its interval has elapsed
    pub fn on_tick(&mut self) {
        if !self.player.is_playing() {
            return;
        }
        if self.last_play_time.elapsed() >= self.player.interval(BASE_INTERVAL) {
            if self.player.tick() {
                self.status_message = "Playing...".to_string();
            } else {
                self.status_message = "Playback complete".to_string();
            }
            self.last_play_time = Instant::now();
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        // Left column: Source (top) | Info (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(14), Constraint::Min(0)])
            .split(columns[0]);

        // Right column: Array (top) | HashMap (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let current = self.player.current_step_index();

        if let Some(step) = self.steps.get(current) {
            super::panes::render_source_pane(
                frame,
                left_rows[0],
                self.language,
                step.current_line,
                &step.variables,
                self.focused_pane == FocusedPane::Source,
                &mut self.source_scroll,
            );

            super::panes::render_array_pane(
                frame,
                right_rows[0],
                step,
                self.input.target,
                self.focused_pane == FocusedPane::Array,
            );

            super::panes::render_hashmap_pane(
                frame,
                right_rows[1],
                step,
                self.focused_pane == FocusedPane::HashMap,
                &mut self.hashmap_scroll,
            );
        }

        super::panes::render_info_pane(frame, left_rows[1], &self.steps, current);

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            &self.player,
            self.language,
            matches!(self.mode, Mode::Editing { .. }),
        );

        if let Mode::Editing { buffer, error } = &self.mode {
            super::panes::render_input_prompt(frame, pane_area, buffer, error.as_deref());
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if matches!(self.mode, Mode::Editing { .. }) {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.player.pause();
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if !self.player.next() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.player.pause();
                self.status_message = if self.player.prev() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.player.pause();
                self.status_message = if self.player.next() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::HashMap => {
                    self.hashmap_scroll.offset = self.hashmap_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Array => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling down makes the current line move up visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::HashMap => {
                    self.hashmap_scroll.offset = self.hashmap_scroll.offset.saturating_add(1);
                }
                FocusedPane::Array => {}
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.player.toggle();
                    if self.player.is_playing() {
                        // First step happens on the next tick
                        self.last_play_time = Instant::now()
                            .checked_sub(self.player.interval(BASE_INTERVAL))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.player.pause();
                self.player.seek(usize::MAX);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.player.reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.player.faster();
                self.status_message = format!("Speed {}", self.player.rate());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.player.slower();
                self.status_message = format!("Speed {}", self.player.rate());
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.language = self.language.next();
                self.status_message = format!("Language: {}", self.language.label());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let data = random::random_input();
                self.apply_input(data, "Random input");
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                let preset = &PRESETS[self.next_preset % PRESETS.len()];
                self.next_preset = (self.next_preset + 1) % PRESETS.len();
                self.apply_input(preset.input(), preset.label);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.player.pause();
                self.mode = Mode::Editing {
                    buffer: input::format_input_line(&self.input),
                    error: None,
                };
                self.status_message = "Editing input".to_string();
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Mode::Editing { buffer, error } = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Enter => {
                let parsed = input::parse_input_line(buffer);
                match parsed.and_then(|data| self.load_input(data)) {
                    Ok(()) => {
                        self.mode = Mode::Normal;
                        self.status_message = "Input applied".to_string();
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Rejected edited input");
                        if let Mode::Editing { error, .. } = &mut self.mode {
                            *error = Some(e.to_string());
                        }
                    }
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
                *error = None;
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                *error = None;
            }
            _ => {}
        }
    }

    fn apply_input(&mut self, data: InputData, label: &str) {
        self.status_message = match self.load_input(data) {
            Ok(()) => format!("Loaded: {}", label),
            Err(e) => format!("Rejected {}: {}", label, e),
        };
    }
}
