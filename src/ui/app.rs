//! Main TUI application state and logic

use crate::config::Config;
use crate::replay::Replay;
use crate::trace::evaluate;
use crate::ui::panes::{self, PlaybackBadge};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Whether keystrokes edit the input line or drive playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    Viewing,
}

/// The main application state
pub struct App {
    /// Text in the input line
    pub input: String,

    /// Cursor position in the input line, in chars
    pub cursor: usize,

    pub mode: InputMode,

    /// Input as it was when last checked
    pub checked_input: String,

    /// Playback of the last check; `None` after a reset
    pub replay: Option<Replay>,

    /// Scroll offset of the trace log (`usize::MAX` follows the newest step)
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between steps in auto-play mode
    pub interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            cursor: config.input.chars().count(),
            input: config.input.clone(),
            mode: InputMode::Viewing,
            checked_input: String::new(),
            replay: None,
            log_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            interval: config.interval,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

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

    /// Advance auto-play if the interval has elapsed at `now`
    pub fn tick(&mut self, now: Instant) {
        if !self.is_playing || now.duration_since(self.last_play_time) < self.interval {
            return;
        }
        self.last_play_time = now;

        let Some(replay) = self.replay.as_mut() else {
            self.is_playing = false;
            return;
        };

        match replay.step_forward() {
            Ok(_) => {
                self.status_message = "Playing...".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(_) => {
                self.is_playing = false;
                self.status_message = "Playback complete".to_string();
            }
        }
    }

    /// Evaluate the input line and start playing the new trace
    pub fn check(&mut self) {
        self.mode = InputMode::Viewing;
        self.log_scroll = 0;

        if self.input.is_empty() {
            self.replay = None;
            self.checked_input.clear();
            self.is_playing = false;
            self.status_message = "Nothing to check".to_string();
            return;
        }

        let trace = evaluate(&self.input);
        info!(
            input = %self.input,
            steps = trace.len(),
            is_valid = trace.is_valid,
            "checked input"
        );

        self.checked_input = self.input.clone();
        self.replay = Some(Replay::new(trace));
        self.is_playing = true;
        self.last_play_time = Instant::now()
            .checked_sub(self.interval)
            .unwrap_or(Instant::now());
        self.status_message = "Playing...".to_string();
    }

    /// Discard the current trace and playback position
    pub fn reset(&mut self) {
        debug!("reset playback");
        self.replay = None;
        self.checked_input.clear();
        self.is_playing = false;
        self.log_scroll = 0;
        self.status_message = "Reset".to_string();
    }

    fn badge(&self) -> PlaybackBadge {
        if self.mode == InputMode::Editing {
            return PlaybackBadge::Editing;
        }
        match &self.replay {
            None => PlaybackBadge::None,
            Some(_) if self.is_playing => PlaybackBadge::Playing,
            Some(replay) if replay.is_finished() => PlaybackBadge::End {
                is_valid: replay.trace().is_valid,
            },
            Some(replay) if replay.is_at_start() => PlaybackBadge::Start,
            Some(_) => PlaybackBadge::None,
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input line
                Constraint::Length(3), // Input string cells
                Constraint::Length(3), // Stack
                Constraint::Length(3), // Status message
                Constraint::Min(0),    // Trace log
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        let badge = self.badge();
        let current = self.replay.as_ref().and_then(Replay::current);

        panes::render_editor_pane(
            frame,
            main_chunks[0],
            &self.input,
            self.cursor,
            self.mode == InputMode::Editing,
        );

        panes::render_chars_pane(
            frame,
            main_chunks[1],
            &self.checked_input,
            current.map(|step| (step.index, step.status)),
        );

        panes::render_stack_pane(
            frame,
            main_chunks[2],
            current.map(|step| step.stack_snapshot.as_slice()),
        );

        panes::render_message_pane(frame, main_chunks[3], current);

        let revealed = self.replay.as_ref().map(Replay::revealed).unwrap_or(&[]);
        panes::render_log_pane(
            frame,
            main_chunks[4],
            revealed,
            self.mode == InputMode::Viewing,
            &mut self.log_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[5],
            &self.status_message,
            self.replay.as_ref().map_or(0, Replay::position),
            self.replay.as_ref().map(Replay::total),
            badge,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Viewing => self.handle_viewing_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.check(),
            KeyCode::Esc => {
                self.mode = InputMode::Viewing;
                self.status_message = "Press c to check".to_string();
            }
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.input.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.chars().count(),
            _ => {}
        }
    }

    fn handle_viewing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('e') | KeyCode::Char('i') => {
                self.is_playing = false;
                self.mode = InputMode::Editing;
                self.status_message = "Editing input".to_string();
            }
            KeyCode::Char('c') => self.check(),
            KeyCode::Char('r') => self.reset(),
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                if let Some(replay) = self.replay.as_mut() {
                    let stepped = replay.step_forward_by(n);
                    self.status_message = format!("Stepped forward {} step(s)", stepped);
                    self.log_scroll = usize::MAX;
                }
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => self.log_scroll = self.log_scroll.saturating_sub(1),
            KeyCode::Down => self.log_scroll = self.log_scroll.saturating_add(1),
            KeyCode::Char(' ') => {
                if self.replay.is_none() {
                    self.status_message = "Nothing to play; press c to check".to_string();
                    return;
                }
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    if let Some(replay) = self.replay.as_mut() {
                        if replay.is_finished() {
                            replay.rewind_to_start();
                        }
                    }
                    self.last_play_time = Instant::now()
                        .checked_sub(self.interval)
                        .unwrap_or(Instant::now());
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                if let Some(replay) = self.replay.as_mut() {
                    replay.jump_to_end();
                    self.status_message = "Jumped to end".to_string();
                    self.log_scroll = usize::MAX;
                }
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                if let Some(replay) = self.replay.as_mut() {
                    replay.rewind_to_start();
                    self.status_message = "Jumped to start".to_string();
                    self.log_scroll = 0;
                }
            }
            _ => {}
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        let Some(replay) = self.replay.as_mut() else {
            self.status_message = "Nothing checked yet".to_string();
            return;
        };
        match replay.step_forward() {
            Ok(_) => {
                self.status_message = "Stepped forward".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        let Some(replay) = self.replay.as_mut() else {
            self.status_message = "Nothing checked yet".to_string();
            return;
        };
        match replay.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(offset, _)| offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app_with(input: &str) -> App {
        let config = Config {
            input: input.to_string(),
            ..Config::default()
        };
        App::new(&config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(200, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_check_starts_playback() {
        let mut app = app_with("()");
        app.check();
        assert!(app.is_playing);
        assert_eq!(app.checked_input, "()");
        assert_eq!(app.replay.as_ref().unwrap().total(), 2);
    }

    #[test]
    fn test_check_empty_input_clears_replay() {
        let mut app = app_with("(");
        app.check();
        app.input.clear();
        app.check();
        assert!(app.replay.is_none());
        assert!(!app.is_playing);
        assert_eq!(app.status_message, "Nothing to check");
    }

    #[test]
    fn test_tick_reveals_one_step_per_interval() {
        let mut app = app_with("(]");
        app.check();
        let start = app.last_play_time;

        app.tick(start + app.interval);
        assert_eq!(app.replay.as_ref().unwrap().position(), 1);

        // Not enough time has passed since the last step
        app.tick(start + app.interval + Duration::from_millis(1));
        assert_eq!(app.replay.as_ref().unwrap().position(), 1);

        app.tick(start + app.interval * 2);
        app.tick(start + app.interval * 3);
        assert_eq!(app.replay.as_ref().unwrap().position(), 2);
        assert!(!app.is_playing);
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_reset_discards_trace() {
        let mut app = app_with("{}");
        app.check();
        press(&mut app, KeyCode::Char('r'));
        assert!(app.replay.is_none());
        assert!(app.checked_input.is_empty());
        assert!(!app.is_playing);
    }

    #[test]
    fn test_manual_stepping() {
        let mut app = app_with("(())");
        app.check();
        press(&mut app, KeyCode::Right);
        assert!(!app.is_playing);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.replay.as_ref().unwrap().position(), 3);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.replay.as_ref().unwrap().position(), 2);
        press(&mut app, KeyCode::Enter);
        assert!(app.replay.as_ref().unwrap().is_finished());
        press(&mut app, KeyCode::Right);
        assert!(app.status_message.starts_with("Cannot step forward"));
        press(&mut app, KeyCode::Backspace);
        assert!(app.replay.as_ref().unwrap().is_at_start());
    }

    #[test]
    fn test_editing_input() {
        let mut app = app_with("()");
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, InputMode::Editing);
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.input, "[()]");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('}'));
        assert_eq!(app.input, "[()}");

        // 'q' is text while editing
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Backspace);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, InputMode::Viewing);
        assert_eq!(app.checked_input, "[()}");
        assert!(!app.replay.as_ref().unwrap().trace().is_valid);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with("");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = app_with("");
        press(&mut app, KeyCode::Char('e'));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_error_message() {
        let mut app = app_with("(]");
        app.check();
        press(&mut app, KeyCode::Enter);
        let text = screen_text(&mut app);
        assert!(text.contains("Mismatched brackets"));
        assert!(text.contains("NOT BALANCED"));
        assert!(text.contains("Step 2/2"));
    }

    #[test]
    fn test_render_before_check() {
        let mut app = app_with("{()}[]");
        let text = screen_text(&mut app);
        assert!(text.contains("{()}[]"));
        assert!(text.contains("(nothing checked)"));
        assert!(text.contains("Step -/-"));
    }
}
