//! Main TUI application state and logic

use crate::catalog;
use crate::engine::{AlgorithmId, RunOutput, SortError};
use crate::playback::{ArrayView, Playback, Speed};
use crate::race::RaceResult;
use crate::trace::RunMetrics;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the event loop blocks waiting for input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Space presses closer together than this are key repeat
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// One replayable run: a learn session has one lane, a race has one per entry
pub struct Lane {
    /// Id as requested
    pub label: String,
    /// `None` when the label is not a known algorithm
    pub algorithm: Option<AlgorithmId>,
    pub playback: Playback,
    pub view: ArrayView,
    pub metrics: Option<RunMetrics>,
    pub error: Option<String>,
}

impl Lane {
    pub fn from_output(label: impl Into<String>, output: &RunOutput, speed: Speed) -> Self {
        let mut playback = Playback::new(speed);
        let mut view = ArrayView::default();
        playback.load(output.trace.clone(), &mut view);
        Lane {
            label: label.into(),
            algorithm: Some(output.algorithm),
            playback,
            view,
            metrics: Some(output.metrics),
            error: None,
        }
    }

    pub fn failed(label: impl Into<String>, err: &SortError) -> Self {
        let label = label.into();
        Lane {
            algorithm: label.parse().ok(),
            label,
            playback: Playback::default(),
            view: ArrayView::default(),
            metrics: None,
            error: Some(err.public_message()),
        }
    }

    /// Display name: the catalog name when known, the raw id otherwise
    pub fn title(&self) -> String {
        match self.algorithm {
            Some(id) => catalog::info(id).name.to_string(),
            None => self.label.clone(),
        }
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.playback.poll(now, &mut self.view)
    }

    fn step(&mut self) -> bool {
        self.playback.step(&mut self.view)
    }

    fn finish(&mut self) -> usize {
        self.playback.finish(&mut self.view)
    }

    fn reset(&mut self) {
        self.playback.reset(&mut self.view);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Single algorithm with its step log
    Learn,
    /// Lanes side by side with a leaderboard
    Race { winner: Option<String> },
}

/// The main application state
pub struct App {
    pub lanes: Vec<Lane>,

    pub mode: AppMode,

    /// Index into `lanes` of the focused lane
    pub focused: usize,

    /// Step log scroll offset (`usize::MAX` follows the newest step)
    pub log_scroll: usize,

    /// Speed applied to every lane
    pub speed: Speed,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    fn with_lanes(lanes: Vec<Lane>, mode: AppMode, speed: Speed) -> Self {
        App {
            lanes,
            mode,
            focused: 0,
            log_scroll: 0,
            speed,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Replay a single run with its step log
    pub fn learn(output: &RunOutput, speed: Speed) -> Self {
        let lane = Lane::from_output(output.algorithm.as_str(), output, speed);
        App::with_lanes(vec![lane], AppMode::Learn, speed)
    }

    /// Replay every race entry side by side, failed entries included
    pub fn race(result: &RaceResult, speed: Speed) -> Self {
        let lanes = result
            .entries()
            .iter()
            .map(|(id, entry)| match entry {
                Ok(output) => Lane::from_output(id.as_str(), output, speed),
                Err(err) => Lane::failed(id.as_str(), err),
            })
            .collect();
        let mode = AppMode::Race {
            winner: result.winner().map(str::to_string),
        };
        let mut app = App::with_lanes(lanes, mode, speed);
        if let Some(winner) = result.winner() {
            app.status_message = format!("{} wins", winner);
        }
        app
    }

    pub fn focused_lane(&self) -> Option<&Lane> {
        self.lanes.get(self.focused)
    }

    pub fn is_playing(&self) -> bool {
        self.lanes.iter().any(|lane| lane.playback.is_playing())
    }

    /// Every lane that has a trace has replayed all of it
    pub fn is_complete(&self) -> bool {
        self.lanes
            .iter()
            .filter(|lane| lane.playback.trace().is_some())
            .all(|lane| lane.playback.is_complete())
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            self.tick(now);

            // Wake up for the next due step, but keep polling for keys
            let timeout = self
                .lanes
                .iter()
                .filter_map(|lane| lane.playback.time_until_next(now))
                .min()
                .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance every playing lane whose step is due
    pub fn tick(&mut self, now: Instant) {
        let was_playing = self.is_playing();
        let mut stepped = false;
        for lane in &mut self.lanes {
            stepped |= lane.tick(now);
        }
        if stepped {
            self.log_scroll = usize::MAX;
        }
        if was_playing && !self.is_playing() {
            self.status_message = "Playback complete".to_string();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        match self.mode.clone() {
            AppMode::Learn => self.render_learn(frame, main_chunks[0]),
            AppMode::Race { winner } => self.render_race(frame, main_chunks[0], winner.as_deref()),
        }

        let (applied, total) = self
            .focused_lane()
            .map_or((0, 0), |lane| (lane.view.applied, lane.playback.len()));
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                applied,
                total,
                speed: self.speed,
                is_playing: self.is_playing(),
                is_complete: self.is_complete(),
            },
        );
    }

    fn render_learn(&mut self, frame: &mut Frame, area: Rect) {
        let Some(lane) = self.lanes.first() else {
            return;
        };

        // Bars and log on the left, algorithm info on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        super::panes::render_bars_pane(frame, left_rows[0], lane, true, false);
        super::panes::render_log_pane(
            frame,
            left_rows[1],
            lane.playback.trace().map(|t| &**t),
            lane.view.applied,
            false,
            &mut self.log_scroll,
        );
        super::panes::render_info_pane(frame, columns[1], lane);
    }

    fn render_race(&self, frame: &mut Frame, area: Rect, winner: Option<&str>) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        // One row per lane, equal heights
        let count = self.lanes.len().max(1) as u32;
        let lane_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.lanes
                    .iter()
                    .map(|_| Constraint::Ratio(1, count))
                    .collect::<Vec<_>>(),
            )
            .split(columns[0]);

        for (i, lane) in self.lanes.iter().enumerate() {
            let is_winner = winner == Some(lane.label.as_str());
            super::panes::render_bars_pane(frame, lane_rows[i], lane, i == self.focused, is_winner);
        }

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        super::panes::render_leaderboard_pane(frame, right_rows[0], &self.lanes, winner);
        if let Some(lane) = self.focused_lane() {
            super::panes::render_info_pane(frame, right_rows[1], lane);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = usize::from(c as u8 - b'0');
                let stepped = self.step_all(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                if !self.lanes.is_empty() {
                    self.focused = (self.focused + 1) % self.lanes.len();
                }
            }
            KeyCode::BackTab => {
                if !self.lanes.is_empty() {
                    self.focused = (self.focused + self.lanes.len() - 1) % self.lanes.len();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.step_all(1) > 0 {
                    self.status_message = self
                        .focused_lane()
                        .map(|lane| lane.view.message.clone())
                        .unwrap_or_default();
                } else {
                    self.status_message = "Already at the end".to_string();
                }
            }
            KeyCode::Up => {
                self.log_scroll = self.log_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.log_scroll = self.log_scroll.saturating_add(1);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_speed(self.speed.faster());
            }
            KeyCode::Char('-') => {
                self.set_speed(self.speed.slower());
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (debounced against key repeat)
                if self.last_space_press.elapsed() >= SPACE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    self.toggle_play(Instant::now());
                }
            }
            KeyCode::Enter => {
                for lane in &mut self.lanes {
                    lane.finish();
                }
                self.status_message = "Jumped to end".to_string();
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace | KeyCode::Char('r') => {
                for lane in &mut self.lanes {
                    lane.reset();
                }
                self.status_message = "Jumped to start".to_string();
                self.log_scroll = 0;
            }
            _ => {}
        }
    }

    /// Pause every lane if any is playing, otherwise start them all
    pub fn toggle_play(&mut self, now: Instant) {
        if self.is_playing() {
            for lane in &mut self.lanes {
                lane.playback.pause();
            }
            self.status_message = "Paused".to_string();
        } else {
            let mut started = false;
            for lane in &mut self.lanes {
                started |= lane.playback.play(now);
            }
            self.status_message = if started {
                "Playing...".to_string()
            } else {
                "Nothing left to play".to_string()
            };
        }
    }

    /// Step every lane up to `n` times; returns the most steps any lane took
    fn step_all(&mut self, n: usize) -> usize {
        let mut most = 0;
        for lane in &mut self.lanes {
            let taken = (0..n).take_while(|_| lane.step()).count();
            most = most.max(taken);
        }
        self.log_scroll = usize::MAX;
        most
    }

    fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        for lane in &mut self.lanes {
            lane.playback.set_speed(speed);
        }
        self.status_message = format!("Speed {}", speed.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::playback::PlaybackState;
    use crate::race;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn learn_app() -> App {
        let output = engine::run(AlgorithmId::Bubble, &[5, 3, 8, 1]).unwrap();
        App::learn(&output, Speed::default())
    }

    #[test]
    fn test_number_keys_step_forward() {
        let mut app = learn_app();
        press(&mut app, KeyCode::Char('3'));
        let lane = app.focused_lane().unwrap();
        assert_eq!(lane.view.applied, 3);
        assert_eq!(lane.playback.state(), PlaybackState::Paused);
        assert_eq!(app.status_message, "Stepped forward 3 step(s)");
    }

    #[test]
    fn test_enter_and_backspace_jump() {
        let mut app = learn_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.is_complete());
        assert_eq!(app.lanes[0].view.values, vec![1, 3, 5, 8]);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.status_message, "Already at the end");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.lanes[0].playback.state(), PlaybackState::Ready);
        assert_eq!(app.lanes[0].view.values, vec![5, 3, 8, 1]);
    }

    #[test]
    fn test_play_runs_to_completion() {
        let mut app = learn_app();
        let start = Instant::now();
        app.toggle_play(start);
        assert!(app.is_playing());

        let total = app.lanes[0].playback.len();
        let delay = app.speed.delay();
        for n in 0..total {
            app.tick(start + delay * n as u32);
        }
        assert!(app.is_complete());
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_speed_keys_apply_to_lanes() {
        let mut app = learn_app();
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.speed.get(), 6);
        assert_eq!(app.lanes[0].playback.speed().get(), 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.speed.get(), 1);
    }

    #[test]
    fn test_learn_renders() {
        let mut app = learn_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        press(&mut app, KeyCode::Char('2'));
        terminal.draw(|f| app.render(f)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Bubble Sort"));
        assert!(text.contains("Steps"));
        assert!(text.contains("compare"));
    }

    #[test]
    fn test_race_lanes_and_focus() {
        let result = race::race(&["quick", "bogo", "heap"], &[5, 3, 8, 1, 9, 2]).unwrap();
        let mut app = App::race(&result, Speed::new(10));
        assert_eq!(app.lanes.len(), 3);

        // Lanes follow sorted id order
        assert_eq!(app.lanes[0].label, "bogo");
        assert!(app.lanes[0].error.is_some());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, 1);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused, 2);

        press(&mut app, KeyCode::Enter);
        assert!(app.is_complete());

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Results"));
        assert!(text.contains("Unknown algorithm 'bogo'"));
    }

    #[test]
    fn test_quit() {
        let mut app = learn_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
