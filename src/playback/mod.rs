//! Trace playback
//!
//! [`Playback`] replays a sealed [`Trace`] one step at a time. It knows nothing
//! about drawing: each applied step is handed to a [`StepSink`], and
//! [`ArrayView`] is the stock sink that keeps the array state a renderer needs.
//!
//! # States
//!
//! ```text
//! Idle --load--> Ready --play--> Playing <--pause/play--> Paused
//!                  ^                |                        |
//!                  |                +------> Complete <------+ (step)
//!                  +--------------- reset / load (from any state)
//! ```
//!
//! # Timing
//!
//! Playback is cooperative. [`Playback::play`] arms a deadline and the owner's
//! event loop calls [`Playback::poll`], which applies at most one step once the
//! deadline has passed and re-arms it one [`Speed::delay`] later. There is no
//! background timer: pausing, loading and resetting clear the deadline, so
//! nothing can fire against a replaced trace.
//!
//! A trace is read-only; several controllers may replay the same
//! `Arc<Trace>` independently (one per race lane).

use crate::engine::constants::{
    DEFAULT_SPEED, DELAY_BASE_MS, DELAY_FLOOR_MS, DELAY_PER_SPEED_MS, MAX_SPEED, MIN_SPEED,
};
use crate::trace::{Element, Step, StepKind, Trace};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::trace;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No trace loaded
    #[default]
    Idle,
    /// Trace loaded, cursor at 0
    Ready,
    Playing,
    Paused,
    /// Cursor at the end of the trace
    Complete,
}

/// Playback speed, 1 (slowest) to 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    /// Clamp into the supported range
    pub fn new(value: u8) -> Self {
        Speed(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Wait between steps: `1100 - speed * 100` ms, at least 50 ms
    pub fn delay(self) -> Duration {
        let ms = DELAY_BASE_MS
            .saturating_sub(u64::from(self.0) * DELAY_PER_SPEED_MS)
            .max(DELAY_FLOOR_MS);
        Duration::from_millis(ms)
    }

    pub fn faster(self) -> Self {
        Speed::new(self.0.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Speed::new(self.0.saturating_sub(1))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(DEFAULT_SPEED)
    }
}

/// Receives the effects of playback
pub trait StepSink {
    /// Step `cursor` of the trace has been applied
    fn apply(&mut self, cursor: usize, step: &Step);

    /// The trace was (re)loaded or reset; show its initial array
    fn restore(&mut self, initial: &[Element]);

    /// The last step has been applied
    fn on_complete(&mut self) {}
}

/// Replay state machine over one trace
#[derive(Debug, Clone, Default)]
pub struct Playback {
    trace: Option<Arc<Trace>>,
    state: PlaybackState,
    cursor: usize,
    speed: Speed,
    next_due: Option<Instant>,
}

impl Playback {
    pub fn new(speed: Speed) -> Self {
        Playback {
            speed,
            ..Playback::default()
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the next step to apply
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of steps in the loaded trace
    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, |t| t.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn trace(&self) -> Option<&Arc<Trace>> {
        self.trace.as_ref()
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Takes effect from the next armed deadline
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Complete
    }

    /// Load a trace, stopping any active playback
    pub fn load(&mut self, trace: Arc<Trace>, sink: &mut impl StepSink) {
        sink.restore(trace.initial());
        self.trace = Some(trace);
        self.rewind();
        trace!(steps = self.len(), "trace loaded");
    }

    /// Go back to the start of the loaded trace, stopping any active playback
    pub fn reset(&mut self, sink: &mut impl StepSink) {
        let Some(trace) = &self.trace else {
            return;
        };
        sink.restore(trace.initial());
        self.rewind();
    }

    fn rewind(&mut self) {
        self.cursor = 0;
        self.next_due = None;
        self.state = PlaybackState::Ready;
    }

    /// Start or resume playback; the first step is due immediately
    ///
    /// Returns `false` when there is nothing to play.
    pub fn play(&mut self, now: Instant) -> bool {
        match self.state {
            PlaybackState::Ready | PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                self.next_due = Some(now);
                trace!(cursor = self.cursor, "playing");
                true
            }
            PlaybackState::Playing => true,
            PlaybackState::Idle | PlaybackState::Complete => false,
        }
    }

    /// Stop at the current step; the step already applied stands
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.state = PlaybackState::Paused;
        self.next_due = None;
        trace!(cursor = self.cursor, "paused");
        true
    }

    /// Play if paused or ready, pause if playing
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play(now)
        }
    }

    /// Apply exactly one step
    ///
    /// Pauses first if playing. Past the end this is a no-op, not an error.
    /// Returns whether a step was applied.
    pub fn step(&mut self, sink: &mut impl StepSink) -> bool {
        match self.state {
            PlaybackState::Idle | PlaybackState::Complete => false,
            PlaybackState::Playing => {
                self.pause();
                self.advance(sink)
            }
            PlaybackState::Ready | PlaybackState::Paused => {
                let applied = self.advance(sink);
                // Ready means cursor 0
                if self.state == PlaybackState::Ready {
                    self.state = PlaybackState::Paused;
                }
                applied
            }
        }
    }

    /// Drive playback from the owner's event loop
    ///
    /// Applies at most one step, and only while playing with the deadline
    /// reached. Returns whether a step was applied.
    pub fn poll(&mut self, now: Instant, sink: &mut impl StepSink) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        match self.next_due {
            Some(due) if now >= due => {}
            _ => return false,
        }

        let applied = self.advance(sink);
        if self.state == PlaybackState::Playing {
            self.next_due = Some(now + self.speed.delay());
        }
        applied
    }

    /// Time left until the next step is due, if playing
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        match (self.state, self.next_due) {
            (PlaybackState::Playing, Some(due)) => Some(due.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Apply every remaining step at once
    pub fn finish(&mut self, sink: &mut impl StepSink) -> usize {
        let mut applied = 0;
        self.pause();
        while self.state != PlaybackState::Complete && self.advance(sink) {
            applied += 1;
        }
        applied
    }

    fn advance(&mut self, sink: &mut impl StepSink) -> bool {
        let Some(trace) = &self.trace else {
            return false;
        };

        let applied = match trace.get(self.cursor) {
            Some(step) => {
                sink.apply(self.cursor, step);
                self.cursor += 1;
                true
            }
            None => false,
        };

        if self.cursor >= trace.len() {
            self.state = PlaybackState::Complete;
            self.next_due = None;
            sink.on_complete();
            trace!(steps = self.cursor, "playback complete");
        }
        applied
    }
}

/// Array state shown by one playback lane
///
/// This is the per-session context a renderer draws from. Each lane owns
/// its own view, so lanes never interfere with each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayView {
    pub values: Vec<Element>,
    /// Positions touched by the last applied step
    pub active: Vec<usize>,
    pub kind: Option<StepKind>,
    pub message: String,
    /// Positions confirmed in their final place
    pub sorted: Vec<bool>,
    /// Number of steps applied so far
    pub applied: usize,
    pub complete: bool,
}

impl ArrayView {
    pub fn new(initial: &[Element]) -> Self {
        let mut view = ArrayView::default();
        view.restore(initial);
        view
    }

    pub fn is_sorted_at(&self, index: usize) -> bool {
        self.sorted.get(index).copied().unwrap_or(false)
    }
}

impl StepSink for ArrayView {
    fn apply(&mut self, cursor: usize, step: &Step) {
        self.values.clone_from(&step.snapshot);
        self.active.clone_from(&step.indices);
        self.kind = Some(step.kind);
        self.message.clone_from(&step.message);
        self.applied = cursor + 1;

        if step.kind == StepKind::MarkSorted {
            for &i in &step.indices {
                if let Some(slot) = self.sorted.get_mut(i) {
                    *slot = true;
                }
            }
        }
    }

    fn restore(&mut self, initial: &[Element]) {
        self.values = initial.to_vec();
        self.active.clear();
        self.kind = None;
        self.message = String::from("Ready!");
        self.sorted = vec![false; initial.len()];
        self.applied = 0;
        self.complete = false;
    }

    fn on_complete(&mut self) {
        self.complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{self, AlgorithmId};

    fn loaded(input: &[Element]) -> (Playback, ArrayView) {
        let out = engine::run(AlgorithmId::Bubble, input).unwrap();
        let mut view = ArrayView::default();
        let mut playback = Playback::new(Speed::new(10));
        playback.load(out.trace, &mut view);
        (playback, view)
    }

    #[test]
    fn test_speed_delay() {
        assert_eq!(Speed::new(1).delay(), Duration::from_millis(1000));
        assert_eq!(Speed::new(5).delay(), Duration::from_millis(600));
        assert_eq!(Speed::new(10).delay(), Duration::from_millis(100));
        assert_eq!(Speed::new(0), Speed::new(1));
        assert_eq!(Speed::new(200), Speed::new(10));
        assert_eq!(Speed::new(10).faster(), Speed::new(10));
        assert_eq!(Speed::new(1).slower(), Speed::new(1));
    }

    #[test]
    fn test_idle_controller_ignores_everything() {
        let mut playback = Playback::default();
        let mut view = ArrayView::default();
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert!(!playback.play(Instant::now()));
        assert!(!playback.step(&mut view));
        playback.reset(&mut view);
        assert_eq!(playback.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_poll_waits_for_deadline() {
        let (mut playback, mut view) = loaded(&[2, 1]);
        let t0 = Instant::now();

        assert!(playback.play(t0));
        assert!(playback.poll(t0, &mut view));
        assert_eq!(playback.cursor(), 1);

        // Next step is due one delay later
        assert!(!playback.poll(t0 + Duration::from_millis(50), &mut view));
        assert_eq!(
            playback.time_until_next(t0),
            Some(Speed::new(10).delay())
        );
        assert!(playback.poll(t0 + Duration::from_millis(100), &mut view));
        assert_eq!(playback.cursor(), 2);
    }

    #[test]
    fn test_pause_stops_polling() {
        let (mut playback, mut view) = loaded(&[3, 2, 1]);
        let t0 = Instant::now();
        playback.play(t0);
        playback.poll(t0, &mut view);
        assert!(playback.pause());
        assert_eq!(playback.state(), PlaybackState::Paused);
        assert!(!playback.poll(t0 + Duration::from_secs(5), &mut view));
        assert_eq!(playback.cursor(), 1);
        assert_eq!(view.applied, 1);
    }

    #[test]
    fn test_play_runs_to_completion_in_order() {
        let (mut playback, mut view) = loaded(&[4, 3, 2, 1]);
        let len = playback.len();
        let mut now = Instant::now();
        playback.play(now);

        let mut applied = 0;
        while playback.is_playing() {
            if playback.poll(now, &mut view) {
                applied += 1;
                assert_eq!(view.applied, applied);
            }
            now += Duration::from_millis(100);
        }

        assert_eq!(applied, len);
        assert!(playback.is_complete());
        assert!(view.complete);
        assert_eq!(view.values, vec![1, 2, 3, 4]);
        assert!(view.sorted.iter().all(|&s| s));
        assert!(!playback.play(now));
    }

    #[test]
    fn test_step_while_playing_pauses() {
        let (mut playback, mut view) = loaded(&[2, 1]);
        playback.play(Instant::now());
        assert!(playback.step(&mut view));
        assert_eq!(playback.state(), PlaybackState::Paused);
        assert_eq!(playback.cursor(), 1);
    }

    #[test]
    fn test_reset_restores_initial_array() {
        let (mut playback, mut view) = loaded(&[2, 1]);
        playback.finish(&mut view);
        assert_eq!(view.values, vec![1, 2]);

        playback.reset(&mut view);
        assert_eq!(playback.state(), PlaybackState::Ready);
        assert_eq!(playback.cursor(), 0);
        assert_eq!(view.values, vec![2, 1]);
        assert!(!view.complete);
        assert!(view.sorted.iter().all(|&s| !s));
    }

    #[test]
    fn test_load_while_playing_cancels_deadline() {
        let (mut playback, mut view) = loaded(&[2, 1]);
        let t0 = Instant::now();
        playback.play(t0);
        playback.poll(t0, &mut view);

        let other = engine::run(AlgorithmId::Quick, &[9, 8, 7]).unwrap();
        playback.load(other.trace, &mut view);
        assert_eq!(playback.state(), PlaybackState::Ready);
        assert!(playback.time_until_next(t0).is_none());
        assert!(!playback.poll(t0 + Duration::from_secs(10), &mut view));
        assert_eq!(view.values, vec![9, 8, 7]);
    }

    #[test]
    fn test_controllers_share_a_trace() {
        let out = engine::run(AlgorithmId::Merge, &[5, 3, 8, 1]).unwrap();
        let (mut a, mut b) = (Playback::default(), Playback::default());
        let (mut va, mut vb) = (ArrayView::default(), ArrayView::default());
        a.load(Arc::clone(&out.trace), &mut va);
        b.load(Arc::clone(&out.trace), &mut vb);

        a.finish(&mut va);
        b.step(&mut vb);
        assert!(a.is_complete());
        assert_eq!(b.state(), PlaybackState::Paused);
        assert_eq!(b.cursor(), 1);
        assert_eq!(va.values, vec![1, 3, 5, 8]);
        assert_ne!(vb.values, va.values);
    }
}
