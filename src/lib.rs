//! # Introduction
//!
//! sortty runs classic sorting algorithms over a small array of integers and
//! records every comparison, swap, pivot choice, overwrite and sorted mark as
//! a [`trace::Step`] carrying a full snapshot of the array. The finished
//! [`trace::Trace`] is then replayed at human speed in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui), or raced against other
//! algorithms on the same input.
//!
//! ## Pipeline
//!
//! ```text
//! Input → validate → Algorithm → Recorder → Trace ─┬→ Playback → TUI
//!                                                  └→ Race → leaderboard
//! ```
//!
//! 1. [`engine`]: input parsing and validation, the six instrumented
//!    algorithms, and [`engine::run`].
//! 2. [`trace`]: step types and the [`trace::recorder::Recorder`] that
//!    checks a trace before sealing it.
//! 3. [`race`]: runs several algorithms on copies of one array and picks the
//!    fastest.
//! 4. [`playback`]: cooperative replay state machine over a sealed trace.
//! 5. [`api`]: serde request/response types for JSON callers.
//! 6. [`stats`] and [`catalog`]: session aggregates and algorithm notes.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! `bubble`, `insertion`, `selection`, `merge`, `quick` (last element as
//! pivot) and `heap`. Arrays hold 1 to 100 integers in `1..=1000`.

pub mod api;
pub mod catalog;
pub mod engine;
pub mod playback;
pub mod race;
pub mod stats;
pub mod trace;
pub mod ui;
