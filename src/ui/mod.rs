//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: lanes, playback driving, keyboard event loop
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: color palette, including one color per step kind
//!
//! Build an [`App`] from a run ([`App::learn`]) or a race ([`App::race`]) and
//! call [`App::run`] to start the event loop.
//!
//! [`App::learn`]: app::App::learn
//! [`App::race`]: app::App::race
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
