//! TUI pane rendering modules
//!
//! Each module exports one `render_*` function that draws its pane from
//! borrowed state. Panes hold no state of their own apart from the scroll
//! offset the caller passes in.
//!
//! - [`bars`]: the array as a bar chart, colored by the last step
//! - [`log`]: messages of the steps applied so far
//! - [`info`]: run metrics and catalog entry for an algorithm
//! - [`leaderboard`]: race results, fastest first
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod info;
pub mod leaderboard;
pub mod log;
pub mod status;

pub use bars::render_bars_pane;
pub use info::render_info_pane;
pub use leaderboard::render_leaderboard_pane;
pub use log::render_log_pane;
pub use status::{render_status_bar, StatusRenderData};
