//! Console output for batch and interactive runs
//!
//! Uses `cliclack` and `indicatif` when attached to a terminal and falls
//! back to plain, line-oriented output under schedulers and CI, so logs
//! from unattended runs stay readable.

mod context;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::{OutputMode, UiContext, PLAIN_ENV};
pub use output::{
    banner, category_header, finish, hint, list_tally, section, status, status_detail, summary,
    Tone,
};
pub use progress::{CategoryProgress, ItemStatus, TaskSpinner};
pub use prompts::confirm;
pub use theme::{init_theme, BoardTheme};
