//! followboard - static follow-list report generator
//!
//! Reads identifier lists, resolves each identifier against a public
//! profile endpoint with a durable cache and fixed pacing, mirrors avatars
//! locally, and renders a self-contained HTML report.

pub mod avatar;
pub mod cli;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod lists;
pub mod pacer;
pub mod pipeline;
pub mod profile;
pub mod report;
pub mod ui;

pub use error::{BoardError, BoardResult};
