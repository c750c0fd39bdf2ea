//! Progress indicators with CI fallback

use super::context::UiContext;
use super::output::Tone;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// A task spinner with CI fallback
pub struct TaskSpinner {
    spinner: Option<cliclack::ProgressBar>,
    interactive: bool,
}

impl TaskSpinner {
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            spinner: None,
            interactive: ctx.use_fancy_output(),
        }
    }

    /// Start the spinner with a message
    pub fn start(&mut self, message: &str) {
        if self.interactive {
            let spinner = cliclack::spinner();
            spinner.start(message);
            self.spinner = Some(spinner);
        } else {
            println!("{} {}", style("...").dim(), message);
        }
    }

    /// Stop with success message
    pub fn stop(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(message);
        } else {
            println!("{} {}", Tone::Ok.tag(), message);
        }
    }

    /// Stop with error message
    pub fn stop_error(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.error(message);
        } else {
            println!("{} {}", Tone::Fail.tag(), message);
        }
    }
}

/// How a single identifier ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Served from cache
    Cached,
    /// Resolved through the provider
    Ok,
    /// Resolved, but something degraded (e.g. avatar missing)
    Degraded,
    /// Lookup failed
    Failed,
}

/// Per-category progress.
///
/// Shows an indicatif bar in interactive mode, or `[i/n] id` lines in CI.
pub struct CategoryProgress {
    bar: Option<ProgressBar>,
    total: usize,
}

impl CategoryProgress {
    pub fn new(ctx: &UiContext, label: &str, total: usize) -> Self {
        let bar = if ctx.use_fancy_output() && total > 0 {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {spinner:.cyan} {prefix}  {bar:20.cyan/dim} {pos}/{len} {msg:.dim}  {elapsed:.dim}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                    .progress_chars("━╸─"),
            );
            bar.set_prefix(label.to_string());
            bar.enable_steady_tick(std::time::Duration::from_millis(120));
            Some(bar)
        } else {
            None
        };
        Self { bar, total }
    }

    /// Announce the identifier about to be processed (1-based index)
    pub fn start_item(&self, index: usize, identifier: &str) {
        match self.bar {
            Some(ref bar) => bar.set_message(identifier.to_string()),
            None => println!("[{}/{}] {}", index, self.total, identifier),
        }
    }

    /// Report how the current identifier ended up
    pub fn finish_item(&self, status: ItemStatus, message: &str) {
        let tag = match status {
            ItemStatus::Cached => style("[CACHE]").cyan(),
            ItemStatus::Ok => Tone::Ok.tag(),
            ItemStatus::Degraded => Tone::Warn.tag(),
            ItemStatus::Failed => Tone::Fail.tag(),
        };
        let line = format!("  {} {}", tag, message);

        match self.bar {
            Some(ref bar) => {
                bar.println(line);
                bar.inc(1);
            }
            None => println!("{}", line),
        }
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.disable_steady_tick();
            bar.finish_and_clear();
        }
    }
}
