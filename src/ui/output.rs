//! Status lines, section headers and the run summary

use super::context::UiContext;
use console::{style, StyledObject};

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Info,
    Warn,
    Fail,
}

impl Tone {
    /// Bracketed tag used in plain output
    pub fn tag(self) -> StyledObject<&'static str> {
        match self {
            Tone::Ok => style("[OK]").green(),
            Tone::Info => style("[INFO]").cyan(),
            Tone::Warn => style("[WARN]").yellow(),
            Tone::Fail => style("[FAIL]").red(),
        }
    }
}

/// Title line at the start of a command
pub fn banner(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        cliclack::intro(style(title).cyan().bold()).ok();
    } else {
        println!("{}", style(title).cyan().bold());
    }
}

/// Header for one stage of a run
pub fn section(ctx: &UiContext, title: &str) {
    println!();
    if ctx.use_fancy_output() {
        cliclack::log::info(style(title).bold()).ok();
    } else {
        println!("{}", style(title).bold());
    }
}

/// Header for a category: `[2/3] developers (4 identifiers)`
pub fn category_header(ctx: &UiContext, position: usize, of: usize, label: &str, count: usize) {
    let noun = if count == 1 { "identifier" } else { "identifiers" };
    section(
        ctx,
        &format!("[{}/{}] {} ({} {})", position, of, label, count, noun),
    );
}

/// One status line
pub fn status(ctx: &UiContext, tone: Tone, message: &str) {
    if !ctx.use_fancy_output() {
        println!("  {} {}", tone.tag(), message);
        return;
    }

    let shown = match tone {
        Tone::Ok => cliclack::log::success(message),
        Tone::Info => cliclack::log::info(message),
        Tone::Warn => cliclack::log::warning(message),
        Tone::Fail => cliclack::log::error(message),
    };
    shown.ok();
}

/// Status line with a secondary detail such as a path
pub fn status_detail(ctx: &UiContext, tone: Tone, message: &str, detail: &str) {
    let detail = if ctx.use_fancy_output() {
        style(detail).dim().to_string()
    } else {
        detail.to_string()
    };
    status(ctx, tone, &format!("{} ({})", message, detail));
}

/// Dimmed follow-up advice
pub fn hint(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::remark(message).ok();
    } else {
        println!("  {}", style(message).dim());
    }
}

/// Loaded list sizes on one line: `2 sponsors / 0 developers / 5 participants`
pub fn list_tally(ctx: &UiContext, counts: &[(&str, usize)]) {
    let line = counts
        .iter()
        .map(|(label, count)| format!("{} {}", count, label))
        .collect::<Vec<_>>()
        .join(" / ");
    status(ctx, Tone::Info, &line);
}

/// Aligned key/value block closing a run
pub fn summary(ctx: &UiContext, rows: &[(&str, String)]) {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        let key = format!("{:<width$}", key, width = width);
        if ctx.use_fancy_output() {
            println!("  {}  {}", style(key).dim(), value);
        } else {
            println!("  {}  {}", key, value);
        }
    }
}

/// Closing line of a command
pub fn finish(ctx: &UiContext, tone: Tone, message: &str) {
    if ctx.use_fancy_output() {
        let styled = match tone {
            Tone::Ok | Tone::Info => style(message).green().bold(),
            Tone::Warn => style(message).yellow().bold(),
            Tone::Fail => style(message).red().bold(),
        };
        cliclack::outro(styled).ok();
    } else {
        println!();
        println!("{} {}", tone.tag(), message);
    }
}
