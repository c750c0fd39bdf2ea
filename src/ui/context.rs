//! Output mode detection for scheduled and attended runs

use std::io::IsTerminal;

/// Forces plain output even on a terminal
pub const PLAIN_ENV: &str = "FOLLOWBOARD_PLAIN";

/// Schedulers that set one of these run us unattended
const SCHEDULER_VARS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_URL",
    "BUILDKITE",
    "INVOCATION_ID",
];

/// How console output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// cliclack logs, spinners and progress bars
    Fancy,
    /// One tagged line per event, suitable for log files
    Plain,
}

/// Decides output style and whether prompts can be shown
#[derive(Debug, Clone)]
pub struct UiContext {
    mode: OutputMode,
    can_prompt: bool,
    auto_yes: bool,
}

impl UiContext {
    /// Inspect the terminal and environment of this process
    pub fn detect() -> Self {
        Self::from_env(
            std::io::stdout().is_terminal(),
            std::io::stdin().is_terminal(),
            |name| std::env::var_os(name).is_some(),
        )
    }

    /// Plain output, no prompts (scheduled runs, tests)
    pub fn non_interactive() -> Self {
        Self {
            mode: OutputMode::Plain,
            can_prompt: false,
            auto_yes: false,
        }
    }

    fn from_env(stdout_tty: bool, stdin_tty: bool, is_set: impl Fn(&str) -> bool) -> Self {
        let unattended = SCHEDULER_VARS.iter().any(|var| is_set(var));
        let fancy = stdout_tty && !unattended && !is_set(PLAIN_ENV);

        Self {
            mode: if fancy {
                OutputMode::Fancy
            } else {
                OutputMode::Plain
            },
            can_prompt: stdout_tty && stdin_tty && !unattended,
            auto_yes: false,
        }
    }

    /// Approve confirmation prompts without asking (`--yes`)
    pub fn with_auto_yes(mut self, yes: bool) -> Self {
        self.auto_yes = yes;
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Whether a confirmation prompt can be answered by someone
    pub fn is_interactive(&self) -> bool {
        self.can_prompt
    }

    pub fn auto_yes(&self) -> bool {
        self.auto_yes
    }

    pub fn use_fancy_output(&self) -> bool {
        self.mode == OutputMode::Fancy
    }
}
