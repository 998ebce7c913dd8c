//! Terminal output helpers.
//!
//! Everything here writes to stderr; stdout carries only the rendered
//! document.
//!
//! # Examples
//!
//! ```no_run
//! use modviz_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Wrote graph.dot");
//! ui::warning("No module depends on golang.org/x/text@v0.3.2");
//! ```

mod messages;

pub use messages::{success, warning};

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    !is_ci() && console::user_attended_stderr()
}

/// Initialize color support for status messages.
///
/// Call early in `main`. Colors are switched off globally when
/// `no_color` is set or the environment does not support them.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
