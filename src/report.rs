//! Per-file status lines for the style-check report.
//!
//! - `- path` (dim): skipped by the filter
//! - `+ path`: checked, no violation on changed lines
//! - a red block with the offending formatter hunks otherwise

use crate::cli::ColorMode;
use colored::Colorize;

/// Decide whether to color output and apply it to the `colored` crate globally.
///
/// `Auto` colors even when stdout is a pipe; only `NO_COLOR` turns it off.
pub fn configure_colors(mode: ColorMode) -> bool {
    let use_colors = resolve_colors(mode, std::env::var_os("NO_COLOR").is_some());
    colored::control::set_override(use_colors);
    use_colors
}

fn resolve_colors(mode: ColorMode, no_color: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => !no_color,
    }
}

/// Renders report lines, optionally with ANSI colors.
#[derive(Debug, Clone)]
pub struct Reporter {
    use_colors: bool,
    style_url: String,
}

impl Reporter {
    pub fn new(use_colors: bool, style_url: impl Into<String>) -> Self {
        Self {
            use_colors,
            style_url: style_url.into(),
        }
    }

    pub fn render_skipped(&self, path: &str) -> String {
        let line = format!("- {}", path);
        if self.use_colors {
            line.bright_black().to_string()
        } else {
            line
        }
    }

    pub fn render_clean(&self, path: &str) -> String {
        format!("+ {}", path)
    }

    /// Error block: reference link, file name, then the offending diff lines.
    pub fn render_violation(&self, path: &str, lines: &[String]) -> String {
        let see = format!("! See {} for details.", self.style_url);
        let file = format!("! {}", path);
        let (see, file) = if self.use_colors {
            (see.red().to_string(), file.red().to_string())
        } else {
            (see, file)
        };

        format!("{}\n\n{}\n\n{}\n", see, file, lines.join("\n"))
    }

    pub fn skipped(&self, path: &str) {
        println!("{}", self.render_skipped(path));
    }

    pub fn clean(&self, path: &str) {
        println!("{}", self.render_clean(path));
    }

    pub fn violation(&self, path: &str, lines: &[String]) {
        println!("{}", self.render_violation(path, lines));
    }
}
