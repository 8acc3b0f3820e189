//! Error reporting on stderr.
//!
//! Format: `✖ {error_type}: {message}`, then an optional `× {detail}` line
//! and an optional `help: {suggestion}` line.

use std::io::{IsTerminal, Write};

use crate::error::ProseGuardError;

use super::ColorMode;
use super::text::ansi;

/// Whether stderr output should carry ANSI colors for `mode`.
///
/// `Auto` enables colors only when stderr is a TTY and `NO_COLOR` is unset.
#[must_use]
pub fn stderr_supports_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
        }
    }
}

/// Renders [`ProseGuardError`]s for the operator.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn stderr(mode: ColorMode) -> Self {
        Self {
            use_colors: stderr_supports_color(mode),
        }
    }

    #[cfg(test)]
    const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_error(&self, error: &ProseGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Write errors are discarded: there is nowhere left to report them.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &ProseGuardError) {
        let error_type = error.error_type();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {error}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {error}");
        }

        if let Some(detail) = error.detail() {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {detail}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {detail}");
            }
        }

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {suggestion}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {suggestion}");
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
