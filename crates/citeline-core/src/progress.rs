//! Progress reporting for TTY and non-TTY environments.
//!
//! TTY mode: one indicatif bar per entity kind, counting files.
//! Non-TTY mode: hidden bars; logs are the only progress indicator.

use std::io::IsTerminal;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Per-kind file-count bar
fn kind_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{prefix:<4.dim} {bar:30.green/dim} {pos:>4}/{len:4} files {wide_msg:.dim}")
        .expect("invalid template")
        .progress_chars("--")
}

/// Central progress context managing multi-progress bars.
pub struct ProgressContext {
    multi: MultiProgress,
    is_tty: bool,
}

impl ProgressContext {
    /// Create new context, detecting TTY automatically.
    pub fn new() -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self {
            multi: MultiProgress::new(),
            is_tty,
        }
    }

    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    pub fn multi(&self) -> &MultiProgress {
        &self.multi
    }

    /// Create a per-kind progress bar over `total` files.
    ///
    /// TTY: visible file-count bar. Non-TTY: hidden (no-op).
    pub fn kind_bar(&self, name: &str, total: u64) -> ProgressBar {
        if !self.is_tty {
            return ProgressBar::hidden();
        }
        let pb = self.multi.add(ProgressBar::new(total));
        pb.set_style(kind_style());
        pb.set_prefix(name.to_string());
        pb
    }
}

impl Default for ProgressContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_when_not_tty() {
        let ctx = ProgressContext {
            multi: MultiProgress::new(),
            is_tty: false,
        };
        let pb = ctx.kind_bar("br", 10);
        assert!(pb.is_hidden());
    }

    #[test]
    fn bar_carries_total() {
        let ctx = ProgressContext {
            multi: MultiProgress::new(),
            is_tty: true,
        };
        let pb = ctx.kind_bar("br", 7);
        assert_eq!(pb.length(), Some(7));
    }
}
