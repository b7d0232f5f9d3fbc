//! Terminal output: status lines and diagnostic rendering.

mod messages;
pub mod report;

pub use messages::*;

use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(false);

/// Check if the terminal supports colors.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether output is colored, and configure miette to match.
///
/// Call early in `main`, after parsing `--no-color`.
pub fn init_colors(no_color: bool) {
    let color = !no_color && should_use_color();
    COLOR.store(color, Ordering::Relaxed);

    // Fails only if a hook is already installed
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .color(color)
                .unicode(color)
                .build(),
        )
    }));
}

/// Whether [`init_colors`] enabled colored output
pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}
