mod pie;
mod trend;

use std::path::Path;

use crate::error::LedgerError;
use crate::models::Month;

pub(crate) use pie::render_pie;
pub(crate) use trend::render_trend;

pub(crate) const TREND_FILE_NAME: &str = "monthly-totals.png";

pub(crate) fn pie_file_name(month: Month) -> String {
    format!("{month} pie chart.png")
}

fn chart_error<E: std::fmt::Display>(e: E) -> LedgerError {
    LedgerError::Chart(e.to_string())
}

fn display_available() -> bool {
    cfg!(any(target_os = "macos", target_os = "windows"))
        || std::env::var_os("DISPLAY").is_some()
        || std::env::var_os("WAYLAND_DISPLAY").is_some()
}

/// Open a rendered chart in the platform image viewer and wait for it.
/// Does nothing without a display; failures are logged and ignored.
pub(crate) fn reveal(path: &Path) {
    reveal_on(path, display_available());
}

/// Returns whether a viewer was launched.
fn reveal_on(path: &Path, has_display: bool) -> bool {
    if !has_display {
        log::debug!("No display available, not opening {}", path.display());
        return false;
    }

    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };

    match std::process::Command::new(opener).arg(path).status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            log::warn!("{opener} exited with {status} for {}", path.display());
            true
        }
        Err(e) => {
            log::warn!("Could not run {opener} to show {}: {e}", path.display());
            false
        }
    }
}

#[cfg(test)]
mod tests;
