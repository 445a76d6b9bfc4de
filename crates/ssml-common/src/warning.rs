//! Toolkit warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times
//! when a batch of documents repeats the same mistake. Used by the CLI to
//! surface non-fatal parse issues and fatal parse errors.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Build the uncolored line for a warning, e.g. `[SSML Parser] duplicate attribute`.
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Remember `key` and report whether it was new.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a non-fatal issue (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("SSML Parser", "unknown entity '&nbsp;' kept as text");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let line = format_warning(component, message);
    if record(line.clone()) {
        eprintln!("{} {}", "⚠".yellow(), line.yellow());
    }
}

/// Report a fatal error. Errors are never deduplicated.
pub fn report_error(component: &str, message: &str) {
    let line = format_warning(component, message);
    eprintln!("{} {}", "✗".red().bold(), line.red());
}

/// Clear all recorded warnings (call before processing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
