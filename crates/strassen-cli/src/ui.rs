//! Styled status messages on stderr.

use console::{style, StyledObject};

type Paint = fn(StyledObject<String>) -> StyledObject<String>;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn tagged(tag: &str, text: &str, paint: Paint) -> String {
    if is_color_disabled() {
        format!("[{tag}] {text}")
    } else {
        format!("{} {text}", paint(style(format!("[{tag}]"))).bold())
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        eprintln!("=== {text} ===");
    } else {
        eprintln!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    eprintln!("{}", tagged("OK", text, StyledObject::green));
}

/// Print a warning.
pub fn print_warning(text: &str) {
    eprintln!("{}", tagged("WARN", text, StyledObject::yellow));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", tagged("ERROR", text, StyledObject::red));
}
