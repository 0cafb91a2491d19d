//! ANSI color helper utilities for terminal output.

use super::formatting::NOT_SPECIFIED;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == NOT_SPECIFIED || v == "00h 00m" || v == "-"
}

/// Greys out placeholders so that real values stand out.
///
/// Example:
/// `colorize_optional("Non spécifiée")` → "<grey>Non spécifiée<reset>"
pub fn colorize_optional(value: &str) -> String {
    if is_placeholder(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_grey() {
        assert_eq!(
            colorize_optional(NOT_SPECIFIED),
            format!("{GREY}{NOT_SPECIFIED}{RESET}")
        );
        assert_eq!(colorize_optional("Lyon"), "Lyon");
    }
}
