/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Change column color:
/// \>0 → green, \<0 → red, empty/zero → grey.
pub fn colorize_change(value: &str) -> String {
    let t = value.trim();
    if t.is_empty() || t == "+0:00:00" {
        return format!("{GREY}{value}{RESET}");
    }
    if t.starts_with('-') {
        format!("{RED}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}
