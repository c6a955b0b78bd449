//! Time utilities: the H:MM:SS duration codec, signed change formatting
//! and seconds/hours conversions.

/// Parse a `H:MM:SS` duration string into whole seconds.
///
/// The seconds field may carry a fractional part (hand-edited files,
/// spreadsheet exports); it is truncated, not rounded. Anything that is
/// not exactly three `:`-separated numeric fields degrades to zero
/// seconds instead of failing, so a corrupted cell never blocks a read.
pub fn parse_duration(text: &str) -> i64 {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() != 3 {
        return 0;
    }

    let h = parts[0].parse::<i64>();
    let m = parts[1].parse::<i64>();
    let s = parts[2].parse::<f64>();

    match (h, m, s) {
        (Ok(h), Ok(m), Ok(s)) => h * 3600 + m * 60 + s.floor() as i64,
        _ => 0,
    }
}

/// Format whole seconds as `H:MM:SS` (hours unpadded, no sub-second part).
pub fn format_duration(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Format a signed difference in seconds as `+H:MM:SS` / `-H:MM:SS`.
/// Zero takes the positive sign.
pub fn format_change(seconds: i64) -> String {
    let sign = if seconds >= 0 { '+' } else { '-' };
    format!("{}{}", sign, format_duration(seconds.abs()))
}

/// Parse a `±H:MM:SS` change string back into signed seconds.
/// An empty or malformed string degrades to zero, like [`parse_duration`].
pub fn parse_change(text: &str) -> i64 {
    let t = text.trim();
    match t.strip_prefix('-') {
        Some(rest) => -parse_duration(rest),
        None => parse_duration(t.strip_prefix('+').unwrap_or(t)),
    }
}

/// Convert whole seconds to fractional hours (target ledgers count hours).
pub fn seconds_to_hours(seconds: i64) -> f64 {
    seconds as f64 / 3600.0
}
