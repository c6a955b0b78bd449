//! Formatting utilities used for CLI and export outputs.

/// Format a progress percentage as its display string: integer when the
/// value is whole ("50%"), one decimal otherwise ("33.3%").
pub fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{:.0}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}

/// Parse a percentage display string back into its numeric value.
/// Malformed text degrades to 0, matching the lenient duration codec.
pub fn parse_percent(text: &str) -> f64 {
    text.trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or(0.0)
}

/// Render an ASCII progress bar, e.g. `[#####.....] 50%`.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        ".".repeat(width - filled),
        format_percent(clamped)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_drops_trailing_zero_decimal() {
        assert_eq!(format_percent(50.0), "50%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(33.3), "33.3%");
    }

    #[test]
    fn percent_roundtrip_and_leniency() {
        assert_eq!(parse_percent("50%"), 50.0);
        assert_eq!(parse_percent("33.3%"), 33.3);
        assert_eq!(parse_percent(""), 0.0);
        assert_eq!(parse_percent("n/a"), 0.0);
    }

    #[test]
    fn bar_fill_tracks_percent() {
        assert_eq!(progress_bar(0.0, 10), "[..........] 0%");
        assert_eq!(progress_bar(50.0, 10), "[#####.....] 50%");
        assert_eq!(progress_bar(100.0, 10), "[##########] 100%");
        // over-100 input is clamped, never overflows the bar
        assert_eq!(progress_bar(250.0, 10), "[##########] 100%");
    }
}
