//! Human-readable formatting of magnitudes and durations.
//!
//! Used by the `Display` implementations; callers rendering their own UI
//! can use these directly for consistent output.

/// Format a count with a thousands-style suffix (K/M/B/T).
///
/// Non-finite magnitudes render as the infinity sign: keyspaces are
/// allowed to overflow, and the display should say so plainly.
pub fn format_count(n: f64) -> String {
    if !n.is_finite() {
        return "\u{221E}".to_string();
    }
    if n >= 1e12 {
        format!("{:.2}T", n / 1e12)
    } else if n >= 1e9 {
        format!("{:.2}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.2}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.2}K", n / 1e3)
    } else {
        format!("{:.2}", n)
    }
}

/// Format a duration in seconds using the largest fitting unit
/// (years, months, days, hours, minutes, seconds).
pub fn format_seconds(secs: f64) -> String {
    if !secs.is_finite() {
        return "\u{221E}".to_string();
    }
    if secs < 1.0 {
        return format!("{:.2}s", secs);
    }

    const UNITS: [(f64, &str); 6] = [
        (60.0 * 60.0 * 24.0 * 365.0, "y"),
        (60.0 * 60.0 * 24.0 * 30.0, "mo"),
        (60.0 * 60.0 * 24.0, "d"),
        (60.0 * 60.0, "h"),
        (60.0, "m"),
        (1.0, "s"),
    ];

    for (unit, label) in UNITS {
        if secs >= unit {
            return format!("{:.2}{}", secs / unit, label);
        }
    }
    format!("{:.2}s", secs)
}
