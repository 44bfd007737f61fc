//! Progress formatting helpers

/// Format a percentage with precision that shrinks as the value grows
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Fixed-width progress bar; values past 100% render as a full bar
pub fn format_bar(pct: f64, width: usize) -> String {
    if !pct.is_finite() || pct <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
