//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a count out of the largest count, at least one cell for any non-zero count
#[must_use]
pub fn count_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 {
        return "░".repeat(width);
    }
    let filled = (count * width / max_count).max(usize::from(count > 0)).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score as "score/length", e.g. "3/10"
#[must_use]
pub fn score_label(score: u8, length: usize) -> String {
    format!("{score}/{length}")
}

/// Group a 64-bit fingerprint into hex quads for display
#[must_use]
pub fn fingerprint_hex(fingerprint: u64) -> String {
    let hex = format!("{fingerprint:016x}");
    hex.as_bytes()
        .chunks(4)
        .filter_map(|c| std::str::from_utf8(c).ok())
        .collect::<Vec<_>>()
        .join("-")
}
