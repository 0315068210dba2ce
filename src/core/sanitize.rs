// src/core/sanitize.rs

/// Keep ASCII digits and `.` only: `"£12.3abc"` -> `"12.3"`.
pub fn price_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Shorten for chart axis labels; appends `…` when cut.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
