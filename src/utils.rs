use unicode_width::UnicodeWidthChar;

/// Shorten `text` to at most `max_width` display columns, appending `…` when cut.
pub fn truncate_content(text: &str, max_width: usize) -> String {
    let text = text.trim();
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    let mut out = out.trim_end().to_string();
    out.push('…');
    out
}

/// Whether two half-open ranges share at least one position.
pub fn ranges_intersect(a_from: usize, a_to: usize, b_from: usize, b_to: usize) -> bool {
    a_from < b_to && b_from < a_to
}
