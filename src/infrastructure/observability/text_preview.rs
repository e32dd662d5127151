const MAX_PREVIEW_CHARS: usize = 80;

/// Shortened single-line rendering of user text for log fields.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let head: String = trimmed
        .chars()
        .take(MAX_PREVIEW_CHARS)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if total > MAX_PREVIEW_CHARS {
        format!("{}... ({} chars total)", head, total)
    } else {
        head
    }
}
