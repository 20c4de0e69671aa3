pub mod content;
pub mod directory;
pub mod status_bar;

const ELLIPSIS: &str = "...";

/// Keep the head of `text`, replacing the cut tail with `...`, so the result
/// is at most `max` characters wide.
pub fn truncate_end(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return text.chars().take(max).collect();
    }
    let head: String = text.chars().take(max - ELLIPSIS.len()).collect();
    format!("{head}{ELLIPSIS}")
}

/// Keep the tail of `text`, replacing the cut head with `...`.
pub fn truncate_start(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return text.chars().skip(len - max).collect();
    }
    let tail: String = text.chars().skip(len - (max - ELLIPSIS.len())).collect();
    format!("{ELLIPSIS}{tail}")
}
