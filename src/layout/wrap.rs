//! Greedy word wrapping against a measured width

use super::metrics::FontMetrics;
use super::types::TextStyle;

/// Split `text` on whitespace and pack words greedily so that no line
/// measures wider than `max_width`.
///
/// Words are never split: a word wider than `max_width` ends up alone on its
/// own line. Whitespace runs collapse to a single space. Blank input yields
/// no lines.
pub fn wrap<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap using the font tables for a given style and size
pub fn wrap_text(
    text: &str,
    max_width: f64,
    metrics: &FontMetrics,
    style: TextStyle,
    font_size: f64,
) -> Vec<String> {
    wrap(text, max_width, |s| metrics.measure(s, style, font_size))
}
