//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, fuzzy match highlighting, and character-safe
//! truncation and wrapping.
//!
//! All width arithmetic counts characters, never bytes, so titles in any
//! script can be cut and padded without splitting a code point.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Pads `text` on both sides to exactly `cols` characters, truncating first
/// when it does not fit. Odd padding goes to the right.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let text = truncate_chars(text, cols);
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(len + left);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices with an exclusive end. When
/// `is_selected` is `true`, match highlighting is skipped so it does not
/// fight the selection background.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Truncates `text` to at most `max_chars` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use reelscout::ui::helpers::truncate_chars;
///
/// assert_eq!(truncate_chars("Amélie", 10), "Amélie");
/// assert_eq!(truncate_chars("The Lord of the Rings", 10), "The Lor...");
/// ```
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

/// Word-wraps `text` into lines of at most `width` characters.
///
/// Words longer than `width` are split across lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if line_len > 0 && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line_len += word.len();
        line.extend(word);
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text_and_cuts_on_chars() {
        assert_eq!(truncate_chars("Léon", 4), "Léon");
        assert_eq!(truncate_chars("千と千尋の神隠し", 5), "千と...");
        assert_eq!(truncate_chars("Alien", 2), "Al");
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("Batman raises the stakes in his war on crime.", 16);
        assert_eq!(lines, vec!["Batman raises", "the stakes in", "his war on", "crime."]);
        assert!(lines.iter().all(|l| l.chars().count() <= 16));
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn center_pads_to_full_width() {
        assert_eq!(center("ab", 7), "  ab   ");
        assert_eq!(center("Détails", 9), " Détails ");
        assert_eq!(center("too long", 5).chars().count(), 5);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap_text("   ", 10).is_empty());
    }
}
