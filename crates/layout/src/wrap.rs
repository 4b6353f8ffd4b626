//! Greedy word wrapping over advance widths.
//!
//! Splits on hard newlines first, then packs whitespace-separated words
//! into lines that fit `max_width`. A single word wider than the line is
//! broken at the last character that fits rather than overflowing.

use crate::fonts::FontMetrics;

/// Wraps `text` into lines no wider than `max_width` mm.
///
/// Always returns at least one line per hard newline segment, so empty
/// text still reserves one line of height, matching how the original
/// export measured blank strings.
pub fn wrap_lines(
    metrics: &(impl FontMetrics + ?Sized),
    text: &str,
    font_size: f32,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();

        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if metrics.text_width(&candidate, font_size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if metrics.text_width(word, font_size) <= max_width {
                current = word.to_string();
            } else {
                current = break_word(metrics, word, font_size, max_width, &mut lines);
            }
        }

        lines.push(current);
    }

    lines
}

/// Splits an oversized word at the last character that still fits,
/// pushing every full chunk and returning the remainder.
fn break_word(
    metrics: &(impl FontMetrics + ?Sized),
    word: &str,
    font_size: f32,
    max_width: f32,
    lines: &mut Vec<String>,
) -> String {
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if metrics.text_width(&chunk, font_size) > max_width && chunk.chars().count() > 1 {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(ch);
        }
    }
    chunk
}
