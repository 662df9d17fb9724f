// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-line text blocks wrapped at word boundaries.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{TextMeasurer, TextStyle};

const ELLIPSIS: &str = "...";

/// A label broken into lines, all sharing one style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    lines: Vec<String>,
    style: TextStyle,
}

impl TextBlock {
    /// Creates a single-line block.
    pub fn single_line(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            lines: alloc::vec![text.into()],
            style,
        }
    }

    /// Wraps `text` into at most `max_lines` lines no wider than `max_width`.
    ///
    /// Lines break after whitespace or at `\n`. A word that is wider than
    /// `max_width` on its own is cut between characters. When the text does
    /// not fit in `max_lines`, the last line is shortened and ends in `...`.
    pub fn wrap(
        text: &str,
        style: TextStyle,
        max_width: f64,
        max_lines: usize,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let mut lines = Vec::new();
        let mut current = 0;
        while current < text.len() && lines.len() < max_lines {
            let Some(mut next) = next_line_break(text, current, max_width, &style, measurer)
            else {
                lines.push(String::from(text[current..].trim_end()));
                return Self { lines, style };
            };
            if next == current {
                // Always take at least one character.
                next += text[current..].chars().next().map_or(1, char::len_utf8);
            }
            lines.push(String::from(text[current..next].trim_end()));
            current = next;
            while text[current..].starts_with('\n') {
                current += 1;
            }
        }
        if current < text.len()
            && let Some(last) = lines.last_mut()
        {
            let keep = last.chars().count().saturating_sub(ELLIPSIS.len());
            let mut shortened: String = last.chars().take(keep).collect();
            shortened.push_str(ELLIPSIS);
            *last = shortened;
        }
        Self { lines, style }
    }

    /// Returns the lines of this block.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the style shared by all lines.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Returns `(width, height)`: the widest line and the summed line heights.
    pub fn size(&self, measurer: &dyn TextMeasurer) -> (f64, f64) {
        let mut width = 0.0_f64;
        let mut height = 0.0;
        for line in &self.lines {
            let m = measurer.measure(line, &self.style);
            width = width.max(m.advance_width);
            height += m.line_height();
        }
        (width, height)
    }
}

/// Returns the byte offset where the line starting at `start` should end, or
/// `None` if the rest of the text fits on one line.
fn next_line_break(
    text: &str,
    start: usize,
    max_width: f64,
    style: &TextStyle,
    measurer: &dyn TextMeasurer,
) -> Option<usize> {
    let rest = &text[start..];
    let hard_break = rest.find('\n');
    let region = &rest[..hard_break.unwrap_or(rest.len())];
    let width = |s: &str| measurer.measure(s.trim_end(), style).advance_width;

    let mut last_fit: Option<usize> = None;
    for end in word_ends(region) {
        if width(&region[..end]) > max_width {
            return Some(match last_fit {
                Some(fit) => start + fit,
                None => start + cut_word(region, end, max_width, &width),
            });
        }
        last_fit = Some(end);
    }
    hard_break.map(|b| start + b)
}

/// Byte offsets just past each word and its trailing whitespace.
fn word_ends(region: &str) -> impl Iterator<Item = usize> + '_ {
    let mut in_space = false;
    region
        .char_indices()
        .filter_map(move |(i, c)| {
            let boundary = in_space && !c.is_whitespace();
            in_space = c.is_whitespace();
            boundary.then_some(i)
        })
        .chain(core::iter::once(region.len()))
        .filter(|&end| end > 0)
}

/// Cuts an over-long first word so that it fits in `max_width`.
fn cut_word(region: &str, end: usize, max_width: f64, width: &dyn Fn(&str) -> f64) -> usize {
    let mut cut = end;
    while cut > 0 && width(&region[..cut]) > max_width {
        cut = region[..cut].char_indices().last().map_or(0, |(i, _)| i);
    }
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeuristicTextMeasurer;

    // 10px text measures 6px per character.
    fn wrap(text: &str, max_width: f64, max_lines: usize) -> TextBlock {
        TextBlock::wrap(
            text,
            TextStyle::new(10.0),
            max_width,
            max_lines,
            &HeuristicTextMeasurer,
        )
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let block = wrap("Q1 sales", 100.0, 3);
        assert_eq!(block.lines(), ["Q1 sales"]);
    }

    #[test]
    fn breaks_between_words() {
        // "alpha beta" is 60px; each word is 30px.
        let block = wrap("alpha beta gamma", 40.0, 3);
        assert_eq!(block.lines(), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn newline_forces_a_break() {
        let block = wrap("a\nb", 100.0, 3);
        assert_eq!(block.lines(), ["a", "b"]);
    }

    #[test]
    fn overflowing_text_is_truncated_with_ellipsis() {
        let block = wrap("alpha beta gamma", 40.0, 1);
        assert_eq!(block.lines(), ["al..."]);
    }

    #[test]
    fn long_word_is_cut_between_characters() {
        // 24px fits four characters.
        let block = wrap("abcdefgh", 24.0, 2);
        assert_eq!(block.lines(), ["abcd", "efgh"]);
    }

    #[test]
    fn size_sums_line_heights() {
        let block = wrap("alpha beta", 40.0, 2);
        let (w, h) = block.size(&HeuristicTextMeasurer);
        assert!((w - 30.0).abs() < 1e-9);
        assert!((h - 20.0).abs() < 1e-9);
    }
}
