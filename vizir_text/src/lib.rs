// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis layout.
//!
//! Axes need to know how large their tick labels will be before they can pick
//! a tick spacing: a unit is only acceptable if the labels it produces fit in
//! the pixel span between two ticks. Shaping and glyph layout stay downstream,
//! so axis code depends on a tiny measurement interface instead.
//!
//! This crate provides:
//! - [`TextMeasurer`], the measurement callback,
//! - [`TextStyle`] and [`TextMetrics`], its inputs and outputs,
//! - [`HeuristicTextMeasurer`], a fast approximation for tests and demos, and
//! - [`TextBlock`], multi-line labels wrapped to a maximum width.

#![no_std]

extern crate alloc;

mod block;

use alloc::sync::Arc;

pub use block::TextBlock;

/// A minimal text measurement interface used by axis tick selection.
///
/// Implementations can be heuristic, backed by a shaping engine, or backed by
/// platform text measurement; axes only rely on the returned metrics.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers split on `\n` themselves.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the line height for `style`, measured on `sample`.
    ///
    /// Axes use this for "all labels have the same extent" estimates, such as
    /// the width of a vertically rotated label.
    fn line_height(&self, sample: &str, style: &TextStyle) -> f64 {
        self.measure(sample, style).line_height()
    }
}

/// Font inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif, normal weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Returns a copy of this style using `family`.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Returns a copy of this style using `weight`.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    /// Tick labels default to a 10px sans-serif face.
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family.
    Serif,
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    Normal,
    /// Italic.
    Italic,
    /// Oblique.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width of the line.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A heuristic measurer: glyphs are ~0.6em wide, the baseline sits at ~0.8em.
///
/// Bold text is widened by 10%.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em = if style.font_weight >= FontWeight::BOLD {
            0.66
        } else {
            0.6
        };
        TextMetrics {
            advance_width: em * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_scales_with_char_count() {
        let style = TextStyle::new(10.0);
        let m = HeuristicTextMeasurer.measure("12345", &style);
        assert!((m.advance_width - 30.0).abs() < 1e-9);
        assert!((m.line_height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn bold_text_is_wider() {
        let normal = TextStyle::new(10.0);
        let bold = TextStyle::new(10.0).with_weight(FontWeight::BOLD);
        let a = HeuristicTextMeasurer.measure("abc", &normal).advance_width;
        let b = HeuristicTextMeasurer.measure("abc", &bold).advance_width;
        assert!(b > a, "bold should measure wider: {b} vs {a}");
    }

    #[test]
    fn line_height_ignores_sample_length() {
        let style = TextStyle::default();
        let short = HeuristicTextMeasurer.line_height("0", &style);
        let long = HeuristicTextMeasurer.line_height("ABCxyz", &style);
        assert!((short - long).abs() < 1e-9);
    }
}
