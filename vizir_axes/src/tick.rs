// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ticks and their label anchoring.

extern crate alloc;

use alloc::string::String;
use core::f64::consts::FRAC_PI_2;

use crate::AxisOrient;

/// Whether a tick carries a label (major) or only a mark/gridline (minor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickType {
    /// A labelled tick at a tick unit boundary.
    Major,
    /// An unlabelled tick between two major ticks.
    Minor,
}

/// A point on a label's bounding box used to align it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Top left corner.
    TopLeft,
    /// Middle of the top edge.
    TopCenter,
    /// Top right corner.
    TopRight,
    /// Middle of the left edge.
    CenterLeft,
    /// Center of the box.
    Center,
    /// Middle of the right edge.
    CenterRight,
    /// Bottom left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    BottomCenter,
    /// Bottom right corner.
    BottomRight,
}

/// A tick produced by `refresh_ticks`.
///
/// Ticks are rebuilt on every refresh; date ticks carry milliseconds since the
/// Unix epoch in `value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Major or minor.
    pub tick_type: TickType,
    /// The data value of the tick.
    pub value: f64,
    /// The label text; empty for minor ticks and suppressed labels.
    pub label: String,
    /// Byte offset in `label` where superscript text begins, if any.
    ///
    /// Log axes set this so that `"10^3"`-style labels can render the exponent
    /// raised.
    pub superscript_start: Option<usize>,
    /// The anchor aligning the label to the tick position.
    pub text_anchor: TextAnchor,
    /// The anchor the label rotates about.
    pub rotation_anchor: TextAnchor,
    /// Label rotation in radians.
    pub angle: f64,
}

impl Tick {
    /// Creates a major tick.
    pub fn major(
        value: f64,
        label: impl Into<String>,
        text_anchor: TextAnchor,
        rotation_anchor: TextAnchor,
        angle: f64,
    ) -> Self {
        Self {
            tick_type: TickType::Major,
            value,
            label: label.into(),
            superscript_start: None,
            text_anchor,
            rotation_anchor,
            angle,
        }
    }

    /// Creates an unlabelled minor tick.
    pub fn minor(value: f64) -> Self {
        Self {
            tick_type: TickType::Minor,
            value,
            label: String::new(),
            superscript_start: None,
            text_anchor: TextAnchor::TopCenter,
            rotation_anchor: TextAnchor::Center,
            angle: 0.0,
        }
    }

    /// Returns `true` for major ticks.
    pub fn is_major(&self) -> bool {
        self.tick_type == TickType::Major
    }
}

/// Label placement for a major tick: `(text_anchor, rotation_anchor, angle)`.
pub(crate) type LabelPlacement = (TextAnchor, TextAnchor, f64);

/// Returns the label placement used by number, date and symbol axes.
pub(crate) fn major_label_placement(orient: AxisOrient, vertical_labels: bool) -> LabelPlacement {
    match (orient, vertical_labels) {
        (AxisOrient::Top, true) => (TextAnchor::CenterRight, TextAnchor::CenterRight, FRAC_PI_2),
        (AxisOrient::Bottom, true) => {
            (TextAnchor::CenterRight, TextAnchor::CenterRight, -FRAC_PI_2)
        }
        (AxisOrient::Top, false) => (TextAnchor::BottomCenter, TextAnchor::BottomCenter, 0.0),
        (AxisOrient::Bottom, false) => (TextAnchor::TopCenter, TextAnchor::TopCenter, 0.0),
        (AxisOrient::Left, true) => {
            (TextAnchor::BottomCenter, TextAnchor::BottomCenter, -FRAC_PI_2)
        }
        (AxisOrient::Right, true) => {
            (TextAnchor::BottomCenter, TextAnchor::BottomCenter, FRAC_PI_2)
        }
        (AxisOrient::Left, false) => (TextAnchor::CenterRight, TextAnchor::CenterRight, 0.0),
        (AxisOrient::Right, false) => (TextAnchor::CenterLeft, TextAnchor::CenterLeft, 0.0),
    }
}
