// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis placement relative to the plot area.

use kurbo::Rect;

/// The edge of the plot area an axis is drawn along.
///
/// Top and bottom axes map values onto the x extent of the area; left and
/// right axes map onto the y extent, with values increasing upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

impl AxisOrient {
    /// Returns `true` for [`AxisOrient::Top`] and [`AxisOrient::Bottom`].
    pub fn is_top_or_bottom(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Returns `true` for [`AxisOrient::Left`] and [`AxisOrient::Right`].
    pub fn is_left_or_right(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns the pixel coordinates that the axis minimum and maximum map to
    /// (before inversion).
    pub fn pixel_span(self, area: Rect) -> (f64, f64) {
        if self.is_top_or_bottom() {
            (area.min_x(), area.max_x())
        } else {
            (area.max_y(), area.min_y())
        }
    }

    /// Returns the length of the area along this edge.
    pub fn span_length(self, area: Rect) -> f64 {
        if self.is_top_or_bottom() {
            area.width()
        } else {
            area.height()
        }
    }
}
