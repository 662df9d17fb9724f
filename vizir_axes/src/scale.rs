// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The linear mapping shared by every value axis.
//!
//! Number and symbol axes apply it to raw values, log axes to exponents, date
//! axes to timeline values and period axes to period milliseconds.

use kurbo::Rect;

use crate::AxisOrient;

/// A linear map from an axis interval onto the pixel span of one edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    axis_min: f64,
    axis_max: f64,
    min: f64,
    max: f64,
    inverted: bool,
}

impl LinearScale {
    /// Creates a scale mapping `[axis_min, axis_max]` onto `area` along `orient`.
    pub fn new(
        axis_min: f64,
        axis_max: f64,
        area: Rect,
        orient: AxisOrient,
        inverted: bool,
    ) -> Self {
        let (min, max) = orient.pixel_span(area);
        Self {
            axis_min,
            axis_max,
            min,
            max,
            inverted,
        }
    }

    /// Maps an axis-space value to a pixel coordinate.
    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.axis_min) / (self.axis_max - self.axis_min);
        if self.inverted {
            self.max - t * (self.max - self.min)
        } else {
            self.min + t * (self.max - self.min)
        }
    }

    /// Maps a pixel coordinate back to an axis-space value.
    pub fn invert(&self, pixel: f64) -> f64 {
        let t = (pixel - self.min) / (self.max - self.min);
        if self.inverted {
            self.axis_max - t * (self.axis_max - self.axis_min)
        } else {
            self.axis_min + t * (self.axis_max - self.axis_min)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGES: [AxisOrient; 4] = [
        AxisOrient::Top,
        AxisOrient::Bottom,
        AxisOrient::Left,
        AxisOrient::Right,
    ];

    #[test]
    fn endpoints_map_to_area_edges() {
        let area = Rect::new(10.0, 20.0, 110.0, 220.0);
        let h = LinearScale::new(0.0, 1.0, area, AxisOrient::Bottom, false);
        assert!((h.map(0.0) - 10.0).abs() < 1e-9);
        assert!((h.map(1.0) - 110.0).abs() < 1e-9);

        let v = LinearScale::new(0.0, 1.0, area, AxisOrient::Left, false);
        assert!((v.map(0.0) - 220.0).abs() < 1e-9, "y grows downward");
        assert!((v.map(1.0) - 20.0).abs() < 1e-9);

        let inv = LinearScale::new(0.0, 1.0, area, AxisOrient::Top, true);
        assert!((inv.map(0.0) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn round_trips_for_every_edge_and_inversion() {
        let area = Rect::new(-50.0, 3.0, 450.0, 303.0);
        for orient in EDGES {
            for inverted in [false, true] {
                let s = LinearScale::new(-7.5, 12.25, area, orient, inverted);
                for i in 0..=20 {
                    let v = -7.5 + 19.75 * f64::from(i) / 20.0;
                    let back = s.invert(s.map(v));
                    assert!(
                        (back - v).abs() < 1e-9,
                        "{orient:?} inverted={inverted}: {v} -> {back}"
                    );
                }
            }
        }
    }
}
