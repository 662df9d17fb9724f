// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed intervals over `f64`.
//!
//! Date axes store their range in milliseconds since the Unix epoch, so the
//! same type serves every value axis.

use crate::AxisError;

/// An immutable closed interval `[lower, upper]`.
///
/// Construction rejects `lower > upper` and NaN bounds. Zero-length ranges are
/// representable (a data set with a single value has one), but axes refuse to
/// display them: see [`ValueAxis::set_range`](crate::ValueAxis::set_range).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    /// The unit range `[0, 1]`.
    pub const UNIT: Self = Self {
        lower: 0.0,
        upper: 1.0,
    };

    /// Creates a new range.
    pub fn new(lower: f64, upper: f64) -> Result<Self, AxisError> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(AxisError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the extent of a set of values, ignoring non-finite entries.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut out: Option<Self> = None;
        for &v in values.iter().filter(|v| v.is_finite()) {
            out = Some(match out {
                Some(r) => Self {
                    lower: r.lower.min(v),
                    upper: r.upper.max(v),
                },
                None => Self { lower: v, upper: v },
            });
        }
        out
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `upper - lower`.
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the midpoint of the range.
    pub fn central_value(&self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    /// Returns `true` if `lower <= value <= upper`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns `true` if the interval `[b0, b1]` overlaps this range.
    pub fn intersects(&self, b0: f64, b1: f64) -> bool {
        if b0 <= self.lower {
            b1 > self.lower
        } else {
            b0 < self.upper && b1 >= b0
        }
    }

    /// Returns `value` clamped into the range.
    pub fn constrain(&self, value: f64) -> f64 {
        if value > self.upper {
            self.upper
        } else if value < self.lower {
            self.lower
        } else {
            value
        }
    }

    /// Returns a range grown by `length * lower_margin` below and
    /// `length * upper_margin` above.
    ///
    /// If negative margins would invert the range, it collapses to its midpoint.
    pub fn expand(&self, lower_margin: f64, upper_margin: f64) -> Self {
        let length = self.length();
        let mut lower = self.lower - length * lower_margin;
        let mut upper = self.upper + length * upper_margin;
        if lower > upper {
            lower = lower / 2.0 + upper / 2.0;
            upper = lower;
        }
        Self { lower, upper }
    }

    /// Returns the smallest range containing both inputs.
    pub fn combine(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (None, r) | (r, None) => r,
            (Some(a), Some(b)) => Some(Self {
                lower: a.lower.min(b.lower),
                upper: a.upper.max(b.upper),
            }),
        }
    }

    /// Returns the smallest range containing `range` and `value`.
    pub fn expand_to_include(range: Option<Self>, value: f64) -> Result<Self, AxisError> {
        match range {
            None => Self::new(value, value),
            Some(r) if value < r.lower => Self::new(value, r.upper),
            Some(r) if value > r.upper => Self::new(r.lower, value),
            Some(r) => Ok(r),
        }
    }

    /// Returns the range moved by `delta`.
    ///
    /// Unless `allow_zero_crossing` is set, a bound that is non-zero stops at
    /// zero instead of moving past it.
    pub fn shift(&self, delta: f64, allow_zero_crossing: bool) -> Self {
        if allow_zero_crossing {
            Self {
                lower: self.lower + delta,
                upper: self.upper + delta,
            }
        } else {
            Self {
                lower: shift_with_no_zero_crossing(self.lower, delta),
                upper: shift_with_no_zero_crossing(self.upper, delta),
            }
        }
    }

    /// Returns the range with both bounds multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Result<Self, AxisError> {
        if factor < 0.0 {
            return Err(AxisError::NegativeScaleFactor(factor));
        }
        Ok(Self {
            lower: self.lower * factor,
            upper: self.upper * factor,
        })
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::UNIT
    }
}

fn shift_with_no_zero_crossing(value: f64, delta: f64) -> f64 {
    if value > 0.0 {
        (value + delta).max(0.0)
    } else if value < 0.0 {
        (value + delta).min(0.0)
    } else {
        value + delta
    }
}
