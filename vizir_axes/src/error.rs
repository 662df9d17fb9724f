// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for axis configuration.

/// Errors raised when an axis, range or tick unit is given an invalid value.
///
/// These are precondition failures: they are returned by the call that
/// introduced the bad value and leave the axis unchanged.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AxisError {
    /// A range was constructed with `lower > upper` or with a NaN bound.
    #[error("invalid range: lower bound {lower} must not exceed upper bound {upper}")]
    InvalidRange {
        /// The requested lower bound.
        lower: f64,
        /// The requested upper bound.
        upper: f64,
    },
    /// An axis was given a range whose length is not positive.
    #[error("a positive range length is required, got [{lower}, {upper}]")]
    EmptyRange {
        /// The requested lower bound.
        lower: f64,
        /// The requested upper bound.
        upper: f64,
    },
    /// A date tick unit multiple (or roll multiple) was zero or negative.
    #[error("tick unit multiple must be positive, got {0}")]
    NonPositiveMultiple(i32),
    /// A tick unit size query was infinite or NaN.
    #[error("tick unit size must be finite, got {0}")]
    NonFiniteTickSize(f64),
    /// A tick unit table with no entries was queried.
    #[error("the tick unit table is empty")]
    EmptyTickUnits,
    /// A log axis base was not greater than 1.
    #[error("log base must be greater than 1, got {0}")]
    InvalidLogBase(f64),
    /// A log axis smallest value was not positive.
    #[error("smallest value must be positive, got {0}")]
    NonPositiveSmallestValue(f64),
    /// An auto-range minimum size was not positive.
    #[error("auto-range minimum size must be positive, got {0}")]
    NonPositiveMinimumSize(f64),
    /// A range was scaled by a negative factor.
    #[error("range scale factor must not be negative, got {0}")]
    NegativeScaleFactor(f64),
    /// A segmented timeline was given a non-positive segment size or no
    /// included segments.
    #[error("invalid timeline segments: size {segment_size} ms, {included} included")]
    InvalidTimelineSegments {
        /// The requested segment size in milliseconds.
        segment_size: i64,
        /// The requested number of included segments per group.
        included: i64,
    },
    /// A category index was outside `0..count`.
    #[error("category index {index} is out of range for {count} categories")]
    InvalidCategoryIndex {
        /// The requested index.
        index: usize,
        /// The number of categories.
        count: usize,
    },
    /// A millisecond timestamp fell outside the calendar's supported span.
    #[error("timestamp {0} ms is outside the supported calendar range")]
    TimestampOutOfRange(i64),
}
