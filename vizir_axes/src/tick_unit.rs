// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick units: a step size plus a label formatter.

extern crate alloc;

use alloc::string::String;
use core::fmt::Debug;

use chrono_tz::Tz;

use crate::calendar::{add_field, millis_from_f64};
use crate::{AxisError, DateFormat, NumberFormat};

/// A candidate spacing between ticks.
///
/// Units are ordered by [`TickUnit::size`]; tick unit sources hand them out in
/// that order.
pub trait TickUnit: Clone + Debug {
    /// The distance between two major ticks, in axis units.
    fn size(&self) -> f64;

    /// The number of minor ticks suggested between two major ticks.
    fn minor_tick_count(&self) -> u32;

    /// Formats a tick value for display.
    fn value_to_string(&self, value: f64) -> String;
}

/// A tick unit for number and log axes.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberTickUnit {
    size: f64,
    minor_tick_count: u32,
    format: NumberFormat,
}

impl NumberTickUnit {
    /// Creates a unit of `size` with the default number format and no minor ticks.
    pub fn new(size: f64) -> Self {
        Self::with_format(size, NumberFormat::default(), 0)
    }

    /// Creates a unit with an explicit format and minor tick count.
    pub fn with_format(size: f64, format: NumberFormat, minor_tick_count: u32) -> Self {
        Self {
            size,
            minor_tick_count,
            format,
        }
    }

    /// The label format.
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }
}

impl TickUnit for NumberTickUnit {
    fn size(&self) -> f64 {
        self.size
    }

    fn minor_tick_count(&self) -> u32 {
        self.minor_tick_count
    }

    fn value_to_string(&self, value: f64) -> String {
        self.format.format(value)
    }
}

/// Calendar granularities for date tick units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTickUnitType {
    /// Milliseconds.
    Millisecond,
    /// Seconds.
    Second,
    /// Minutes.
    Minute,
    /// Hours.
    Hour,
    /// Calendar days.
    Day,
    /// Calendar months.
    Month,
    /// Calendar years.
    Year,
}

impl DateTickUnitType {
    /// The approximate length of one unit in milliseconds.
    ///
    /// Months count as 31 days and years as 365 days; the value is only used to
    /// order units and to estimate spacing.
    pub fn approximate_millis(self) -> f64 {
        const SECOND: f64 = 1000.0;
        const MINUTE: f64 = 60.0 * SECOND;
        const HOUR: f64 = 60.0 * MINUTE;
        const DAY: f64 = 24.0 * HOUR;
        match self {
            Self::Millisecond => 1.0,
            Self::Second => SECOND,
            Self::Minute => MINUTE,
            Self::Hour => HOUR,
            Self::Day => DAY,
            Self::Month => 31.0 * DAY,
            Self::Year => 365.0 * DAY,
        }
    }
}

/// A tick unit stepping through calendar time.
///
/// When a tick would land on a value hidden by the axis timeline, the axis
/// rolls forward by `roll_multiple` units of `roll_unit_type` instead of a
/// full step.
#[derive(Clone, Debug, PartialEq)]
pub struct DateTickUnit {
    unit_type: DateTickUnitType,
    multiple: i32,
    roll_unit_type: DateTickUnitType,
    roll_multiple: i32,
    minor_tick_count: u32,
    format: DateFormat,
}

impl DateTickUnit {
    /// Creates a unit of `multiple` × `unit_type` that rolls by the same amount.
    pub fn new(
        unit_type: DateTickUnitType,
        multiple: i32,
        format: DateFormat,
    ) -> Result<Self, AxisError> {
        Self::with_roll(unit_type, multiple, unit_type, multiple, format)
    }

    /// Creates a unit with an explicit roll unit.
    pub fn with_roll(
        unit_type: DateTickUnitType,
        multiple: i32,
        roll_unit_type: DateTickUnitType,
        roll_multiple: i32,
        format: DateFormat,
    ) -> Result<Self, AxisError> {
        if multiple <= 0 {
            return Err(AxisError::NonPositiveMultiple(multiple));
        }
        if roll_multiple <= 0 {
            return Err(AxisError::NonPositiveMultiple(roll_multiple));
        }
        Ok(Self {
            unit_type,
            multiple,
            roll_unit_type,
            roll_multiple,
            minor_tick_count: 0,
            format,
        })
    }

    /// Builds a unit from multiples known to be positive.
    pub(crate) fn standard(
        unit_type: DateTickUnitType,
        multiple: i32,
        roll_unit_type: DateTickUnitType,
        roll_multiple: i32,
        format: DateFormat,
    ) -> Self {
        debug_assert!(
            multiple > 0 && roll_multiple > 0,
            "standard units have positive multiples"
        );
        Self {
            unit_type,
            multiple,
            roll_unit_type,
            roll_multiple,
            minor_tick_count: 0,
            format,
        }
    }

    /// Returns a copy suggesting `count` minor ticks per step.
    #[must_use]
    pub fn with_minor_tick_count(mut self, count: u32) -> Self {
        self.minor_tick_count = count;
        self
    }

    /// The calendar granularity.
    pub fn unit_type(&self) -> DateTickUnitType {
        self.unit_type
    }

    /// The number of units per step.
    pub fn multiple(&self) -> i32 {
        self.multiple
    }

    /// The granularity used when rolling past hidden values.
    pub fn roll_unit_type(&self) -> DateTickUnitType {
        self.roll_unit_type
    }

    /// The number of roll units per roll.
    pub fn roll_multiple(&self) -> i32 {
        self.roll_multiple
    }

    /// The label format.
    pub fn format(&self) -> &DateFormat {
        &self.format
    }

    /// Adds one step to `millis`, with calendar fields evaluated in `tz`.
    pub fn add_to_date(&self, millis: i64, tz: Tz) -> Result<i64, AxisError> {
        add_field(millis, self.unit_type, self.multiple, tz)
    }

    /// Adds one roll to `millis`, with calendar fields evaluated in `tz`.
    pub fn roll_date(&self, millis: i64, tz: Tz) -> Result<i64, AxisError> {
        add_field(millis, self.roll_unit_type, self.roll_multiple, tz)
    }

    /// Formats an instant in milliseconds.
    pub fn date_to_string(&self, millis: i64) -> String {
        self.format.format(millis)
    }
}

impl TickUnit for DateTickUnit {
    fn size(&self) -> f64 {
        self.unit_type.approximate_millis() * f64::from(self.multiple)
    }

    fn minor_tick_count(&self) -> u32 {
        self.minor_tick_count
    }

    fn value_to_string(&self, value: f64) -> String {
        self.date_to_string(millis_from_f64(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_unit_requires_positive_multiples() {
        let f = DateFormat::default();
        assert_eq!(
            DateTickUnit::new(DateTickUnitType::Day, 0, f.clone()),
            Err(AxisError::NonPositiveMultiple(0))
        );
        assert_eq!(
            DateTickUnit::with_roll(DateTickUnitType::Day, 1, DateTickUnitType::Hour, -2, f),
            Err(AxisError::NonPositiveMultiple(-2))
        );
    }

    #[test]
    fn date_unit_size_uses_approximate_lengths() {
        let f = DateFormat::default();
        let month = DateTickUnit::new(DateTickUnitType::Month, 3, f.clone()).unwrap();
        assert!((month.size() - 3.0 * 31.0 * 86_400_000.0).abs() < 1e-3);
        let year = DateTickUnit::new(DateTickUnitType::Year, 1, f).unwrap();
        assert!(year.size() > month.size());
    }

    #[test]
    fn add_and_roll_use_their_own_units() {
        let unit = DateTickUnit::with_roll(
            DateTickUnitType::Day,
            7,
            DateTickUnitType::Day,
            1,
            DateFormat::default(),
        )
        .unwrap();
        assert_eq!(unit.add_to_date(0, Tz::UTC).unwrap(), 7 * 86_400_000);
        assert_eq!(unit.roll_date(0, Tz::UTC).unwrap(), 86_400_000);
    }

    #[test]
    fn number_unit_formats_with_its_format() {
        let unit = NumberTickUnit::with_format(0.25, NumberFormat::fixed(2), 5);
        assert_eq!(unit.value_to_string(0.5), "0.50");
        assert_eq!(unit.minor_tick_count(), 5);
    }
}
