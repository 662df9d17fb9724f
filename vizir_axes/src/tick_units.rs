// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources of standard tick units.
//!
//! Auto tick selection never invents a spacing; it asks a [`TickUnitSource`]
//! for the smallest standard unit at least as large as an estimate, and steps
//! to larger units until labels fit.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt::Debug;

use chrono::Locale;
use chrono_tz::Tz;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{
    AxisError, DateFormat, DateTickUnit, DateTickUnitType, NumberFormat, NumberTickUnit, TickUnit,
};

/// A discrete, ordered set of tick units.
pub trait TickUnitSource<U: TickUnit>: Debug + Send + Sync {
    /// Returns the smallest unit whose size is at least `size`.
    ///
    /// If every unit is smaller, the largest unit is returned.
    fn ceiling_tick_unit(&self, size: f64) -> Result<U, AxisError>;

    /// Returns the smallest unit at least as large as `unit`.
    fn ceiling_tick_unit_for(&self, unit: &U) -> Result<U, AxisError> {
        self.ceiling_tick_unit(unit.size())
    }

    /// Returns the next unit after `unit`.
    ///
    /// At the top of the sequence `unit` itself is returned, so a search loop
    /// can detect that it cannot grow any further.
    fn larger_tick_unit(&self, unit: &U) -> Result<U, AxisError>;
}

/// A sorted table of tick units.
#[derive(Clone, Debug, PartialEq)]
pub struct TickUnits<U> {
    units: Vec<U>,
}

impl<U: TickUnit> TickUnits<U> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Inserts `unit`, keeping the table ordered by size.
    pub fn add(&mut self, unit: U) {
        let size = unit.size();
        let at = self.units.partition_point(|u| u.size() <= size);
        self.units.insert(at, unit);
    }

    /// The number of units in the table.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the table has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the unit at `index`, smallest first.
    pub fn get(&self, index: usize) -> Option<&U> {
        self.units.get(index)
    }

    /// Iterates over the units, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = &U> {
        self.units.iter()
    }
}

impl<U: TickUnit> Default for TickUnits<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: TickUnit> FromIterator<U> for TickUnits<U> {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        let mut table = Self::new();
        for unit in iter {
            table.add(unit);
        }
        table
    }
}

impl<U: TickUnit + Send + Sync> TickUnitSource<U> for TickUnits<U> {
    fn ceiling_tick_unit(&self, size: f64) -> Result<U, AxisError> {
        if !size.is_finite() {
            return Err(AxisError::NonFiniteTickSize(size));
        }
        let last = self.units.len().checked_sub(1).ok_or(AxisError::EmptyTickUnits)?;
        let index = self.units.partition_point(|u| u.size() < size).min(last);
        Ok(self.units[index].clone())
    }

    fn larger_tick_unit(&self, unit: &U) -> Result<U, AxisError> {
        let size = unit.size();
        let last = self.units.len().checked_sub(1).ok_or(AxisError::EmptyTickUnits)?;
        let index = self.units.partition_point(|u| u.size() <= size).min(last);
        Ok(self.units[index].clone())
    }
}

/// Tick units of 1, 2 and 5 times a power of ten.
///
/// Powers range over `-300..=300`. An integer source never goes below 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumberTickUnitSource {
    integers: bool,
}

const MAX_POWER: i32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Step {
    power: i32,
    factor: u8,
}

impl NumberTickUnitSource {
    /// Creates a source; with `integers` set, no unit is smaller than 1.
    pub fn new(integers: bool) -> Self {
        Self { integers }
    }

    /// Returns `true` for an integer-only source.
    pub fn integers(&self) -> bool {
        self.integers
    }

    fn next(step: &mut Step) -> bool {
        match step.factor {
            1 => step.factor = 2,
            2 => step.factor = 5,
            _ => {
                if step.power == MAX_POWER {
                    return false;
                }
                step.power += 1;
                step.factor = 1;
            }
        }
        true
    }

    fn previous(&self, step: &mut Step) -> bool {
        match step.factor {
            1 => {
                if (self.integers && step.power == 0) || step.power == -MAX_POWER {
                    return false;
                }
                step.factor = 5;
                step.power -= 1;
            }
            2 => step.factor = 1,
            _ => step.factor = 2,
        }
        true
    }

    fn ceiling_step(&self, size: f64) -> Result<Step, AxisError> {
        if !size.is_finite() {
            return Err(AxisError::NonFiniteTickSize(size));
        }
        let log = size.log10().ceil();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to the supported power range before the cast"
        )]
        let mut power = if log.is_finite() {
            log.clamp(-f64::from(MAX_POWER), f64::from(MAX_POWER)) as i32
        } else {
            -MAX_POWER
        };
        if self.integers {
            power = power.max(0);
        }
        let mut step = Step { power, factor: 1 };
        loop {
            let moved = self.previous(&mut step);
            if step_size(step) < size {
                Self::next(&mut step);
                break;
            }
            if !moved {
                break;
            }
        }
        // The power clamp can leave the walk below `size` at the very top.
        while step_size(step) < size && Self::next(&mut step) {}
        Ok(step)
    }
}

fn step_size(step: Step) -> f64 {
    f64::from(step.factor) * 10_f64.powf(f64::from(step.power))
}

fn step_unit(step: Step) -> NumberTickUnit {
    let format = match step.power {
        -4 => NumberFormat::fixed(4),
        -3 => NumberFormat::fixed(3),
        -2 => NumberFormat::fixed(2),
        -1 => NumberFormat::fixed(1),
        0..=6 => NumberFormat::grouped_integer(),
        _ => NumberFormat::scientific(6),
    };
    let minor = match step.factor {
        1 => 10,
        5 => 5,
        _ => 0,
    };
    NumberTickUnit::with_format(step_size(step), format, minor)
}

impl TickUnitSource<NumberTickUnit> for NumberTickUnitSource {
    fn ceiling_tick_unit(&self, size: f64) -> Result<NumberTickUnit, AxisError> {
        self.ceiling_step(size).map(step_unit)
    }

    fn larger_tick_unit(&self, unit: &NumberTickUnit) -> Result<NumberTickUnit, AxisError> {
        let mut step = self.ceiling_step(unit.size())?;
        if step_size(step) == unit.size() {
            Self::next(&mut step);
        }
        Ok(step_unit(step))
    }
}

/// Builds the standard date tick units, from one millisecond to a century.
///
/// Labels are formatted in `tz` with `locale`.
pub fn standard_date_tick_units(tz: Tz, locale: Locale) -> TickUnits<DateTickUnit> {
    use DateTickUnitType::{Day, Hour, Millisecond, Minute, Month, Second, Year};

    let format = |pattern: &str| DateFormat::new(pattern).with_time_zone(tz).with_locale(locale);
    let f_ms = format("%H:%M:%S%.3f");
    let f_s = format("%H:%M:%S");
    let f_min = format("%H:%M");
    let f_hour = format("%H:%M");
    let f_half_day = format("%-d-%b, %H:%M");
    let f_day = format("%-d-%b");
    let f_month = format("%b-%Y");
    let f_year = format("%Y");

    let rows: [(DateTickUnitType, i32, DateTickUnitType, i32, &DateFormat); 40] = [
        (Millisecond, 1, Millisecond, 1, &f_ms),
        (Millisecond, 5, Millisecond, 1, &f_ms),
        (Millisecond, 10, Millisecond, 1, &f_ms),
        (Millisecond, 25, Millisecond, 5, &f_ms),
        (Millisecond, 50, Millisecond, 10, &f_ms),
        (Millisecond, 100, Millisecond, 10, &f_ms),
        (Millisecond, 250, Millisecond, 10, &f_ms),
        (Millisecond, 500, Millisecond, 50, &f_ms),
        (Second, 1, Millisecond, 50, &f_s),
        (Second, 5, Second, 1, &f_s),
        (Second, 10, Second, 1, &f_s),
        (Second, 30, Second, 5, &f_s),
        (Minute, 1, Second, 5, &f_min),
        (Minute, 2, Second, 10, &f_min),
        (Minute, 5, Minute, 1, &f_min),
        (Minute, 10, Minute, 1, &f_min),
        (Minute, 15, Minute, 5, &f_min),
        (Minute, 20, Minute, 5, &f_min),
        (Minute, 30, Minute, 5, &f_min),
        (Hour, 1, Minute, 5, &f_hour),
        (Hour, 2, Minute, 10, &f_hour),
        (Hour, 4, Minute, 30, &f_hour),
        (Hour, 6, Hour, 1, &f_hour),
        (Hour, 12, Hour, 1, &f_half_day),
        (Day, 1, Hour, 1, &f_day),
        (Day, 2, Hour, 1, &f_day),
        (Day, 7, Day, 1, &f_day),
        (Day, 15, Day, 1, &f_day),
        (Month, 1, Day, 1, &f_month),
        (Month, 2, Day, 1, &f_month),
        (Month, 3, Month, 1, &f_month),
        (Month, 4, Month, 1, &f_month),
        (Month, 6, Month, 1, &f_month),
        (Year, 1, Month, 1, &f_year),
        (Year, 2, Month, 3, &f_year),
        (Year, 5, Year, 1, &f_year),
        (Year, 10, Year, 1, &f_year),
        (Year, 25, Year, 5, &f_year),
        (Year, 50, Year, 10, &f_year),
        (Year, 100, Year, 20, &f_year),
    ];
    rows.into_iter()
        .map(|(unit, multiple, roll, roll_multiple, format)| {
            DateTickUnit::standard(unit, multiple, roll, roll_multiple, format.clone())
        })
        .collect()
}
