// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock arithmetic in a time zone.
//!
//! Instants are `i64` milliseconds since the Unix epoch. Calendar fields are
//! read and written in local time; local times that do not exist (DST gaps)
//! move forward an hour, ambiguous ones take the earlier instant.

use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{AxisError, DateTickUnitType};

/// Converts an axis value to whole milliseconds, rounding to nearest.
#[allow(
    clippy::cast_possible_truncation,
    reason = "saturating float to int conversion is the intended behavior"
)]
pub(crate) fn millis_from_f64(value: f64) -> i64 {
    value.round() as i64
}

/// Returns the local wall-clock time of `millis` in `tz`.
pub(crate) fn to_local(millis: i64, tz: Tz) -> Result<NaiveDateTime, AxisError> {
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_local())
        .ok_or(AxisError::TimestampOutOfRange(millis))
}

/// Resolves a local wall-clock time in `tz` to an instant.
pub(crate) fn resolve_local(naive: NaiveDateTime, tz: Tz) -> i64 {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return dt.timestamp_millis();
    }
    // Inside a DST gap.
    if let Some(dt) = naive
        .checked_add_signed(TimeDelta::hours(1))
        .and_then(|later| tz.from_local_datetime(&later).earliest())
    {
        return dt.timestamp_millis();
    }
    naive.and_utc().timestamp_millis()
}

/// Builds a local date-time from fields that may overflow their usual ranges.
///
/// `month` is 1-based and may be zero, negative or above 12; `day` may be zero
/// or negative (day 0 is the last day of the previous month).
pub(crate) fn lenient_local(
    year: i32,
    month: i32,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    milli: i64,
) -> Option<NaiveDateTime> {
    let year = year.checked_add((month - 1).div_euclid(12))?;
    let month = u32::try_from((month - 1).rem_euclid(12) + 1).ok()?;
    let start = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    start
        .checked_add_signed(TimeDelta::try_days(day - 1)?)?
        .checked_add_signed(TimeDelta::try_hours(hour)?)?
        .checked_add_signed(TimeDelta::try_minutes(minute)?)?
        .checked_add_signed(TimeDelta::try_seconds(second)?)?
        .checked_add_signed(TimeDelta::try_milliseconds(milli)?)
}

/// Resolves [`lenient_local`] fields in `tz`, reporting `origin` on overflow.
pub(crate) fn local_millis(
    origin: i64,
    tz: Tz,
    fields: (i32, i32, i64, i64, i64, i64, i64),
) -> Result<i64, AxisError> {
    let (y, mo, d, h, mi, s, ms) = fields;
    lenient_local(y, mo, d, h, mi, s, ms)
        .map(|naive| resolve_local(naive, tz))
        .ok_or(AxisError::TimestampOutOfRange(origin))
}

/// Adds `amount` units to `millis`.
///
/// Units up to an hour add elapsed time. Days add local calendar days, months
/// and years add local calendar months, clamping the day to the end of the
/// target month.
pub(crate) fn add_field(
    millis: i64,
    unit: DateTickUnitType,
    amount: i32,
    tz: Tz,
) -> Result<i64, AxisError> {
    let out_of_range = AxisError::TimestampOutOfRange(millis);
    let months = match unit {
        DateTickUnitType::Millisecond
        | DateTickUnitType::Second
        | DateTickUnitType::Minute
        | DateTickUnitType::Hour => {
            let step = match unit {
                DateTickUnitType::Second => 1000,
                DateTickUnitType::Minute => 60_000,
                DateTickUnitType::Hour => 3_600_000,
                _ => 1,
            };
            return i64::from(amount)
                .checked_mul(step)
                .and_then(|delta| millis.checked_add(delta))
                .ok_or(out_of_range);
        }
        DateTickUnitType::Day => {
            let local = to_local(millis, tz)?;
            let shifted = TimeDelta::try_days(i64::from(amount))
                .and_then(|delta| local.checked_add_signed(delta))
                .ok_or(out_of_range)?;
            return Ok(resolve_local(shifted, tz));
        }
        DateTickUnitType::Month => amount,
        DateTickUnitType::Year => amount.checked_mul(12).ok_or(out_of_range.clone())?,
    };
    let local = to_local(millis, tz)?;
    let shifted = if months >= 0 {
        local.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        local.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted
        .map(|naive| resolve_local(naive, tz))
        .ok_or(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use chrono_tz::America::New_York;

    const DAY: i64 = 86_400_000;

    #[test]
    fn lenient_fields_normalize() {
        let d = lenient_local(2024, 13, 1, 0, 0, 0, 0).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2025, 1, 1));
        let d = lenient_local(2024, 3, 0, 0, 0, 0, 0).unwrap();
        assert_eq!((d.month(), d.day()), (2, 29));
        let d = lenient_local(2024, 0, 1, 25, 0, 0, 0).unwrap();
        assert_eq!((d.year(), d.month(), d.day(), d.hour()), (2023, 12, 2, 1));
    }

    #[test]
    fn month_addition_clamps_to_month_end() {
        // 2024-01-31T00:00Z
        let jan31 = 1_706_659_200_000;
        let feb = add_field(jan31, DateTickUnitType::Month, 1, Tz::UTC).unwrap();
        let d = to_local(feb, Tz::UTC).unwrap();
        assert_eq!((d.month(), d.day()), (2, 29));
        let back = add_field(jan31, DateTickUnitType::Year, -1, Tz::UTC).unwrap();
        assert_eq!(to_local(back, Tz::UTC).unwrap().year(), 2023);
    }

    #[test]
    fn day_addition_keeps_wall_clock_across_dst() {
        // 2024-03-09T12:00 in New York (EST, UTC-5).
        let before = 1_710_003_600_000;
        let after = add_field(before, DateTickUnitType::Day, 1, New_York).unwrap();
        assert_eq!(after - before, DAY - 3_600_000);
        assert_eq!(to_local(after, New_York).unwrap().hour(), 12);
    }

    #[test]
    fn gap_times_move_forward() {
        // 02:30 on 2024-03-10 does not exist in New York.
        let naive = lenient_local(2024, 3, 10, 2, 30, 0, 0).unwrap();
        let ms = resolve_local(naive, New_York);
        assert_eq!(to_local(ms, New_York).unwrap().hour(), 3);
    }

    #[test]
    fn sub_day_units_add_elapsed_time() {
        assert_eq!(
            add_field(0, DateTickUnitType::Hour, 3, Tz::UTC).unwrap(),
            3 * 3_600_000
        );
        assert_eq!(
            add_field(10, DateTickUnitType::Millisecond, -5, Tz::UTC).unwrap(),
            5
        );
        assert!(add_field(i64::MAX, DateTickUnitType::Second, 1, Tz::UTC).is_err());
    }
}
