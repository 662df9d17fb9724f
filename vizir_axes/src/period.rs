// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regular calendar periods (years, quarters, months, ...) in a time zone.
//!
//! Period axes snap their range to whole periods and draw label bands with one
//! label per period. A [`RegularTimePeriod`] is pegged to a time zone: its
//! boundaries are local wall-clock boundaries, resolved to instants when the
//! period is built.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use chrono_tz::Tz;

use crate::AxisError;
use crate::calendar::{resolve_local, to_local};

/// The granularity of a regular time period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodKind {
    /// Calendar years.
    Year,
    /// Calendar quarters starting in January, April, July and October.
    Quarter,
    /// Calendar months.
    Month,
    /// Calendar days.
    Day,
    /// Hours.
    Hour,
    /// Minutes.
    Minute,
    /// Seconds.
    Second,
    /// Milliseconds.
    Millisecond,
}

impl PeriodKind {
    /// Returns the next finer kind; `Millisecond` is its own downsize.
    pub fn downsize(self) -> Self {
        match self {
            Self::Year => Self::Quarter,
            Self::Quarter => Self::Month,
            Self::Month => Self::Day,
            Self::Day => Self::Hour,
            Self::Hour => Self::Minute,
            Self::Minute => Self::Second,
            Self::Second | Self::Millisecond => Self::Millisecond,
        }
    }

    /// Floors a local date-time to the start of its period.
    fn floor(self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = local.date();
        let (y, m) = (date.year(), date.month());
        match self {
            Self::Year => NaiveDate::from_ymd_opt(y, 1, 1)?.and_hms_opt(0, 0, 0),
            Self::Quarter => {
                NaiveDate::from_ymd_opt(y, ((m - 1) / 3) * 3 + 1, 1)?.and_hms_opt(0, 0, 0)
            }
            Self::Month => NaiveDate::from_ymd_opt(y, m, 1)?.and_hms_opt(0, 0, 0),
            Self::Day => date.and_hms_opt(0, 0, 0),
            Self::Hour => date.and_hms_opt(local.hour(), 0, 0),
            Self::Minute => date.and_hms_opt(local.hour(), local.minute(), 0),
            Self::Second => date.and_hms_opt(local.hour(), local.minute(), local.second()),
            Self::Millisecond => date.and_hms_milli_opt(
                local.hour(),
                local.minute(),
                local.second(),
                (local.nanosecond() / 1_000_000).min(999),
            ),
        }
    }

    /// Moves a period start by `count` periods in local time.
    fn advance(self, start: NaiveDateTime, count: i32) -> Option<NaiveDateTime> {
        let months = match self {
            Self::Year => count.checked_mul(12)?,
            Self::Quarter => count.checked_mul(3)?,
            Self::Month => count,
            Self::Day => return start.checked_add_signed(TimeDelta::try_days(count.into())?),
            Self::Hour => return start.checked_add_signed(TimeDelta::try_hours(count.into())?),
            Self::Minute => {
                return start.checked_add_signed(TimeDelta::try_minutes(count.into())?);
            }
            Self::Second => {
                return start.checked_add_signed(TimeDelta::try_seconds(count.into())?);
            }
            Self::Millisecond => {
                return start.checked_add_signed(TimeDelta::try_milliseconds(count.into())?);
            }
        };
        if months >= 0 {
            start.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            start.checked_sub_months(Months::new(months.unsigned_abs()))
        }
    }
}

/// One period of a [`PeriodKind`] in a time zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegularTimePeriod {
    kind: PeriodKind,
    start: NaiveDateTime,
    tz: Tz,
    first_ms: i64,
    last_ms: i64,
}

impl RegularTimePeriod {
    /// Returns the period of `kind` containing the instant `millis` in `tz`.
    pub fn containing(kind: PeriodKind, millis: i64, tz: Tz) -> Result<Self, AxisError> {
        let local = to_local(millis, tz)?;
        let start = kind
            .floor(local)
            .ok_or(AxisError::TimestampOutOfRange(millis))?;
        Self::from_start(kind, start, tz)
    }

    fn from_start(kind: PeriodKind, start: NaiveDateTime, tz: Tz) -> Result<Self, AxisError> {
        let first_ms = resolve_local(start, tz);
        let end = kind
            .advance(start, 1)
            .ok_or(AxisError::TimestampOutOfRange(first_ms))?;
        Ok(Self {
            kind,
            start,
            tz,
            first_ms,
            last_ms: resolve_local(end, tz) - 1,
        })
    }

    /// The following period.
    pub fn next(&self) -> Result<Self, AxisError> {
        let start = self
            .kind
            .advance(self.start, 1)
            .ok_or(AxisError::TimestampOutOfRange(self.last_ms))?;
        Self::from_start(self.kind, start, self.tz)
    }

    /// The preceding period.
    pub fn previous(&self) -> Result<Self, AxisError> {
        let start = self
            .kind
            .advance(self.start, -1)
            .ok_or(AxisError::TimestampOutOfRange(self.first_ms))?;
        Self::from_start(self.kind, start, self.tz)
    }

    /// The same local period pegged to `tz`.
    pub fn pegged(&self, tz: Tz) -> Result<Self, AxisError> {
        Self::from_start(self.kind, self.start, tz)
    }

    /// The granularity of this period.
    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// The time zone the period is pegged to.
    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    /// The local wall-clock start of the period.
    pub fn start_local(&self) -> NaiveDateTime {
        self.start
    }

    /// The first instant in the period.
    pub fn first_millisecond(&self) -> i64 {
        self.first_ms
    }

    /// The last instant in the period.
    pub fn last_millisecond(&self) -> i64 {
        self.last_ms
    }

    /// The instant halfway through the period.
    pub fn middle_millisecond(&self) -> i64 {
        self.first_ms + (self.last_ms - self.first_ms) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    const HOUR: i64 = 3_600_000;
    const DAY: i64 = 24 * HOUR;

    // 2024-05-17T13:45:12.345Z
    const MAY_17: i64 = 1_715_953_512_345;

    #[test]
    fn downsize_steps_one_level_finer() {
        assert_eq!(PeriodKind::Year.downsize(), PeriodKind::Quarter);
        assert_eq!(PeriodKind::Month.downsize(), PeriodKind::Day);
        assert_eq!(PeriodKind::Millisecond.downsize(), PeriodKind::Millisecond);
    }

    #[test]
    fn containing_floors_local_fields() {
        let month = RegularTimePeriod::containing(PeriodKind::Month, MAY_17, Tz::UTC).unwrap();
        let start = month.start_local();
        assert_eq!((start.year(), start.month(), start.day()), (2024, 5, 1));
        assert_eq!(month.first_millisecond(), 1_714_521_600_000);
        assert_eq!(month.last_millisecond() - month.first_millisecond(), 31 * DAY - 1);

        let quarter = RegularTimePeriod::containing(PeriodKind::Quarter, MAY_17, Tz::UTC).unwrap();
        assert_eq!(quarter.start_local().month(), 4);

        let ms = RegularTimePeriod::containing(PeriodKind::Millisecond, MAY_17, Tz::UTC).unwrap();
        assert_eq!(ms.first_millisecond(), MAY_17);
        assert_eq!(ms.last_millisecond(), MAY_17);
    }

    #[test]
    fn next_and_previous_are_adjacent() {
        let day = RegularTimePeriod::containing(PeriodKind::Day, MAY_17, Tz::UTC).unwrap();
        let next = day.next().unwrap();
        assert_eq!(next.first_millisecond(), day.last_millisecond() + 1);
        assert_eq!(next.previous().unwrap(), day);
        let year = RegularTimePeriod::containing(PeriodKind::Year, MAY_17, Tz::UTC).unwrap();
        assert_eq!(year.previous().unwrap().start_local().year(), 2023);
    }

    #[test]
    fn middle_is_halfway() {
        let day = RegularTimePeriod::containing(PeriodKind::Day, MAY_17, Tz::UTC).unwrap();
        assert_eq!(day.middle_millisecond() - day.first_millisecond(), DAY / 2 - 1);
    }

    #[test]
    fn days_follow_local_midnight_across_dst() {
        // 2024-03-10T12:00Z, the day New York springs forward.
        let ms = 1_710_072_000_000;
        let day = RegularTimePeriod::containing(PeriodKind::Day, ms, New_York).unwrap();
        assert_eq!(day.last_millisecond() + 1 - day.first_millisecond(), DAY - HOUR);
        assert_eq!(day.time_zone(), New_York);
    }
}
