// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timelines: transforms from instants to a possibly compressed axis.
//!
//! A date axis maps instants onto pixels through a [`Timeline`]. The default
//! timeline is the identity; a [`SegmentedTimeline`] removes repeating gaps
//! (weekends, out-of-hours) and individual exception segments (holidays), so
//! that the remaining time is laid out without holes.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt::Debug;

use chrono_tz::Tz;

use crate::AxisError;
use crate::calendar::local_millis;

/// Maps instants (milliseconds since the Unix epoch) to timeline values.
pub trait Timeline: Debug + Send + Sync {
    /// Converts an instant to a timeline value.
    ///
    /// Instants inside excluded time map to the start of the next included
    /// segment.
    fn to_timeline_value(&self, millis: i64) -> i64;

    /// Converts a timeline value back to an instant.
    fn to_millisecond(&self, timeline_value: i64) -> i64;

    /// Returns `true` if `millis` is part of the timeline.
    fn contains_domain_value(&self, millis: i64) -> bool;

    /// Returns `true` if every instant in `[from, to]` is part of the timeline.
    fn contains_domain_range(&self, from: i64, to: i64) -> bool;
}

/// The identity timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultTimeline;

impl Timeline for DefaultTimeline {
    fn to_timeline_value(&self, millis: i64) -> i64 {
        millis
    }

    fn to_millisecond(&self, timeline_value: i64) -> i64 {
        timeline_value
    }

    fn contains_domain_value(&self, _millis: i64) -> bool {
        true
    }

    fn contains_domain_range(&self, _from: i64, _to: i64) -> bool {
        true
    }
}

/// One day in milliseconds.
pub const DAY_SEGMENT_SIZE: i64 = 86_400_000;

/// A timeline made of repeating groups of included and excluded segments.
///
/// Time is cut into fixed-length segments starting at `start_time`. Each group
/// is `segments_included` included segments followed by `segments_excluded`
/// excluded ones. Segments are fixed length, so in zones with daylight saving
/// the boundaries drift by the DST offset for part of the year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentedTimeline {
    segment_size: i64,
    segments_included: i64,
    segments_excluded: i64,
    start_time: i64,
    exceptions: Vec<i64>,
}

impl SegmentedTimeline {
    /// Creates a timeline starting at the Unix epoch.
    pub fn new(
        segment_size: i64,
        segments_included: i64,
        segments_excluded: i64,
    ) -> Result<Self, AxisError> {
        if segment_size <= 0 || segments_included <= 0 || segments_excluded < 0 {
            return Err(AxisError::InvalidTimelineSegments {
                segment_size,
                included: segments_included,
            });
        }
        Ok(Self {
            segment_size,
            segments_included,
            segments_excluded,
            start_time: 0,
            exceptions: Vec::new(),
        })
    }

    /// A Monday to Friday timeline in `tz`.
    ///
    /// Groups start at midnight on Monday 1900-01-01 local time.
    pub fn monday_through_friday(tz: Tz) -> Result<Self, AxisError> {
        let start = local_millis(0, tz, (1900, 1, 1, 0, 0, 0, 0))?;
        Ok(Self::new(DAY_SEGMENT_SIZE, 5, 2)?.with_start_time(start))
    }

    /// Returns a copy whose first group starts at `start_time`.
    ///
    /// Exception segments are aligned to the old start and are dropped.
    #[must_use]
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = start_time;
        self.exceptions.clear();
        self
    }

    /// The segment length in milliseconds.
    pub fn segment_size(&self) -> i64 {
        self.segment_size
    }

    /// The start of the first group.
    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// The number of included segments per group.
    pub fn segments_included(&self) -> i64 {
        self.segments_included
    }

    /// The number of excluded segments per group.
    pub fn segments_excluded(&self) -> i64 {
        self.segments_excluded
    }

    fn group_size(&self) -> i64 {
        self.segment_size * (self.segments_included + self.segments_excluded)
    }

    fn included_size(&self) -> i64 {
        self.segment_size * self.segments_included
    }

    fn segment_start(&self, millis: i64) -> i64 {
        self.start_time
            + (millis - self.start_time).div_euclid(self.segment_size) * self.segment_size
    }

    fn in_excluded_segments(&self, millis: i64) -> bool {
        (millis - self.start_time).rem_euclid(self.group_size()) >= self.included_size()
    }

    fn is_exception(&self, segment_start: i64) -> bool {
        self.exceptions.binary_search(&segment_start).is_ok()
    }

    /// Excludes the segment containing `millis`.
    ///
    /// Segments that are already excluded, or that start before the first
    /// group, are ignored.
    pub fn add_exception(&mut self, millis: i64) {
        let start = self.segment_start(millis);
        if start < self.start_time || self.in_excluded_segments(start) {
            return;
        }
        if let Err(at) = self.exceptions.binary_search(&start) {
            self.exceptions.insert(at, start);
        }
    }

    /// Excludes every segment containing an instant in `[from, to]`.
    pub fn add_exceptions(&mut self, from: i64, to: i64) {
        let mut segment = self.segment_start(from);
        while segment <= to {
            self.add_exception(segment);
            segment += self.segment_size;
        }
    }

    /// The start times of the exception segments, ascending.
    pub fn exceptions(&self) -> &[i64] {
        &self.exceptions
    }

    /// The timeline value of `millis`, ignoring exceptions.
    fn plain_timeline_value(&self, millis: i64) -> i64 {
        let raw = millis - self.start_time;
        let group = raw.div_euclid(self.group_size());
        let within = raw.rem_euclid(self.group_size());
        self.included_size() * group + within.min(self.included_size())
    }

    /// The instant of a plain (exception-free) timeline value.
    fn plain_millisecond(&self, timeline_value: i64) -> i64 {
        let excluded = self.segment_size * self.segments_excluded;
        self.start_time
            + timeline_value
            + timeline_value.div_euclid(self.included_size()) * excluded
    }

    fn exceptions_before(&self, segment_start: i64) -> i64 {
        let n = self.exceptions.partition_point(|&e| e < segment_start);
        i64::try_from(n).unwrap_or(i64::MAX)
    }
}

impl Timeline for SegmentedTimeline {
    fn to_timeline_value(&self, millis: i64) -> i64 {
        let mut millis = millis;
        // Move out of excluded time onto the next included segment.
        loop {
            let raw = millis - self.start_time;
            if raw.rem_euclid(self.group_size()) >= self.included_size() {
                millis = self.start_time
                    + (raw.div_euclid(self.group_size()) + 1) * self.group_size();
                continue;
            }
            let segment = self.segment_start(millis);
            if self.is_exception(segment) {
                millis = segment + self.segment_size;
                continue;
            }
            break;
        }
        let skipped = self.exceptions_before(self.segment_start(millis));
        self.plain_timeline_value(millis) - skipped * self.segment_size
    }

    fn to_millisecond(&self, timeline_value: i64) -> i64 {
        let mut skipped = 0;
        loop {
            let millis = self.plain_millisecond(timeline_value + skipped * self.segment_size);
            let segment = self.segment_start(millis);
            let covered = self.exceptions_before(segment) + i64::from(self.is_exception(segment));
            if covered == skipped {
                return millis;
            }
            skipped = covered;
        }
    }

    fn contains_domain_value(&self, millis: i64) -> bool {
        !self.in_excluded_segments(millis) && !self.is_exception(self.segment_start(millis))
    }

    fn contains_domain_range(&self, from: i64, to: i64) -> bool {
        if to < from {
            return false;
        }
        if !self.contains_domain_value(from) {
            return false;
        }
        let raw = from - self.start_time;
        let next_excluded = self.start_time
            + raw.div_euclid(self.group_size()) * self.group_size()
            + self.included_size();
        if self.segments_excluded > 0 && to >= next_excluded {
            return false;
        }
        let first = self.segment_start(from);
        let i = self.exceptions.partition_point(|&e| e < first);
        self.exceptions.get(i).is_none_or(|&e| e > to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = DAY_SEGMENT_SIZE;

    fn weekdays() -> SegmentedTimeline {
        SegmentedTimeline::monday_through_friday(Tz::UTC).unwrap()
    }

    // Monday 2024-01-01T00:00Z.
    const MONDAY: i64 = 1_704_067_200_000;

    #[test]
    fn default_timeline_is_identity() {
        let t = DefaultTimeline;
        assert_eq!(t.to_timeline_value(123), 123);
        assert_eq!(t.to_millisecond(-5), -5);
        assert!(t.contains_domain_range(0, 10));
    }

    #[test]
    fn rejects_bad_segments() {
        assert!(SegmentedTimeline::new(0, 5, 2).is_err());
        assert!(SegmentedTimeline::new(DAY, 0, 2).is_err());
    }

    #[test]
    fn weekends_are_compressed_out() {
        let t = weekdays();
        let friday_noon = MONDAY + 4 * DAY + DAY / 2;
        let saturday = MONDAY + 5 * DAY + 1000;
        let next_monday = MONDAY + 7 * DAY;
        assert!(t.contains_domain_value(friday_noon));
        assert!(!t.contains_domain_value(saturday));
        assert_eq!(t.to_timeline_value(saturday), t.to_timeline_value(next_monday));
        assert_eq!(
            t.to_timeline_value(next_monday) - t.to_timeline_value(friday_noon),
            DAY / 2
        );
    }

    #[test]
    fn round_trips_included_instants() {
        let t = weekdays();
        for i in 0..40 {
            let ms = MONDAY + i * (DAY / 3);
            if t.contains_domain_value(ms) {
                assert_eq!(t.to_millisecond(t.to_timeline_value(ms)), ms, "instant {i}");
            }
        }
    }

    #[test]
    fn exceptions_are_skipped_both_ways() {
        let mut t = weekdays();
        let wednesday = MONDAY + 2 * DAY;
        t.add_exception(wednesday + 5);
        assert_eq!(t.exceptions(), &[wednesday]);
        assert!(!t.contains_domain_value(wednesday + 1000));
        let tuesday = MONDAY + DAY + 10;
        let thursday = MONDAY + 3 * DAY + 10;
        assert_eq!(
            t.to_timeline_value(thursday) - t.to_timeline_value(tuesday),
            DAY
        );
        assert_eq!(t.to_millisecond(t.to_timeline_value(thursday)), thursday);
        assert_eq!(t.to_timeline_value(wednesday), t.to_timeline_value(MONDAY + 3 * DAY));
    }

    #[test]
    fn domain_ranges() {
        let mut t = weekdays();
        assert!(t.contains_domain_range(MONDAY, MONDAY + 4 * DAY));
        assert!(!t.contains_domain_range(MONDAY, MONDAY + 5 * DAY));
        t.add_exceptions(MONDAY + DAY, MONDAY + DAY + 1);
        assert!(!t.contains_domain_range(MONDAY, MONDAY + 2 * DAY));
        assert!(t.contains_domain_range(MONDAY + 2 * DAY, MONDAY + 3 * DAY));
    }
}
