// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date axes.
//!
//! Values are instants in milliseconds since the Unix epoch, stored as `f64`
//! in the axis [`Range`]. Mapping goes through a [`Timeline`] first, so that
//! excluded time (weekends, holidays) takes no space on the axis. Ticks step
//! through calendar fields in the axis time zone.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use chrono::{Datelike, Locale, Timelike};
use chrono_tz::Tz;
use kurbo::Rect;
use vizir_text::TextMeasurer;

use crate::calendar::{local_millis, millis_from_f64, to_local};
use crate::number_axis::{extrapolate, minor_tick_spaces};
use crate::tick::major_label_placement;
use crate::{
    AxisCore, AxisError, AxisOrient, DateFormat, DateTickUnit, DateTickUnitType, DefaultTimeline,
    LinearScale, PeriodKind, Range, RegularTimePeriod, Tick, TickUnit, TickUnitSource, Timeline,
    ValueAxis, standard_date_tick_units,
};

/// The most ticks and rolls a single refresh walks through.
const MAX_TICK_STEPS: usize = 10_000;

/// Where in a period a date tick is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DateTickMarkPosition {
    /// The first instant of the period.
    #[default]
    Start,
    /// The middle of the period.
    Middle,
    /// The last instant of the period.
    End,
}

impl DateTickMarkPosition {
    fn within(self, period: &RegularTimePeriod) -> i64 {
        match self {
            Self::Start => period.first_millisecond(),
            Self::Middle => period.middle_millisecond(),
            Self::End => period.last_millisecond(),
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "saturating truncation toward zero is the intended conversion"
)]
fn truncate_millis(value: f64) -> i64 {
    value as i64
}

/// An axis showing instants.
#[derive(Clone, Debug)]
pub struct DateAxis {
    core: AxisCore,
    tick_unit: DateTickUnit,
    date_format_override: Option<DateFormat>,
    tick_mark_position: DateTickMarkPosition,
    time_zone: Tz,
    locale: Locale,
    timeline: Arc<dyn Timeline>,
    standard_tick_units: Arc<dyn TickUnitSource<DateTickUnit>>,
}

impl DateAxis {
    /// The smallest range auto-ranging produces, in milliseconds.
    pub const DEFAULT_AUTO_RANGE_MINIMUM_SIZE: f64 = 2.0;

    /// Creates an axis in UTC with `en_US` names.
    pub fn new() -> Self {
        Self::with_zone(Tz::UTC, Locale::en_US)
    }

    /// Creates an axis whose calendar fields and labels use `time_zone` and
    /// `locale`.
    pub fn with_zone(time_zone: Tz, locale: Locale) -> Self {
        let mut core = AxisCore::new();
        core.auto_range_minimum_size = Self::DEFAULT_AUTO_RANGE_MINIMUM_SIZE;
        let format = DateFormat::default()
            .with_time_zone(time_zone)
            .with_locale(locale);
        Self {
            core,
            tick_unit: DateTickUnit::standard(
                DateTickUnitType::Day,
                1,
                DateTickUnitType::Day,
                1,
                format,
            ),
            date_format_override: None,
            tick_mark_position: DateTickMarkPosition::Start,
            time_zone,
            locale,
            timeline: Arc::new(DefaultTimeline),
            standard_tick_units: Arc::new(standard_date_tick_units(time_zone, locale)),
        }
    }

    /// Returns the axis mapping through `timeline`.
    #[must_use]
    pub fn with_timeline(mut self, timeline: Arc<dyn Timeline>) -> Self {
        self.timeline = timeline;
        self
    }

    /// The zone calendar fields are evaluated in.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Sets the time zone and rebuilds the standard tick units for it.
    pub fn set_time_zone(&mut self, time_zone: Tz) {
        self.time_zone = time_zone;
        self.standard_tick_units = Arc::new(standard_date_tick_units(time_zone, self.locale));
        self.core.notify();
    }

    /// The locale used for month and weekday names.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Sets the locale and rebuilds the standard tick units for it.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.standard_tick_units = Arc::new(standard_date_tick_units(self.time_zone, locale));
        self.core.notify();
    }

    /// The timeline values are mapped through.
    pub fn timeline(&self) -> &Arc<dyn Timeline> {
        &self.timeline
    }

    /// Sets the timeline values are mapped through.
    pub fn set_timeline(&mut self, timeline: Arc<dyn Timeline>) {
        if !Arc::ptr_eq(&self.timeline, &timeline) {
            self.timeline = timeline;
            self.core.notify();
        }
    }

    /// The current tick unit.
    pub fn tick_unit(&self) -> &DateTickUnit {
        &self.tick_unit
    }

    /// Sets the tick unit and turns auto tick unit selection off.
    pub fn set_tick_unit(&mut self, unit: DateTickUnit) {
        self.set_tick_unit_with(unit, true, true);
    }

    /// Sets the tick unit.
    pub fn set_tick_unit_with(
        &mut self,
        unit: DateTickUnit,
        notify: bool,
        turn_off_auto_select: bool,
    ) {
        self.tick_unit = unit;
        if turn_off_auto_select {
            self.core.auto_tick_unit_selection = false;
        }
        if notify {
            self.core.notify();
        }
    }

    /// The format used for labels instead of the tick unit's, if any.
    pub fn date_format_override(&self) -> Option<&DateFormat> {
        self.date_format_override.as_ref()
    }

    /// Sets or clears the label format override.
    pub fn set_date_format_override(&mut self, format: Option<DateFormat>) {
        self.date_format_override = format;
        self.core.notify();
    }

    /// Where ticks sit within month and year periods.
    pub fn tick_mark_position(&self) -> DateTickMarkPosition {
        self.tick_mark_position
    }

    /// Sets where ticks sit within their periods.
    pub fn set_tick_mark_position(&mut self, position: DateTickMarkPosition) {
        self.tick_mark_position = position;
        self.core.notify();
    }

    /// The source auto tick selection picks units from.
    pub fn standard_tick_units(&self) -> &Arc<dyn TickUnitSource<DateTickUnit>> {
        &self.standard_tick_units
    }

    /// Sets the source auto tick selection picks units from.
    pub fn set_standard_tick_units(&mut self, source: Arc<dyn TickUnitSource<DateTickUnit>>) {
        self.standard_tick_units = source;
        self.core.notify();
    }

    /// The earliest instant shown.
    pub fn minimum_date(&self) -> i64 {
        millis_from_f64(self.core.range.lower())
    }

    /// The latest instant shown.
    pub fn maximum_date(&self) -> i64 {
        millis_from_f64(self.core.range.upper())
    }

    /// Shows `[lower, upper]`, turning auto-range off.
    pub fn set_date_range(&mut self, lower: i64, upper: i64) -> Result<(), AxisError> {
        self.set_range(Range::new(lower as f64, upper as f64)?)
    }

    /// Moves the earliest instant shown to `millis`.
    ///
    /// If `millis` is not before the latest instant, the latest instant moves
    /// too, keeping the current length.
    pub fn set_minimum_date(&mut self, millis: i64) -> Result<(), AxisError> {
        let mut max = self.maximum_date();
        if max <= millis {
            max = millis + (max - self.minimum_date());
        }
        self.set_date_range(millis, max)
    }

    /// Moves the latest instant shown to `millis`.
    ///
    /// If `millis` is not after the earliest instant, the earliest instant
    /// moves too, keeping the current length.
    pub fn set_maximum_date(&mut self, millis: i64) -> Result<(), AxisError> {
        let mut min = self.minimum_date();
        if min >= millis {
            min = millis - (self.maximum_date() - min);
        }
        self.set_date_range(min, millis)
    }

    /// Returns `true` if the timeline excludes `millis`.
    pub fn is_hidden_value(&self, millis: i64) -> bool {
        !self.timeline.contains_domain_value(millis)
    }

    /// The first tick at or after the lower bound for `unit`.
    pub fn calculate_lowest_visible_tick_value(
        &self,
        unit: &DateTickUnit,
    ) -> Result<i64, AxisError> {
        self.next_standard_date(self.minimum_date(), unit)
    }

    /// The last tick before the upper bound for `unit`.
    pub fn calculate_highest_visible_tick_value(
        &self,
        unit: &DateTickUnit,
    ) -> Result<i64, AxisError> {
        self.previous_standard_date(self.maximum_date(), unit)
    }

    /// The latest "round" instant for `unit` strictly before `millis`.
    ///
    /// The unit's calendar field is rounded down to a multiple of the unit's
    /// multiple and the finer fields are set from the tick mark position.
    pub fn previous_standard_date(
        &self,
        millis: i64,
        unit: &DateTickUnit,
    ) -> Result<i64, AxisError> {
        let tz = self.time_zone;
        let position = self.tick_mark_position;
        let local = to_local(millis, tz)?;
        let count = i64::from(unit.multiple());
        let year = local.year();
        let month = i32::try_from(local.month()).unwrap_or(1);
        let day = i64::from(local.day());
        let hour = i64::from(local.hour());
        let minute = i64::from(local.minute());
        let second = i64::from(local.second());
        let milli = i64::from(local.nanosecond() / 1_000_000);
        let pick = |start: i64, middle: i64, end: i64| match position {
            DateTickMarkPosition::Start => start,
            DateTickMarkPosition::Middle => middle,
            DateTickMarkPosition::End => end,
        };

        if unit.unit_type() == DateTickUnitType::Month {
            // Month 0 is December of the previous year.
            let rounded = count * (i64::from(month) / count);
            let rounded =
                i32::try_from(rounded).map_err(|_| AxisError::TimestampOutOfRange(millis))?;
            let anchor = local_millis(millis, tz, (year, rounded, 1, 0, 0, 0, 0))?;
            let mut period = RegularTimePeriod::containing(PeriodKind::Month, anchor, tz)?;
            let standard = position.within(&period);
            if standard < millis {
                return Ok(standard);
            }
            for _ in 0..count {
                period = period.previous()?;
            }
            return Ok(position.within(&period));
        }

        // Local fields with the unit's field set to `value`.
        let fields = |value: i64| -> Result<_, AxisError> {
            Ok(match unit.unit_type() {
                DateTickUnitType::Millisecond => (year, month, day, hour, minute, second, value),
                DateTickUnitType::Second => {
                    (year, month, day, hour, minute, value, pick(0, 500, 999))
                }
                DateTickUnitType::Minute => (year, month, day, hour, value, pick(0, 30, 59), 0),
                DateTickUnitType::Hour => {
                    (year, month, day, value, pick(0, 30, 59), pick(0, 0, 59), 0)
                }
                DateTickUnitType::Day => (year, month, value, pick(0, 12, 23), 0, 0, 0),
                DateTickUnitType::Month | DateTickUnitType::Year => {
                    let y = i32::try_from(value)
                        .map_err(|_| AxisError::TimestampOutOfRange(millis))?;
                    let (m, d) = match position {
                        DateTickMarkPosition::Start => (1, 1),
                        DateTickMarkPosition::Middle => (7, 1),
                        DateTickMarkPosition::End => (12, 31),
                    };
                    (y, m, d, 0, 0, 0, 0)
                }
            })
        };
        let current = match unit.unit_type() {
            DateTickUnitType::Millisecond => milli,
            DateTickUnitType::Second => second,
            DateTickUnitType::Minute => minute,
            DateTickUnitType::Hour => hour,
            DateTickUnitType::Day => day,
            DateTickUnitType::Month | DateTickUnitType::Year => i64::from(year),
        };
        let value = count * current.div_euclid(count);
        let standard = local_millis(millis, tz, fields(value)?)?;
        if standard < millis {
            Ok(standard)
        } else {
            local_millis(millis, tz, fields(value - count)?)
        }
    }

    /// The previous standard date plus one unit.
    pub fn next_standard_date(&self, millis: i64, unit: &DateTickUnit) -> Result<i64, AxisError> {
        let previous = self.previous_standard_date(millis, unit)?;
        unit.add_to_date(previous, self.time_zone)
    }

    /// Moves month and year ticks to the tick mark position of their period.
    fn correct_tick_date_for_position(
        &self,
        millis: i64,
        unit: &DateTickUnit,
    ) -> Result<i64, AxisError> {
        let kind = match unit.unit_type() {
            DateTickUnitType::Month => PeriodKind::Month,
            DateTickUnitType::Year => PeriodKind::Year,
            _ => return Ok(millis),
        };
        let period = RegularTimePeriod::containing(kind, millis, self.time_zone)?;
        Ok(self.tick_mark_position.within(&period))
    }

    fn format_label(&self, unit: &DateTickUnit, millis: i64) -> String {
        match &self.date_format_override {
            Some(format) => format.format(millis),
            None => unit.date_to_string(millis),
        }
    }

    /// The wider of the formatted range bounds.
    fn widest_bound_label(&self, measurer: &dyn TextMeasurer, unit: &DateTickUnit) -> f64 {
        let lower = self.format_label(unit, self.minimum_date());
        let upper = self.format_label(unit, self.maximum_date());
        self.core
            .label_width(measurer, &lower)
            .max(self.core.label_width(measurer, &upper))
    }

    fn estimate_maximum_tick_label_width(
        &self,
        measurer: &dyn TextMeasurer,
        unit: &DateTickUnit,
    ) -> f64 {
        let core = &self.core;
        let extent = if core.vertical_tick_labels {
            core.label_line_height(measurer, "ABCxyz")
        } else {
            self.widest_bound_label(measurer, unit)
        };
        core.tick_label_insets.x_value() + extent
    }

    fn estimate_maximum_tick_label_height(
        &self,
        measurer: &dyn TextMeasurer,
        unit: &DateTickUnit,
    ) -> f64 {
        let core = &self.core;
        let extent = if core.vertical_tick_labels {
            self.widest_bound_label(measurer, unit)
        } else {
            core.label_line_height(measurer, "ABCxyz")
        };
        core.tick_label_insets.y_value() + extent
    }

    fn select_auto_tick_unit(
        &mut self,
        measurer: &dyn TextMeasurer,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<(), AxisError> {
        let source = Arc::clone(&self.standard_tick_units);
        let length = self.core.range.length();
        let selected = if orient.is_top_or_bottom() {
            let label_width = self.estimate_maximum_tick_label_width(measurer, &self.tick_unit);
            let unit1 = source.ceiling_tick_unit_for(&self.tick_unit)?;
            let unit1_width = self.length_to_pixel(unit1.size(), area, orient);
            let guess = extrapolate(label_width, unit1_width, unit1.size(), length);
            let unit2 = source.ceiling_tick_unit(guess)?;
            let unit2_width = self.length_to_pixel(unit2.size(), area, orient);
            if self.estimate_maximum_tick_label_width(measurer, &unit2) > unit2_width {
                source.larger_tick_unit(&unit2)?
            } else {
                unit2
            }
        } else {
            let candidate1 = source.ceiling_tick_unit(length / 10.0)?;
            let label_height1 = self.estimate_maximum_tick_label_height(measurer, &candidate1);
            let height1 = self.length_to_pixel(candidate1.size(), area, orient);
            let guess = extrapolate(label_height1, height1, candidate1.size(), length);
            let candidate2 = source.ceiling_tick_unit(guess)?;
            let label_height2 = self.estimate_maximum_tick_label_height(measurer, &candidate2);
            let height2 = self.length_to_pixel(candidate2.size(), area, orient);
            if label_height2 < height2 {
                candidate2
            } else {
                source.larger_tick_unit(&candidate2)?
            }
        };
        log::debug!(
            "date axis {orient:?}: selected {} x {:?}",
            selected.multiple(),
            selected.unit_type()
        );
        self.set_tick_unit_with(selected, false, false);
        Ok(())
    }

    fn timeline_scale(&self, area: Rect, orient: AxisOrient) -> LinearScale {
        let min = self.timeline.to_timeline_value(self.minimum_date());
        let max = self.timeline.to_timeline_value(self.maximum_date());
        LinearScale::new(min as f64, max as f64, area, orient, self.core.inverted)
    }
}

impl Default for DateAxis {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueAxis for DateAxis {
    fn core(&self) -> &AxisCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AxisCore {
        &mut self.core
    }

    fn value_to_pixel(&self, value: f64, area: Rect, orient: AxisOrient) -> f64 {
        let v = self.timeline.to_timeline_value(millis_from_f64(value));
        self.timeline_scale(area, orient).map(v as f64)
    }

    fn pixel_to_value(&self, pixel: f64, area: Rect, orient: AxisOrient) -> f64 {
        let v = self.timeline_scale(area, orient).invert(pixel);
        self.timeline.to_millisecond(millis_from_f64(v)) as f64
    }

    fn auto_adjust_range(&mut self, data: Option<Range>) -> Result<(), AxisError> {
        let core = &self.core;
        let timeline = &self.timeline;
        let r = data.unwrap_or(core.default_auto_range);
        let mut upper = timeline.to_timeline_value(truncate_millis(r.upper()));
        let mut lower;
        let fixed = truncate_millis(core.fixed_auto_range);
        if fixed > 0 {
            lower = upper - fixed;
        } else {
            lower = timeline.to_timeline_value(truncate_millis(r.lower()));
            let range = (upper - lower) as f64;
            let min_range = truncate_millis(core.auto_range_minimum_size) as f64;
            if range < min_range {
                let expand = truncate_millis(min_range - range) / 2;
                upper += expand;
                lower -= expand;
            }
            upper += truncate_millis(range * core.upper_margin);
            lower -= truncate_millis(range * core.lower_margin);
        }
        let adjusted = Range::new(
            timeline.to_millisecond(lower) as f64,
            timeline.to_millisecond(upper) as f64,
        )?;
        log::debug!("date axis auto-range: {r:?} -> {adjusted:?}");
        self.set_range_with(adjusted, false, false)
    }

    fn refresh_ticks(
        &mut self,
        measurer: &dyn TextMeasurer,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError> {
        if self.core.auto_tick_unit_selection {
            self.select_auto_tick_unit(measurer, area, orient)?;
        }
        let mut ticks = Vec::new();
        let unit = &self.tick_unit;
        let tz = self.time_zone;
        let range = self.core.range;
        let upper = self.maximum_date();
        let spaces = i64::from(minor_tick_spaces(&self.core, unit.minor_tick_count()));
        let (anchor, rotation_anchor, angle) =
            major_label_placement(orient, self.core.vertical_tick_labels);
        let visible_minor = |ms: i64| range.contains(ms as f64) && !self.is_hidden_value(ms);

        let mut tick = self.calculate_lowest_visible_tick_value(unit)?;
        let mut has_rolled = false;
        let mut steps = 0;
        while tick < upper {
            if steps == MAX_TICK_STEPS {
                log::warn!("date axis: stopped after {steps} tick steps");
                break;
            }
            if !has_rolled {
                tick = self.correct_tick_date_for_position(tick, unit)?;
            }
            if steps == 0 {
                let distance = unit.add_to_date(tick, tz)? - tick;
                for k in 1..spaces {
                    let minor = tick - distance * k / spaces;
                    if visible_minor(minor) {
                        ticks.push(Tick::minor(minor as f64));
                    }
                }
            }
            steps += 1;

            if self.is_hidden_value(tick) {
                tick = unit.roll_date(tick, tz)?;
                has_rolled = true;
                continue;
            }
            let label = self.format_label(unit, tick);
            ticks.push(Tick::major(tick as f64, label, anchor, rotation_anchor, angle));
            has_rolled = false;
            let next = unit.add_to_date(tick, tz)?;
            for k in 1..spaces {
                let minor = tick + (next - tick) * k / spaces;
                if visible_minor(minor) {
                    ticks.push(Tick::minor(minor as f64));
                }
            }
            tick = next;
        }
        log::trace!("date axis: {} ticks for {range:?}", ticks.len());
        Ok(ticks)
    }

    /// Zooms in timeline space; the result is at least one millisecond long.
    fn zoom_range(&mut self, lower_percent: f64, upper_percent: f64) -> Result<(), AxisError> {
        let start = self.timeline.to_timeline_value(self.minimum_date()) as f64;
        let end = self.timeline.to_timeline_value(self.maximum_date()) as f64;
        let length = end - start;
        let (adj_start, mut adj_end) = if self.core.inverted {
            (
                truncate_millis(start + length * (1.0 - upper_percent)),
                truncate_millis(start + length * (1.0 - lower_percent)),
            )
        } else {
            (
                truncate_millis(start + length * lower_percent),
                truncate_millis(start + length * upper_percent),
            )
        };
        if adj_end <= adj_start {
            adj_end = adj_start + 1;
        }
        let lower = self.timeline.to_millisecond(adj_start);
        let upper = self.timeline.to_millisecond(adj_end);
        self.set_date_range(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentedTimeline;
    use vizir_text::HeuristicTextMeasurer;

    const AREA: Rect = Rect::new(0.0, 0.0, 500.0, 300.0);
    const HOUR: i64 = 3_600_000;
    const DAY: i64 = 24 * HOUR;

    // 2024-05-17T13:45:12.345Z
    const MAY_17: i64 = 1_715_953_512_345;
    // 2024-05-17T00:00Z
    const MAY_17_MIDNIGHT: i64 = 1_715_904_000_000;
    // Monday 2024-01-01T00:00Z.
    const JAN_1: i64 = 1_704_067_200_000;

    fn unit(unit_type: DateTickUnitType, multiple: i32, pattern: &str) -> DateTickUnit {
        DateTickUnit::new(unit_type, multiple, DateFormat::new(pattern)).unwrap()
    }

    fn local(ms: i64) -> chrono::NaiveDateTime {
        to_local(ms, Tz::UTC).unwrap()
    }

    fn majors(ticks: &[Tick]) -> Vec<&Tick> {
        ticks.iter().filter(|t| t.is_major()).collect()
    }

    #[test]
    fn standard_dates_round_down_to_multiples() {
        let a = DateAxis::new();
        let day = unit(DateTickUnitType::Day, 1, "%d");
        assert_eq!(a.previous_standard_date(MAY_17, &day).unwrap(), MAY_17_MIDNIGHT);
        assert_eq!(a.next_standard_date(MAY_17, &day).unwrap(), MAY_17_MIDNIGHT + DAY);
        // A standard date itself steps back a whole unit.
        assert_eq!(
            a.previous_standard_date(MAY_17_MIDNIGHT, &day).unwrap(),
            MAY_17_MIDNIGHT - DAY
        );

        let six_hours = unit(DateTickUnitType::Hour, 6, "%H");
        let d = local(a.previous_standard_date(MAY_17, &six_hours).unwrap());
        assert_eq!((d.day(), d.hour(), d.minute()), (17, 12, 0));

        let quarter = unit(DateTickUnitType::Month, 3, "%b");
        let d = local(a.previous_standard_date(MAY_17, &quarter).unwrap());
        assert_eq!((d.month(), d.day()), (3, 1));
        let d = local(a.next_standard_date(MAY_17, &quarter).unwrap());
        assert_eq!((d.month(), d.day()), (6, 1));
    }

    #[test]
    fn tick_mark_position_sets_the_finer_fields() {
        let mut a = DateAxis::new();
        a.set_tick_mark_position(DateTickMarkPosition::Middle);
        let day = unit(DateTickUnitType::Day, 1, "%d");
        let d = local(a.previous_standard_date(MAY_17, &day).unwrap());
        assert_eq!((d.day(), d.hour()), (17, 12));

        // Mid-2024 is after the input, so the year steps back.
        let year = unit(DateTickUnitType::Year, 1, "%Y");
        let d = local(a.previous_standard_date(MAY_17, &year).unwrap());
        assert_eq!((d.year(), d.month(), d.day()), (2023, 7, 1));

        a.set_tick_mark_position(DateTickMarkPosition::End);
        let month = unit(DateTickUnitType::Month, 1, "%b");
        let d = local(a.previous_standard_date(MAY_17, &month).unwrap());
        assert_eq!((d.month(), d.day(), d.hour()), (4, 30, 23));
    }

    #[test]
    fn auto_range_uses_whole_millisecond_margins() {
        let mut a = DateAxis::new();
        a.configure(&[0.0, 1000.0][..]).unwrap();
        assert_eq!(a.range(), Range::new(-50.0, 1050.0).unwrap());

        a.configure(&[5000.0][..]).unwrap();
        assert_eq!(a.range(), Range::new(4999.0, 5001.0).unwrap());

        let mut empty = DateAxis::new();
        empty.configure(&None::<Range>).unwrap();
        assert!(empty.range().length() > 0.0);
    }

    #[test]
    fn minimum_and_maximum_dates_keep_the_length() {
        let mut a = DateAxis::new();
        a.set_date_range(0, 1000).unwrap();
        a.set_minimum_date(5000).unwrap();
        assert_eq!((a.minimum_date(), a.maximum_date()), (5000, 6000));
        a.set_maximum_date(100).unwrap();
        assert_eq!((a.minimum_date(), a.maximum_date()), (-900, 100));
        assert!(!a.is_auto_range());
    }

    #[test]
    fn visible_tick_values_are_the_inner_standard_dates() {
        let mut a = DateAxis::new();
        a.set_date_range(MAY_17, MAY_17 + 2 * DAY).unwrap();
        let day = unit(DateTickUnitType::Day, 1, "%d");
        assert_eq!(
            a.calculate_lowest_visible_tick_value(&day).unwrap(),
            MAY_17_MIDNIGHT + DAY
        );
        assert_eq!(
            a.calculate_highest_visible_tick_value(&day).unwrap(),
            MAY_17_MIDNIGHT + 2 * DAY
        );
    }

    #[test]
    fn daily_ticks_are_labelled_in_the_axis_zone() {
        let mut a = DateAxis::new();
        a.set_date_range(JAN_1, JAN_1 + 4 * DAY).unwrap();
        a.set_tick_unit(unit(DateTickUnitType::Day, 1, "%-d-%b"));
        let ticks = a
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        let labels: Vec<&str> = majors(&ticks).iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["1-Jan", "2-Jan", "3-Jan", "4-Jan"]);
        assert_eq!(ticks[0].value, JAN_1 as f64);
    }

    #[test]
    fn minor_ticks_split_each_step() {
        let mut a = DateAxis::new();
        a.set_date_range(JAN_1 + HOUR, JAN_1 + 2 * DAY).unwrap();
        a.set_tick_unit(unit(DateTickUnitType::Day, 1, "%d"));
        a.set_minor_tick_count(4);
        let ticks = a
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        // One major on Jan 2 with three minors either side.
        assert_eq!(majors(&ticks).len(), 1);
        let minors: Vec<f64> = ticks
            .iter()
            .filter(|t| !t.is_major())
            .map(|t| t.value)
            .collect();
        assert_eq!(minors.len(), 6);
        assert!(minors.iter().all(|&v| a.range().contains(v)));
    }

    #[test]
    fn hidden_days_are_rolled_over() {
        let timeline = SegmentedTimeline::monday_through_friday(Tz::UTC).unwrap();
        let mut a = DateAxis::new().with_timeline(Arc::new(timeline));
        a.set_date_range(JAN_1, JAN_1 + 14 * DAY).unwrap();
        a.set_tick_unit(unit(DateTickUnitType::Day, 1, "%a"));
        let ticks = a
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        let labels: Vec<&str> = majors(&ticks).iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.len(), 10);
        assert!(labels.iter().all(|l| *l != "Sat" && *l != "Sun"));
    }

    #[test]
    fn timeline_compresses_the_mapping() {
        let timeline = SegmentedTimeline::monday_through_friday(Tz::UTC).unwrap();
        let mut a = DateAxis::new().with_timeline(Arc::new(timeline));
        a.set_date_range(JAN_1, JAN_1 + 14 * DAY).unwrap();
        let friday_end = a.value_to_pixel((JAN_1 + 5 * DAY - 1) as f64, AREA, AxisOrient::Bottom);
        let monday = a.value_to_pixel((JAN_1 + 7 * DAY) as f64, AREA, AxisOrient::Bottom);
        assert!((monday - friday_end).abs() < 0.01, "{friday_end} vs {monday}");
        // Ten weekdays fill the width.
        let wednesday = a.value_to_pixel((JAN_1 + 2 * DAY) as f64, AREA, AxisOrient::Bottom);
        assert!((wednesday - 100.0).abs() < 1e-6, "{wednesday}");
    }

    #[test]
    fn mapping_round_trips_to_the_millisecond() {
        let mut a = DateAxis::new();
        a.set_date_range(JAN_1, JAN_1 + 3 * DAY).unwrap();
        for inverted in [false, true] {
            a.set_inverted(inverted);
            for orient in [AxisOrient::Top, AxisOrient::Bottom, AxisOrient::Left, AxisOrient::Right] {
                for ms in [JAN_1, JAN_1 + 12_345_678, JAN_1 + 3 * DAY] {
                    let px = a.value_to_pixel(ms as f64, AREA, orient);
                    let back = a.pixel_to_value(px, AREA, orient);
                    assert!((back - ms as f64).abs() <= 1.0, "{back} vs {ms}");
                }
            }
        }
    }

    #[test]
    fn horizontal_selection_picks_two_days_for_a_week() {
        let mut a = DateAxis::new();
        a.set_date_range(JAN_1, JAN_1 + 7 * DAY).unwrap();
        let ticks = a
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        assert_eq!(a.tick_unit().unit_type(), DateTickUnitType::Day);
        assert_eq!(a.tick_unit().multiple(), 2);
        assert!(a.is_auto_tick_unit_selection());
        // Two-day multiples count from day 0, the last day of December.
        assert_eq!(majors(&ticks)[0].label, "2-Jan");
    }

    #[test]
    fn vertical_selection_extrapolates_from_a_tenth() {
        let mut a = DateAxis::new();
        a.set_date_range(JAN_1, JAN_1 + DAY).unwrap();
        let revision = a.revision();
        a.refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Left)
            .unwrap();
        assert_eq!(a.tick_unit().unit_type(), DateTickUnitType::Hour);
        assert_eq!(a.tick_unit().multiple(), 2);
        assert_eq!(a.revision(), revision);
    }

    #[test]
    fn zoom_keeps_at_least_a_millisecond() {
        let mut a = DateAxis::new();
        a.set_date_range(0, 10).unwrap();
        a.zoom_range(0.5, 0.52).unwrap();
        assert_eq!((a.minimum_date(), a.maximum_date()), (5, 6));

        a.set_date_range(0, 1000).unwrap();
        a.set_inverted(true);
        a.zoom_range(0.0, 0.25).unwrap();
        assert_eq!((a.minimum_date(), a.maximum_date()), (750, 1000));
    }

    #[test]
    fn changing_zone_rebuilds_standard_units() {
        let mut a = DateAxis::new();
        let before = Arc::clone(a.standard_tick_units());
        a.set_time_zone(chrono_tz::Europe::Paris);
        assert!(!Arc::ptr_eq(&before, a.standard_tick_units()));
        let u = a.standard_tick_units().ceiling_tick_unit(1.0).unwrap();
        assert_eq!(u.format().time_zone(), chrono_tz::Europe::Paris);
    }
}
