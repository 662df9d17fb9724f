// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Period axes: time shown as a run of whole calendar periods.
//!
//! The displayed range always covers whole periods of the auto-range kind,
//! from the start of `first` to the end of `last`. Tick marks sit on period
//! boundaries and labels are laid out in bands (e.g. months above years), one
//! label per period.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::Locale;
use chrono_tz::Tz;
use kurbo::{Insets, Line, Rect};
use vizir_text::{TextMeasurer, TextStyle};

use crate::calendar::millis_from_f64;
use crate::{
    AxisCore, AxisError, AxisOrient, AxisState, DateFormat, LinearScale, PeriodKind, Range,
    RegularTimePeriod, TextAnchor, Tick, ValueAxis,
};

/// The most periods a tick or label pass walks through.
const MAX_PERIOD_STEPS: usize = 10_000;

/// Extra room, in pixels, required between two band labels.
const LABEL_GAP: f64 = 5.0;

/// How one band of period labels is formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodAxisLabelInfo {
    kind: PeriodKind,
    format: DateFormat,
    padding: Insets,
    style: TextStyle,
    draw_dividers: bool,
}

impl PeriodAxisLabelInfo {
    /// The padding around a band of labels.
    pub const DEFAULT_PADDING: Insets = Insets::uniform(2.0);

    /// Creates a band with one label per `kind` period.
    pub fn new(kind: PeriodKind, format: DateFormat) -> Self {
        Self {
            kind,
            format,
            padding: Self::DEFAULT_PADDING,
            style: TextStyle::default(),
            draw_dividers: true,
        }
    }

    /// Returns the band with `padding` around its labels.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the band measuring its labels in `style`.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the band with dividers between labels turned on or off.
    #[must_use]
    pub fn with_draw_dividers(mut self, draw: bool) -> Self {
        self.draw_dividers = draw;
        self
    }

    /// The period kind labelled.
    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// The label format.
    pub fn format(&self) -> &DateFormat {
        &self.format
    }

    /// The padding around the band.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// The style labels are measured with.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Whether dividers are placed between labels.
    pub fn draw_dividers(&self) -> bool {
        self.draw_dividers
    }

    /// The band's height: one line plus the top and bottom padding.
    pub fn extent(&self, measurer: &dyn TextMeasurer) -> f64 {
        measurer.line_height("ABCxyz", &self.style) + self.padding.y_value()
    }
}

/// One positioned label in a band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandLabel {
    /// The label text.
    pub text: String,
    /// The anchor position along the axis.
    pub x: f64,
    /// The anchor position across the axis.
    pub y: f64,
    /// Which point of the label sits at `(x, y)`.
    pub anchor: TextAnchor,
}

/// The laid out labels and dividers of one band.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PeriodBand {
    /// The labels, in period order.
    pub labels: Vec<BandLabel>,
    /// Separators between adjacent labelled periods.
    pub dividers: Vec<Line>,
}

/// An axis showing whole calendar periods.
#[derive(Clone, Debug)]
pub struct PeriodAxis {
    core: AxisCore,
    first: RegularTimePeriod,
    last: RegularTimePeriod,
    time_zone: Tz,
    locale: Locale,
    auto_range_period_kind: PeriodKind,
    major_tick_period_kind: PeriodKind,
    minor_tick_marks_visible: bool,
    minor_tick_period_kind: PeriodKind,
    label_info: Vec<PeriodAxisLabelInfo>,
}

impl PeriodAxis {
    /// Creates an axis from `first` to `last`, in `first`'s time zone.
    ///
    /// Auto-ranging and major ticks use `first`'s kind, minor ticks the next
    /// finer kind. Labels are months above years.
    pub fn new(first: RegularTimePeriod, last: RegularTimePeriod) -> Result<Self, AxisError> {
        let time_zone = first.time_zone();
        let last = last.pegged(time_zone)?;
        let locale = Locale::en_US;
        let kind = first.kind();
        let range = Range::new(
            first.first_millisecond() as f64,
            last.last_millisecond() as f64 + 1.0,
        )?;
        let mut core = AxisCore::with_default_range(range);
        core.default_auto_range = AxisCore::DEFAULT_RANGE;
        Ok(Self {
            core,
            first,
            last,
            time_zone,
            locale,
            auto_range_period_kind: kind,
            major_tick_period_kind: kind,
            minor_tick_marks_visible: false,
            minor_tick_period_kind: kind.downsize(),
            label_info: Self::default_label_info(time_zone, locale),
        })
    }

    fn default_label_info(tz: Tz, locale: Locale) -> Vec<PeriodAxisLabelInfo> {
        let format = |pattern: &str| {
            DateFormat::new(pattern)
                .with_time_zone(tz)
                .with_locale(locale)
        };
        alloc::vec![
            PeriodAxisLabelInfo::new(PeriodKind::Month, format("%b")),
            PeriodAxisLabelInfo::new(PeriodKind::Year, format("%Y")),
        ]
    }

    /// Returns the axis using `locale` for the default label bands.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self.label_info = Self::default_label_info(self.time_zone, locale);
        self
    }

    /// The first period shown.
    pub fn first(&self) -> &RegularTimePeriod {
        &self.first
    }

    /// Sets the first period shown.
    pub fn set_first(&mut self, first: RegularTimePeriod) -> Result<(), AxisError> {
        self.first = first.pegged(self.time_zone)?;
        self.core.notify();
        Ok(())
    }

    /// The last period shown.
    pub fn last(&self) -> &RegularTimePeriod {
        &self.last
    }

    /// Sets the last period shown.
    pub fn set_last(&mut self, last: RegularTimePeriod) -> Result<(), AxisError> {
        self.last = last.pegged(self.time_zone)?;
        self.core.notify();
        Ok(())
    }

    /// The zone periods are pegged to.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Re-pegs `first` and `last` to `time_zone`.
    pub fn set_time_zone(&mut self, time_zone: Tz) -> Result<(), AxisError> {
        self.first = self.first.pegged(time_zone)?;
        self.last = self.last.pegged(time_zone)?;
        self.time_zone = time_zone;
        self.core.notify();
        Ok(())
    }

    /// The locale of the default label bands.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The period kind the range snaps to.
    pub fn auto_range_period_kind(&self) -> PeriodKind {
        self.auto_range_period_kind
    }

    /// Sets the period kind the range snaps to.
    pub fn set_auto_range_period_kind(&mut self, kind: PeriodKind) {
        self.auto_range_period_kind = kind;
        self.core.notify();
    }

    /// The period kind major ticks mark.
    pub fn major_tick_period_kind(&self) -> PeriodKind {
        self.major_tick_period_kind
    }

    /// Sets the period kind major ticks mark.
    pub fn set_major_tick_period_kind(&mut self, kind: PeriodKind) {
        self.major_tick_period_kind = kind;
        self.core.notify();
    }

    /// Whether minor ticks are generated.
    pub fn is_minor_tick_marks_visible(&self) -> bool {
        self.minor_tick_marks_visible
    }

    /// Turns minor ticks on or off.
    pub fn set_minor_tick_marks_visible(&mut self, visible: bool) {
        self.minor_tick_marks_visible = visible;
        self.core.notify();
    }

    /// The period kind minor ticks mark.
    pub fn minor_tick_period_kind(&self) -> PeriodKind {
        self.minor_tick_period_kind
    }

    /// Sets the period kind minor ticks mark.
    pub fn set_minor_tick_period_kind(&mut self, kind: PeriodKind) {
        self.minor_tick_period_kind = kind;
        self.core.notify();
    }

    /// The label bands, nearest the plot first.
    pub fn label_info(&self) -> &[PeriodAxisLabelInfo] {
        &self.label_info
    }

    /// Replaces the label bands.
    pub fn set_label_info(&mut self, info: Vec<PeriodAxisLabelInfo>) {
        self.label_info = info;
        self.core.notify();
    }

    /// The room taken by all label bands.
    pub fn tick_label_bands_extent(&self, measurer: &dyn TextMeasurer) -> f64 {
        self.label_info.iter().map(|info| info.extent(measurer)).sum()
    }

    fn scale(&self, area: Rect, orient: AxisOrient) -> LinearScale {
        LinearScale::new(
            self.first.first_millisecond() as f64,
            self.last.last_millisecond() as f64,
            area,
            orient,
            self.core.inverted,
        )
    }

    /// Lays out the labels of band `band` and moves the cursor past them.
    ///
    /// Periods are skipped so that labels do not overlap. A period cut off at
    /// either end of the axis has its label re-centred on the visible part,
    /// or dropped if it does not fit there. Labels only run along top and
    /// bottom edges; other edges, and bands that do not exist, give an empty
    /// band.
    pub fn band_labels(
        &self,
        band: usize,
        measurer: &dyn TextMeasurer,
        state: &mut AxisState,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<PeriodBand, AxisError> {
        let mut out = PeriodBand::default();
        let Some(info) = self.label_info.get(band) else {
            return Ok(out);
        };
        if !orient.is_top_or_bottom() {
            return Ok(out);
        }
        let style = &info.style;
        let line_height = measurer.line_height("ABCxyz", style);
        let width = |text: &str| measurer.measure(text, style).advance_width;
        let (leading, trailing) = if orient == AxisOrient::Bottom {
            (info.padding.y0, info.padding.y1)
        } else {
            (info.padding.y1, info.padding.y0)
        };
        state.move_cursor(leading, orient);

        let tz = self.time_zone;
        let format = info.format.clone().with_time_zone(tz);
        let axis_min = self.first.first_millisecond();
        let axis_max = self.last.last_millisecond();

        // Skip enough periods that neighbouring labels cannot overlap.
        let p1 = RegularTimePeriod::containing(info.kind, axis_min, tz)?;
        let p2 = RegularTimePeriod::containing(info.kind, axis_max, tz)?;
        let w = width(&format.format(p1.middle_millisecond()))
            .max(width(&format.format(p2.middle_millisecond())));
        let ww = millis_from_f64(self.pixel_to_value(area.x0 + w + LABEL_GAP, area, orient));
        let ww = if self.core.inverted {
            axis_max - ww
        } else {
            ww - axis_min
        };
        let length = (p1.last_millisecond() - p1.first_millisecond()).max(1);
        let periods = usize::try_from(ww / length).unwrap_or(0) + 1;

        let y = state.cursor;
        let (anchor, y_delta) = if orient == AxisOrient::Top {
            (TextAnchor::BottomCenter, -line_height)
        } else {
            (TextAnchor::TopCenter, line_height)
        };
        let mut p = p1;
        let mut last_end: Option<i64> = None;
        let mut steps = 0;
        while p.first_millisecond() <= axis_max {
            if steps == MAX_PERIOD_STEPS {
                log::warn!("period axis: band {band} stopped after {steps} periods");
                break;
            }
            steps += 1;
            let middle = p.middle_millisecond();
            let first = p.first_millisecond();
            let last = p.last_millisecond();
            let mut x = self.value_to_pixel(middle as f64, area, orient);
            let mut label = Some(format.format(middle));
            if last > axis_max {
                if let Some(text) = &label {
                    let bw = width(text);
                    if x + bw / 2.0 > area.x1 {
                        let x_start = self.value_to_pixel(first.max(axis_min) as f64, area, orient);
                        if bw < area.x1 - x_start {
                            x = (area.x1 + x_start) / 2.0;
                        } else {
                            label = None;
                        }
                    }
                }
            }
            if first < axis_min {
                if let Some(text) = &label {
                    let bw = width(text);
                    if x - bw / 2.0 < area.x0 {
                        let x_last = self.value_to_pixel(last.min(axis_max) as f64, area, orient);
                        if bw < x_last - area.x0 {
                            x = (x_last + area.x0) / 2.0;
                        } else {
                            label = None;
                        }
                    }
                }
            }
            if let Some(text) = label {
                out.labels.push(BandLabel { text, x, y, anchor });
            }
            if let Some(previous_end) = last_end {
                if info.draw_dividers {
                    let mid = (previous_end + first) / 2;
                    let mx = self.value_to_pixel(mid as f64, area, orient);
                    out.dividers.push(Line::new((mx, y), (mx, y + y_delta)));
                }
            }
            last_end = Some(last);
            for _ in 0..periods {
                p = p.next()?;
            }
        }

        let used = if out.labels.is_empty() {
            0.0
        } else {
            line_height + trailing
        };
        state.move_cursor(used, orient);
        log::trace!(
            "period axis: band {band} has {} labels, skipping {} periods",
            out.labels.len(),
            periods - 1
        );
        Ok(out)
    }

    /// Refreshes the tick marks, then lays out every label band outward from
    /// `cursor`.
    pub fn layout_bands(
        &mut self,
        measurer: &dyn TextMeasurer,
        cursor: f64,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<(AxisState, Vec<PeriodBand>), AxisError> {
        let ticks = self.refresh_ticks(measurer, area, orient)?;
        let mut state = AxisState::new(cursor);
        state.ticks = ticks;
        let mut bands = Vec::with_capacity(self.label_info.len());
        for band in 0..self.label_info.len() {
            bands.push(self.band_labels(band, measurer, &mut state, area, orient)?);
        }
        state.max = (state.cursor - cursor).abs();
        Ok((state, bands))
    }
}

impl ValueAxis for PeriodAxis {
    fn core(&self) -> &AxisCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AxisCore {
        &mut self.core
    }

    fn value_to_pixel(&self, value: f64, area: Rect, orient: AxisOrient) -> f64 {
        self.scale(area, orient).map(value)
    }

    fn pixel_to_value(&self, pixel: f64, area: Rect, orient: AxisOrient) -> f64 {
        self.scale(area, orient).invert(pixel)
    }

    /// Snaps `range` outward to whole periods of the auto-range kind.
    fn set_range_with(
        &mut self,
        range: Range,
        turn_off_auto_range: bool,
        notify: bool,
    ) -> Result<(), AxisError> {
        let kind = self.auto_range_period_kind;
        let tz = self.time_zone;
        let first = RegularTimePeriod::containing(kind, millis_from_f64(range.lower()), tz)?;
        let last = RegularTimePeriod::containing(kind, millis_from_f64(range.upper()), tz)?;
        let snapped = Range::new(
            first.first_millisecond() as f64,
            last.last_millisecond() as f64 + 1.0,
        )?;
        self.core
            .commit_range(snapped, turn_off_auto_range, notify)?;
        self.first = first;
        self.last = last;
        Ok(())
    }

    fn auto_adjust_range(&mut self, data: Option<Range>) -> Result<(), AxisError> {
        let r = data.unwrap_or(self.core.default_auto_range);
        self.set_range_with(r, false, false)?;
        log::debug!("period axis auto-range: {r:?} -> {:?}", self.core.range);
        Ok(())
    }

    /// Emits unlabelled ticks on major period boundaries, and on minor ones
    /// when minor tick marks are visible.
    fn refresh_ticks(
        &mut self,
        _measurer: &dyn TextMeasurer,
        _area: Rect,
        _orient: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError> {
        let mut ticks = Vec::new();
        let tz = self.time_zone;
        let first_on_axis = self.first.first_millisecond();
        let last_on_axis = self.last.last_millisecond() + 1;
        let mut t = RegularTimePeriod::containing(self.major_tick_period_kind, first_on_axis, tz)?;
        let mut steps = 0;
        while t.first_millisecond() <= last_on_axis {
            if steps == MAX_PERIOD_STEPS {
                log::warn!("period axis: stopped after {steps} major periods");
                break;
            }
            steps += 1;
            let t0 = t.first_millisecond();
            if t0 >= first_on_axis {
                ticks.push(Tick::major(
                    t0 as f64,
                    "",
                    TextAnchor::Center,
                    TextAnchor::Center,
                    0.0,
                ));
            }
            if self.minor_tick_marks_visible {
                let mut minor = RegularTimePeriod::containing(self.minor_tick_period_kind, t0, tz)?;
                let mut minor_steps = 0;
                while minor.first_millisecond() < t.last_millisecond()
                    && minor.first_millisecond() < last_on_axis
                    && minor_steps < MAX_PERIOD_STEPS
                {
                    let tt0 = minor.first_millisecond();
                    if tt0 >= first_on_axis {
                        ticks.push(Tick::minor(tt0 as f64));
                    }
                    minor = minor.next()?;
                    minor_steps += 1;
                }
            }
            t = t.next()?;
        }
        log::trace!("period axis: {} ticks", ticks.len());
        Ok(ticks)
    }

    /// Like [`PeriodAxis::layout_bands`], keeping only the state.
    fn layout_ticks(
        &mut self,
        measurer: &dyn TextMeasurer,
        cursor: f64,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<AxisState, AxisError> {
        self.layout_bands(measurer, cursor, area, orient)
            .map(|(state, _)| state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use vizir_text::HeuristicTextMeasurer;

    const DAY: i64 = 86_400_000;
    // 2024-01-01T00:00Z
    const JAN_2024: i64 = 1_704_067_200_000;
    // 2023-11-01T00:00Z
    const NOV_2023: i64 = 1_698_796_800_000;

    fn month(ms: i64) -> RegularTimePeriod {
        RegularTimePeriod::containing(PeriodKind::Month, ms, Tz::UTC).unwrap()
    }

    fn year_2024() -> PeriodAxis {
        PeriodAxis::new(month(JAN_2024), month(JAN_2024 + 340 * DAY)).unwrap()
    }

    fn texts(band: &PeriodBand) -> Vec<&str> {
        band.labels.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn range_covers_whole_periods() {
        let a = year_2024();
        assert_eq!(a.range().lower(), JAN_2024 as f64);
        assert_eq!(a.range().upper(), (JAN_2024 + 366 * DAY) as f64);
        assert_eq!(a.minor_tick_period_kind(), PeriodKind::Day);
        let area = Rect::new(0.0, 0.0, 1200.0, 50.0);
        assert_approx_eq!(f64, a.value_to_pixel(JAN_2024 as f64, area, AxisOrient::Bottom), 0.0);
        assert_approx_eq!(
            f64,
            a.value_to_pixel(a.last().last_millisecond() as f64, area, AxisOrient::Bottom),
            1200.0
        );
    }

    #[test]
    fn set_range_snaps_outward() {
        let mut a = year_2024();
        a.set_range(Range::new((JAN_2024 + 14 * DAY) as f64, (JAN_2024 + 70 * DAY) as f64).unwrap())
            .unwrap();
        assert_eq!(a.range().lower(), JAN_2024 as f64);
        // Jan + Feb + Mar of a leap year.
        assert_eq!(a.range().upper(), (JAN_2024 + 91 * DAY) as f64);
        assert_eq!(a.first().start_local(), month(JAN_2024).start_local());
    }

    #[test]
    fn auto_range_snaps_without_notifying() {
        let mut a = year_2024();
        let revision = a.revision();
        a.configure(&[(JAN_2024 + 40 * DAY) as f64, (JAN_2024 + 123 * DAY) as f64][..])
            .unwrap();
        // Feb 1 to the end of May.
        assert_eq!(a.range().lower(), (JAN_2024 + 31 * DAY) as f64);
        assert_eq!(a.range().upper(), (JAN_2024 + 152 * DAY) as f64);
        assert!(a.is_auto_range());
        assert_eq!(a.revision(), revision);
    }

    #[test]
    fn ticks_on_period_boundaries() {
        let mut a = year_2024();
        let area = Rect::new(0.0, 0.0, 1200.0, 50.0);
        let m = HeuristicTextMeasurer;
        let ticks = a.refresh_ticks(&m, area, AxisOrient::Bottom).unwrap();
        // Twelve month starts plus the end of the axis.
        assert_eq!(ticks.len(), 13);
        assert!(ticks.iter().all(|t| t.is_major() && t.label.is_empty()));

        a.set_minor_tick_marks_visible(true);
        let ticks = a.refresh_ticks(&m, area, AxisOrient::Bottom).unwrap();
        assert_eq!(ticks.iter().filter(|t| !t.is_major()).count(), 366);
    }

    #[test]
    fn month_and_year_bands() {
        let mut a = year_2024();
        let area = Rect::new(0.0, 0.0, 1200.0, 50.0);
        let m = HeuristicTextMeasurer;
        let (state, bands) = a.layout_bands(&m, 0.0, area, AxisOrient::Bottom).unwrap();
        assert_eq!(
            texts(&bands[0]),
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(bands[0].dividers.len(), 11);
        assert_eq!(bands[0].labels[0].anchor, TextAnchor::TopCenter);
        assert_eq!(texts(&bands[1]), ["2024"]);
        assert!((bands[1].labels[0].x - 600.0).abs() < 0.01);
        // Each band is 2 + 10 + 2 pixels.
        assert_approx_eq!(f64, state.cursor, 28.0);
        assert_approx_eq!(f64, a.tick_label_bands_extent(&m), 28.0);
    }

    #[test]
    fn narrow_areas_skip_periods() {
        let a = year_2024();
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let mut state = AxisState::new(0.0);
        let band = a
            .band_labels(0, &HeuristicTextMeasurer, &mut state, area, AxisOrient::Bottom)
            .unwrap();
        assert_eq!(texts(&band), ["Jan", "Apr", "Jul", "Oct"]);
        assert_eq!(band.dividers.len(), 3);
    }

    #[test]
    fn partial_periods_are_recentred_or_dropped() {
        let a = PeriodAxis::new(month(NOV_2023), month(JAN_2024 + 40 * DAY)).unwrap();
        let m = HeuristicTextMeasurer;
        let area = Rect::new(0.0, 0.0, 400.0, 50.0);
        let boundary = a.value_to_pixel(JAN_2024 as f64, area, AxisOrient::Top);
        let mut state = AxisState::new(100.0);
        let band = a.band_labels(1, &m, &mut state, area, AxisOrient::Top).unwrap();
        assert_eq!(texts(&band), ["2023", "2024"]);
        assert!((band.labels[0].x - boundary / 2.0).abs() < 0.01);
        assert!((band.labels[1].x - (400.0 + boundary) / 2.0).abs() < 0.01);
        assert_eq!(band.labels[0].anchor, TextAnchor::BottomCenter);
        assert_eq!(band.dividers.len(), 1);
        assert!(state.cursor < 100.0);

        let narrow = Rect::new(0.0, 0.0, 40.0, 50.0);
        let mut state = AxisState::new(0.0);
        let band = a.band_labels(1, &m, &mut state, narrow, AxisOrient::Bottom).unwrap();
        assert!(band.labels.is_empty());
        assert_approx_eq!(f64, state.cursor, 2.0);
    }

    #[test]
    fn bands_only_run_horizontally() {
        let a = year_2024();
        let mut state = AxisState::new(10.0);
        let band = a
            .band_labels(
                0,
                &HeuristicTextMeasurer,
                &mut state,
                Rect::new(0.0, 0.0, 100.0, 300.0),
                AxisOrient::Left,
            )
            .unwrap();
        assert_eq!(band, PeriodBand::default());
        assert_approx_eq!(f64, state.cursor, 10.0);
    }

    #[test]
    fn time_zone_repegs_the_periods() {
        let mut a = year_2024();
        a.set_time_zone(chrono_tz::Asia::Tokyo).unwrap();
        assert_eq!(a.first().first_millisecond(), JAN_2024 - 9 * 3_600_000);
        assert_eq!(a.first().start_local(), month(JAN_2024).start_local());
    }

    #[test]
    fn mapping_round_trips_on_every_edge() {
        let mut a = year_2024();
        let area = Rect::new(0.0, 0.0, 1200.0, 50.0);
        for inverted in [false, true] {
            a.set_inverted(inverted);
            for orient in [AxisOrient::Top, AxisOrient::Bottom, AxisOrient::Left, AxisOrient::Right] {
                for ms in [JAN_2024, JAN_2024 + 45 * DAY + 1234, JAN_2024 + 366 * DAY] {
                    let px = a.value_to_pixel(ms as f64, area, orient);
                    let back = a.pixel_to_value(px, area, orient);
                    assert!((back - ms as f64).abs() <= 1.0, "{orient:?}: {back} vs {ms}");
                }
            }
        }
        a.set_inverted(true);
        assert_approx_eq!(f64, a.value_to_pixel(JAN_2024 as f64, area, AxisOrient::Bottom), 1200.0);
    }
}
