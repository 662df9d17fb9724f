// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The behavior shared by every axis that maps values to pixels.
//!
//! Each axis kind owns an [`AxisCore`] holding the range, auto-range settings
//! and tick label settings, and implements [`ValueAxis`] for its mapping,
//! auto-range and tick generation. Navigation (zoom, pan, resize) and layout
//! are provided on top of those as default methods; kinds that navigate in a
//! transformed space (log, timeline) override them.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Insets, Rect};
use vizir_text::{TextMeasurer, TextStyle};

use crate::{AxisError, AxisOrient, AxisState, LinearScale, Range, Tick};

/// Ticks are not generated when a unit would produce more than this many.
pub const MAXIMUM_TICK_COUNT: usize = 500;

/// Supplies the extent of the data an axis should cover.
///
/// The provider is only read during [`ValueAxis::configure`].
pub trait DataRangeProvider {
    /// Returns the data extent, or `None` when there is no data.
    fn data_range(&self) -> Option<Range>;
}

impl DataRangeProvider for Range {
    fn data_range(&self) -> Option<Range> {
        Some(*self)
    }
}

impl DataRangeProvider for Option<Range> {
    fn data_range(&self) -> Option<Range> {
        *self
    }
}

impl DataRangeProvider for [f64] {
    fn data_range(&self) -> Option<Range> {
        Range::from_values(self)
    }
}

/// State common to every value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisCore {
    pub(crate) range: Range,
    pub(crate) auto_range: bool,
    pub(crate) auto_range_minimum_size: f64,
    pub(crate) default_auto_range: Range,
    pub(crate) fixed_auto_range: f64,
    pub(crate) lower_margin: f64,
    pub(crate) upper_margin: f64,
    pub(crate) inverted: bool,
    pub(crate) auto_tick_unit_selection: bool,
    pub(crate) vertical_tick_labels: bool,
    pub(crate) minor_tick_count: u32,
    pub(crate) tick_label_style: TextStyle,
    pub(crate) tick_label_insets: Insets,
    revision: u64,
}

impl AxisCore {
    /// The range an axis starts with.
    pub const DEFAULT_RANGE: Range = Range::UNIT;
    /// The smallest range auto-ranging produces.
    pub const DEFAULT_AUTO_RANGE_MINIMUM_SIZE: f64 = 1e-8;
    /// The default lower and upper margin, as a fraction of the range.
    pub const DEFAULT_MARGIN: f64 = 0.05;

    /// Creates the default state: range `[0, 1]`, auto-range and auto tick
    /// selection on.
    pub fn new() -> Self {
        Self::with_default_range(Self::DEFAULT_RANGE)
    }

    /// Creates the default state with `range` as both the current range and
    /// the range used when there is no data.
    pub fn with_default_range(range: Range) -> Self {
        Self {
            range,
            auto_range: true,
            auto_range_minimum_size: Self::DEFAULT_AUTO_RANGE_MINIMUM_SIZE,
            default_auto_range: range,
            fixed_auto_range: 0.0,
            lower_margin: Self::DEFAULT_MARGIN,
            upper_margin: Self::DEFAULT_MARGIN,
            inverted: false,
            auto_tick_unit_selection: true,
            vertical_tick_labels: false,
            minor_tick_count: 0,
            tick_label_style: TextStyle::default(),
            tick_label_insets: Insets::new(4.0, 2.0, 4.0, 2.0),
            revision: 0,
        }
    }

    /// The number of notifying changes made so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn notify(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Stores `range`, rejecting empty ranges.
    pub(crate) fn commit_range(
        &mut self,
        range: Range,
        turn_off_auto_range: bool,
        notify: bool,
    ) -> Result<(), AxisError> {
        if range.length() <= 0.0 {
            return Err(AxisError::EmptyRange {
                lower: range.lower(),
                upper: range.upper(),
            });
        }
        if turn_off_auto_range {
            self.auto_range = false;
        }
        self.range = range;
        if notify {
            self.notify();
        }
        Ok(())
    }

    /// The linear map from the current range onto `area`.
    pub(crate) fn scale(&self, area: Rect, orient: AxisOrient) -> LinearScale {
        LinearScale::new(
            self.range.lower(),
            self.range.upper(),
            area,
            orient,
            self.inverted,
        )
    }

    /// The line height of `sample` in the tick label style.
    pub(crate) fn label_line_height(&self, measurer: &dyn TextMeasurer, sample: &str) -> f64 {
        measurer.line_height(sample, &self.tick_label_style)
    }

    /// The advance width of `text` in the tick label style.
    pub(crate) fn label_width(&self, measurer: &dyn TextMeasurer, text: &str) -> f64 {
        measurer
            .measure(text, &self.tick_label_style)
            .advance_width
    }
}

impl Default for AxisCore {
    fn default() -> Self {
        Self::new()
    }
}

/// An axis mapping a continuous range of values onto one edge of a plot.
pub trait ValueAxis {
    /// The shared axis state.
    fn core(&self) -> &AxisCore;

    /// The shared axis state, mutably.
    fn core_mut(&mut self) -> &mut AxisCore;

    /// Converts a data value to a pixel coordinate along `orient` of `area`.
    fn value_to_pixel(&self, value: f64, area: Rect, orient: AxisOrient) -> f64;

    /// Converts a pixel coordinate along `orient` of `area` to a data value.
    fn pixel_to_value(&self, pixel: f64, area: Rect, orient: AxisOrient) -> f64;

    /// Recomputes the range from `data` (or the default auto range when it
    /// is `None`).
    ///
    /// The result is committed without turning auto-range off and without
    /// notifying.
    fn auto_adjust_range(&mut self, data: Option<Range>) -> Result<(), AxisError>;

    /// Selects a tick unit (when auto selection is on) and generates the
    /// ticks for the current range.
    fn refresh_ticks(
        &mut self,
        measurer: &dyn TextMeasurer,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError>;

    /// Recomputes the range from `provider` when auto-range is on.
    fn configure<P>(&mut self, provider: &P) -> Result<(), AxisError>
    where
        P: DataRangeProvider + ?Sized,
        Self: Sized,
    {
        if self.core().auto_range {
            self.auto_adjust_range(provider.data_range())?;
        }
        Ok(())
    }

    /// The number of notifying changes made so far.
    fn revision(&self) -> u64 {
        self.core().revision()
    }

    /// The displayed range.
    fn range(&self) -> Range {
        self.core().range
    }

    /// The lower bound of the displayed range.
    fn lower_bound(&self) -> f64 {
        self.core().range.lower()
    }

    /// The upper bound of the displayed range.
    fn upper_bound(&self) -> f64 {
        self.core().range.upper()
    }

    /// Sets the displayed range, turning auto-range off.
    fn set_range(&mut self, range: Range) -> Result<(), AxisError> {
        self.set_range_with(range, true, true)
    }

    /// Sets the displayed range.
    ///
    /// Fails with [`AxisError::EmptyRange`] unless `range` has a positive
    /// length.
    fn set_range_with(
        &mut self,
        range: Range,
        turn_off_auto_range: bool,
        notify: bool,
    ) -> Result<(), AxisError> {
        self.core_mut()
            .commit_range(range, turn_off_auto_range, notify)
    }

    /// Sets the range to `range` grown by the axis margins.
    fn set_range_with_margins(&mut self, range: Range) -> Result<(), AxisError> {
        let core = self.core();
        let expanded = range.expand(core.lower_margin, core.upper_margin);
        self.set_range(expanded)
    }

    /// Sets a range of `length` centred on `value`.
    fn set_range_about_value(&mut self, value: f64, length: f64) -> Result<(), AxisError> {
        let range = Range::new(value - length / 2.0, value + length / 2.0)?;
        self.set_range(range)
    }

    /// Moves the lower bound to `min`.
    ///
    /// If `min` is not below the upper bound, the range becomes `[min, min + 1]`.
    fn set_lower_bound(&mut self, min: f64) -> Result<(), AxisError> {
        let upper = self.upper_bound();
        let range = if upper > min {
            Range::new(min, upper)?
        } else {
            Range::new(min, min + 1.0)?
        };
        self.set_range(range)
    }

    /// Moves the upper bound to `max`.
    ///
    /// If `max` is not above the lower bound, the range becomes `[max - 1, max]`.
    fn set_upper_bound(&mut self, max: f64) -> Result<(), AxisError> {
        let lower = self.lower_bound();
        let range = if lower < max {
            Range::new(lower, max)?
        } else {
            Range::new(max - 1.0, max)?
        };
        self.set_range(range)
    }

    /// Returns `true` if the range is recomputed by [`ValueAxis::configure`].
    fn is_auto_range(&self) -> bool {
        self.core().auto_range
    }

    /// Turns auto-range on or off.
    ///
    /// Turning it on does not change the range until the next
    /// [`ValueAxis::configure`].
    fn set_auto_range(&mut self, auto_range: bool) {
        let core = self.core_mut();
        if core.auto_range != auto_range {
            core.auto_range = auto_range;
            core.notify();
        }
    }

    /// The smallest range auto-ranging produces.
    fn auto_range_minimum_size(&self) -> f64 {
        self.core().auto_range_minimum_size
    }

    /// Sets the smallest range auto-ranging produces.
    fn set_auto_range_minimum_size(&mut self, size: f64) -> Result<(), AxisError> {
        if size.is_nan() || size <= 0.0 {
            return Err(AxisError::NonPositiveMinimumSize(size));
        }
        let core = self.core_mut();
        core.auto_range_minimum_size = size;
        core.notify();
        Ok(())
    }

    /// The range used by auto-ranging when there is no data.
    fn default_auto_range(&self) -> Range {
        self.core().default_auto_range
    }

    /// Sets the range used by auto-ranging when there is no data.
    fn set_default_auto_range(&mut self, range: Range) {
        let core = self.core_mut();
        core.default_auto_range = range;
        core.notify();
    }

    /// The fixed auto-range length, or `0.0` when auto-range fits the data.
    fn fixed_auto_range(&self) -> f64 {
        self.core().fixed_auto_range
    }

    /// Makes auto-range show the last `length` units of the data.
    ///
    /// `0.0` restores fitting the whole data range.
    fn set_fixed_auto_range(&mut self, length: f64) {
        let core = self.core_mut();
        core.fixed_auto_range = length;
        core.notify();
    }

    /// The margin added below the data, as a fraction of the range.
    fn lower_margin(&self) -> f64 {
        self.core().lower_margin
    }

    /// Sets the margin added below the data.
    fn set_lower_margin(&mut self, margin: f64) {
        let core = self.core_mut();
        core.lower_margin = margin;
        core.notify();
    }

    /// The margin added above the data, as a fraction of the range.
    fn upper_margin(&self) -> f64 {
        self.core().upper_margin
    }

    /// Sets the margin added above the data.
    fn set_upper_margin(&mut self, margin: f64) {
        let core = self.core_mut();
        core.upper_margin = margin;
        core.notify();
    }

    /// Returns `true` if values increase towards the start of the edge.
    fn is_inverted(&self) -> bool {
        self.core().inverted
    }

    /// Flips the direction of the axis.
    fn set_inverted(&mut self, inverted: bool) {
        let core = self.core_mut();
        if core.inverted != inverted {
            core.inverted = inverted;
            core.notify();
        }
    }

    /// Returns `true` if tick units are chosen by [`ValueAxis::refresh_ticks`].
    fn is_auto_tick_unit_selection(&self) -> bool {
        self.core().auto_tick_unit_selection
    }

    /// Turns auto tick unit selection on or off.
    fn set_auto_tick_unit_selection(&mut self, auto: bool) {
        let core = self.core_mut();
        if core.auto_tick_unit_selection != auto {
            core.auto_tick_unit_selection = auto;
            core.notify();
        }
    }

    /// Returns `true` if tick labels are rotated a quarter turn.
    fn is_vertical_tick_labels(&self) -> bool {
        self.core().vertical_tick_labels
    }

    /// Rotates tick labels a quarter turn, or back.
    fn set_vertical_tick_labels(&mut self, vertical: bool) {
        let core = self.core_mut();
        if core.vertical_tick_labels != vertical {
            core.vertical_tick_labels = vertical;
            core.notify();
        }
    }

    /// The number of minor tick spaces per major step, or `0` to use the
    /// tick unit's suggestion.
    fn minor_tick_count(&self) -> u32 {
        self.core().minor_tick_count
    }

    /// Sets the number of minor tick spaces per major step.
    fn set_minor_tick_count(&mut self, count: u32) {
        let core = self.core_mut();
        core.minor_tick_count = count;
        core.notify();
    }

    /// The style tick labels are measured with.
    fn tick_label_style(&self) -> &TextStyle {
        &self.core().tick_label_style
    }

    /// Sets the style tick labels are measured with.
    fn set_tick_label_style(&mut self, style: TextStyle) {
        let core = self.core_mut();
        core.tick_label_style = style;
        core.notify();
    }

    /// The padding around each tick label.
    fn tick_label_insets(&self) -> Insets {
        self.core().tick_label_insets
    }

    /// Sets the padding around each tick label.
    fn set_tick_label_insets(&mut self, insets: Insets) {
        let core = self.core_mut();
        core.tick_label_insets = insets;
        core.notify();
    }

    /// Moves the range so that it is centred on `value`.
    fn center_range(&mut self, value: f64) -> Result<(), AxisError> {
        let range = self.range();
        let delta = value - range.central_value();
        self.set_range(Range::new(range.lower() + delta, range.upper() + delta)?)
    }

    /// Scales the range about its centre by `percent` (`0.5` halves it).
    ///
    /// A `percent` of zero or less turns auto-range on.
    fn resize_range(&mut self, percent: f64) -> Result<(), AxisError> {
        let central = self.range().central_value();
        self.resize_range_about(percent, central)
    }

    /// Sets a range `percent` times the current length, centred on `anchor`.
    ///
    /// A `percent` of zero or less turns auto-range on.
    fn resize_range_about(&mut self, percent: f64, anchor: f64) -> Result<(), AxisError> {
        if percent > 0.0 {
            let half = self.range().length() * percent / 2.0;
            self.set_range(Range::new(anchor - half, anchor + half)?)
        } else {
            self.set_auto_range(true);
            Ok(())
        }
    }

    /// Scales the range by `percent` keeping `anchor` at the same relative
    /// position.
    ///
    /// A `percent` of zero or less turns auto-range on.
    fn resize_range2(&mut self, percent: f64, anchor: f64) -> Result<(), AxisError> {
        if percent > 0.0 {
            let range = self.range();
            let left = anchor - range.lower();
            let right = range.upper() - anchor;
            self.set_range(Range::new(anchor - left * percent, anchor + right * percent)?)
        } else {
            self.set_auto_range(true);
            Ok(())
        }
    }

    /// Zooms to the part of the range between two fractions of its length.
    ///
    /// The fractions are measured from the start of the edge, so an inverted
    /// axis zooms from its upper bound. Nothing changes unless the result is
    /// a finite range of positive length.
    fn zoom_range(&mut self, lower_percent: f64, upper_percent: f64) -> Result<(), AxisError> {
        let range = self.range();
        let start = range.lower();
        let length = range.length();
        let (r0, r1) = if self.is_inverted() {
            (
                start + length * (1.0 - upper_percent),
                start + length * (1.0 - lower_percent),
            )
        } else {
            (start + length * lower_percent, start + length * upper_percent)
        };
        if r1 > r0 && (r1 - r0).is_finite() {
            self.set_range(Range::new(r0, r1)?)?;
        }
        Ok(())
    }

    /// Shifts the range by `percent` of its length.
    fn pan(&mut self, percent: f64) -> Result<(), AxisError> {
        let range = self.range();
        let delta = range.length() * percent;
        self.set_range(Range::new(range.lower() + delta, range.upper() + delta)?)
    }

    /// The number of pixels spanned by `length` data units.
    fn length_to_pixel(&self, length: f64, area: Rect, orient: AxisOrient) -> f64 {
        let zero = self.value_to_pixel(0.0, area, orient);
        let l = self.value_to_pixel(length, area, orient);
        (l - zero).abs()
    }

    /// Refreshes the ticks and reserves room for their labels.
    ///
    /// The returned state holds the ticks, and its cursor has moved away from
    /// the plot by the largest tick label extent (including insets).
    fn layout_ticks(
        &mut self,
        measurer: &dyn TextMeasurer,
        cursor: f64,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<AxisState, AxisError> {
        let ticks = self.refresh_ticks(measurer, area, orient)?;
        let core = self.core();
        let used = if orient.is_top_or_bottom() {
            max_tick_label_height(core, &ticks, measurer)
        } else {
            max_tick_label_width(core, &ticks, measurer)
        };
        let mut state = AxisState::new(cursor);
        state.max = used;
        state.move_cursor(used, orient);
        state.ticks = ticks;
        Ok(state)
    }
}

/// The tallest tick label, plus the top and bottom insets.
///
/// Unrotated labels all share one line height; rotated labels are as tall as
/// their text is wide.
pub(crate) fn max_tick_label_height(
    core: &AxisCore,
    ticks: &[Tick],
    measurer: &dyn TextMeasurer,
) -> f64 {
    let insets = core.tick_label_insets.y_value();
    if core.vertical_tick_labels {
        ticks
            .iter()
            .map(|t| core.label_width(measurer, &t.label) + insets)
            .fold(0.0, f64::max)
    } else {
        core.label_line_height(measurer, "ABCxyz") + insets
    }
}

/// The widest tick label, plus the left and right insets.
pub(crate) fn max_tick_label_width(
    core: &AxisCore,
    ticks: &[Tick],
    measurer: &dyn TextMeasurer,
) -> f64 {
    let insets = core.tick_label_insets.x_value();
    if core.vertical_tick_labels {
        core.label_line_height(measurer, "ABCxyz") + insets
    } else {
        ticks
            .iter()
            .map(|t| core.label_width(measurer, &t.label) + insets)
            .fold(0.0, f64::max)
    }
}
