// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logarithmic axes.
//!
//! Values are mapped linearly in exponent space: `log(v) = ln(v) / ln(base)`.
//! The tick unit is a step in exponents, so a unit of size 1 puts a major tick
//! at every power of the base. Values below `smallest_value` (including zero)
//! are treated as `smallest_value`.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use vizir_text::TextMeasurer;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::number_axis::drawable_tick_count;
use crate::{
    AxisCore, AxisError, AxisOrient, DecimalFormat, LinearScale, NumberFormat, NumberTickUnit,
    NumberTickUnitSource, Range, TextAnchor, Tick, TickUnit, TickUnitSource, ValueAxis,
};

/// The most candidates auto tick selection tries before keeping the last one.
const MAX_SELECTION_STEPS: usize = 1000;

/// An axis with a logarithmic scale.
#[derive(Clone, Debug)]
pub struct LogAxis {
    core: AxisCore,
    base: f64,
    base_ln: f64,
    base_symbol: Option<String>,
    base_format: NumberFormat,
    smallest_value: f64,
    tick_unit: NumberTickUnit,
    number_format_override: Option<NumberFormat>,
    standard_tick_units: Arc<dyn TickUnitSource<NumberTickUnit>>,
}

impl LogAxis {
    /// The default value below which data is not shown.
    pub const DEFAULT_SMALLEST_VALUE: f64 = 1e-100;

    /// Creates a base 10 axis.
    pub fn new() -> Self {
        let mut core = AxisCore::new();
        core.default_auto_range = Range::new(0.01, 1.0).unwrap_or(Range::UNIT);
        Self {
            core,
            base: 10.0,
            base_ln: 10_f64.ln(),
            base_symbol: None,
            base_format: NumberFormat::integer(),
            smallest_value: Self::DEFAULT_SMALLEST_VALUE,
            tick_unit: Self::default_tick_unit(),
            number_format_override: None,
            standard_tick_units: Arc::new(NumberTickUnitSource::new(false)),
        }
    }

    /// The tick unit an axis starts with: one tick per power, ten minor
    /// spaces.
    pub fn default_tick_unit() -> NumberTickUnit {
        NumberTickUnit::with_format(
            1.0,
            NumberFormat::Decimal(DecimalFormat::new(0, 1, false)),
            10,
        )
    }

    /// Returns the axis with `source` as its standard tick units.
    #[must_use]
    pub fn with_standard_tick_units(
        mut self,
        source: Arc<dyn TickUnitSource<NumberTickUnit>>,
    ) -> Self {
        self.standard_tick_units = source;
        self
    }

    /// The logarithm base.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Sets the logarithm base, which must be greater than 1.
    pub fn set_base(&mut self, base: f64) -> Result<(), AxisError> {
        if base.is_nan() || base <= 1.0 {
            return Err(AxisError::InvalidLogBase(base));
        }
        self.base = base;
        self.base_ln = base.ln();
        self.core.notify();
        Ok(())
    }

    /// The text shown for the base in tick labels, if not the formatted base.
    pub fn base_symbol(&self) -> Option<&str> {
        self.base_symbol.as_deref()
    }

    /// Sets the text shown for the base in tick labels (e.g. `"e"`).
    pub fn set_base_symbol(&mut self, symbol: Option<String>) {
        self.base_symbol = symbol;
        self.core.notify();
    }

    /// The format used for the base when there is no base symbol.
    pub fn base_format(&self) -> &NumberFormat {
        &self.base_format
    }

    /// Sets the format used for the base.
    pub fn set_base_format(&mut self, format: NumberFormat) {
        self.base_format = format;
        self.core.notify();
    }

    /// The smallest value the axis shows.
    pub fn smallest_value(&self) -> f64 {
        self.smallest_value
    }

    /// Sets the smallest value the axis shows, which must be positive.
    pub fn set_smallest_value(&mut self, value: f64) -> Result<(), AxisError> {
        if value.is_nan() || value <= 0.0 {
            return Err(AxisError::NonPositiveSmallestValue(value));
        }
        self.smallest_value = value;
        self.core.notify();
        Ok(())
    }

    /// The current tick unit, a step in exponents.
    pub fn tick_unit(&self) -> &NumberTickUnit {
        &self.tick_unit
    }

    /// Sets the tick unit and turns auto tick unit selection off.
    pub fn set_tick_unit(&mut self, unit: NumberTickUnit) {
        self.set_tick_unit_with(unit, true, true);
    }

    /// Sets the tick unit.
    pub fn set_tick_unit_with(
        &mut self,
        unit: NumberTickUnit,
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

    /// The format used for whole labels instead of base and exponent, if any.
    pub fn number_format_override(&self) -> Option<&NumberFormat> {
        self.number_format_override.as_ref()
    }

    /// Sets or clears the label format override.
    pub fn set_number_format_override(&mut self, format: Option<NumberFormat>) {
        self.number_format_override = format;
        self.core.notify();
    }

    /// The source auto tick selection picks units from.
    pub fn standard_tick_units(&self) -> &Arc<dyn TickUnitSource<NumberTickUnit>> {
        &self.standard_tick_units
    }

    /// Sets the source auto tick selection picks units from.
    pub fn set_standard_tick_units(&mut self, source: Arc<dyn TickUnitSource<NumberTickUnit>>) {
        self.standard_tick_units = source;
        self.core.notify();
    }

    /// The logarithm of `value` in the axis base.
    pub fn calculate_log(&self, value: f64) -> f64 {
        value.ln() / self.base_ln
    }

    /// The value whose logarithm is `log`.
    pub fn calculate_value(&self, log: f64) -> f64 {
        self.base.powf(log)
    }

    /// Like [`LogAxis::calculate_value`], but overflow gives `f64::MAX` and
    /// underflow gives `f64::MIN_POSITIVE`.
    pub fn calculate_value_clamped(&self, log: f64) -> f64 {
        let value = self.calculate_value(log);
        if value.is_infinite() {
            f64::MAX
        } else if value <= 0.0 {
            f64::MIN_POSITIVE
        } else {
            value
        }
    }

    /// The exponents of the range bounds, with the lower bound floored at the
    /// smallest value.
    fn log_bounds(&self) -> (f64, f64) {
        let range = self.core.range;
        (
            self.calculate_log(range.lower().max(self.smallest_value)),
            self.calculate_log(range.upper()),
        )
    }

    fn log_scale(&self, area: Rect, orient: AxisOrient) -> LinearScale {
        let (min, max) = self.log_bounds();
        LinearScale::new(min, max, area, orient, self.core.inverted)
    }

    /// The number of pixels spanned by `length` in exponent space.
    pub fn exponent_length_to_pixel(&self, length: f64, area: Rect, orient: AxisOrient) -> f64 {
        let one = self.value_to_pixel(self.calculate_value_clamped(1.0), area, orient);
        let l = self.value_to_pixel(self.calculate_value_clamped(length + 1.0), area, orient);
        (l - one).abs()
    }

    /// Formats a tick label; returns the text and where the exponent starts.
    fn create_tick_label(&self, unit: &NumberTickUnit, value: f64) -> (String, Option<usize>) {
        if let Some(format) = &self.number_format_override {
            return (format.format(value), None);
        }
        let mut text = match &self.base_symbol {
            Some(symbol) => symbol.clone(),
            None => self.base_format.format(self.base),
        };
        let exponent_start = text.len();
        text.push_str(&unit.value_to_string(self.calculate_log(value)));
        (text, Some(exponent_start))
    }

    fn estimate_maximum_tick_label_width(
        &self,
        measurer: &dyn TextMeasurer,
        unit: &NumberTickUnit,
    ) -> f64 {
        let core = &self.core;
        let insets = core.tick_label_insets.x_value();
        if core.vertical_tick_labels {
            insets + core.label_line_height(measurer, "0")
        } else {
            let (lower, _) = self.create_tick_label(unit, core.range.lower());
            let (upper, _) = self.create_tick_label(unit, core.range.upper());
            insets
                + core
                    .label_width(measurer, &lower)
                    .max(core.label_width(measurer, &upper))
        }
    }

    fn estimate_maximum_tick_label_height(&self, measurer: &dyn TextMeasurer) -> f64 {
        let core = &self.core;
        core.tick_label_insets.y_value() + core.label_line_height(measurer, "123")
    }

    fn select_auto_tick_unit(
        &mut self,
        measurer: &dyn TextMeasurer,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<(), AxisError> {
        let source = Arc::clone(&self.standard_tick_units);
        let (log_min, log_max) = self.log_bounds();
        let mut candidate = source.ceiling_tick_unit((log_max - log_min) / 50.0)?;
        let mut previous = candidate.clone();
        let mut steps = 0;
        let selected = loop {
            let label = if orient.is_top_or_bottom() {
                self.estimate_maximum_tick_label_width(measurer, &candidate)
            } else {
                self.estimate_maximum_tick_label_height(measurer)
            };
            let available = self.exponent_length_to_pixel(candidate.size(), area, orient);
            if label < available {
                break candidate;
            }
            if available.is_nan() {
                break previous;
            }
            let larger = source.larger_tick_unit(&candidate)?;
            if larger.size() == candidate.size() {
                break candidate;
            }
            previous = core::mem::replace(&mut candidate, larger);
            steps += 1;
            if steps >= MAX_SELECTION_STEPS {
                log::warn!("log axis: no tick unit fits after {steps} candidates");
                break candidate;
            }
        };
        log::debug!(
            "log axis {orient:?}: selected exponent step {} for range {:?}",
            selected.size(),
            self.core.range
        );
        self.set_tick_unit_with(selected, false, false);
        Ok(())
    }
}

impl Default for LogAxis {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueAxis for LogAxis {
    fn core(&self) -> &AxisCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AxisCore {
        &mut self.core
    }

    fn value_to_pixel(&self, value: f64, area: Rect, orient: AxisOrient) -> f64 {
        self.log_scale(area, orient).map(self.calculate_log(value))
    }

    fn pixel_to_value(&self, pixel: f64, area: Rect, orient: AxisOrient) -> f64 {
        self.calculate_value(self.log_scale(area, orient).invert(pixel))
    }

    fn auto_adjust_range(&mut self, data: Option<Range>) -> Result<(), AxisError> {
        let core = &self.core;
        let r = data.unwrap_or(core.default_auto_range);
        let mut upper = r.upper();
        let mut lower = r.lower().max(self.smallest_value);
        let range = upper - lower;

        if core.fixed_auto_range > 0.0 {
            lower = (upper - core.fixed_auto_range).max(self.smallest_value);
        } else {
            let min_range = core.auto_range_minimum_size;
            if range < min_range {
                let expand = (min_range - range) / 2.0;
                upper += expand;
                lower = (lower - expand).max(self.smallest_value);
            }
            // Margins apply to the exponent range.
            let log_upper = self.calculate_log(upper);
            let log_lower = self.calculate_log(lower);
            let log_range = log_upper - log_lower;
            upper = self.calculate_value_clamped(log_upper + core.upper_margin * log_range);
            lower = self.calculate_value_clamped(log_lower - core.lower_margin * log_range);
        }

        let adjusted = Range::new(lower, upper)?;
        log::debug!("log axis auto-range: {r:?} -> {adjusted:?}");
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
        let size = unit.size();
        let range = self.core.range;
        let start = (self.calculate_log(range.lower()) / size).ceil() * size;
        let end = self.calculate_log(range.upper());
        if !(size > 0.0 && size.is_finite() && start.is_finite()) {
            return Ok(ticks);
        }
        let Some(count) = drawable_tick_count(((end - start) / size).floor() + 1.0) else {
            return Ok(ticks);
        };
        let anchor = match orient {
            AxisOrient::Top => TextAnchor::BottomCenter,
            AxisOrient::Bottom => TextAnchor::TopCenter,
            AxisOrient::Right => TextAnchor::CenterLeft,
            AxisOrient::Left => TextAnchor::CenterRight,
        };
        let minor_count = unit.minor_tick_count();

        let mut index = 0.0;
        for _ in 0..count {
            let current = start + index * size;
            index += 1.0;
            let v = self.calculate_value_clamped(current);
            if range.contains(v) {
                let (label, superscript_start) = self.create_tick_label(unit, v);
                let mut tick = Tick::major(v, label, anchor, anchor, 0.0);
                tick.superscript_start = superscript_start;
                ticks.push(tick);
            }
            let next = self.calculate_value(current + size);
            for i in 1..minor_count {
                let minor = v + f64::from(i) * ((next - v) / f64::from(minor_count));
                if range.contains(minor) {
                    ticks.push(Tick::minor(minor));
                }
            }
        }
        log::trace!("log axis: {} ticks for {range:?}", ticks.len());
        Ok(ticks)
    }

    fn zoom_range(&mut self, lower_percent: f64, upper_percent: f64) -> Result<(), AxisError> {
        let (log1, log2) = self.log_bounds();
        let length = log2 - log1;
        let (a, b) = if self.core.inverted {
            (log1 + length * (1.0 - upper_percent), log1 + length * (1.0 - lower_percent))
        } else {
            (log1 + length * lower_percent, log1 + length * upper_percent)
        };
        let (r0, r1) = (self.calculate_value_clamped(a), self.calculate_value_clamped(b));
        if r1 > r0 && (r1 - r0).is_finite() {
            self.set_range(Range::new(r0, r1)?)?;
        }
        Ok(())
    }

    fn pan(&mut self, percent: f64) -> Result<(), AxisError> {
        let (log1, log2) = self.log_bounds();
        let delta = (log2 - log1) * percent;
        let range = Range::new(
            self.calculate_value_clamped(log1 + delta),
            self.calculate_value_clamped(log2 + delta),
        )?;
        self.set_range(range)
    }

    fn resize_range(&mut self, percent: f64) -> Result<(), AxisError> {
        let (log_min, log_max) = self.log_bounds();
        let central = self.calculate_value_clamped((log_min + log_max) / 2.0);
        self.resize_range2(percent, central)
    }

    fn resize_range_about(&mut self, percent: f64, anchor: f64) -> Result<(), AxisError> {
        self.resize_range2(percent, anchor)
    }

    fn resize_range2(&mut self, percent: f64, anchor: f64) -> Result<(), AxisError> {
        if percent > 0.0 {
            let log_anchor = self.calculate_log(anchor);
            let (log_min, log_max) = self.log_bounds();
            let left = percent * (log_anchor - log_min);
            let right = percent * (log_max - log_anchor);
            let range = Range::new(
                self.calculate_value_clamped(log_anchor - left),
                self.calculate_value_clamped(log_anchor + right),
            )?;
            self.set_range(range)
        } else {
            self.set_auto_range(true);
            Ok(())
        }
    }
}
