// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear numeric axes.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use vizir_text::TextMeasurer;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::tick::major_label_placement;
use crate::{
    AxisCore, AxisError, AxisOrient, MAXIMUM_TICK_COUNT, NumberFormat, NumberTickUnit,
    NumberTickUnitSource, Range, Tick, TickUnit, TickUnitSource, ValueAxis,
};

/// Restricts the values an auto-ranged number axis can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangeType {
    /// Any value.
    #[default]
    Full,
    /// Zero and above.
    Positive,
    /// Zero and below.
    Negative,
}

/// An axis for plain numbers.
#[derive(Clone, Debug)]
pub struct NumberAxis {
    core: AxisCore,
    range_type: RangeType,
    auto_range_includes_zero: bool,
    auto_range_sticky_zero: bool,
    tick_unit: NumberTickUnit,
    number_format_override: Option<NumberFormat>,
    standard_tick_units: Arc<dyn TickUnitSource<NumberTickUnit>>,
}

impl NumberAxis {
    /// Creates an axis over `[0, 1]` that includes zero when auto-ranging.
    pub fn new() -> Self {
        Self {
            core: AxisCore::new(),
            range_type: RangeType::Full,
            auto_range_includes_zero: true,
            auto_range_sticky_zero: true,
            tick_unit: Self::default_tick_unit(),
            number_format_override: None,
            standard_tick_units: Arc::new(NumberTickUnitSource::new(false)),
        }
    }

    /// The tick unit an axis starts with: whole numbers, step 1.
    pub fn default_tick_unit() -> NumberTickUnit {
        NumberTickUnit::with_format(1.0, NumberFormat::integer(), 0)
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

    /// Returns the axis with the given range type.
    #[must_use]
    pub fn with_range_type(mut self, range_type: RangeType) -> Self {
        self.range_type = range_type;
        self
    }

    /// Returns the axis with zero-inclusion set.
    #[must_use]
    pub fn with_auto_range_includes_zero(mut self, include: bool) -> Self {
        self.auto_range_includes_zero = include;
        self
    }

    /// Returns the axis with sticky zero set.
    #[must_use]
    pub fn with_auto_range_sticky_zero(mut self, sticky: bool) -> Self {
        self.auto_range_sticky_zero = sticky;
        self
    }

    /// Returns the axis with auto tick unit selection on or off.
    #[must_use]
    pub fn with_auto_tick_unit_selection(mut self, auto: bool) -> Self {
        self.core.auto_tick_unit_selection = auto;
        self
    }

    /// The range type.
    pub fn range_type(&self) -> RangeType {
        self.range_type
    }

    /// Sets the range type used by auto-ranging.
    pub fn set_range_type(&mut self, range_type: RangeType) {
        self.range_type = range_type;
        self.core.notify();
    }

    /// Returns `true` if auto-ranging always includes zero.
    pub fn auto_range_includes_zero(&self) -> bool {
        self.auto_range_includes_zero
    }

    /// Sets whether auto-ranging always includes zero.
    pub fn set_auto_range_includes_zero(&mut self, include: bool) {
        if self.auto_range_includes_zero != include {
            self.auto_range_includes_zero = include;
            self.core.notify();
        }
    }

    /// Returns `true` if auto-range margins stop at zero.
    pub fn auto_range_sticky_zero(&self) -> bool {
        self.auto_range_sticky_zero
    }

    /// Sets whether auto-range margins stop at zero.
    pub fn set_auto_range_sticky_zero(&mut self, sticky: bool) {
        if self.auto_range_sticky_zero != sticky {
            self.auto_range_sticky_zero = sticky;
            self.core.notify();
        }
    }

    /// The current tick unit.
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

    /// The format used for labels instead of the tick unit's, if any.
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

    /// The smallest multiple of the tick size inside the range.
    pub fn calculate_lowest_visible_tick_value(&self) -> f64 {
        let size = self.tick_unit.size();
        (self.core.range.lower() / size).ceil() * size
    }

    /// The largest multiple of the tick size inside the range.
    pub fn calculate_highest_visible_tick_value(&self) -> f64 {
        let size = self.tick_unit.size();
        (self.core.range.upper() / size).floor() * size
    }

    /// The number of multiples of the tick size inside the range.
    ///
    /// Returns `None` when the tick size is not positive and finite.
    pub fn calculate_visible_tick_count(&self) -> Option<f64> {
        let size = self.tick_unit.size();
        if !(size > 0.0 && size.is_finite()) {
            return None;
        }
        let range = self.core.range;
        let count = (range.upper() / size).floor() - (range.lower() / size).ceil() + 1.0;
        Some(count.max(0.0))
    }

    fn format_label(&self, unit: &NumberTickUnit, value: f64) -> String {
        match &self.number_format_override {
            Some(format) => format.format(value),
            None => unit.value_to_string(value),
        }
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
            let lower = self.format_label(unit, core.range.lower());
            let upper = self.format_label(unit, core.range.upper());
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
        let length = self.core.range.length();
        let unit2 = if orient.is_top_or_bottom() {
            let mut unit = self.tick_unit.clone();
            let count = (length / unit.size()).trunc();
            if !(2.0..=40.0).contains(&count) {
                unit = source.ceiling_tick_unit(length / 20.0)?;
            }
            let label_width = self.estimate_maximum_tick_label_width(measurer, &unit);
            let unit1 = source.ceiling_tick_unit_for(&unit)?;
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
            let label_height = self.estimate_maximum_tick_label_height(measurer);
            let unit1 = source.ceiling_tick_unit_for(&self.tick_unit)?;
            let unit1_height = self.length_to_pixel(unit1.size(), area, orient);
            let guess = extrapolate(label_height, unit1_height, unit1.size(), length);
            let unit2 = source.ceiling_tick_unit(guess)?;
            let unit2_height = self.length_to_pixel(unit2.size(), area, orient);
            if label_height > unit2_height {
                source.larger_tick_unit(&unit2)?
            } else {
                unit2
            }
        };
        log::debug!(
            "number axis {orient:?}: selected tick unit {} for range {:?}",
            unit2.size(),
            self.core.range
        );
        self.set_tick_unit_with(unit2, false, false);
        Ok(())
    }
}

impl Default for NumberAxis {
    fn default() -> Self {
        Self::new()
    }
}

/// Scales a unit so that one step spans `label_extent` pixels.
///
/// Falls back to a twentieth of the range when the unit has no pixel extent
/// or the estimate is not finite. Both selection directions use this guard,
/// so a degenerate area never reaches the tick unit source.
pub(crate) fn extrapolate(
    label_extent: f64,
    unit_extent: f64,
    unit_size: f64,
    length: f64,
) -> f64 {
    let guess = label_extent / unit_extent * unit_size;
    if unit_extent > 0.0 && guess.is_finite() {
        guess
    } else {
        length / 20.0
    }
}

/// Converts a visible tick count to an index bound, or `None` if there are
/// too many ticks to draw.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the count is a non-negative whole number no larger than MAXIMUM_TICK_COUNT"
)]
pub(crate) fn drawable_tick_count(count: f64) -> Option<usize> {
    if count.is_finite() && count <= MAXIMUM_TICK_COUNT as f64 {
        Some(count.max(0.0) as usize)
    } else {
        log::warn!("{count} ticks exceed the maximum of {MAXIMUM_TICK_COUNT}; no ticks generated");
        None
    }
}

/// Number of minor tick spaces between two major ticks.
pub(crate) fn minor_tick_spaces(core: &AxisCore, unit_minor_count: u32) -> u32 {
    if core.minor_tick_count > 0 {
        core.minor_tick_count
    } else {
        unit_minor_count
    }
}

impl ValueAxis for NumberAxis {
    fn core(&self) -> &AxisCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AxisCore {
        &mut self.core
    }

    fn value_to_pixel(&self, value: f64, area: Rect, orient: AxisOrient) -> f64 {
        self.core.scale(area, orient).map(value)
    }

    fn pixel_to_value(&self, pixel: f64, area: Rect, orient: AxisOrient) -> f64 {
        self.core.scale(area, orient).invert(pixel)
    }

    fn auto_adjust_range(&mut self, data: Option<Range>) -> Result<(), AxisError> {
        let core = &self.core;
        let r = data.unwrap_or(core.default_auto_range);
        let mut lower = r.lower();
        let mut upper = r.upper();
        match self.range_type {
            RangeType::Full => {}
            RangeType::Positive => {
                lower = lower.max(0.0);
                upper = upper.max(0.0);
            }
            RangeType::Negative => {
                lower = lower.min(0.0);
                upper = upper.min(0.0);
            }
        }
        if self.auto_range_includes_zero {
            lower = lower.min(0.0);
            upper = upper.max(0.0);
        }
        let range = upper - lower;

        if core.fixed_auto_range > 0.0 {
            lower = upper - core.fixed_auto_range;
        } else {
            let min_range = core.auto_range_minimum_size;
            if range < min_range {
                let expand = (min_range - range) / 2.0;
                upper += expand;
                lower -= expand;
                if lower == upper {
                    // The expansion was lost to rounding at this magnitude.
                    let adjust = lower.abs() / 10.0;
                    lower -= adjust;
                    upper += adjust;
                }
                match self.range_type {
                    RangeType::Positive if lower < 0.0 => {
                        upper -= lower;
                        lower = 0.0;
                    }
                    RangeType::Negative if upper > 0.0 => {
                        lower -= upper;
                        upper = 0.0;
                    }
                    _ => {}
                }
            }

            if self.auto_range_sticky_zero {
                upper = if upper <= 0.0 {
                    (upper + core.upper_margin * range).min(0.0)
                } else {
                    upper + core.upper_margin * range
                };
                lower = if lower >= 0.0 {
                    (lower - core.lower_margin * range).max(0.0)
                } else {
                    lower - core.lower_margin * range
                };
            } else {
                upper += core.upper_margin * range;
                lower -= core.lower_margin * range;
            }
        }

        let adjusted = Range::new(lower, upper)?;
        log::debug!("number axis auto-range: {r:?} -> {adjusted:?}");
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
        let Some(count) = self
            .calculate_visible_tick_count()
            .and_then(drawable_tick_count)
        else {
            return Ok(ticks);
        };
        let unit = &self.tick_unit;
        let size = unit.size();
        let range = self.core.range;
        let lowest = self.calculate_lowest_visible_tick_value();
        let spaces = minor_tick_spaces(&self.core, unit.minor_tick_count());
        let spaces_f = f64::from(spaces);
        let (anchor, rotation_anchor, angle) =
            major_label_placement(orient, self.core.vertical_tick_labels);

        for k in 1..spaces {
            let minor = lowest - size * f64::from(k) / spaces_f;
            if range.contains(minor) {
                ticks.push(Tick::minor(minor));
            }
        }
        let mut index = 0.0;
        for _ in 0..count {
            let current = lowest + index * size;
            let label = self.format_label(unit, current);
            ticks.push(Tick::major(current, label, anchor, rotation_anchor, angle));
            let next = lowest + (index + 1.0) * size;
            for k in 1..spaces {
                let minor = current + (next - current) * f64::from(k) / spaces_f;
                if range.contains(minor) {
                    ticks.push(Tick::minor(minor));
                }
            }
            index += 1.0;
        }
        log::trace!("number axis: {} ticks for {range:?}", ticks.len());
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use vizir_text::HeuristicTextMeasurer;

    use crate::{TextAnchor, TickUnits};

    const AREA: Rect = Rect::new(0.0, 0.0, 500.0, 300.0);

    fn majors(ticks: &[Tick]) -> Vec<&Tick> {
        ticks.iter().filter(|t| t.is_major()).collect()
    }

    fn auto_ranged(data: &[f64], configure: impl FnOnce(&mut NumberAxis)) -> Range {
        let mut axis = NumberAxis::new();
        configure(&mut axis);
        axis.configure(data).unwrap();
        axis.range()
    }

    #[test]
    fn defaults() {
        let axis = NumberAxis::new();
        assert_eq!(axis.range(), Range::UNIT);
        assert!(axis.is_auto_range());
        assert!(axis.is_auto_tick_unit_selection());
        assert!(axis.auto_range_includes_zero());
        assert!(axis.auto_range_sticky_zero());
        assert_eq!(axis.range_type(), RangeType::Full);
        assert_approx_eq!(f64, axis.tick_unit().size(), 1.0);
    }

    #[test]
    fn auto_range_includes_zero_with_sticky_margin() {
        let r = auto_ranged(&[3.0, 97.0], |_| {});
        assert_approx_eq!(f64, r.lower(), 0.0);
        assert_approx_eq!(f64, r.upper(), 101.85, epsilon = 1e-9);
    }

    #[test]
    fn sticky_zero_stops_the_lower_margin_at_zero_only_when_crossing() {
        let r = auto_ranged(&[2.0, 10.0], |a| a.set_auto_range_includes_zero(false));
        assert_approx_eq!(f64, r.lower(), 1.6, epsilon = 1e-9);
        assert_approx_eq!(f64, r.upper(), 10.4, epsilon = 1e-9);

        let r = auto_ranged(&[0.1, 10.0], |a| a.set_auto_range_includes_zero(false));
        assert_approx_eq!(f64, r.lower(), 0.0);

        let r = auto_ranged(&[0.1, 10.0], |a| {
            a.set_auto_range_includes_zero(false);
            a.set_auto_range_sticky_zero(false);
        });
        assert!(r.lower() < 0.0, "{r:?}");
    }

    #[test]
    fn range_type_clamps_the_data() {
        let r = auto_ranged(&[-5.0, 10.0], |a| {
            a.set_range_type(RangeType::Positive);
            a.set_auto_range_includes_zero(false);
        });
        assert_approx_eq!(f64, r.lower(), 0.0);
        assert_approx_eq!(f64, r.upper(), 10.5, epsilon = 1e-9);

        let r = auto_ranged(&[-5.0, 10.0], |a| a.set_range_type(RangeType::Negative));
        assert_approx_eq!(f64, r.upper(), 0.0);
        assert_approx_eq!(f64, r.lower(), -5.25, epsilon = 1e-9);
    }

    #[test]
    fn fixed_auto_range_follows_the_upper_bound() {
        let r = auto_ranged(&[0.0, 100.0], |a| a.set_fixed_auto_range(10.0));
        assert_eq!(r, Range::new(90.0, 100.0).unwrap());
    }

    #[test]
    fn single_value_expands_to_the_minimum_size() {
        let r = auto_ranged(&[5.0], |a| {
            a.set_auto_range_includes_zero(false);
            a.set_auto_range_minimum_size(2.0).unwrap();
        });
        assert_approx_eq!(f64, r.lower(), 4.0, epsilon = 1e-9);
        assert_approx_eq!(f64, r.upper(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn missing_data_uses_the_default_auto_range() {
        let r = auto_ranged(&[], |_| {});
        assert_approx_eq!(f64, r.lower(), 0.0);
        assert_approx_eq!(f64, r.upper(), 1.05, epsilon = 1e-9);
    }

    #[test]
    fn auto_range_does_not_notify() {
        let mut axis = NumberAxis::new();
        axis.configure(&[1.0, 2.0][..]).unwrap();
        assert_eq!(axis.revision(), 0);
        axis.set_tick_unit(NumberTickUnit::new(0.5));
        assert_eq!(axis.revision(), 1);
        assert!(!axis.is_auto_tick_unit_selection());
    }

    #[test]
    fn eleven_major_ticks_for_unit_ten() {
        let mut axis = NumberAxis::new();
        axis.set_range(Range::new(0.0, 100.0).unwrap()).unwrap();
        axis.set_tick_unit(NumberTickUnit::with_format(10.0, NumberFormat::integer(), 0));
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0].label, "0");
        assert_eq!(ticks[10].label, "100");
        assert_eq!(ticks[3].text_anchor, TextAnchor::TopCenter);
        for (i, t) in ticks.iter().enumerate() {
            assert_approx_eq!(f64, t.value, 10.0 * i as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn degenerate_units_produce_no_ticks() {
        let mut axis = NumberAxis::new();
        axis.set_range(Range::new(0.0, 100.0).unwrap()).unwrap();
        axis.set_tick_unit(NumberTickUnit::new(0.0));
        let m = HeuristicTextMeasurer;
        assert!(axis.refresh_ticks(&m, AREA, AxisOrient::Left).unwrap().is_empty());
        axis.set_tick_unit(NumberTickUnit::new(0.1));
        assert!(
            axis.refresh_ticks(&m, AREA, AxisOrient::Left).unwrap().is_empty(),
            "1001 ticks is over the maximum"
        );
    }

    #[test]
    fn minor_ticks_fill_the_range_only() {
        let mut axis = NumberAxis::new();
        axis.set_range(Range::new(-5.0, 100.0).unwrap()).unwrap();
        axis.set_tick_unit(NumberTickUnit::with_format(10.0, NumberFormat::integer(), 5));
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        assert_eq!(majors(&ticks).len(), 11);
        let minors: Vec<f64> = ticks.iter().filter(|t| !t.is_major()).map(|t| t.value).collect();
        assert_eq!(minors.len(), 2 + 10 * 4);
        assert!(minors.iter().all(|v| (-5.0..=100.0).contains(v)));
        assert!(ticks.iter().filter(|t| !t.is_major()).all(|t| t.label.is_empty()));

        axis.set_minor_tick_count(2);
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        // One minor at -5 before the first major, then one between each pair.
        assert_eq!(ticks.len() - majors(&ticks).len(), 11, "axis count wins");
    }

    #[test]
    fn format_override_replaces_unit_labels() {
        let mut axis = NumberAxis::new();
        axis.set_range(Range::new(0.0, 1.0).unwrap()).unwrap();
        axis.set_tick_unit(NumberTickUnit::new(0.5));
        axis.set_number_format_override(Some(NumberFormat::fixed(2)));
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Left)
            .unwrap();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0.00", "0.50", "1.00"]);
        assert_eq!(ticks[0].text_anchor, TextAnchor::CenterRight);
    }

    #[test]
    fn horizontal_selection_fits_labels() {
        let mut axis = NumberAxis::new();
        axis.set_range(Range::new(0.0, 100.0).unwrap()).unwrap();
        axis.set_auto_tick_unit_selection(true);
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        assert_approx_eq!(f64, axis.tick_unit().size(), 10.0);
        assert_eq!(majors(&ticks).len(), 11);
        assert!(axis.is_auto_tick_unit_selection());
    }

    #[test]
    fn vertical_selection_fits_line_height() {
        let mut axis = NumberAxis::new();
        axis.set_range(Range::new(0.0, 100.0).unwrap()).unwrap();
        axis.set_auto_tick_unit_selection(true);
        let revision = axis.revision();
        axis.refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Left)
            .unwrap();
        assert_approx_eq!(f64, axis.tick_unit().size(), 5.0);
        assert_eq!(axis.revision(), revision, "selection does not notify");
    }

    #[test]
    fn selection_uses_the_configured_source() {
        let table: TickUnits<NumberTickUnit> = [25.0, 50.0]
            .into_iter()
            .map(NumberTickUnit::new)
            .collect();
        let mut axis = NumberAxis::new().with_standard_tick_units(Arc::new(table));
        axis.set_range(Range::new(0.0, 100.0).unwrap()).unwrap();
        axis.set_auto_tick_unit_selection(true);
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        assert_approx_eq!(f64, axis.tick_unit().size(), 25.0);
        assert_eq!(ticks.len(), 5);
    }

    #[test]
    fn mapping_round_trips() {
        let mut axis = NumberAxis::new();
        axis.set_range(Range::new(-3.0, 17.0).unwrap()).unwrap();
        for inverted in [false, true] {
            axis.set_inverted(inverted);
            for orient in [AxisOrient::Top, AxisOrient::Bottom, AxisOrient::Left, AxisOrient::Right] {
                for v in [-3.0, 0.0, 4.25, 17.0] {
                    let px = axis.value_to_pixel(v, AREA, orient);
                    assert_approx_eq!(f64, axis.pixel_to_value(px, AREA, orient), v, epsilon = 1e-9);
                }
            }
        }
        axis.set_inverted(false);
        assert_approx_eq!(f64, axis.value_to_pixel(-3.0, AREA, AxisOrient::Left), 300.0);
    }

    #[test]
    fn extrapolation_falls_back_to_a_twentieth() {
        // 30px labels over 10px steps of 2 need steps of 6.
        assert_approx_eq!(f64, extrapolate(30.0, 10.0, 2.0, 100.0), 6.0);
        assert_approx_eq!(f64, extrapolate(30.0, 0.0, 2.0, 100.0), 5.0);
        assert_approx_eq!(f64, extrapolate(f64::INFINITY, 10.0, 2.0, 100.0), 5.0);

        // A zero-width area still selects a unit on the horizontal path.
        let mut axis = NumberAxis::new();
        axis.set_range(Range::new(0.0, 100.0).unwrap()).unwrap();
        let flat = Rect::new(10.0, 0.0, 10.0, 300.0);
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, flat, AxisOrient::Bottom)
            .unwrap();
        assert!(!ticks.is_empty(), "ticks are still generated");
        assert!(axis.tick_unit().size() >= 5.0, "got {}", axis.tick_unit().size());
    }
}
