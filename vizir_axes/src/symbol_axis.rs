// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes that label integer positions with symbols.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use vizir_text::TextMeasurer;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::number_axis::drawable_tick_count;
use crate::tick::major_label_placement;
use crate::{AxisCore, AxisError, AxisOrient, NumberAxis, Range, Tick, TickUnit, ValueAxis};

/// The margin added on each side of the symbols, in data units.
const SYMBOL_MARGIN: f64 = 0.5;

/// A shaded band behind one symbol.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBand {
    /// The band, spanning the plot area across the axis.
    pub rect: Rect,
    /// Bands alternate between dark and light, starting dark.
    pub dark: bool,
}

/// A number axis whose tick at `i` is labelled with the `i`-th symbol.
///
/// Tick units are never selected automatically; the unit is 1 unless set.
#[derive(Clone, Debug)]
pub struct SymbolAxis {
    number: NumberAxis,
    symbols: Vec<String>,
    grid_bands_visible: bool,
}

impl SymbolAxis {
    /// Creates an axis over `symbols`.
    pub fn new<S: Into<String>>(symbols: impl IntoIterator<Item = S>) -> Self {
        let number = NumberAxis::new()
            .with_auto_tick_unit_selection(false)
            .with_auto_range_sticky_zero(false);
        Self {
            number,
            symbols: symbols.into_iter().map(Into::into).collect(),
            grid_bands_visible: true,
        }
    }

    /// The symbols, in value order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// The underlying number axis.
    pub fn number_axis(&self) -> &NumberAxis {
        &self.number
    }

    /// The underlying number axis, mutably.
    pub fn number_axis_mut(&mut self) -> &mut NumberAxis {
        &mut self.number
    }

    /// Whether grid bands are shown behind the symbols.
    pub fn is_grid_bands_visible(&self) -> bool {
        self.grid_bands_visible
    }

    /// Shows or hides grid bands.
    pub fn set_grid_bands_visible(&mut self, visible: bool) {
        if self.grid_bands_visible != visible {
            self.grid_bands_visible = visible;
            self.number.core_mut().notify();
        }
    }

    /// The symbol at `value`, or `""` when no symbol sits there.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the index is a non-negative whole number, checked against the symbol count"
    )]
    pub fn value_to_string(&self, value: f64) -> &str {
        let index = value.trunc();
        if !(index >= 0.0 && index < self.symbols.len() as f64) {
            return "";
        }
        &self.symbols[index as usize]
    }

    /// One band per major tick, covering half a unit either side of it.
    ///
    /// Returns nothing when grid bands are hidden.
    pub fn grid_bands(&self, ticks: &[Tick], area: Rect, orient: AxisOrient) -> Vec<GridBand> {
        if !self.grid_bands_visible {
            return Vec::new();
        }
        ticks
            .iter()
            .filter(|t| t.is_major())
            .enumerate()
            .map(|(i, t)| {
                let p0 = self.value_to_pixel(t.value - SYMBOL_MARGIN, area, orient);
                let p1 = self.value_to_pixel(t.value + SYMBOL_MARGIN, area, orient);
                let rect = if orient.is_top_or_bottom() {
                    Rect::new(p0.min(p1), area.y0, p0.max(p1), area.y1)
                } else {
                    Rect::new(area.x0, p0.min(p1), area.x1, p0.max(p1))
                };
                GridBand {
                    rect,
                    dark: i % 2 == 0,
                }
            })
            .collect()
    }

    fn label_length(&self, label: &str, measurer: &dyn TextMeasurer, orient: AxisOrient) -> f64 {
        let core = self.number.core();
        // The extent along the axis: width for upright labels on a horizontal
        // axis, height otherwise.
        if orient.is_top_or_bottom() != core.vertical_tick_labels {
            core.label_width(measurer, label)
        } else {
            core.label_line_height(measurer, label)
        }
    }
}

impl ValueAxis for SymbolAxis {
    fn core(&self) -> &AxisCore {
        self.number.core()
    }

    fn core_mut(&mut self) -> &mut AxisCore {
        self.number.core_mut()
    }

    fn value_to_pixel(&self, value: f64, area: Rect, orient: AxisOrient) -> f64 {
        self.number.value_to_pixel(value, area, orient)
    }

    fn pixel_to_value(&self, pixel: f64, area: Rect, orient: AxisOrient) -> f64 {
        self.number.pixel_to_value(pixel, area, orient)
    }

    /// Fits the range to the symbols, ignoring `data`.
    fn auto_adjust_range(&mut self, _data: Option<Range>) -> Result<(), AxisError> {
        let core = self.number.core();
        let mut upper = self.symbols.len() as f64 - 1.0;
        let mut lower = 0.0;
        let range = upper - lower;
        let min_range = core.auto_range_minimum_size;
        if range < min_range {
            let middle = (upper + lower) / 2.0;
            upper = middle + min_range / 2.0;
            lower = middle - min_range / 2.0;
        }
        let include_zero = self.number.auto_range_includes_zero();
        let sticky_zero = self.number.auto_range_sticky_zero();
        match (include_zero, sticky_zero) {
            (true, true) => {
                upper = if upper <= 0.0 { 0.0 } else { upper + SYMBOL_MARGIN };
                lower = if lower >= 0.0 { 0.0 } else { lower - SYMBOL_MARGIN };
            }
            (true, false) => {
                upper = (upper + SYMBOL_MARGIN).max(0.0);
                lower = (lower - SYMBOL_MARGIN).min(0.0);
            }
            (false, true) => {
                upper = if upper <= 0.0 {
                    (upper + SYMBOL_MARGIN).min(0.0)
                } else {
                    upper + SYMBOL_MARGIN
                };
                lower = if lower >= 0.0 {
                    (lower - SYMBOL_MARGIN).max(0.0)
                } else {
                    lower - SYMBOL_MARGIN
                };
            }
            (false, false) => {
                upper += SYMBOL_MARGIN;
                lower -= SYMBOL_MARGIN;
            }
        }
        let adjusted = Range::new(lower, upper)?;
        log::debug!(
            "symbol axis auto-range: {} symbols -> {adjusted:?}",
            self.symbols.len()
        );
        self.set_range_with(adjusted, false, false)
    }

    /// Labels each tick with its symbol, blanking labels that would overlap
    /// the previous drawn one.
    fn refresh_ticks(
        &mut self,
        measurer: &dyn TextMeasurer,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError> {
        let mut ticks = Vec::new();
        let Some(count) = self
            .number
            .calculate_visible_tick_count()
            .and_then(drawable_tick_count)
        else {
            return Ok(ticks);
        };
        let size = self.number.tick_unit().size();
        let lowest = self.number.calculate_lowest_visible_tick_value();
        let (anchor, rotation_anchor, angle) =
            major_label_placement(orient, self.number.core().vertical_tick_labels);

        let mut previous: Option<(f64, f64)> = None;
        let mut index = 0.0;
        for _ in 0..count {
            let current = lowest + index * size;
            index += 1.0;
            let pos = self.value_to_pixel(current, area, orient);
            let mut label = match self.number.number_format_override() {
                Some(format) => format.format(current),
                None => String::from(self.value_to_string(current)),
            };
            let length = self.label_length(&label, measurer, orient);
            let overlapping = previous.is_some_and(|(prev_pos, prev_length)| {
                (pos - prev_pos).abs() < (prev_length + length) / 2.0
            });
            if overlapping {
                label.clear();
            } else {
                previous = Some((pos, length));
            }
            ticks.push(Tick::major(current, label, anchor, rotation_anchor, angle));
        }
        log::trace!("symbol axis: {} ticks", ticks.len());
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use alloc::vec;
    use vizir_text::HeuristicTextMeasurer;

    use crate::{NumberFormat, TextAnchor};

    const AREA: Rect = Rect::new(0.0, 0.0, 500.0, 300.0);

    fn configured(symbols: Vec<String>) -> SymbolAxis {
        let mut axis = SymbolAxis::new(symbols);
        axis.configure(&None::<Range>).unwrap();
        axis
    }

    fn labels(ticks: &[Tick]) -> Vec<&str> {
        ticks.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn defaults() {
        let axis = SymbolAxis::new(["a", "b"]);
        assert!(!axis.is_auto_tick_unit_selection());
        assert!(!axis.number_axis().auto_range_sticky_zero());
        assert!(axis.is_grid_bands_visible());
        assert_eq!(axis.revision(), 0);
    }

    #[test]
    fn auto_range_pads_the_symbols_by_half_a_unit() {
        let mut axis = SymbolAxis::new(["A", "B", "C", "D"]);
        axis.configure(&Range::new(100.0, 200.0).unwrap()).unwrap();
        assert_approx_eq!(f64, axis.lower_bound(), -0.5);
        assert_approx_eq!(f64, axis.upper_bound(), 3.5);
        assert_eq!(axis.revision(), 0);
    }

    #[test]
    fn one_symbol_expands_to_the_minimum_size() {
        let mut axis = SymbolAxis::new(["only"]);
        axis.number_axis_mut().set_auto_range_includes_zero(false);
        axis.set_auto_range_minimum_size(2.0).unwrap();
        axis.configure(&None::<Range>).unwrap();
        assert_approx_eq!(f64, axis.lower_bound(), -1.5);
        assert_approx_eq!(f64, axis.upper_bound(), 1.5);
    }

    #[test]
    fn sticky_zero_stops_the_margin_at_zero() {
        let mut axis = SymbolAxis::new(["A", "B", "C"]);
        axis.number_axis_mut().set_auto_range_sticky_zero(true);
        axis.configure(&None::<Range>).unwrap();
        assert_approx_eq!(f64, axis.lower_bound(), 0.0);
        assert_approx_eq!(f64, axis.upper_bound(), 2.5);
    }

    #[test]
    fn ticks_carry_the_symbols() {
        let mut axis = configured(["A", "B", "C", "D"].map(String::from).to_vec());
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        assert_eq!(labels(&ticks), ["A", "B", "C", "D"]);
        assert!(ticks.iter().all(Tick::is_major));
        assert_eq!(ticks[0].text_anchor, TextAnchor::TopCenter);
    }

    #[test]
    fn values_without_a_symbol_are_blank() {
        let axis = SymbolAxis::new(["A", "B"]);
        assert_eq!(axis.value_to_string(1.0), "B");
        assert_eq!(axis.value_to_string(1.7), "B");
        assert_eq!(axis.value_to_string(-0.5), "A");
        assert_eq!(axis.value_to_string(-1.0), "");
        assert_eq!(axis.value_to_string(2.0), "");
        assert_eq!(axis.value_to_string(f64::NAN), "");
    }

    #[test]
    fn overlapping_labels_are_blanked() {
        let symbols: Vec<String> = (0..50).map(|i| alloc::format!("Symbol {i:02}")).collect();
        let mut axis = configured(symbols);
        let m = HeuristicTextMeasurer;
        // 10px per symbol, 54px labels: every sixth label is drawn.
        let ticks = axis.refresh_ticks(&m, AREA, AxisOrient::Bottom).unwrap();
        assert_eq!(ticks.len(), 50);
        let drawn: Vec<usize> = ticks
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.label.is_empty())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(drawn, [0, 6, 12, 18, 24, 30, 36, 42, 48]);

        // 6px per symbol, 10px line height: every other label.
        let ticks = axis.refresh_ticks(&m, AREA, AxisOrient::Left).unwrap();
        assert_eq!(ticks.iter().filter(|t| !t.label.is_empty()).count(), 25);
    }

    #[test]
    fn format_override_replaces_symbols() {
        let mut axis = configured(["A", "B"].map(String::from).to_vec());
        axis.number_axis_mut()
            .set_number_format_override(Some(NumberFormat::integer()));
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Left)
            .unwrap();
        assert_eq!(labels(&ticks), ["0", "1"]);
    }

    #[test]
    fn grid_bands_alternate() {
        let mut axis = configured(["A", "B", "C", "D"].map(String::from).to_vec());
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        let bands = axis.grid_bands(&ticks, AREA, AxisOrient::Bottom);
        assert_eq!(bands.len(), 4);
        assert!(bands[0].dark && !bands[1].dark && bands[2].dark);
        assert_approx_eq!(f64, bands[0].rect.x0, 0.0, epsilon = 1e-9);
        assert_approx_eq!(f64, bands[0].rect.x1, 125.0, epsilon = 1e-9);
        assert_approx_eq!(f64, bands[3].rect.height(), 300.0);

        let left = axis.grid_bands(&ticks, AREA, AxisOrient::Left);
        assert_approx_eq!(f64, left[0].rect.y1, 300.0, epsilon = 1e-9);
        assert_approx_eq!(f64, left[0].rect.width(), 500.0);

        axis.set_grid_bands_visible(false);
        assert!(axis.grid_bands(&ticks, AREA, AxisOrient::Bottom).is_empty());
    }

    #[test]
    fn mapping_round_trips_on_every_edge() {
        let mut axis = configured(vec!["low".into(), "mid".into(), "high".into()]);
        for inverted in [false, true] {
            axis.set_inverted(inverted);
            for orient in [AxisOrient::Top, AxisOrient::Bottom, AxisOrient::Left, AxisOrient::Right] {
                for v in [-0.5, 0.0, 1.0, 1.75, 2.5] {
                    let px = axis.value_to_pixel(v, AREA, orient);
                    assert_approx_eq!(f64, axis.pixel_to_value(px, AREA, orient), v, epsilon = 1e-9);
                }
            }
        }
        axis.set_inverted(true);
        assert_approx_eq!(f64, axis.value_to_pixel(-0.5, AREA, AxisOrient::Left), 0.0);
    }
}
