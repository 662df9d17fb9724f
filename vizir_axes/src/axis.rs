// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A closed set of value axes behind one type.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use vizir_text::TextMeasurer;

use crate::{
    AxisCore, AxisError, AxisOrient, AxisState, DateAxis, LogAxis, NumberAxis, PeriodAxis, Range,
    SymbolAxis, Tick, ValueAxis,
};

/// Any value axis.
///
/// Every [`ValueAxis`] method dispatches to the wrapped axis, including the
/// navigation and layout methods that individual kinds override.
#[derive(Clone, Debug)]
pub enum Axis {
    /// A linear number axis.
    Number(NumberAxis),
    /// A logarithmic axis.
    Log(LogAxis),
    /// A date axis.
    Date(DateAxis),
    /// A calendar period axis.
    Period(PeriodAxis),
    /// A symbol axis.
    Symbol(SymbolAxis),
}

macro_rules! dispatch {
    ($self:expr, $axis:ident => $body:expr) => {
        match $self {
            Axis::Number($axis) => $body,
            Axis::Log($axis) => $body,
            Axis::Date($axis) => $body,
            Axis::Period($axis) => $body,
            Axis::Symbol($axis) => $body,
        }
    };
}

impl ValueAxis for Axis {
    fn core(&self) -> &AxisCore {
        dispatch!(self, a => a.core())
    }

    fn core_mut(&mut self) -> &mut AxisCore {
        dispatch!(self, a => a.core_mut())
    }

    fn value_to_pixel(&self, value: f64, area: Rect, orient: AxisOrient) -> f64 {
        dispatch!(self, a => a.value_to_pixel(value, area, orient))
    }

    fn pixel_to_value(&self, pixel: f64, area: Rect, orient: AxisOrient) -> f64 {
        dispatch!(self, a => a.pixel_to_value(pixel, area, orient))
    }

    fn auto_adjust_range(&mut self, data: Option<Range>) -> Result<(), AxisError> {
        dispatch!(self, a => a.auto_adjust_range(data))
    }

    fn refresh_ticks(
        &mut self,
        measurer: &dyn TextMeasurer,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<Vec<Tick>, AxisError> {
        dispatch!(self, a => a.refresh_ticks(measurer, area, orient))
    }

    fn set_range_with(
        &mut self,
        range: Range,
        turn_off_auto_range: bool,
        notify: bool,
    ) -> Result<(), AxisError> {
        dispatch!(self, a => a.set_range_with(range, turn_off_auto_range, notify))
    }

    fn resize_range(&mut self, percent: f64) -> Result<(), AxisError> {
        dispatch!(self, a => a.resize_range(percent))
    }

    fn resize_range_about(&mut self, percent: f64, anchor: f64) -> Result<(), AxisError> {
        dispatch!(self, a => a.resize_range_about(percent, anchor))
    }

    fn resize_range2(&mut self, percent: f64, anchor: f64) -> Result<(), AxisError> {
        dispatch!(self, a => a.resize_range2(percent, anchor))
    }

    fn zoom_range(&mut self, lower_percent: f64, upper_percent: f64) -> Result<(), AxisError> {
        dispatch!(self, a => a.zoom_range(lower_percent, upper_percent))
    }

    fn pan(&mut self, percent: f64) -> Result<(), AxisError> {
        dispatch!(self, a => a.pan(percent))
    }

    fn length_to_pixel(&self, length: f64, area: Rect, orient: AxisOrient) -> f64 {
        dispatch!(self, a => a.length_to_pixel(length, area, orient))
    }

    fn layout_ticks(
        &mut self,
        measurer: &dyn TextMeasurer,
        cursor: f64,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<AxisState, AxisError> {
        dispatch!(self, a => a.layout_ticks(measurer, cursor, area, orient))
    }
}

impl From<NumberAxis> for Axis {
    fn from(axis: NumberAxis) -> Self {
        Self::Number(axis)
    }
}

impl From<LogAxis> for Axis {
    fn from(axis: LogAxis) -> Self {
        Self::Log(axis)
    }
}

impl From<DateAxis> for Axis {
    fn from(axis: DateAxis) -> Self {
        Self::Date(axis)
    }
}

impl From<PeriodAxis> for Axis {
    fn from(axis: PeriodAxis) -> Self {
        Self::Period(axis)
    }
}

impl From<SymbolAxis> for Axis {
    fn from(axis: SymbolAxis) -> Self {
        Self::Symbol(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use vizir_text::HeuristicTextMeasurer;

    const AREA: Rect = Rect::new(0.0, 0.0, 400.0, 200.0);

    #[test]
    fn dispatches_overridden_navigation() {
        let mut log = LogAxis::new();
        log.set_range(Range::new(1.0, 10_000.0).unwrap()).unwrap();
        let mut axis = Axis::from(log);
        axis.zoom_range(0.25, 0.75).unwrap();
        // Zooming happens in log space: 10^1 to 10^3.
        assert_approx_eq!(f64, axis.lower_bound(), 10.0, epsilon = 1e-9);
        assert_approx_eq!(f64, axis.upper_bound(), 1_000.0, epsilon = 1e-6);
        assert!(!axis.is_auto_range());
    }

    #[test]
    fn configure_reaches_the_wrapped_axis() {
        let mut axis = Axis::from(SymbolAxis::new(["a", "b", "c"]));
        axis.configure(&[5.0, 6.0][..]).unwrap();
        assert_approx_eq!(f64, axis.lower_bound(), -0.5);
        assert_approx_eq!(f64, axis.upper_bound(), 2.5);
        let ticks = axis
            .refresh_ticks(&HeuristicTextMeasurer, AREA, AxisOrient::Bottom)
            .unwrap();
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[2].label, "c");
    }

    #[test]
    fn mapping_matches_the_wrapped_axis() {
        let mut number = NumberAxis::new();
        number.set_range(Range::new(0.0, 10.0).unwrap()).unwrap();
        let axis = Axis::from(number.clone());
        for v in [0.0, 2.5, 10.0] {
            assert_approx_eq!(
                f64,
                axis.value_to_pixel(v, AREA, AxisOrient::Left),
                number.value_to_pixel(v, AREA, AxisOrient::Left)
            );
        }
        assert_eq!(axis.revision(), 1);
    }
}
