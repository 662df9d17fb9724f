// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the ticks each axis kind generates for some sample data.
//!
//! Set `RUST_LOG=debug` to see auto-range and tick unit selection, or
//! `RUST_LOG=trace` for tick counts.

use std::sync::Arc;

use kurbo::Rect;
use vizir_axes::{
    Axis, AxisError, AxisOrient, CategoryAxis, CategoryLabelPositions, DateAxis, LogAxis,
    NumberAxis, PeriodAxis, PeriodKind, Range, RegularTimePeriod, SegmentedTimeline, SymbolAxis,
    Tick, Tz, ValueAxis,
};
use vizir_text::HeuristicTextMeasurer;

const AREA: Rect = Rect::new(0.0, 0.0, 640.0, 360.0);

// 2024-03-04T00:00Z, a Monday.
const MARCH_4_2024: f64 = 1_709_510_400_000.0;
const DAY: f64 = 86_400_000.0;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AxisError> {
    let measurer = HeuristicTextMeasurer;

    let sales = [12.5, 48.0, 31.25, 97.0, 64.0];
    let temperatures = [-7.5, 3.0, 18.25, 29.0];
    let populations = [1_200.0, 56_000.0, 3.4e6, 8.9e7];
    let days: Vec<f64> = (0..30).map(|d| MARCH_4_2024 + f64::from(d) * DAY).collect();

    let mut zero_based = NumberAxis::new();
    let mut signed = NumberAxis::new().with_auto_range_includes_zero(false);
    let mut weekdays = DateAxis::new()
        .with_timeline(Arc::new(SegmentedTimeline::monday_through_friday(Tz::UTC)?));
    let mut axes: Vec<(&str, Axis, AxisOrient, &[f64])> = vec![
        ("sales", zero_based.clone().into(), AxisOrient::Left, &sales[..]),
        ("temperature", signed.clone().into(), AxisOrient::Bottom, &temperatures[..]),
        ("population", LogAxis::new().into(), AxisOrient::Left, &populations[..]),
        ("march", DateAxis::new().into(), AxisOrient::Bottom, &days[..]),
        ("march weekdays", weekdays.clone().into(), AxisOrient::Bottom, &days[..]),
        (
            "grade",
            SymbolAxis::new(["A", "B", "C", "D", "F"]).into(),
            AxisOrient::Left,
            &[][..],
        ),
    ];
    for (name, axis, orient, data) in &mut axes {
        axis.configure(*data)?;
        let state = axis.layout_ticks(&measurer, 0.0, AREA, *orient)?;
        print_ticks(name, axis.range(), &state.ticks);
        println!("  label extent {:.1}px", state.max);
    }

    // Navigation keeps each kind's own space: linear, log and timeline.
    zero_based.configure(&sales[..])?;
    zero_based.zoom_range(0.25, 0.75)?;
    signed.configure(&temperatures[..])?;
    signed.pan(0.5)?;
    weekdays.configure(&days[..])?;
    weekdays.zoom_range(0.0, 0.5)?;
    println!("zoomed sales {:?}", zero_based.range());
    println!("panned temperature {:?}", signed.range());
    println!("zoomed weekdays {:?}", weekdays.range());

    let first = RegularTimePeriod::containing(PeriodKind::Month, 1_704_067_200_000, Tz::UTC)?;
    let last = RegularTimePeriod::containing(PeriodKind::Month, 1_733_011_200_000, Tz::UTC)?;
    let mut period = PeriodAxis::new(first, last)?;
    period.set_range(Range::new(MARCH_4_2024, MARCH_4_2024 + 120.0 * DAY)?)?;
    let (state, bands) = period.layout_bands(&measurer, 0.0, AREA, AxisOrient::Bottom)?;
    print_ticks("periods", period.range(), &state.ticks);
    for (i, band) in bands.iter().enumerate() {
        let labels: Vec<&str> = band.labels.iter().map(|l| l.text.as_str()).collect();
        println!("  band {i}: {labels:?}, {} dividers", band.dividers.len());
    }

    let categories = ["North America", "Europe", "Asia Pacific", "Latin America"];
    let category = CategoryAxis::new()
        .with_label_positions(CategoryLabelPositions::UP_45)
        .with_maximum_category_label_lines(2);
    let (state, labels) =
        category.layout_labels(&categories, &measurer, 0.0, AREA, AxisOrient::Bottom);
    println!("regions: label extent {:.1}px", state.max);
    for label in &labels {
        println!(
            "  {:>14} at ({:.1}, {:.1}): {:?}",
            label.tick.category,
            label.anchor_point.x,
            label.anchor_point.y,
            label.tick.label.lines()
        );
    }
    Ok(())
}

fn print_ticks(name: &str, range: Range, ticks: &[Tick]) {
    let majors: Vec<&str> = ticks
        .iter()
        .filter(|t| t.is_major())
        .map(|t| t.label.as_str())
        .collect();
    let minors = ticks.len() - majors.len();
    println!(
        "{name}: [{}, {}], {} major, {minors} minor",
        range.lower(),
        range.upper(),
        majors.len()
    );
    println!("  {majors:?}");
}
