// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart axes: mapping data values to pixels and choosing ticks.
//!
//! An axis owns a [`Range`] of data values and maps it onto one edge of a
//! plot area. This crate provides:
//! - **Value axes** implementing [`ValueAxis`]: [`NumberAxis`], [`LogAxis`],
//!   [`DateAxis`], [`PeriodAxis`] and [`SymbolAxis`], plus the [`Axis`] enum
//!   over all of them.
//! - **Auto-ranging**: [`ValueAxis::configure`] fits the range to the data
//!   from a [`DataRangeProvider`], with margins and a minimum size.
//! - **Tick unit selection**: axes pick the smallest unit from a
//!   [`TickUnitSource`] whose labels fit between two ticks, measuring labels
//!   through [`vizir_text::TextMeasurer`].
//! - **Calendar support**: date ticks and period bands are computed in a
//!   [`Tz`] time zone, optionally on a [`SegmentedTimeline`] that skips
//!   excluded time such as weekends.
//! - **Category axes**: [`CategoryAxis`] lays out evenly spaced category slots
//!   and wraps their labels.
//!
//! Drawing is out of scope: axes produce [`Tick`]s, label positions and an
//! [`AxisState`] for a renderer to consume.
//!
//! Changes are tracked with a revision counter instead of listeners. Every
//! notifying setter bumps [`ValueAxis::revision`]; auto-ranging and automatic
//! tick selection do not.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod axis_state;
mod calendar;
mod category_axis;
mod date_axis;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod log_axis;
mod number_axis;
mod orient;
mod period;
mod period_axis;
mod range;
mod scale;
mod symbol_axis;
mod tick;
mod tick_unit;
mod tick_units;
mod timeline;
mod value_axis;

pub use axis::Axis;
pub use axis_state::AxisState;
pub use category_axis::{
    CategoryAnchor, CategoryAxis, CategoryLabel, CategoryLabelPosition, CategoryLabelPositions,
    CategoryLabelWidthType, CategoryTick, RectangleAnchor,
};
pub use date_axis::{DateAxis, DateTickMarkPosition};
pub use error::AxisError;
pub use format::{DateFormat, DecimalFormat, NumberFormat};
pub use log_axis::LogAxis;
pub use number_axis::{NumberAxis, RangeType};
pub use orient::AxisOrient;
pub use period::{PeriodKind, RegularTimePeriod};
pub use period_axis::{BandLabel, PeriodAxis, PeriodAxisLabelInfo, PeriodBand};
pub use range::Range;
pub use scale::LinearScale;
pub use symbol_axis::{GridBand, SymbolAxis};
pub use tick::{TextAnchor, Tick, TickType};
pub use tick_unit::{DateTickUnit, DateTickUnitType, NumberTickUnit, TickUnit};
pub use tick_units::{NumberTickUnitSource, TickUnitSource, TickUnits, standard_date_tick_units};
pub use timeline::{DAY_SEGMENT_SIZE, DefaultTimeline, SegmentedTimeline, Timeline};
pub use value_axis::{AxisCore, DataRangeProvider, MAXIMUM_TICK_COUNT, ValueAxis};

pub use chrono::Locale;
pub use chrono_tz::Tz;
