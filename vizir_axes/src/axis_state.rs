// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layout axis state.

extern crate alloc;

use alloc::vec::Vec;

use crate::{AxisOrient, Tick};

/// State carried through one layout pass of an axis.
///
/// `cursor` is the distance from the plot area at which the next band (tick
/// marks, tick labels, the axis label) starts. Each band moves it outward.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisState {
    /// The current cursor position.
    pub cursor: f64,
    /// The ticks generated for this pass.
    pub ticks: Vec<Tick>,
    /// The largest tick label extent perpendicular to the axis.
    pub max: f64,
}

impl AxisState {
    /// Creates a state with the cursor at `cursor` and no ticks.
    pub fn new(cursor: f64) -> Self {
        Self {
            cursor,
            ticks: Vec::new(),
            max: 0.0,
        }
    }

    /// Moves the cursor up (towards smaller y).
    pub fn cursor_up(&mut self, units: f64) {
        self.cursor -= units;
    }

    /// Moves the cursor down (towards larger y).
    pub fn cursor_down(&mut self, units: f64) {
        self.cursor += units;
    }

    /// Moves the cursor left (towards smaller x).
    pub fn cursor_left(&mut self, units: f64) {
        self.cursor -= units;
    }

    /// Moves the cursor right (towards larger x).
    pub fn cursor_right(&mut self, units: f64) {
        self.cursor += units;
    }

    /// Moves the cursor away from the plot area for an axis on `orient`.
    pub fn move_cursor(&mut self, units: f64, orient: AxisOrient) {
        match orient {
            AxisOrient::Top => self.cursor_up(units),
            AxisOrient::Bottom => self.cursor_down(units),
            AxisOrient::Left => self.cursor_left(units),
            AxisOrient::Right => self.cursor_right(units),
        }
    }
}
