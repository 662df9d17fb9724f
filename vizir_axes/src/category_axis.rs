// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category axes: evenly spaced slots, one per category.
//!
//! A category axis does not map values. The span of the plot area, minus the
//! lower and upper margins, is divided into `n` equal categories separated by
//! `n - 1` equal gaps (together the category margin). Labels are word-wrapped
//! [`TextBlock`]s placed according to [`CategoryLabelPositions`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use hashbrown::HashMap;
use kurbo::{Insets, Point, Rect};
use vizir_text::{TextBlock, TextMeasurer, TextStyle};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{AxisError, AxisOrient, AxisState, TextAnchor};

/// A point on a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RectangleAnchor {
    /// The centre.
    Center,
    /// The top left corner.
    TopLeft,
    /// The middle of the top edge.
    Top,
    /// The top right corner.
    TopRight,
    /// The middle of the left edge.
    Left,
    /// The middle of the right edge.
    Right,
    /// The bottom left corner.
    BottomLeft,
    /// The middle of the bottom edge.
    Bottom,
    /// The bottom right corner.
    BottomRight,
}

impl RectangleAnchor {
    /// The anchor's position on `rect`.
    pub fn anchor_point(self, rect: Rect) -> Point {
        let center = rect.center();
        let (x0, y0, x1, y1) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
        match self {
            Self::Center => center,
            Self::TopLeft => Point::new(x0, y0),
            Self::Top => Point::new(center.x, y0),
            Self::TopRight => Point::new(x1, y0),
            Self::Left => Point::new(x0, center.y),
            Self::Right => Point::new(x1, center.y),
            Self::BottomLeft => Point::new(x0, y1),
            Self::Bottom => Point::new(center.x, y1),
            Self::BottomRight => Point::new(x1, y1),
        }
    }
}

/// Which point of a category slot a coordinate refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryAnchor {
    /// The start of the slot.
    Start,
    /// The middle of the slot.
    Middle,
    /// The end of the slot.
    End,
}

/// What the label wrap width is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryLabelWidthType {
    /// The size of one category.
    Category,
    /// The extent of the plot area across the axis.
    Range,
}

/// How labels are placed for an axis on one edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryLabelPosition {
    /// The point of the label area the label is attached to.
    pub category_anchor: RectangleAnchor,
    /// The point of the label attached to `category_anchor`.
    pub label_anchor: TextAnchor,
    /// The point the label rotates about.
    pub rotation_anchor: TextAnchor,
    /// Rotation in radians.
    pub angle: f64,
    /// What the wrap width is measured against.
    pub width_type: CategoryLabelWidthType,
    /// The wrap width as a fraction of the `width_type` extent.
    pub width_ratio: f64,
}

impl CategoryLabelPosition {
    /// An unrotated position wrapping to 95% of the category size.
    pub const fn new(category_anchor: RectangleAnchor, label_anchor: TextAnchor) -> Self {
        Self {
            category_anchor,
            label_anchor,
            rotation_anchor: TextAnchor::Center,
            angle: 0.0,
            width_type: CategoryLabelWidthType::Category,
            width_ratio: 0.95,
        }
    }

    /// Returns the position rotated by `angle` about `rotation_anchor`.
    #[must_use]
    pub const fn with_rotation(mut self, rotation_anchor: TextAnchor, angle: f64) -> Self {
        self.rotation_anchor = rotation_anchor;
        self.angle = angle;
        self
    }

    /// Returns the position wrapping to `ratio` of the `width_type` extent.
    #[must_use]
    pub const fn with_width(mut self, width_type: CategoryLabelWidthType, ratio: f64) -> Self {
        self.width_type = width_type;
        self.width_ratio = ratio;
        self
    }
}

impl Default for CategoryLabelPosition {
    fn default() -> Self {
        Self::new(RectangleAnchor::Center, TextAnchor::BottomCenter)
    }
}

/// Label positions for each of the four edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CategoryLabelPositions {
    /// For an axis above the plot.
    pub top: CategoryLabelPosition,
    /// For an axis below the plot.
    pub bottom: CategoryLabelPosition,
    /// For an axis left of the plot.
    pub left: CategoryLabelPosition,
    /// For an axis right of the plot.
    pub right: CategoryLabelPosition,
}

impl CategoryLabelPositions {
    /// Upright labels hanging off the axis.
    pub const STANDARD: Self = Self {
        top: CategoryLabelPosition::new(RectangleAnchor::Bottom, TextAnchor::BottomCenter),
        bottom: CategoryLabelPosition::new(RectangleAnchor::Top, TextAnchor::TopCenter),
        left: CategoryLabelPosition::new(RectangleAnchor::Right, TextAnchor::CenterRight)
            .with_width(CategoryLabelWidthType::Range, 0.30),
        right: CategoryLabelPosition::new(RectangleAnchor::Left, TextAnchor::CenterLeft)
            .with_width(CategoryLabelWidthType::Range, 0.30),
    };

    /// Labels reading upward, rotated a quarter turn.
    pub const UP_90: Self = Self {
        top: CategoryLabelPosition::new(RectangleAnchor::Bottom, TextAnchor::CenterLeft)
            .with_rotation(TextAnchor::CenterLeft, -FRAC_PI_2)
            .with_width(CategoryLabelWidthType::Range, 0.30),
        bottom: CategoryLabelPosition::new(RectangleAnchor::Top, TextAnchor::CenterRight)
            .with_rotation(TextAnchor::CenterRight, -FRAC_PI_2)
            .with_width(CategoryLabelWidthType::Range, 0.30),
        left: CategoryLabelPosition::new(RectangleAnchor::Right, TextAnchor::BottomCenter)
            .with_rotation(TextAnchor::BottomCenter, -FRAC_PI_2)
            .with_width(CategoryLabelWidthType::Category, 0.90),
        right: CategoryLabelPosition::new(RectangleAnchor::Left, TextAnchor::TopCenter)
            .with_rotation(TextAnchor::TopCenter, -FRAC_PI_2)
            .with_width(CategoryLabelWidthType::Category, 0.90),
    };

    /// Labels reading downward, rotated a quarter turn.
    pub const DOWN_90: Self = Self {
        top: CategoryLabelPosition::new(RectangleAnchor::Bottom, TextAnchor::CenterRight)
            .with_rotation(TextAnchor::CenterRight, FRAC_PI_2)
            .with_width(CategoryLabelWidthType::Range, 0.30),
        bottom: CategoryLabelPosition::new(RectangleAnchor::Top, TextAnchor::CenterLeft)
            .with_rotation(TextAnchor::CenterLeft, FRAC_PI_2)
            .with_width(CategoryLabelWidthType::Range, 0.30),
        left: CategoryLabelPosition::new(RectangleAnchor::Right, TextAnchor::TopCenter)
            .with_rotation(TextAnchor::TopCenter, FRAC_PI_2)
            .with_width(CategoryLabelWidthType::Category, 0.90),
        right: CategoryLabelPosition::new(RectangleAnchor::Left, TextAnchor::BottomCenter)
            .with_rotation(TextAnchor::BottomCenter, FRAC_PI_2)
            .with_width(CategoryLabelWidthType::Category, 0.90),
    };

    /// Labels rotated an eighth of a turn upward.
    pub const UP_45: Self = Self::up_rotation(FRAC_PI_4);

    /// Labels rotated an eighth of a turn downward.
    pub const DOWN_45: Self = Self::down_rotation(FRAC_PI_4);

    /// Labels rotated upward (counter-clockwise) by `angle` radians.
    pub const fn up_rotation(angle: f64) -> Self {
        let range = CategoryLabelWidthType::Range;
        Self {
            top: CategoryLabelPosition::new(RectangleAnchor::Bottom, TextAnchor::BottomLeft)
                .with_rotation(TextAnchor::BottomLeft, -angle)
                .with_width(range, 0.50),
            bottom: CategoryLabelPosition::new(RectangleAnchor::Top, TextAnchor::TopRight)
                .with_rotation(TextAnchor::TopRight, -angle)
                .with_width(range, 0.50),
            left: CategoryLabelPosition::new(RectangleAnchor::Right, TextAnchor::BottomRight)
                .with_rotation(TextAnchor::BottomRight, -angle)
                .with_width(range, 0.50),
            right: CategoryLabelPosition::new(RectangleAnchor::Left, TextAnchor::TopLeft)
                .with_rotation(TextAnchor::TopLeft, -angle)
                .with_width(range, 0.50),
        }
    }

    /// Labels rotated downward (clockwise) by `angle` radians.
    pub const fn down_rotation(angle: f64) -> Self {
        let range = CategoryLabelWidthType::Range;
        Self {
            top: CategoryLabelPosition::new(RectangleAnchor::Bottom, TextAnchor::BottomRight)
                .with_rotation(TextAnchor::BottomRight, angle)
                .with_width(range, 0.50),
            bottom: CategoryLabelPosition::new(RectangleAnchor::Top, TextAnchor::TopLeft)
                .with_rotation(TextAnchor::TopLeft, angle)
                .with_width(range, 0.50),
            left: CategoryLabelPosition::new(RectangleAnchor::Right, TextAnchor::TopRight)
                .with_rotation(TextAnchor::TopRight, angle)
                .with_width(range, 0.50),
            right: CategoryLabelPosition::new(RectangleAnchor::Left, TextAnchor::BottomLeft)
                .with_rotation(TextAnchor::BottomLeft, angle)
                .with_width(range, 0.50),
        }
    }

    /// The position for an axis on `orient`.
    pub fn label_position(&self, orient: AxisOrient) -> CategoryLabelPosition {
        match orient {
            AxisOrient::Top => self.top,
            AxisOrient::Bottom => self.bottom,
            AxisOrient::Left => self.left,
            AxisOrient::Right => self.right,
        }
    }
}

/// The label of one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTick {
    /// The category key.
    pub category: String,
    /// The wrapped label.
    pub label: TextBlock,
    /// The point of the label attached to its anchor point.
    pub label_anchor: TextAnchor,
    /// The point the label rotates about.
    pub rotation_anchor: TextAnchor,
    /// Rotation in radians.
    pub angle: f64,
}

/// A category tick placed by [`CategoryAxis::layout_labels`].
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryLabel {
    /// The tick.
    pub tick: CategoryTick,
    /// Where the tick's `label_anchor` sits.
    pub anchor_point: Point,
}

/// An axis dividing one edge of the plot into category slots.
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    lower_margin: f64,
    upper_margin: f64,
    category_margin: f64,
    maximum_category_label_lines: usize,
    maximum_category_label_width_ratio: f64,
    category_label_position_offset: f64,
    category_label_positions: CategoryLabelPositions,
    tick_label_style: TextStyle,
    tick_label_insets: Insets,
    tick_label_styles: HashMap<String, TextStyle>,
    category_label_tool_tips: HashMap<String, String>,
    category_label_urls: HashMap<String, String>,
    revision: u64,
}

impl CategoryAxis {
    /// The default lower and upper margin, as a fraction of the span.
    pub const DEFAULT_AXIS_MARGIN: f64 = 0.05;
    /// The default total gap between categories, as a fraction of the span.
    pub const DEFAULT_CATEGORY_MARGIN: f64 = 0.20;

    /// Creates an axis with standard label positions and one label line.
    pub fn new() -> Self {
        Self {
            lower_margin: Self::DEFAULT_AXIS_MARGIN,
            upper_margin: Self::DEFAULT_AXIS_MARGIN,
            category_margin: Self::DEFAULT_CATEGORY_MARGIN,
            maximum_category_label_lines: 1,
            maximum_category_label_width_ratio: 0.0,
            category_label_position_offset: 4.0,
            category_label_positions: CategoryLabelPositions::STANDARD,
            tick_label_style: TextStyle::default(),
            tick_label_insets: Insets::new(4.0, 2.0, 4.0, 2.0),
            tick_label_styles: HashMap::new(),
            category_label_tool_tips: HashMap::new(),
            category_label_urls: HashMap::new(),
            revision: 0,
        }
    }

    /// Returns the axis with `positions` for its labels.
    #[must_use]
    pub fn with_label_positions(mut self, positions: CategoryLabelPositions) -> Self {
        self.category_label_positions = positions;
        self
    }

    /// Returns the axis wrapping labels to at most `lines` lines.
    #[must_use]
    pub fn with_maximum_category_label_lines(mut self, lines: usize) -> Self {
        self.maximum_category_label_lines = lines;
        self
    }

    /// The number of notifying changes made so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn notify(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// The margin before the first category, as a fraction of the span.
    pub fn lower_margin(&self) -> f64 {
        self.lower_margin
    }

    /// Sets the margin before the first category.
    pub fn set_lower_margin(&mut self, margin: f64) {
        self.lower_margin = margin;
        self.notify();
    }

    /// The margin after the last category, as a fraction of the span.
    pub fn upper_margin(&self) -> f64 {
        self.upper_margin
    }

    /// Sets the margin after the last category.
    pub fn set_upper_margin(&mut self, margin: f64) {
        self.upper_margin = margin;
        self.notify();
    }

    /// The total gap between categories, as a fraction of the span.
    pub fn category_margin(&self) -> f64 {
        self.category_margin
    }

    /// Sets the total gap between categories.
    pub fn set_category_margin(&mut self, margin: f64) {
        self.category_margin = margin;
        self.notify();
    }

    /// The most lines a label wraps to.
    pub fn maximum_category_label_lines(&self) -> usize {
        self.maximum_category_label_lines
    }

    /// Sets the most lines a label wraps to.
    pub fn set_maximum_category_label_lines(&mut self, lines: usize) {
        self.maximum_category_label_lines = lines;
        self.notify();
    }

    /// The wrap width ratio, or `0.0` to use the label position's.
    pub fn maximum_category_label_width_ratio(&self) -> f64 {
        self.maximum_category_label_width_ratio
    }

    /// Overrides the label position's wrap width ratio; `0.0` clears it.
    pub fn set_maximum_category_label_width_ratio(&mut self, ratio: f64) {
        self.maximum_category_label_width_ratio = ratio;
        self.notify();
    }

    /// The gap between the axis line and the labels.
    pub fn category_label_position_offset(&self) -> f64 {
        self.category_label_position_offset
    }

    /// Sets the gap between the axis line and the labels.
    pub fn set_category_label_position_offset(&mut self, offset: f64) {
        self.category_label_position_offset = offset;
        self.notify();
    }

    /// The label positions.
    pub fn category_label_positions(&self) -> &CategoryLabelPositions {
        &self.category_label_positions
    }

    /// Sets the label positions.
    pub fn set_category_label_positions(&mut self, positions: CategoryLabelPositions) {
        self.category_label_positions = positions;
        self.notify();
    }

    /// The padding around each label.
    pub fn tick_label_insets(&self) -> Insets {
        self.tick_label_insets
    }

    /// Sets the padding around each label.
    pub fn set_tick_label_insets(&mut self, insets: Insets) {
        self.tick_label_insets = insets;
        self.notify();
    }

    /// The style for `category`'s label.
    pub fn tick_label_style(&self, category: &str) -> &TextStyle {
        self.tick_label_styles
            .get(category)
            .unwrap_or(&self.tick_label_style)
    }

    /// Sets the style for labels without their own.
    pub fn set_default_tick_label_style(&mut self, style: TextStyle) {
        self.tick_label_style = style;
        self.notify();
    }

    /// Sets or clears the style for one category's label.
    pub fn set_tick_label_style(&mut self, category: &str, style: Option<TextStyle>) {
        match style {
            Some(style) => {
                self.tick_label_styles.insert(String::from(category), style);
            }
            None => {
                self.tick_label_styles.remove(category);
            }
        }
        self.notify();
    }

    /// Attaches a tooltip to `category`'s label.
    pub fn add_category_label_tool_tip(&mut self, category: &str, tool_tip: impl Into<String>) {
        self.category_label_tool_tips
            .insert(String::from(category), tool_tip.into());
        self.notify();
    }

    /// The tooltip for `category`'s label, if any.
    pub fn category_label_tool_tip(&self, category: &str) -> Option<&str> {
        self.category_label_tool_tips.get(category).map(String::as_str)
    }

    /// Removes `category`'s tooltip.
    pub fn remove_category_label_tool_tip(&mut self, category: &str) {
        if self.category_label_tool_tips.remove(category).is_some() {
            self.notify();
        }
    }

    /// Removes every tooltip.
    pub fn clear_category_label_tool_tips(&mut self) {
        self.category_label_tool_tips.clear();
        self.notify();
    }

    /// Attaches a URL to `category`'s label.
    pub fn add_category_label_url(&mut self, category: &str, url: impl Into<String>) {
        self.category_label_urls
            .insert(String::from(category), url.into());
        self.notify();
    }

    /// The URL for `category`'s label, if any.
    pub fn category_label_url(&self, category: &str) -> Option<&str> {
        self.category_label_urls.get(category).map(String::as_str)
    }

    /// Removes `category`'s URL.
    pub fn remove_category_label_url(&mut self, category: &str) {
        if self.category_label_urls.remove(category).is_some() {
            self.notify();
        }
    }

    /// Removes every URL.
    pub fn clear_category_label_urls(&mut self) {
        self.category_label_urls.clear();
        self.notify();
    }

    /// The span the categories share: the area's width on top and bottom
    /// edges, its height on left and right.
    fn available(area: Rect, orient: AxisOrient) -> f64 {
        if orient.is_top_or_bottom() {
            area.width()
        } else {
            area.height()
        }
    }

    /// The size of one category slot.
    pub fn calculate_category_size(&self, count: usize, area: Rect, orient: AxisOrient) -> f64 {
        let available = Self::available(area, orient);
        if count > 1 {
            available * (1.0 - self.lower_margin - self.upper_margin - self.category_margin)
                / count as f64
        } else {
            available * (1.0 - self.lower_margin - self.upper_margin)
        }
    }

    /// The gap between two adjacent category slots.
    pub fn calculate_category_gap(&self, count: usize, area: Rect, orient: AxisOrient) -> f64 {
        if count > 1 {
            Self::available(area, orient) * self.category_margin / (count - 1) as f64
        } else {
            0.0
        }
    }

    /// Where category `index` of `count` starts.
    ///
    /// Categories run left to right on top and bottom edges and top to bottom
    /// on left and right edges.
    pub fn category_start(
        &self,
        index: usize,
        count: usize,
        area: Rect,
        orient: AxisOrient,
    ) -> f64 {
        let origin = if orient.is_top_or_bottom() {
            area.min_x() + area.width() * self.lower_margin
        } else {
            area.min_y() + area.height() * self.lower_margin
        };
        let size = self.calculate_category_size(count, area, orient);
        let gap = self.calculate_category_gap(count, area, orient);
        origin + index as f64 * (size + gap)
    }

    /// The centre of category `index` of `count`.
    pub fn category_middle(
        &self,
        index: usize,
        count: usize,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<f64, AxisError> {
        if index >= count {
            return Err(AxisError::InvalidCategoryIndex { index, count });
        }
        Ok(self.category_start(index, count, area, orient)
            + self.calculate_category_size(count, area, orient) / 2.0)
    }

    /// Where category `index` of `count` ends.
    pub fn category_end(&self, index: usize, count: usize, area: Rect, orient: AxisOrient) -> f64 {
        self.category_start(index, count, area, orient)
            + self.calculate_category_size(count, area, orient)
    }

    /// The coordinate of `anchor` within category `index` of `count`.
    pub fn category_coordinate(
        &self,
        anchor: CategoryAnchor,
        index: usize,
        count: usize,
        area: Rect,
        orient: AxisOrient,
    ) -> Result<f64, AxisError> {
        match anchor {
            CategoryAnchor::Start => Ok(self.category_start(index, count, area, orient)),
            CategoryAnchor::Middle => self.category_middle(index, count, area, orient),
            CategoryAnchor::End => Ok(self.category_end(index, count, area, orient)),
        }
    }

    /// The centre of series `series` of `series_count` within a category.
    ///
    /// The series share the category's size, `item_margin` of it being the
    /// total gap between them.
    pub fn category_series_middle(
        &self,
        index: usize,
        count: usize,
        series: usize,
        series_count: usize,
        item_margin: f64,
        area: Rect,
        orient: AxisOrient,
    ) -> f64 {
        let start = self.category_start(index, count, area, orient);
        let width = self.category_end(index, count, area, orient) - start;
        if series_count <= 1 {
            start + width / 2.0
        } else {
            let gap = width * item_margin / (series_count - 1) as f64;
            let ww = width * (1.0 - item_margin) / series_count as f64;
            start + series as f64 * (ww + gap) + ww / 2.0
        }
    }

    /// Wraps one label per category and records the largest label extent
    /// across the axis, including insets, in `state.max`.
    ///
    /// An area with no height, or a negative width, gives no ticks.
    pub fn refresh_ticks<S: AsRef<str>>(
        &self,
        categories: &[S],
        measurer: &dyn TextMeasurer,
        state: &mut AxisState,
        area: Rect,
        orient: AxisOrient,
    ) -> Vec<CategoryTick> {
        let mut ticks = Vec::new();
        if area.height() <= 0.0 || area.width() < 0.0 {
            return ticks;
        }
        let position = self.category_label_positions.label_position(orient);
        let ratio = if self.maximum_category_label_width_ratio > 0.0 {
            self.maximum_category_label_width_ratio
        } else {
            position.width_ratio
        };
        let extent = match position.width_type {
            CategoryLabelWidthType::Category => {
                self.calculate_category_size(categories.len(), area, orient)
            }
            CategoryLabelWidthType::Range if orient.is_left_or_right() => area.width(),
            CategoryLabelWidthType::Range => area.height(),
        };
        let (sin, cos) = (position.angle.sin().abs(), position.angle.cos().abs());
        let insets = self.tick_label_insets;
        let mut max = 0.0_f64;
        for category in categories {
            let category = category.as_ref();
            let label = TextBlock::wrap(
                category,
                self.tick_label_style(category).clone(),
                extent * ratio,
                self.maximum_category_label_lines,
                measurer,
            );
            let (w, h) = label.size(measurer);
            // The bounding box of the label rotated by the position's angle.
            let across = if orient.is_top_or_bottom() {
                w * sin + h * cos + insets.y_value()
            } else {
                w * cos + h * sin + insets.x_value()
            };
            max = max.max(across);
            ticks.push(CategoryTick {
                category: String::from(category),
                label,
                label_anchor: position.label_anchor,
                rotation_anchor: position.rotation_anchor,
                angle: position.angle,
            });
        }
        state.max = max;
        log::trace!("category axis: {} labels, extent {max}", ticks.len());
        ticks
    }

    /// Refreshes the labels, anchors each one in its category slot, and moves
    /// the cursor past them.
    pub fn layout_labels<S: AsRef<str>>(
        &self,
        categories: &[S],
        measurer: &dyn TextMeasurer,
        cursor: f64,
        area: Rect,
        orient: AxisOrient,
    ) -> (AxisState, Vec<CategoryLabel>) {
        let mut state = AxisState::new(cursor);
        let ticks = self.refresh_ticks(categories, measurer, &mut state, area, orient);
        let position = self.category_label_positions.label_position(orient);
        let offset = self.category_label_position_offset;
        let count = ticks.len();
        let labels = ticks
            .into_iter()
            .enumerate()
            .map(|(i, tick)| {
                let start = self.category_start(i, count, area, orient);
                let end = self.category_end(i, count, area, orient);
                let (near, far) = match orient {
                    AxisOrient::Top | AxisOrient::Left => {
                        (cursor - offset - state.max, cursor - offset)
                    }
                    AxisOrient::Bottom | AxisOrient::Right => {
                        (cursor + offset, cursor + offset + state.max)
                    }
                };
                let slot = if orient.is_top_or_bottom() {
                    Rect::new(start, near, end, far)
                } else {
                    Rect::new(near, start, far, end)
                };
                CategoryLabel {
                    tick,
                    anchor_point: position.category_anchor.anchor_point(slot),
                }
            })
            .collect();
        state.move_cursor(state.max + offset, orient);
        (state, labels)
    }
}

impl Default for CategoryAxis {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use vizir_text::HeuristicTextMeasurer;

    const AREA: Rect = Rect::new(0.0, 0.0, 500.0, 300.0);
    const FRUIT: [&str; 3] = ["Apples", "Bananas", "Cherries"];

    #[test]
    fn slots_share_the_span() {
        let axis = CategoryAxis::new();
        let bottom = AxisOrient::Bottom;
        assert_approx_eq!(f64, axis.calculate_category_size(4, AREA, bottom), 87.5, epsilon = 1e-9);
        assert_approx_eq!(f64, axis.calculate_category_gap(4, AREA, bottom), 100.0 / 3.0, epsilon = 1e-9);
        assert_approx_eq!(f64, axis.category_start(0, 4, AREA, bottom), 25.0, epsilon = 1e-9);
        assert_approx_eq!(f64, axis.category_middle(0, 4, AREA, bottom).unwrap(), 68.75, epsilon = 1e-9);
        assert_approx_eq!(f64, axis.category_end(3, 4, AREA, bottom), 475.0, epsilon = 1e-9);
        assert_approx_eq!(
            f64,
            axis.category_coordinate(CategoryAnchor::End, 0, 4, AREA, bottom).unwrap(),
            112.5,
            epsilon = 1e-9
        );
        // Vertical edges run top to bottom.
        assert_approx_eq!(f64, axis.category_start(0, 4, AREA, AxisOrient::Left), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn a_single_category_has_no_gap() {
        let axis = CategoryAxis::new();
        assert_approx_eq!(f64, axis.calculate_category_gap(1, AREA, AxisOrient::Top), 0.0);
        assert_approx_eq!(
            f64,
            axis.category_middle(0, 1, AREA, AxisOrient::Top).unwrap(),
            250.0,
            epsilon = 1e-9
        );
        assert_eq!(
            axis.category_middle(1, 1, AREA, AxisOrient::Top),
            Err(AxisError::InvalidCategoryIndex { index: 1, count: 1 })
        );
    }

    #[test]
    fn series_split_the_category() {
        let axis = CategoryAxis::new();
        let bottom = AxisOrient::Bottom;
        // One category of 450px; three 120px series with 45px gaps.
        assert_approx_eq!(f64, axis.category_series_middle(0, 1, 1, 3, 0.2, AREA, bottom), 250.0, epsilon = 1e-9);
        assert_approx_eq!(f64, axis.category_series_middle(0, 1, 0, 3, 0.2, AREA, bottom), 85.0, epsilon = 1e-9);
        assert_approx_eq!(f64, axis.category_series_middle(0, 1, 0, 1, 0.2, AREA, bottom), 250.0, epsilon = 1e-9);
    }

    #[test]
    fn one_tick_per_category() {
        let axis = CategoryAxis::new();
        let mut state = AxisState::new(0.0);
        let ticks = axis.refresh_ticks(&FRUIT, &HeuristicTextMeasurer, &mut state, AREA, AxisOrient::Bottom);
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[1].category, "Bananas");
        assert_eq!(ticks[1].label.lines(), ["Bananas"]);
        assert_eq!(ticks[0].label_anchor, TextAnchor::TopCenter);
        // One 10px line plus 2px insets above and below.
        assert_approx_eq!(f64, state.max, 14.0);

        let left = axis.refresh_ticks(&FRUIT, &HeuristicTextMeasurer, &mut state, AREA, AxisOrient::Left);
        assert_eq!(left[2].label_anchor, TextAnchor::CenterRight);
        // "Cherries" is 48px, plus 4px insets left and right.
        assert_approx_eq!(f64, state.max, 56.0);
    }

    #[test]
    fn degenerate_areas_give_no_ticks() {
        let axis = CategoryAxis::new();
        let mut state = AxisState::new(0.0);
        let flat = Rect::new(0.0, 10.0, 500.0, 10.0);
        assert!(axis.refresh_ticks(&FRUIT, &HeuristicTextMeasurer, &mut state, flat, AxisOrient::Bottom).is_empty());
        assert_approx_eq!(f64, state.max, 0.0);
    }

    #[test]
    fn labels_wrap_to_the_category_width() {
        let narrow = Rect::new(0.0, 0.0, 100.0, 300.0);
        let m = HeuristicTextMeasurer;
        let mut state = AxisState::new(0.0);
        // One 90px category wraps at 85.5px.
        let axis = CategoryAxis::new().with_maximum_category_label_lines(2);
        let ticks = axis.refresh_ticks(&["Winter Wheat Harvest"], &m, &mut state, narrow, AxisOrient::Bottom);
        assert_eq!(ticks[0].label.lines(), ["Winter Wheat", "Harvest"]);
        assert_approx_eq!(f64, state.max, 24.0);

        let axis = CategoryAxis::new();
        let ticks = axis.refresh_ticks(&["Winter Wheat Harvest"], &m, &mut state, narrow, AxisOrient::Bottom);
        assert_eq!(ticks[0].label.lines().len(), 1);
        assert!(ticks[0].label.lines()[0].ends_with("..."));
    }

    #[test]
    fn rotated_labels_measure_their_bounding_box() {
        let axis = CategoryAxis::new().with_label_positions(CategoryLabelPositions::UP_90);
        let mut state = AxisState::new(0.0);
        let ticks = axis.refresh_ticks(&FRUIT, &HeuristicTextMeasurer, &mut state, AREA, AxisOrient::Bottom);
        assert_approx_eq!(f64, ticks[0].angle, -FRAC_PI_2);
        // "Cherries" stands 48px tall.
        assert_approx_eq!(f64, state.max, 52.0, epsilon = 1e-9);

        let up = CategoryLabelPositions::up_rotation(0.5);
        assert_approx_eq!(f64, up.bottom.angle, -0.5);
        assert_eq!(CategoryLabelPositions::DOWN_45, CategoryLabelPositions::down_rotation(FRAC_PI_4));
        assert_eq!(up.label_position(AxisOrient::Left).category_anchor, RectangleAnchor::Right);
    }

    #[test]
    fn layout_anchors_labels_below_the_axis() {
        let axis = CategoryAxis::new();
        let (state, labels) = axis.layout_labels(&FRUIT, &HeuristicTextMeasurer, 100.0, AREA, AxisOrient::Bottom);
        assert_eq!(labels.len(), 3);
        let middle = axis.category_middle(1, 3, AREA, AxisOrient::Bottom).unwrap();
        assert_approx_eq!(f64, labels[1].anchor_point.x, middle, epsilon = 1e-9);
        assert_approx_eq!(f64, labels[1].anchor_point.y, 104.0);
        assert_approx_eq!(f64, state.cursor, 118.0);

        let (state, labels) = axis.layout_labels(&FRUIT, &HeuristicTextMeasurer, 0.0, AREA, AxisOrient::Left);
        assert_approx_eq!(f64, labels[0].anchor_point.x, -4.0);
        assert_approx_eq!(f64, state.cursor, -60.0);
    }

    #[test]
    fn tool_tips_and_urls_are_independent() {
        let mut axis = CategoryAxis::new();
        axis.add_category_label_tool_tip("Apples", "Red and green");
        axis.add_category_label_url("Apples", "https://example.com/apples");
        let copy = axis.clone();
        axis.clear_category_label_tool_tips();
        assert_eq!(axis.category_label_tool_tip("Apples"), None);
        assert_eq!(axis.category_label_url("Apples"), Some("https://example.com/apples"));
        assert_eq!(copy.category_label_tool_tip("Apples"), Some("Red and green"));
        assert_eq!(axis.revision(), 3);
        axis.remove_category_label_url("Pears");
        assert_eq!(axis.revision(), 3);
    }

    #[test]
    fn per_category_styles_override_the_default() {
        let mut axis = CategoryAxis::new();
        axis.set_tick_label_style("Bananas", Some(TextStyle::new(20.0)));
        let mut state = AxisState::new(0.0);
        axis.refresh_ticks(&FRUIT, &HeuristicTextMeasurer, &mut state, AREA, AxisOrient::Bottom);
        assert_approx_eq!(f64, state.max, 24.0);
        axis.set_tick_label_style("Bananas", None);
        assert_eq!(axis.tick_label_style("Bananas"), &TextStyle::default());
    }
}
