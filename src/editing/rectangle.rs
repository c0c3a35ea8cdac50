// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Axis-aligned rectangles for drag bounds and selection extents.
//!
//! A `Rectangle` is four independent edges. Nothing forces `left <= right` or
//! `top <= bottom`: a rectangle dragged up and to the left has negative width
//! and height, and that is a valid state. Call [`Rectangle::normalized`] when a
//! canonical box is needed.

use kurbo::{Point, Rect, Vec2};

/// Plain snapshot of a rectangle's edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectCoords {
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
}

/// An axis-aligned box described by its edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
}

impl Rectangle {
    pub fn new(coords: RectCoords) -> Self {
        Self {
            top: coords.top,
            left: coords.left,
            bottom: coords.bottom,
            right: coords.right,
        }
    }

    /// Rectangle spanning a drag from `anchor` to `current`, in drag order.
    ///
    /// The result is not normalized, so a drag towards the top-left yields
    /// negative extents.
    pub fn from_points(anchor: Point, current: Point) -> Self {
        Self {
            top: anchor.y,
            left: anchor.x,
            bottom: current.y,
            right: current.x,
        }
    }

    /// Union bounding box of `rects`.
    ///
    /// Takes the smallest top and left and the largest bottom and right.
    /// Returns `None` for an empty input.
    pub fn selection_rect<'a>(rects: impl IntoIterator<Item = &'a Rectangle>) -> Option<Rectangle> {
        let seed = Rectangle {
            top: f64::INFINITY,
            left: f64::INFINITY,
            bottom: f64::NEG_INFINITY,
            right: f64::NEG_INFINITY,
        };

        let mut any = false;
        let union = rects.into_iter().fold(seed, |mut acc, rect| {
            any = true;
            acc.top = acc.top.min(rect.top);
            acc.left = acc.left.min(rect.left);
            acc.bottom = acc.bottom.max(rect.bottom);
            acc.right = acc.right.max(rect.right);
            acc
        });

        any.then_some(union)
    }

    pub fn coords(&self) -> RectCoords {
        RectCoords {
            left: self.left,
            top: self.top,
            bottom: self.bottom,
            right: self.right,
        }
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// `right - left`; negative when the edges are swapped
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `bottom - top`; negative when the edges are swapped
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn set_top(&mut self, value: f64) {
        self.top = value;
    }

    pub fn set_left(&mut self, value: f64) {
        self.left = value;
    }

    pub fn set_bottom(&mut self, value: f64) {
        self.bottom = value;
    }

    pub fn set_right(&mut self, value: f64) {
        self.right = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Put the top-left corner at `origin`, keeping width and height
    pub fn move_to(&mut self, origin: Point) {
        let width = self.width();
        let height = self.height();

        self.top = origin.y;
        self.left = origin.x;
        self.bottom = origin.y + height;
        self.right = origin.x + width;
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.top += delta.y;
        self.left += delta.x;
        self.bottom += delta.y;
        self.right += delta.x;
    }

    /// Whether the two rectangles share any point.
    ///
    /// Only strict separation on one axis counts as disjoint, so touching
    /// edges and containment both overlap.
    pub fn overlaps_with(&self, other: &Rectangle) -> bool {
        if self.left > other.right || other.left > self.right {
            return false;
        }
        if self.top > other.bottom || other.top > self.bottom {
            return false;
        }
        true
    }

    /// Whether `point` lies inside or on the edge (canonical rectangles only)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    pub fn is_canonical(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Copy with edges swapped where needed so width and height are >= 0
    pub fn normalized(&self) -> Rectangle {
        Rectangle {
            top: self.top.min(self.bottom),
            left: self.left.min(self.right),
            bottom: self.top.max(self.bottom),
            right: self.left.max(self.right),
        }
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            left: rect.x0,
            bottom: rect.y1,
            right: rect.x1,
        }
    }
}

impl From<Rectangle> for Rect {
    fn from(rect: Rectangle) -> Self {
        Rect::new(rect.left, rect.top, rect.right, rect.bottom)
    }
}

impl From<RectCoords> for Rectangle {
    fn from(coords: RectCoords) -> Self {
        Self::new(coords)
    }
}
