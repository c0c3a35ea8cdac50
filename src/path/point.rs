// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Points placed by the pen tool.
//!
//! `ShapePoint` is a plain value: an id plus a position. `SharedPoint` is the
//! handle used for anchors, so that the end of one curve and the start of the
//! next are the same point and move together.

use crate::model::EntityId;
use kurbo::Point;
use std::cell::Cell;
use std::rc::Rc;

/// A single point with its own identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePoint {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
}

impl ShapePoint {
    pub fn new(x: f64, y: f64) -> Self {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!("ShapePoint created with non-finite coordinates ({x}, {y})");
        }
        Self {
            id: EntityId::point(),
            x,
            y,
        }
    }

    /// A new point at the same position, with a fresh id
    pub fn copy(&self) -> Self {
        Self::new(self.x, self.y)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl From<Point> for ShapePoint {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Shared handle to a [`ShapePoint`]
///
/// Cloning the handle does not copy the point; use [`SharedPoint::detach`]
/// for that. Single-threaded only.
#[derive(Debug, Clone)]
pub struct SharedPoint(Rc<Cell<ShapePoint>>);

impl SharedPoint {
    pub fn new(point: ShapePoint) -> Self {
        Self(Rc::new(Cell::new(point)))
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(ShapePoint::new(x, y))
    }

    /// Snapshot of the current value
    pub fn get(&self) -> ShapePoint {
        self.0.get()
    }

    pub fn id(&self) -> EntityId {
        self.0.get().id
    }

    pub fn position(&self) -> Point {
        self.0.get().position()
    }

    /// Move the point; every holder of this handle sees the change
    pub fn set_position(&self, x: f64, y: f64) {
        let mut point = self.0.get();
        point.set_position(x, y);
        self.0.set(point);
    }

    /// An owned copy with a new id, no longer linked to this handle
    pub fn detach(&self) -> ShapePoint {
        self.0.get().copy()
    }

    /// Whether both handles refer to the same point
    pub fn ptr_eq(&self, other: &SharedPoint) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<ShapePoint> for SharedPoint {
    fn from(point: ShapePoint) -> Self {
        Self::new(point)
    }
}
