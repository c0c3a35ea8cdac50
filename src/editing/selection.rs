// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Selected shapes and their bounds.
//!
//! `Selection` maps each selected shape to its bounding [`Rectangle`]. The
//! `BTreeMap` gives deterministic iteration order, which matters when a drag
//! moves several shapes at once. The selection extent is the union of the
//! member bounds, and marquee picking keeps every candidate whose bounds
//! overlap the (normalized) marquee.

use super::Rectangle;
use crate::model::EntityId;
use crate::render::Surface;
use crate::theme;
use kurbo::{Point, Rect, Vec2};
use std::collections::BTreeMap;

/// A set of selected shapes, each with its current bounds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    shapes: BTreeMap<EntityId, Rectangle>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every candidate whose bounds overlap `marquee`.
    ///
    /// The marquee may have been dragged in any direction.
    pub fn from_marquee<'a>(
        marquee: &Rectangle,
        candidates: impl IntoIterator<Item = (EntityId, &'a Rectangle)>,
    ) -> Self {
        let marquee = marquee.normalized();
        let shapes: BTreeMap<_, _> = candidates
            .into_iter()
            .filter(|(_, bounds)| marquee.overlaps_with(bounds))
            .map(|(id, bounds)| (id, *bounds))
            .collect();
        tracing::debug!("Marquee selected {} shapes", shapes.len());
        Self { shapes }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.shapes.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &Rectangle)> {
        self.shapes.iter()
    }

    /// Add a shape, or replace the bounds of one already selected
    pub fn insert(&mut self, id: EntityId, bounds: Rectangle) {
        self.shapes.insert(id, bounds);
    }

    pub fn remove(&mut self, id: &EntityId) -> Option<Rectangle> {
        self.shapes.remove(id)
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Bounding rectangle of the whole selection
    pub fn bounds(&self) -> Option<Rectangle> {
        Rectangle::selection_rect(self.shapes.values())
    }

    /// Whether `point` falls inside the selection bounds
    pub fn hit(&self, point: Point) -> bool {
        self.bounds()
            .is_some_and(|bounds| bounds.normalized().contains(point))
    }

    /// Translate every selected shape's bounds
    pub fn move_by(&mut self, delta: Vec2) {
        for bounds in self.shapes.values_mut() {
            bounds.move_by(delta);
        }
    }
}

/// Draw a marquee rectangle with the selection theme
pub fn paint_marquee(surface: &mut impl Surface, marquee: &Rectangle) {
    let rect: Rect = marquee.normalized().into();

    surface.set_fill_style(theme::selection::RECT_FILL);
    surface.fill_rect(rect);

    surface.set_line_width(theme::selection::RECT_STROKE_WIDTH);
    surface.set_stroke_style(theme::selection::RECT_STROKE);
    surface.begin_path();
    surface.move_to(Point::new(rect.x0, rect.y0));
    surface.line_to(Point::new(rect.x1, rect.y0));
    surface.line_to(Point::new(rect.x1, rect.y1));
    surface.line_to(Point::new(rect.x0, rect.y1));
    surface.line_to(Point::new(rect.x0, rect.y0));
    surface.stroke();
}
