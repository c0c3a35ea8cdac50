// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pen paths: chains of cubic bezier curves.
//!
//! A `PenPath` owns its curves in a `Vec` and links them by [`CurveIndex`],
//! so neighbours are found in O(1) without reference cycles. Consecutive
//! curves share the joint point: the start of each curve is the same
//! [`SharedPoint`] as the end of the one before it.

pub mod curve;
pub mod point;

pub use curve::Curve;
pub use point::{ShapePoint, SharedPoint};

use crate::editing::Rectangle;
use crate::editing::hit_test::{self, CurveHit};
use crate::render::Surface;
use crate::settings::PathSettings;
use kurbo::{BezPath, Point};

/// Position of a curve within its [`PenPath`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurveIndex(pub usize);

/// An open chain of curves drawn with the pen tool
#[derive(Debug, Default)]
pub struct PenPath {
    curves: Vec<Curve>,
}

impl PenPath {
    /// Create a path whose first curve starts at `point`
    pub fn start(point: Point) -> Self {
        let mut path = Self::default();
        path.push_curve(SharedPoint::from(ShapePoint::from(point)));
        path
    }

    /// Append a curve starting at `start_point`, linking it to the last curve
    fn push_curve(&mut self, start_point: SharedPoint) -> CurveIndex {
        let index = CurveIndex(self.curves.len());
        let previous = self.curves.len().checked_sub(1).map(CurveIndex);

        self.curves.push(Curve::new(start_point, previous));
        if let Some(prev) = previous {
            self.curves[prev.0].next = Some(index);
        }
        index
    }

    /// Start a new segment at the end of the chain.
    ///
    /// The new curve's start point is the previous curve's end point itself,
    /// not a copy. Returns `None` on an empty path.
    pub fn begin_curve(&mut self) -> Option<CurveIndex> {
        let joint = self.curves.last()?.end_point.clone();
        let index = self.push_curve(joint);
        tracing::debug!("Began curve {} of pen path", index.0);
        Some(index)
    }

    /// Mark the last curve's end point as placed
    pub fn complete_last(&mut self) {
        if let Some(curve) = self.curves.last_mut() {
            curve.completed = true;
            tracing::debug!("Completed {}", curve.id);
        }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn get(&self, index: CurveIndex) -> Option<&Curve> {
        self.curves.get(index.0)
    }

    pub fn get_mut(&mut self, index: CurveIndex) -> Option<&mut Curve> {
        self.curves.get_mut(index.0)
    }

    pub fn first(&self) -> Option<&Curve> {
        self.curves.first()
    }

    pub fn first_mut(&mut self) -> Option<&mut Curve> {
        self.curves.first_mut()
    }

    pub fn last(&self) -> Option<&Curve> {
        self.curves.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Curve> {
        self.curves.last_mut()
    }

    /// The curve before `index` in the chain
    pub fn previous(&self, index: CurveIndex) -> Option<&Curve> {
        self.get(index)?.previous.and_then(|prev| self.get(prev))
    }

    /// The curve after `index` in the chain
    pub fn next(&self, index: CurveIndex) -> Option<&Curve> {
        self.get(index)?.next.and_then(|next| self.get(next))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CurveIndex, &Curve)> {
        self.curves
            .iter()
            .enumerate()
            .map(|(i, curve)| (CurveIndex(i), curve))
    }

    /// Render every curve in chain order
    pub fn render(&self, surface: &mut impl Surface, settings: &PathSettings, drawing: bool) {
        let length = self.curves.len();
        tracing::trace!("Rendering pen path: {} curves, drawing={}", length, drawing);
        for (index, curve) in self.curves.iter().enumerate() {
            curve.render(surface, settings, index, length, drawing);
        }
    }

    /// The whole chain as a single kurbo path
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        if let Some(first) = self.curves.first() {
            path.move_to(first.start_point.position());
        }
        for curve in &self.curves {
            let bez = curve.to_cubic_bez();
            path.curve_to(bez.p1, bez.p2, bez.p3);
        }
        path
    }

    /// Union of the bounding boxes of every curve
    pub fn bounds(&self) -> Option<Rectangle> {
        let boxes: Vec<Rectangle> = self.curves.iter().map(Curve::bounds).collect();
        Rectangle::selection_rect(&boxes)
    }

    /// Closest anchor or moved control point within `max_dist` of `pos`
    pub fn hit_test(&self, pos: Point, max_dist: Option<f64>, drawing: bool) -> Option<CurveHit> {
        let max_dist = max_dist.unwrap_or(crate::settings::hit::RADIUS);
        hit_test::hit_test_path(self, pos, max_dist, drawing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::CurvePart;
    use crate::render::{DrawCommand, RecordingSurface};
    use kurbo::PathEl;

    /// Three straight-ish segments along the x axis
    fn chain() -> PenPath {
        let mut path = PenPath::start(Point::ZERO);
        for i in 1..=3 {
            if i > 1 {
                path.begin_curve();
            }
            let curve = path.last_mut().unwrap();
            curve.move_end_point(i as f64 * 10.0, 0.0);
            path.complete_last();
        }
        path
    }

    #[test]
    fn begin_curve_links_both_ways() {
        let path = chain();
        assert_eq!(path.len(), 3);
        let links: Vec<_> = path.iter().map(|(_, c)| (c.previous, c.next)).collect();
        assert_eq!(
            links,
            vec![
                (None, Some(CurveIndex(1))),
                (Some(CurveIndex(0)), Some(CurveIndex(2))),
                (Some(CurveIndex(1)), None),
            ]
        );

        let middle = CurveIndex(1);
        assert_eq!(path.previous(middle).unwrap().id, path.first().unwrap().id);
        assert_eq!(path.next(middle).unwrap().id, path.last().unwrap().id);
        assert!(path.previous(CurveIndex(0)).is_none());
        assert!(path.next(CurveIndex(9)).is_none());
    }

    #[test]
    fn joints_are_shared() {
        let mut path = chain();
        let first_end = path.get(CurveIndex(0)).unwrap().end_point.clone();
        let second_start = path.get(CurveIndex(1)).unwrap().start_point.clone();
        assert!(first_end.ptr_eq(&second_start));

        let first = path.get_mut(CurveIndex(0)).unwrap();
        first.move_end_point(12.0, 5.0);
        assert_eq!(second_start.position(), Point::new(12.0, 5.0));
    }

    #[test]
    fn begin_curve_on_empty_path_is_none() {
        let mut path = PenPath::default();
        assert!(path.is_empty());
        assert_eq!(path.begin_curve(), None);
        assert_eq!(path.bounds(), None);
        assert!(path.to_bezpath().elements().is_empty());
    }

    #[test]
    fn new_segment_is_pending_at_joint() {
        let mut path = chain();
        let index = path.begin_curve().unwrap();
        let curve = path.get(index).unwrap();
        assert!(!curve.completed);
        assert_eq!(curve.end_point.position(), Point::new(30.0, 0.0));
    }

    #[test]
    fn render_passes_index_and_length() {
        let mut path = chain();
        for (_, curve) in path.iter() {
            assert!(curve.completed);
        }
        for i in 0..3 {
            let curve = path.get_mut(CurveIndex(i)).unwrap();
            curve.move_start_control_point(i as f64 * 10.0 + 3.0, 4.0);
            curve.start_control_moved = true;
        }

        let mut surface = RecordingSurface::new();
        path.render(&mut surface, &PathSettings::default(), true);

        // Handles only on the last two of three curves
        let guides = surface.count(|cmd| matches!(cmd, DrawCommand::LineTo(_)));
        assert_eq!(guides, 2);
        // Every curve draws both anchors
        let anchors = surface.count(|cmd| matches!(cmd, DrawCommand::Arc { .. }));
        assert_eq!(anchors, 6);
    }

    #[test]
    fn bezpath_is_one_continuous_subpath() {
        let path = chain();
        let bez = path.to_bezpath();
        let elements = bez.elements();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0], PathEl::MoveTo(Point::ZERO));
        assert!(matches!(elements[3], PathEl::CurveTo(_, _, p) if p == Point::new(30.0, 0.0)));
    }

    #[test]
    fn bounds_cover_the_chain() {
        let path = chain();
        let bounds = path.bounds().unwrap();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.right(), 30.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn hit_test_uses_default_radius() {
        let path = chain();
        let within = crate::settings::hit::RADIUS - 1.0;
        let near = Point::new(30.0, within);
        let far = Point::new(30.0, within + 2.0);
        assert!(path.hit_test(near, None, false).is_some());
        assert!(path.hit_test(far, None, false).is_none());
        assert!(path.hit_test(far, Some(50.0), false).is_some());
    }

    #[test]
    fn hit_test_skips_handles_that_are_not_drawn() {
        let mut path = chain();
        for i in 0..3 {
            let curve = path.get_mut(CurveIndex(i)).unwrap();
            curve.move_start_control_point(i as f64 * 10.0 + 3.0, 4.0);
            curve.start_control_moved = true;
        }

        // The first curve's handle is left out of the drawn window
        let old_handle = Point::new(3.0, 4.0);
        assert_eq!(path.hit_test(old_handle, Some(1.0), true), None);
        let recent_handle = Point::new(13.0, 4.0);
        let hit = path.hit_test(recent_handle, Some(1.0), true).unwrap();
        assert_eq!(hit.curve, CurveIndex(1));
        assert_eq!(hit.part, CurvePart::StartControl);
        assert_eq!(path.hit_test(recent_handle, Some(1.0), false), None);
    }
}
