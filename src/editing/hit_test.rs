// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Picking anchors and control points of a pen path

use crate::path::{Curve, CurveIndex, PenPath};
use kurbo::Point;

/// Which of a curve's four points was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePart {
    StartPoint,
    StartControl,
    EndControl,
    EndPoint,
}

/// Result of a hit test against a pen path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit {
    pub curve: CurveIndex,
    pub part: CurvePart,
    pub distance: f64,
}

/// Points of `curve` that can be picked: both anchors, plus each control
/// point the user has moved while its handle is shown (unmoved controls sit
/// under their anchor).
fn pickable_parts(curve: &Curve, show_handles: bool) -> impl Iterator<Item = (CurvePart, Point)> {
    let mut parts = Vec::with_capacity(4);
    // Controls first so a handle dragged back onto its anchor stays grabbable
    if show_handles && curve.start_control_moved {
        let point = curve.start_control_point.position();
        parts.push((CurvePart::StartControl, point));
    }
    if show_handles && curve.end_control_moved {
        let point = curve.end_control_point.position();
        parts.push((CurvePart::EndControl, point));
    }
    parts.push((CurvePart::StartPoint, curve.start_point.position()));
    parts.push((CurvePart::EndPoint, curve.end_point.position()));
    parts.into_iter()
}

/// Closest pickable point within `max_dist` of `pos`.
///
/// Control points are only candidates where rendering draws their handles:
/// while `drawing`, and on the last segments of the path. On equal distance
/// the earliest curve wins, so a shared joint resolves to the end point of
/// the earlier segment.
pub fn hit_test_path(
    path: &PenPath,
    pos: Point,
    max_dist: f64,
    drawing: bool,
) -> Option<CurveHit> {
    let length = path.len();
    let hit = path
        .iter()
        .flat_map(|(index, curve)| {
            let show_handles = drawing && Curve::in_active_window(index.0, length);
            let parts = pickable_parts(curve, show_handles);
            parts.map(move |(part, point)| CurveHit {
                curve: index,
                part,
                distance: point.distance(pos),
            })
        })
        .filter(|hit| hit.distance <= max_dist)
        .min_by(|a, b| a.distance.total_cmp(&b.distance));

    tracing::trace!("hit_test_path at ({}, {}): {:?}", pos.x, pos.y, hit);
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segment_path() -> PenPath {
        let mut path = PenPath::start(Point::new(0.0, 0.0));
        path.last_mut().unwrap().move_end_point(100.0, 0.0);
        path.complete_last();
        path.begin_curve();
        path.last_mut().unwrap().move_end_point(200.0, 0.0);
        path
    }

    fn pick(path: &PenPath, x: f64, y: f64, max_dist: f64) -> Option<CurveHit> {
        hit_test_path(path, Point::new(x, y), max_dist, true)
    }

    #[test]
    fn misses_outside_radius() {
        let path = two_segment_path();
        assert_eq!(pick(&path, 50.0, 50.0, 5.0), None);
    }

    #[test]
    fn shared_joint_resolves_to_earlier_end_point() {
        let path = two_segment_path();
        let hit = pick(&path, 101.0, 0.0, 5.0).unwrap();
        assert_eq!(hit.curve, CurveIndex(0));
        assert_eq!(hit.part, CurvePart::EndPoint);
        assert_eq!(hit.distance, 1.0);
    }

    #[test]
    fn unmoved_controls_are_not_pickable() {
        let mut path = two_segment_path();
        let hit = pick(&path, 199.0, 0.0, 5.0).unwrap();
        assert_eq!(hit.part, CurvePart::EndPoint);

        let curve = path.last_mut().unwrap();
        curve.move_end_control_point(199.0, 0.0);
        curve.end_control_moved = true;
        let hit = pick(&path, 199.0, 0.0, 5.0).unwrap();
        assert_eq!(hit.curve, CurveIndex(1));
        assert_eq!(hit.part, CurvePart::EndControl);
    }

    #[test]
    fn closest_candidate_wins() {
        let mut path = two_segment_path();
        let first = path.first_mut().unwrap();
        first.move_start_control_point(10.0, 10.0);
        first.start_control_moved = true;

        let hit = pick(&path, 8.0, 8.0, 20.0).unwrap();
        assert_eq!(hit.curve, CurveIndex(0));
        assert_eq!(hit.part, CurvePart::StartControl);
    }

    #[test]
    fn controls_outside_active_window_are_not_pickable() {
        let mut path = two_segment_path();
        path.complete_last();
        path.begin_curve();
        path.last_mut().unwrap().move_end_point(300.0, 0.0);

        let first = path.first_mut().unwrap();
        first.move_start_control_point(50.0, 50.0);
        first.start_control_moved = true;
        assert_eq!(pick(&path, 50.0, 50.0, 5.0), None);

        // Same kind of handle on a segment that still draws its handles
        let second = path.get_mut(CurveIndex(1)).unwrap();
        second.move_start_control_point(150.0, 50.0);
        second.start_control_moved = true;
        let hit = pick(&path, 150.0, 50.0, 5.0).unwrap();
        assert_eq!(hit.curve, CurveIndex(1));
        assert_eq!(hit.part, CurvePart::StartControl);
    }

    #[test]
    fn controls_are_not_pickable_when_not_drawing() {
        let mut path = two_segment_path();
        let curve = path.last_mut().unwrap();
        curve.move_end_control_point(150.0, 50.0);
        curve.end_control_moved = true;

        let pos = Point::new(150.0, 50.0);
        assert!(hit_test_path(&path, pos, 5.0, true).is_some());
        assert_eq!(hit_test_path(&path, pos, 5.0, false), None);

        // Anchors stay pickable either way
        let hit = hit_test_path(&path, Point::new(200.0, 0.0), 5.0, false);
        assert_eq!(hit.map(|hit| hit.part), Some(CurvePart::EndPoint));
    }
}
