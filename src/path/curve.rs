// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A single cubic bezier segment drawn by the pen tool.
//!
//! The start point is a [`SharedPoint`] handed in by the caller, normally the
//! end point of the previous curve, so dragging that joint moves both
//! segments. The end point is a fresh handle the next curve can share. The
//! two control points are owned values.

use super::CurveIndex;
use super::point::{ShapePoint, SharedPoint};
use crate::editing::Rectangle;
use crate::model::EntityId;
use crate::render::Surface;
use crate::settings::{self, PathSettings};
use crate::theme;
use kurbo::{CubicBez, ParamCurve, ParamCurveExtrema, Point, Rect, Vec2};

/// One segment of a pen path
///
/// Not `Clone`: the anchors are shared handles.
#[derive(Debug)]
pub struct Curve {
    pub id: EntityId,
    /// Previous segment in the owning chain
    pub previous: Option<CurveIndex>,
    /// Next segment in the owning chain
    pub next: Option<CurveIndex>,
    pub start_point: SharedPoint,
    pub start_control_point: ShapePoint,
    pub end_point: SharedPoint,
    pub end_control_point: ShapePoint,
    /// The start control point was dragged away from its anchor
    pub start_control_moved: bool,
    /// The end control point was dragged away from its anchor
    pub end_control_moved: bool,
    /// The end point has been placed
    pub completed: bool,
    pub curve_visible: bool,
}

impl Curve {
    /// Create a zero-length curve anchored at `start_point`.
    ///
    /// `previous` is recorded as is; linking `previous.next` back to this
    /// curve is up to the owner of the chain.
    pub fn new(start_point: SharedPoint, previous: Option<CurveIndex>) -> Self {
        let origin = start_point.get();
        let curve = Self {
            id: EntityId::curve(),
            previous,
            next: None,
            start_control_point: origin.copy(),
            end_point: SharedPoint::new(origin.copy()),
            end_control_point: origin.copy(),
            start_point,
            start_control_moved: false,
            end_control_moved: false,
            completed: false,
            curve_visible: true,
        };
        tracing::trace!("Created {} at ({}, {})", curve.id, origin.x, origin.y);
        curve
    }

    pub fn move_start_control_point(&mut self, x: f64, y: f64) {
        self.start_control_point.set_position(x, y);
    }

    /// Move the end point; a curve sharing it as its start follows
    pub fn move_end_point(&mut self, x: f64, y: f64) {
        self.end_point.set_position(x, y);
    }

    pub fn move_end_control_point(&mut self, x: f64, y: f64) {
        self.end_control_point.set_position(x, y);
    }

    pub fn to_cubic_bez(&self) -> CubicBez {
        CubicBez::new(
            self.start_point.position(),
            self.start_control_point.position(),
            self.end_control_point.position(),
            self.end_point.position(),
        )
    }

    /// Point on the curve at parameter `t` in `[0, 1]`
    pub fn eval(&self, t: f64) -> Point {
        self.to_cubic_bez().eval(t)
    }

    /// Tight bounding box of the curve itself (control points excluded)
    pub fn bounds(&self) -> Rectangle {
        Rectangle::from(self.to_cubic_bez().bounding_box())
    }

    /// Whether control handles are shown for this curve at `index` of `length`
    pub(crate) fn in_active_window(index: usize, length: usize) -> bool {
        index + settings::editing::ACTIVE_SEGMENT_WINDOW >= length
    }

    /// Draw the curve and its editing affordances.
    ///
    /// Passes, in order: tool stroke, contour, control lines, anchor markers,
    /// control point markers. Handles (lines and control markers) are drawn
    /// only while `drawing` and only for the last two curves of the chain.
    pub fn render(
        &self,
        surface: &mut impl Surface,
        settings: &PathSettings,
        index: usize,
        length: usize,
        drawing: bool,
    ) {
        if settings.stroke_width != 0.0 {
            self.render_stroke(surface, settings);
        }

        self.render_contour(surface);

        let show_handles = drawing && Self::in_active_window(index, length);
        if show_handles {
            self.render_control_lines(surface);
        }

        self.render_points(surface);

        if show_handles {
            self.render_control_points(surface);
        }
    }

    fn trace_bezier(&self, surface: &mut impl Surface) {
        surface.begin_path();
        surface.move_to(self.start_point.position());
        surface.bezier_curve_to(
            self.start_control_point.position(),
            self.end_control_point.position(),
            self.end_point.position(),
        );
        surface.stroke();
    }

    /// Final stroke in the tool's color, only once the curve is complete
    fn render_stroke(&self, surface: &mut impl Surface, settings: &PathSettings) {
        if !self.curve_visible || !self.completed {
            return;
        }

        surface.set_line_width(settings.stroke_width);
        surface.set_stroke_style(settings.stroke_color);
        self.trace_bezier(surface);
    }

    fn render_contour(&self, surface: &mut impl Surface) {
        if !self.curve_visible {
            return;
        }

        surface.set_line_width(theme::contour::WIDTH);
        surface.set_stroke_style(if self.completed {
            theme::contour::COLOR
        } else {
            theme::contour::COLOR_POTENTIAL
        });
        self.trace_bezier(surface);
    }

    fn render_control_lines(&self, surface: &mut impl Surface) {
        surface.set_line_width(theme::control_line::WIDTH);
        surface.set_stroke_style(theme::control_line::COLOR);

        surface.begin_path();
        if self.start_control_moved {
            surface.move_to(self.start_point.position());
            surface.line_to(self.start_control_point.position());
        }
        if self.end_control_moved {
            surface.move_to(self.end_point.position());
            surface.line_to(self.end_control_point.position());
        }
        surface.stroke();
    }

    fn render_points(&self, surface: &mut impl Surface) {
        surface.set_line_width(theme::point::WIDTH);
        surface.set_stroke_style(theme::point::COLOR);
        surface.set_fill_style(theme::point::FILL);

        render_anchor(surface, self.start_point.position());
        render_anchor(surface, self.end_point.position());
    }

    fn render_control_points(&self, surface: &mut impl Surface) {
        surface.set_fill_style(theme::control_point::FILL);

        if self.start_control_moved {
            render_control_marker(surface, self.start_control_point.position());
        }
        if self.end_control_moved {
            render_control_marker(surface, self.end_control_point.position());
        }
    }
}

/// Circle marker for an anchor point
fn render_anchor(surface: &mut impl Surface, center: Point) {
    surface.begin_path();
    surface.arc(
        center,
        theme::point::RADIUS,
        theme::point::ARC_START,
        theme::point::ARC_END,
        true,
    );
    surface.fill();
    surface.stroke();
}

/// Diamond marker for a control point: an outer square then an inner one
fn render_control_marker(surface: &mut impl Surface, center: Point) {
    use theme::control_point::{FILL, SIZE, STROKE, STROKE_WIDTH};

    surface.save();
    surface.translate(Vec2::new(center.x, center.y));
    surface.rotate(settings::editing::CONTROL_POINT_ROTATION);

    let half = SIZE / 2.0;
    surface.set_fill_style(STROKE);
    surface.fill_rect(Rect::new(
        -half - STROKE_WIDTH,
        -half - STROKE_WIDTH,
        half + STROKE_WIDTH,
        half + STROKE_WIDTH,
    ));

    surface.set_fill_style(FILL);
    surface.fill_rect(Rect::new(-half, -half, half, half));

    surface.restore();
}
