// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! [`Surface`] implementation on top of a vello `Scene`

use super::Surface;
use kurbo::{Affine, Arc, BezPath, PathEl, Point, Rect, Stroke, Vec2};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color, Fill};
use std::f64::consts::TAU;

/// Tolerance used when flattening arcs into cubic segments
const ARC_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
struct SurfaceState {
    transform: Affine,
    stroke_color: Color,
    fill_color: Color,
    line_width: f64,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            stroke_color: Color::from_rgb8(0x00, 0x00, 0x00),
            fill_color: Color::from_rgb8(0x00, 0x00, 0x00),
            line_width: 1.0,
        }
    }
}

/// Paints surface calls into a vello `Scene`.
///
/// Path points are mapped through the current transform as they are added,
/// like a canvas context does, so the path survives later `translate` or
/// `rotate` calls unchanged. Line widths are not scaled by the transform.
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    base: Affine,
    state: SurfaceState,
    stack: Vec<SurfaceState>,
    path: BezPath,
    current: Option<Point>,
}

impl<'a> SceneSurface<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self::with_transform(scene, Affine::IDENTITY)
    }

    /// Start with `transform` (e.g. a design-to-screen viewport) applied
    pub fn with_transform(scene: &'a mut Scene, transform: Affine) -> Self {
        Self {
            scene,
            base: transform,
            state: SurfaceState {
                transform,
                ..SurfaceState::default()
            },
            stack: Vec::new(),
            path: BezPath::new(),
            current: None,
        }
    }

    /// Transform the surface was created with
    pub fn base_transform(&self) -> Affine {
        self.base
    }

    fn map(&self, point: Point) -> Point {
        self.state.transform * point
    }
}

/// Signed sweep for a canvas-style arc.
///
/// A difference of at least a full turn in either direction draws the whole
/// circle; otherwise the sweep is reduced into `[0, TAU)` in the requested
/// direction.
fn arc_sweep(start_angle: f64, end_angle: f64, anticlockwise: bool) -> f64 {
    let delta = end_angle - start_angle;
    if delta.abs() >= TAU {
        return if anticlockwise { -TAU } else { TAU };
    }
    if anticlockwise {
        -(-delta).rem_euclid(TAU)
    } else {
        delta.rem_euclid(TAU)
    }
}

impl Surface for SceneSurface<'_> {
    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
        self.current = None;
    }

    fn move_to(&mut self, point: Point) {
        let p = self.map(point);
        self.path.move_to(p);
        self.current = Some(p);
    }

    fn line_to(&mut self, point: Point) {
        let p = self.map(point);
        if self.current.is_none() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
        self.current = Some(p);
    }

    fn bezier_curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        let (c1, c2, p) = (self.map(control1), self.map(control2), self.map(end));
        if self.current.is_none() {
            self.path.move_to(c1);
        }
        self.path.curve_to(c1, c2, p);
        self.current = Some(p);
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        let arc = Arc {
            center,
            radii: Vec2::new(radius, radius),
            start_angle,
            sweep_angle: arc_sweep(start_angle, end_angle, anticlockwise),
            x_rotation: 0.0,
        };

        let start = self.map(center + Vec2::from_angle(start_angle) * radius);
        if self.current.is_none() {
            self.path.move_to(start);
        } else {
            self.path.line_to(start);
        }

        let transform = self.state.transform;
        let mut last = start;
        for el in arc.append_iter(ARC_TOLERANCE) {
            let el: PathEl = transform * el;
            if let Some(end) = el.end_point() {
                last = end;
            }
            self.path.push(el);
        }
        self.current = Some(last);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let stroke = Stroke::new(self.state.line_width);
        let brush = Brush::Solid(self.state.stroke_color);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, &brush, None, &self.path);
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let brush = Brush::Solid(self.state.fill_color);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, &brush, None, &self.path);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let brush = Brush::Solid(self.state.fill_color);
        self.scene
            .fill(Fill::NonZero, self.state.transform, &brush, None, &rect);
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("SceneSurface::restore without matching save"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform * Affine::translate(offset);
    }

    fn rotate(&mut self, angle: f64) {
        self.state.transform = self.state.transform * Affine::rotate(angle);
    }
}
