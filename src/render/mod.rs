// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Immediate-mode drawing surfaces.
//!
//! Curves draw themselves through the [`Surface`] trait, which mirrors the
//! small subset of a 2D canvas API they need: style state, a current path,
//! stroke/fill, filled rectangles and a save/restore transform stack.
//!
//! Two implementations ship with the crate:
//! - [`SceneSurface`] paints into a vello `Scene`
//! - [`RecordingSurface`] keeps a display list of [`DrawCommand`]s

mod recording;
mod scene;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::SceneSurface;

use kurbo::{Point, Rect, Vec2};
use masonry::vello::peniko::Color;

/// A 2D drawing target with canvas-style state
pub trait Surface {
    /// Color used by subsequent `stroke` calls
    fn set_stroke_style(&mut self, color: Color);
    /// Color used by subsequent `fill` and `fill_rect` calls
    fn set_fill_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);

    /// Discard the current path and start a new one
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn bezier_curve_to(&mut self, control1: Point, control2: Point, end: Point);
    /// Append a circular arc around `center`.
    ///
    /// Angles are in radians. If the path already has a current point a
    /// straight segment joins it to the start of the arc.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );

    fn stroke(&mut self);
    fn fill(&mut self);
    /// Fill a rectangle in the current transform without touching the path
    fn fill_rect(&mut self, rect: Rect);

    /// Push the style and transform state
    fn save(&mut self);
    /// Pop the state pushed by the matching `save`
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f64);
}
