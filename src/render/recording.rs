// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Display-list surface

use super::Surface;
use kurbo::{Point, Rect, Vec2};
use masonry::vello::peniko::Color;

/// One call made against a [`Surface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetStrokeStyle(Color),
    SetFillStyle(Color),
    SetLineWidth(f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    BezierCurveTo(Point, Point, Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Stroke,
    Fill,
    FillRect(Rect),
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f64),
}

/// A surface that records every call in order and draws nothing.
///
/// Useful for replaying a frame onto another surface later, and for checking
/// exactly what a curve asked to draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of `Stroke` commands recorded
    pub fn stroke_count(&self) -> usize {
        self.count(|cmd| matches!(cmd, DrawCommand::Stroke))
    }

    /// Number of `FillRect` commands recorded
    pub fn fill_rect_count(&self) -> usize {
        self.count(|cmd| matches!(cmd, DrawCommand::FillRect(_)))
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|cmd| pred(cmd)).count()
    }

    /// Whether the recorded stream ever selected `color` for stroking
    pub fn used_stroke_color(&self, color: Color) -> bool {
        self.commands
            .iter()
            .any(|cmd| *cmd == DrawCommand::SetStrokeStyle(color))
    }

    /// Send the recorded commands to another surface
    pub fn replay(&self, target: &mut impl Surface) {
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::SetStrokeStyle(color) => target.set_stroke_style(color),
                DrawCommand::SetFillStyle(color) => target.set_fill_style(color),
                DrawCommand::SetLineWidth(width) => target.set_line_width(width),
                DrawCommand::BeginPath => target.begin_path(),
                DrawCommand::MoveTo(p) => target.move_to(p),
                DrawCommand::LineTo(p) => target.line_to(p),
                DrawCommand::BezierCurveTo(c1, c2, end) => target.bezier_curve_to(c1, c2, end),
                DrawCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    anticlockwise,
                } => target.arc(center, radius, start_angle, end_angle, anticlockwise),
                DrawCommand::Stroke => target.stroke(),
                DrawCommand::Fill => target.fill(),
                DrawCommand::FillRect(rect) => target.fill_rect(rect),
                DrawCommand::Save => target.save(),
                DrawCommand::Restore => target.restore(),
                DrawCommand::Translate(offset) => target.translate(offset),
                DrawCommand::Rotate(angle) => target.rotate(angle),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn bezier_curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.commands
            .push(DrawCommand::BezierCurveTo(control1, control2, end));
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}
