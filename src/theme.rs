// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants for pen-tool rendering
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;
use std::f64::consts::TAU;

// ============================================================================
// BASE COLORS -- a dark to light gradient
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

// ============================================================================
// CONTOUR -- thin outline drawn over every visible curve
// ============================================================================
const CONTOUR_COMPLETED: Color = Color::from_rgb8(0x44, 0x28, 0xec);
// Segment still following the pointer
const CONTOUR_POTENTIAL: Color = Color::from_rgb8(0x57, 0x9a, 0xff);
const CONTOUR_WIDTH: f64 = 1.0;

// ============================================================================
// CONTROL LINES (handles)
// ============================================================================
const CONTROL_LINE: Color = BASE_I;
const CONTROL_LINE_WIDTH: f64 = 1.0;

// ============================================================================
// ANCHOR POINTS (circles)
// ============================================================================
const ANCHOR_OUTLINE: Color = CONTOUR_COMPLETED;
const ANCHOR_FILL: Color = BASE_O;
const ANCHOR_OUTLINE_WIDTH: f64 = 1.0;
const ANCHOR_RADIUS: f64 = 3.5;

// ============================================================================
// CONTROL POINTS (diamonds)
// ============================================================================
const CONTROL_POINT_STROKE: Color = Color::from_rgb8(0x99, 0x00, 0xff);
const CONTROL_POINT_FILL: Color = Color::from_rgb8(0xcc, 0x99, 0xff);
const CONTROL_POINT_SIZE: f64 = 6.0;
const CONTROL_POINT_STROKE_WIDTH: f64 = 1.0;

// ============================================================================
// SELECTION RECTANGLE (Marquee)
// ============================================================================
const SELECTION_RECT_FILL: Color = Color::from_rgba8(0xff, 0xaa, 0x33, 0x20);
const SELECTION_RECT_STROKE: Color = Color::from_rgb8(0xff, 0xaa, 0x33);
const SELECTION_RECT_STROKE_WIDTH: f64 = 1.0;

// ============================================================================
// DEFAULT TOOL STROKE
// ============================================================================
const DEFAULT_STROKE: Color = BASE_A;
const DEFAULT_STROKE_WIDTH: f64 = 2.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Curve contour (the thin always-on outline)
pub mod contour {
    use super::Color;
    /// Contour of a completed curve
    pub const COLOR: Color = super::CONTOUR_COMPLETED;
    /// Contour of a curve whose end point is not yet placed
    pub const COLOR_POTENTIAL: Color = super::CONTOUR_POTENTIAL;
    pub const WIDTH: f64 = super::CONTOUR_WIDTH;
}

/// Lines from an anchor to its moved control point
pub mod control_line {
    use super::Color;
    pub const COLOR: Color = super::CONTROL_LINE;
    pub const WIDTH: f64 = super::CONTROL_LINE_WIDTH;
}

/// Anchor point markers
pub mod point {
    use super::Color;
    pub const COLOR: Color = super::ANCHOR_OUTLINE;
    pub const FILL: Color = super::ANCHOR_FILL;
    pub const WIDTH: f64 = super::ANCHOR_OUTLINE_WIDTH;
    pub const RADIUS: f64 = super::ANCHOR_RADIUS;
    /// Arc start angle (radians)
    pub const ARC_START: f64 = 0.0;
    /// Arc end angle (radians), a full turn
    pub const ARC_END: f64 = super::TAU;
}

/// Control point markers (squares rotated 45°)
///
/// Each marker is two filled squares: an outer one in `STROKE` grown by
/// `STROKE_WIDTH` on every side, and an inner one in `FILL`.
pub mod control_point {
    use super::Color;
    pub const STROKE: Color = super::CONTROL_POINT_STROKE;
    pub const FILL: Color = super::CONTROL_POINT_FILL;
    /// Side length of the inner square
    pub const SIZE: f64 = super::CONTROL_POINT_SIZE;
    pub const STROKE_WIDTH: f64 = super::CONTROL_POINT_STROKE_WIDTH;
}

/// Colors for selection rectangle (marquee)
pub mod selection {
    use super::Color;
    pub const RECT_FILL: Color = super::SELECTION_RECT_FILL;
    pub const RECT_STROKE: Color = super::SELECTION_RECT_STROKE;
    pub const RECT_STROKE_WIDTH: f64 = super::SELECTION_RECT_STROKE_WIDTH;
}

/// Stroke used when no tool settings are supplied
pub mod stroke {
    use super::Color;
    pub const COLOR: Color = super::DEFAULT_STROKE;
    pub const WIDTH: f64 = super::DEFAULT_STROKE_WIDTH;
}
