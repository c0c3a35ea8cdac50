// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing support: rectangles, selection and hit testing

pub mod hit_test;
pub mod rectangle;
pub mod selection;

pub use hit_test::{CurveHit, CurvePart};
pub use rectangle::{RectCoords, Rectangle};
pub use selection::{Selection, paint_marquee};
