// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Artboard: pen-tool curves and selection rectangles for a vector canvas
//!
//! The crate is a model plus its drawing contract. A [`PenPath`] owns a
//! chain of cubic [`Curve`]s and renders them onto any [`Surface`];
//! [`Rectangle`] tracks drag bounds and unions selection extents. Input
//! handling, undo and tool UI live with the caller.

pub mod editing;
pub mod model;
pub mod path;
pub mod render;
pub mod settings;
pub mod theme;

pub use editing::{CurveHit, CurvePart, RectCoords, Rectangle, Selection};
pub use model::EntityId;
pub use path::{Curve, CurveIndex, PenPath, ShapePoint, SharedPoint};
pub use render::{DrawCommand, RecordingSurface, SceneSurface, Surface};
pub use settings::{PathSettings, SettingsError};

/// Install a `tracing` subscriber for applications embedding the artboard.
///
/// Filtering can be controlled via the RUST_LOG env var; the crate's own
/// events default to `info`. Calling this twice is harmless.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(
        "artboard=info"
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
    );
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
