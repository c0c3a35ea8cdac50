// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pen-tool settings and configuration constants.
//!
//! Compile-time editor behavior lives in the constant modules below.
//! Visual styling (colors, sizes) belongs in `theme.rs`. The per-tool stroke
//! configuration is [`PathSettings`], which callers pass to every render and
//! which can be loaded from a TOML file.

use crate::theme;
use anyhow::Context;
use masonry::vello::peniko::Color;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// EDITING SETTINGS
// ============================================================================
/// How many segments at the end of a chain show their control handles
const ACTIVE_SEGMENT_WINDOW: usize = 2;

/// Rotation applied to control point squares (45°, in radians)
const CONTROL_POINT_ROTATION: f64 = std::f64::consts::FRAC_PI_4;

// ============================================================================
// HIT TESTING SETTINGS
// ============================================================================
/// Default pick radius around anchors and control points (canvas units)
const HIT_RADIUS: f64 = 6.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Pen-tool editing behavior
pub mod editing {
    /// Only the last `ACTIVE_SEGMENT_WINDOW` curves of a chain draw handles
    pub const ACTIVE_SEGMENT_WINDOW: usize = super::ACTIVE_SEGMENT_WINDOW;

    /// Rotation of control point markers (radians)
    pub const CONTROL_POINT_ROTATION: f64 = super::CONTROL_POINT_ROTATION;
}

/// Hit testing settings
pub mod hit {
    /// Default pick radius (canvas units)
    pub const RADIUS: f64 = super::HIT_RADIUS;
}

// ============================================================================
// PATH SETTINGS
// ============================================================================

/// Errors produced while reading [`PathSettings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid color {0:?}: expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("stroke width must be a finite, non-negative number, got {0}")]
    InvalidStrokeWidth(f64),
    #[error("malformed settings: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Stroke configuration of the active tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSettings {
    pub stroke_color: Color,
    /// Zero disables the stroke pass entirely
    pub stroke_width: f64,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            stroke_color: theme::stroke::COLOR,
            stroke_width: theme::stroke::WIDTH,
        }
    }
}

/// On-disk form of [`PathSettings`]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathSettingsFile {
    stroke_color: Option<String>,
    stroke_width: Option<f64>,
}

impl PathSettings {
    pub fn new(stroke_color: Color, stroke_width: f64) -> Self {
        Self {
            stroke_color,
            stroke_width,
        }
    }

    /// Settings that only draw contours
    pub fn contour_only() -> Self {
        Self {
            stroke_width: 0.0,
            ..Self::default()
        }
    }

    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let file: PathSettingsFile = toml::from_str(text)?;
        let mut settings = Self::default();

        if let Some(color) = file.stroke_color {
            settings.stroke_color = parse_hex_color(&color)?;
        }
        if let Some(width) = file.stroke_width {
            if !width.is_finite() || width < 0.0 {
                return Err(SettingsError::InvalidStrokeWidth(width));
            }
            settings.stroke_width = width;
        }

        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading path settings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        tracing::debug!(
            "Loaded path settings: stroke_width={}",
            settings.stroke_width
        );
        Ok(settings)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional)
pub fn parse_hex_color(text: &str) -> Result<Color, SettingsError> {
    let invalid = || SettingsError::InvalidColor(text.to_string());
    let hex = text.trim().trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { 0xff };

    Ok(Color::from_rgba8(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_hex() {
        assert_eq!(
            parse_hex_color("#ff8000").unwrap(),
            Color::from_rgba8(0xff, 0x80, 0x00, 0xff)
        );
        assert_eq!(
            parse_hex_color("10203040").unwrap(),
            Color::from_rgba8(0x10, 0x20, 0x30, 0x40)
        );
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#fff", "#gg0000", "#12345", "#ff00ff00ff", "#ééé"] {
            assert!(
                matches!(parse_hex_color(bad), Err(SettingsError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn toml_overrides_defaults() {
        let settings = PathSettings::from_toml_str(
            r##"
            stroke_color = "#00ff00"
            stroke_width = 4.5
            "##,
        )
        .unwrap();
        assert_eq!(settings.stroke_color, Color::from_rgb8(0x00, 0xff, 0x00));
        assert_eq!(settings.stroke_width, 4.5);
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let settings = PathSettings::from_toml_str("stroke_width = 0.0").unwrap();
        assert_eq!(settings.stroke_color, theme::stroke::COLOR);
        assert_eq!(settings, PathSettings::contour_only());
    }

    #[test]
    fn negative_width_is_rejected() {
        let err = PathSettings::from_toml_str("stroke_width = -1.0").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidStrokeWidth(w) if w == -1.0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = PathSettings::from_toml_str("stroke_colour = \"#000000\"").unwrap_err();
        assert!(matches!(err, SettingsError::Toml(_)));
    }

    #[test]
    fn load_reads_file_and_reports_missing_files() {
        let dir = std::env::temp_dir().join(format!("artboard-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pen.toml");
        std::fs::write(&path, "stroke_color = \"#123456\"\n").unwrap();

        let settings = PathSettings::load(&path).unwrap();
        assert_eq!(settings.stroke_color, Color::from_rgb8(0x12, 0x34, 0x56));

        let missing = PathSettings::load(&dir.join("missing.toml")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read settings file"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
