//! Session configuration.
//!
//! The host may hand a JSON object to [`crate::board::GestureBoard::new`];
//! every field is optional and falls back to the defaults in
//! [`crate::consts`]. Keys are camelCase so the `detector` block can be passed
//! to the hand detector's `setOptions` unchanged.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH, DEFAULT_CAPTURE_HEIGHT, DEFAULT_CAPTURE_WIDTH, DEFAULT_CLEAR_DELAY_MS,
    DEFAULT_ERASE_RADIUS, DEFAULT_EXPORT_FILENAME, DEFAULT_HISTORY_CAPACITY,
};
use crate::error::BoardError;

/// Stroke style for drawn segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brush {
    /// CSS hex color, `#rgb` or `#rrggbb`.
    pub color: String,
    /// Line width in draw-layer pixels.
    pub width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self { color: DEFAULT_BRUSH_COLOR.to_string(), width: DEFAULT_BRUSH_WIDTH }
    }
}

impl Brush {
    /// Parse the color into RGB components.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Color`] if the color is not a hex color.
    pub fn rgb(&self) -> Result<[u8; 3], BoardError> {
        parse_hex_color(&self.color)
    }
}

/// Options forwarded untouched to the hand-landmark detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorOptions {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self { max_num_hands: 2, model_complexity: 1, min_detection_confidence: 0.7, min_tracking_confidence: 0.5 }
    }
}

/// Requested camera capture size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CaptureSize {
    fn default() -> Self {
        Self { width: DEFAULT_CAPTURE_WIDTH, height: DEFAULT_CAPTURE_HEIGHT }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    pub erase_radius: f64,
    pub clear_delay_ms: u64,
    pub history_capacity: usize,
    pub brush: Brush,
    pub detector: DetectorOptions,
    pub capture: CaptureSize,
    pub export_filename: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            erase_radius: DEFAULT_ERASE_RADIUS,
            clear_delay_ms: DEFAULT_CLEAR_DELAY_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            brush: Brush::default(),
            detector: DetectorOptions::default(),
            capture: CaptureSize::default(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl SessionConfig {
    /// Parse and validate a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ConfigJson`] for malformed JSON and
    /// [`BoardError::ConfigValue`] / [`BoardError::Color`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, BoardError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), BoardError> {
        if !(self.erase_radius.is_finite() && self.erase_radius > 0.0) {
            return Err(BoardError::ConfigValue(format!("eraseRadius must be positive, got {}", self.erase_radius)));
        }
        if self.history_capacity == 0 {
            return Err(BoardError::ConfigValue("historyCapacity must be at least 1".into()));
        }
        validate_brush_width(self.brush.width)?;
        self.brush.rgb()?;
        for (name, value) in [
            ("minDetectionConfidence", self.detector.min_detection_confidence),
            ("minTrackingConfidence", self.detector.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(BoardError::ConfigValue(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if self.export_filename.trim().is_empty() {
            return Err(BoardError::ConfigValue("exportFilename must not be empty".into()));
        }
        Ok(())
    }
}

/// Reject zero, negative, and non-finite brush widths.
///
/// # Errors
///
/// Returns [`BoardError::ConfigValue`] describing the bad width.
pub fn validate_brush_width(width: f64) -> Result<(), BoardError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(BoardError::ConfigValue(format!("brush width must be positive, got {width}")))
    }
}

/// Parse `#rgb` or `#rrggbb` into RGB components.
///
/// # Errors
///
/// Returns [`BoardError::Color`] for anything else.
pub fn parse_hex_color(raw: &str) -> Result<[u8; 3], BoardError> {
    let bad = || BoardError::Color(raw.to_string());
    let hex = raw.strip_prefix('#').ok_or_else(bad)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    match hex.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
            Ok([channel(0)?, channel(2)?, channel(4)?])
        }
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17).map_err(|_| bad());
            Ok([channel(0)?, channel(1)?, channel(2)?])
        }
        _ => Err(bad()),
    }
}
