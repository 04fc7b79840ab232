//! Camera-to-canvas coordinate mapping.
//!
//! The camera feed is shown mirrored so the user sees themselves as in a
//! mirror. Landmarks arrive normalized to the un-mirrored frame, so the draw
//! layer position of a landmark is `(width * (1 - x), height * y)`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::landmark::Landmark;

/// A point in draw-layer pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Maps normalized frame coordinates onto a layer of the given pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror {
    pub width: f64,
    pub height: f64,
}

impl Mirror {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width: f64::from(width), height: f64::from(height) }
    }

    /// Draw-layer position of a landmark, mirrored horizontally.
    #[must_use]
    pub fn to_canvas(&self, landmark: Landmark) -> Point {
        Point {
            x: self.width * (1.0 - f64::from(landmark.x)),
            y: self.height * f64::from(landmark.y),
        }
    }

    /// Un-mirrored position of a landmark, for drawing inside a context that
    /// already applies the horizontal flip.
    #[must_use]
    pub fn to_frame(&self, landmark: Landmark) -> Point {
        Point {
            x: self.width * f64::from(landmark.x),
            y: self.height * f64::from(landmark.y),
        }
    }
}
