//! Hand landmarks as reported by the detector.
//!
//! The detector hands over each frame as a flat `f32` buffer: `num_hands`
//! consecutive blocks of 21 `(x, y, z)` triples. `x` and `y` are normalized to
//! the frame (`0..=1`, `y` grows downward); `z` is relative depth and unused by
//! the classifier.

#[cfg(test)]
#[path = "landmark_test.rs"]
mod landmark_test;

use crate::consts::{INDEX_TIP, LANDMARK_STRIDE, LANDMARKS_PER_HAND};
use crate::error::BoardError;

/// A single normalized hand joint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One detected hand in one frame.
///
/// There is no identity across frames; the detector may report hands in any
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    landmarks: [Landmark; LANDMARKS_PER_HAND],
}

impl Hand {
    #[must_use]
    pub fn new(landmarks: [Landmark; LANDMARKS_PER_HAND]) -> Self {
        Self { landmarks }
    }

    /// Build a hand from a slice that must hold exactly 21 landmarks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LandmarkCount`] for any other length.
    pub fn from_slice(points: &[Landmark]) -> Result<Self, BoardError> {
        let landmarks: [Landmark; LANDMARKS_PER_HAND] = points
            .try_into()
            .map_err(|_| BoardError::LandmarkCount { expected: LANDMARKS_PER_HAND, found: points.len() })?;
        Ok(Self { landmarks })
    }

    /// Landmark at a fixed anatomical index (see [`crate::consts`]).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.landmarks.get(index).copied()
    }

    #[must_use]
    pub fn landmarks(&self) -> &[Landmark; LANDMARKS_PER_HAND] {
        &self.landmarks
    }

    /// The index fingertip, which drives the cursor.
    #[must_use]
    pub fn index_tip(&self) -> Landmark {
        self.landmarks[INDEX_TIP]
    }
}

/// Split a flat detector buffer into hands.
///
/// # Errors
///
/// Returns [`BoardError::LandmarkCount`] when the buffer is too short for
/// `num_hands` complete hands. Trailing values beyond the last hand are ignored.
pub fn parse_hands(flat: &[f32], num_hands: usize) -> Result<Vec<Hand>, BoardError> {
    let per_hand = LANDMARKS_PER_HAND * LANDMARK_STRIDE;
    let needed = per_hand * num_hands;
    if flat.len() < needed {
        return Err(BoardError::LandmarkCount {
            expected: LANDMARKS_PER_HAND * num_hands,
            found: flat.len() / LANDMARK_STRIDE,
        });
    }

    flat[..needed]
        .chunks_exact(per_hand)
        .map(|block| {
            let points: Vec<Landmark> = block
                .chunks_exact(LANDMARK_STRIDE)
                .map(|v| Landmark::new(v[0], v[1], v[2]))
                .collect();
            Hand::from_slice(&points)
        })
        .collect()
}
