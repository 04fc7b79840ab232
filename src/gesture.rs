//! Gesture classification: one hand's landmarks to a discrete label.
//!
//! Classification compares the vertical position of each fingertip with its
//! base joint. In image space smaller `y` is higher, so `tip.y < base.y` means
//! the finger points up. This holds for an upright hand only; a rotated hand
//! is misread, and that is accepted.
//!
//! Rules are checked in a fixed priority order:
//!
//! 1. every finger curled → [`Gesture::Fist`]
//! 2. every finger extended → [`Gesture::OpenPalm`]
//! 3. index and middle extended → [`Gesture::TwoFingers`]
//! 4. index extended → [`Gesture::OneFinger`]
//! 5. anything else → [`Gesture::Idle`]
//!
//! A finger whose tip and base sit at exactly the same height is neither
//! extended nor curled.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::consts::{FINGER_PAIRS, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP};
use crate::landmark::Hand;

/// Discrete pose of one hand in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// All fingers curled: erase around the cursor.
    Fist,
    /// All fingers extended: clear the layer once held long enough.
    OpenPalm,
    /// Index finger extended: draw.
    OneFinger,
    /// Index and middle extended: pause drawing.
    TwoFingers,
    /// No recognised pose.
    Idle,
}

/// Classify a hand. Pure and total.
#[must_use]
pub fn classify(hand: &Hand) -> Gesture {
    if all_fingers_curled(hand) {
        Gesture::Fist
    } else if all_fingers_extended(hand) {
        Gesture::OpenPalm
    } else if is_finger_up(hand, INDEX_TIP, INDEX_MCP) && is_finger_up(hand, MIDDLE_TIP, MIDDLE_MCP) {
        Gesture::TwoFingers
    } else if is_finger_up(hand, INDEX_TIP, INDEX_MCP) {
        Gesture::OneFinger
    } else {
        Gesture::Idle
    }
}

/// Whether the finger with the given tip/base indices points up. Indices
/// outside the hand never count as up.
#[must_use]
pub fn is_finger_up(hand: &Hand, tip: usize, base: usize) -> bool {
    tip_and_base(hand, tip, base).is_some_and(|(t, b)| t < b)
}

fn is_finger_curled(hand: &Hand, tip: usize, base: usize) -> bool {
    tip_and_base(hand, tip, base).is_some_and(|(t, b)| t > b)
}

/// Vertical positions of a finger's tip and base.
fn tip_and_base(hand: &Hand, tip: usize, base: usize) -> Option<(f32, f32)> {
    Some((hand.get(tip)?.y, hand.get(base)?.y))
}

fn all_fingers_curled(hand: &Hand) -> bool {
    FINGER_PAIRS.iter().all(|&(tip, base)| is_finger_curled(hand, tip, base))
}

fn all_fingers_extended(hand: &Hand) -> bool {
    FINGER_PAIRS.iter().all(|&(tip, base)| is_finger_up(hand, tip, base))
}
