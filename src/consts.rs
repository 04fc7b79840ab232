//! Shared constants for the gesture board.

// ── Hand landmarks ──────────────────────────────────────────────

/// Number of landmarks the detector reports per hand.
pub const LANDMARKS_PER_HAND: usize = 21;

/// Values per landmark in a flat detector buffer (`x`, `y`, `z`).
pub const LANDMARK_STRIDE: usize = 3;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Tip/base pairs compared to decide whether a finger is extended.
///
/// The thumb uses its IP joint as the base; the other fingers use the knuckle.
pub const FINGER_PAIRS: [(usize, usize); 5] = [
    (THUMB_TIP, THUMB_IP),
    (INDEX_TIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_MCP),
    (RING_TIP, RING_MCP),
    (PINKY_TIP, PINKY_MCP),
];

/// Skeleton connections drawn over the camera image.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP), (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

// ── Session defaults ────────────────────────────────────────────

/// Radius of the erase disk, in draw-layer pixels.
pub const DEFAULT_ERASE_RADIUS: f64 = 40.0;

/// Open palm must be held this long before the draw layer is cleared.
pub const DEFAULT_CLEAR_DELAY_MS: u64 = 2000;

/// Maximum number of undo snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

pub const DEFAULT_BRUSH_COLOR: &str = "#000000";
pub const DEFAULT_BRUSH_WIDTH: f64 = 5.0;

/// Requested camera capture size. The layers follow the video's native size.
pub const DEFAULT_CAPTURE_WIDTH: u32 = 640;
pub const DEFAULT_CAPTURE_HEIGHT: u32 = 480;

pub const DEFAULT_EXPORT_FILENAME: &str = "drawing.png";

// ── Skeleton overlay ────────────────────────────────────────────

pub const SKELETON_COLOR: &str = "white";
pub const SKELETON_LINE_WIDTH: f64 = 2.0;
