//! The gesture interpreter: turns per-frame gesture labels into draw-layer
//! mutations.
//!
//! [`EngineCore`] owns all session state (tracking flag, pen position, the
//! pending clear, undo history) and the draw layer behind [`DrawSurface`]. It
//! has no browser dependency; [`crate::board::GestureBoard`] wraps it for the
//! web page and tests drive it directly.
//!
//! | Gesture | Effect |
//! |---------|--------|
//! | fist | erase a disk around the cursor |
//! | open palm | arm a deferred full clear (once) |
//! | two fingers | pause; break the stroke |
//! | one finger | stroke from the previous pen position to the cursor |
//! | none | idle; break the stroke |
//!
//! Anything other than an open palm cancels a pending clear, as does a frame
//! with no hands.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::fmt;
use std::time::Duration;

use crate::camera::{Mirror, Point};
use crate::config::{Brush, SessionConfig, parse_hex_color, validate_brush_width};
use crate::error::BoardError;
use crate::gesture::{Gesture, classify};
use crate::history::UndoHistory;
use crate::input::{Command, Key};
use crate::landmark::Hand;
use crate::surface::DrawSurface;
use crate::timer::Scheduler;

/// What the status line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Drawing,
    Erasing,
    Clearing { delay_ms: u64 },
    Paused,
    Idle,
    Stopped,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("Status: Ready for gestures..."),
            Self::Drawing => f.write_str("Status: Drawing..."),
            Self::Erasing => f.write_str("Status: Erasing..."),
            Self::Clearing { delay_ms } if delay_ms % 1000 == 0 => {
                write!(f, "Status: Clearing in {}s...", delay_ms / 1000)
            }
            Self::Clearing { delay_ms } => {
                #[allow(clippy::cast_precision_loss)]
                let secs = *delay_ms as f64 / 1000.0;
                write!(f, "Status: Clearing in {secs:.1}s...")
            }
            Self::Paused => f.write_str("Status: Two fingers up (paused)"),
            Self::Idle => f.write_str("Status: Idle"),
            Self::Stopped => f.write_str("Status: Stopped. Ready to restart."),
        }
    }
}

/// Actions returned from engine calls for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    StatusChanged(Status),
    SegmentDrawn { from: Point, to: Point },
    Erased { center: Point, radius: f64 },
    ClearArmed,
    ClearCancelled,
    Cleared,
    Undone,
}

/// Session state and the draw layer for one gesture-tracking session.
pub struct EngineCore<S: DrawSurface, T: Scheduler> {
    surface: S,
    scheduler: T,
    config: SessionConfig,
    brush: Brush,
    tracking: bool,
    last_pen: Option<Point>,
    pending_clear: Option<T::Handle>,
    history: UndoHistory<S::Snapshot>,
    status: Status,
}

impl<S: DrawSurface, T: Scheduler> EngineCore<S, T> {
    #[must_use]
    pub fn new(surface: S, scheduler: T, config: SessionConfig) -> Self {
        Self {
            surface,
            scheduler,
            brush: config.brush.clone(),
            history: UndoHistory::new(config.history_capacity),
            config,
            tracking: false,
            last_pen: None,
            pending_clear: None,
            status: Status::Idle,
        }
    }

    // --- Session ---

    /// Enable tracking. The first drawing frame after this starts a new stroke.
    pub fn start(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.tracking = true;
        self.last_pen = None;
        self.set_status(Status::Ready, &mut actions);
        log::info!("tracking started");
        actions
    }

    /// Disable tracking, cancel any pending clear, and clear the draw layer.
    ///
    /// Safe to call when already stopped. Undo history is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw layer cannot be cleared; session state is
    /// reset regardless.
    pub fn stop(&mut self) -> Result<Vec<Action>, BoardError> {
        let mut actions = Vec::new();
        let was_tracking = self.tracking;
        self.tracking = false;
        self.last_pen = None;
        self.cancel_clear(&mut actions);
        self.set_status(Status::Stopped, &mut actions);
        self.surface.clear()?;
        if was_tracking {
            log::info!("tracking stopped; {} undo snapshots kept", self.history.len());
        }
        Ok(actions)
    }

    /// Reallocate the draw layer to the video's native size. Existing strokes
    /// are lost.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be resized.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), BoardError> {
        if self.last_pen.is_some() {
            log::warn!("draw layer resized mid-stroke; strokes discarded");
        }
        self.surface.resize(width, height)?;
        log::info!("draw layer resized to {width}x{height}");
        Ok(())
    }

    // --- Frames ---

    /// Process one detector frame. Hands are handled in order; a later hand
    /// overwrites state set by an earlier one.
    ///
    /// # Errors
    ///
    /// Returns the first draw-layer failure; hands after it are not processed.
    pub fn on_frame(&mut self, hands: &[Hand]) -> Result<Vec<Action>, BoardError> {
        let mut actions = Vec::new();
        if !self.tracking {
            return Ok(actions);
        }

        if hands.is_empty() {
            self.cancel_clear(&mut actions);
            self.set_status(Status::Idle, &mut actions);
            return Ok(actions);
        }

        let mirror = self.mirror();
        for hand in hands {
            let gesture = classify(hand);
            let cursor = mirror.to_canvas(hand.index_tip());
            self.apply(gesture, cursor, &mut actions)?;
        }
        Ok(actions)
    }

    /// Apply one classified gesture at a cursor position in draw-layer space.
    /// Does nothing unless tracking.
    fn apply(&mut self, gesture: Gesture, cursor: Point, actions: &mut Vec<Action>) -> Result<(), BoardError> {
        if !self.tracking {
            return Ok(());
        }
        match gesture {
            Gesture::Fist => {
                self.cancel_clear(actions);
                self.set_status(Status::Erasing, actions);
                let radius = self.config.erase_radius;
                self.surface.erase_disk(cursor, radius)?;
                actions.push(Action::Erased { center: cursor, radius });
            }
            Gesture::OpenPalm => {
                let delay_ms = self.config.clear_delay_ms;
                self.set_status(Status::Clearing { delay_ms }, actions);
                if self.pending_clear.is_none() {
                    self.pending_clear = Some(self.scheduler.schedule(Duration::from_millis(delay_ms)));
                    actions.push(Action::ClearArmed);
                    log::debug!("clear armed for {delay_ms}ms");
                }
            }
            Gesture::TwoFingers => {
                self.cancel_clear(actions);
                self.set_status(Status::Paused, actions);
                self.last_pen = None;
            }
            Gesture::OneFinger => {
                self.cancel_clear(actions);
                self.set_status(Status::Drawing, actions);
                if let Some(from) = self.last_pen {
                    self.draw_segment(from, cursor)?;
                    actions.push(Action::SegmentDrawn { from, to: cursor });
                }
                self.last_pen = Some(cursor);
            }
            Gesture::Idle => {
                self.cancel_clear(actions);
                self.set_status(Status::Idle, actions);
                self.last_pen = None;
            }
        }
        Ok(())
    }

    /// Called by the scheduler once the clear delay has elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw layer cannot be cleared.
    pub fn fire_clear(&mut self) -> Result<Vec<Action>, BoardError> {
        if self.pending_clear.take().is_none() {
            log::warn!("clear fired with nothing armed");
            return Ok(Vec::new());
        }
        self.surface.clear()?;
        log::info!("draw layer cleared");
        Ok(vec![Action::Cleared])
    }

    // --- Undo / keys ---

    /// Restore the layer to its state before the most recent segment.
    ///
    /// Only while tracking. With empty history the layer is left as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written back.
    pub fn undo(&mut self) -> Result<Vec<Action>, BoardError> {
        if !self.tracking {
            return Ok(Vec::new());
        }
        let Some(snapshot) = self.history.pop() else {
            log::debug!("undo: history empty");
            return Ok(Vec::new());
        };
        self.surface.restore(&snapshot)?;
        Ok(vec![Action::Undone])
    }

    /// Handle a key press.
    ///
    /// # Errors
    ///
    /// Propagates errors from the bound command.
    pub fn on_key_down(&mut self, key: &Key) -> Result<Vec<Action>, BoardError> {
        match Command::from_key(key) {
            Some(Command::Undo) => self.undo(),
            None => Ok(Vec::new()),
        }
    }

    // --- Brush ---

    /// # Errors
    ///
    /// Returns [`BoardError::Color`] unless `color` is `#rgb` or `#rrggbb`.
    pub fn set_color(&mut self, color: &str) -> Result<(), BoardError> {
        parse_hex_color(color)?;
        self.brush.color = color.to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`BoardError::ConfigValue`] unless `width` is positive and finite.
    pub fn set_brush_width(&mut self, width: f64) -> Result<(), BoardError> {
        validate_brush_width(width)?;
        self.brush.width = width;
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// The previous drawing anchor, if a stroke is in progress.
    #[must_use]
    pub fn last_pen(&self) -> Option<Point> {
        self.last_pen
    }

    #[must_use]
    pub fn has_pending_clear(&self) -> bool {
        self.pending_clear.is_some()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // --- Internals ---

    fn mirror(&self) -> Mirror {
        let (width, height) = self.surface.size();
        Mirror::new(width, height)
    }

    /// Snapshot, then stroke. The snapshot is only recorded once the stroke
    /// lands, so a failed stroke never evicts older history.
    fn draw_segment(&mut self, from: Point, to: Point) -> Result<(), BoardError> {
        let snapshot = self.surface.snapshot()?;
        self.surface.stroke_segment(from, to, &self.brush)?;
        self.history.push(snapshot);
        Ok(())
    }

    fn cancel_clear(&mut self, actions: &mut Vec<Action>) {
        // Dropping the handle cancels the timer.
        if self.pending_clear.take().is_some() {
            actions.push(Action::ClearCancelled);
            log::debug!("clear cancelled");
        }
    }

    fn set_status(&mut self, status: Status, actions: &mut Vec<Action>) {
        if self.status != status {
            self.status = status;
            log::debug!("{status}");
            actions.push(Action::StatusChanged(status));
        }
    }
}
