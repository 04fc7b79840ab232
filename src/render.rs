//! Browser rendering: the draw layer over a 2D context and the per-frame
//! output composite.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! The draw layer keeps accumulated strokes; the output layer is redrawn from
//! scratch every frame as the mirrored camera image with hand skeletons on top.
//!
//! All fallible `Canvas2D` calls propagate errors as [`BoardError`].

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, ImageData};

use crate::camera::{Mirror, Point};
use crate::config::Brush;
use crate::consts::{HAND_CONNECTIONS, SKELETON_COLOR, SKELETON_LINE_WIDTH};
use crate::error::BoardError;
use crate::landmark::Hand;
use crate::surface::DrawSurface;

/// The 2D context of `canvas`.
///
/// # Errors
///
/// Returns [`BoardError::Unavailable`] if the canvas has no 2D context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, BoardError> {
    canvas
        .get_context("2d")?
        .ok_or(BoardError::Unavailable("2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| BoardError::Unavailable("2d context"))
}

// =============================================================
// Draw layer
// =============================================================

/// Persistent draw layer backed by a `<canvas>`.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// # Errors
    ///
    /// Returns [`BoardError::Unavailable`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BoardError> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// The layer encoded as a PNG data URL. The camera feed is not included.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be serialized.
    pub fn to_data_url(&self) -> Result<String, BoardError> {
        self.canvas.to_data_url().map_err(BoardError::from)
    }
}

impl DrawSurface for CanvasSurface {
    type Snapshot = ImageData;

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), BoardError> {
        // Assigning the size reallocates the backing store, which also clears it.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    fn stroke_segment(&mut self, from: Point, to: Point, brush: &Brush) -> Result<(), BoardError> {
        self.ctx.set_stroke_style_str(&brush.color);
        self.ctx.set_line_width(brush.width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn erase_disk(&mut self, center: Point, radius: f64) -> Result<(), BoardError> {
        self.ctx.save();
        let result = clip_and_clear(&self.ctx, center, radius);
        self.ctx.restore();
        result.map_err(BoardError::from)
    }

    fn clear(&mut self) -> Result<(), BoardError> {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(w), f64::from(h));
        Ok(())
    }

    fn snapshot(&self) -> Result<ImageData, BoardError> {
        let (w, h) = self.size();
        self.ctx.get_image_data(0.0, 0.0, f64::from(w), f64::from(h)).map_err(BoardError::from)
    }

    fn restore(&mut self, snapshot: &ImageData) -> Result<(), BoardError> {
        self.ctx.put_image_data(snapshot, 0.0, 0.0).map_err(BoardError::from)
    }
}

fn clip_and_clear(ctx: &CanvasRenderingContext2d, center: Point, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.clip();
    ctx.clear_rect(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
    Ok(())
}

// =============================================================
// Output layer
// =============================================================

/// Per-frame composite of the mirrored camera image and hand skeletons.
pub struct OutputLayer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl OutputLayer {
    /// # Errors
    ///
    /// Returns [`BoardError::Unavailable`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BoardError> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn clear(&self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    /// Redraw the layer: mirrored video frame, then each hand's skeleton.
    ///
    /// # Errors
    ///
    /// Returns an error if a `Canvas2D` call fails. The context transform is
    /// restored either way.
    pub fn draw_frame(&self, video: &HtmlVideoElement, hands: &[Hand]) -> Result<(), BoardError> {
        self.ctx.save();
        let result = self.draw_mirrored(video, hands);
        self.ctx.restore();
        result.map_err(BoardError::from)
    }

    fn draw_mirrored(&self, video: &HtmlVideoElement, hands: &[Hand]) -> Result<(), JsValue> {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.translate(w, 0.0)?;
        self.ctx.scale(-1.0, 1.0)?;
        self.ctx.draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, w, h)?;

        // Inside the flipped transform, so landmarks are placed un-mirrored.
        let mirror = Mirror { width: w, height: h };
        for hand in hands {
            self.draw_skeleton(hand, &mirror);
        }
        Ok(())
    }

    fn draw_skeleton(&self, hand: &Hand, mirror: &Mirror) {
        let lm = hand.landmarks();
        self.ctx.set_stroke_style_str(SKELETON_COLOR);
        self.ctx.set_line_width(SKELETON_LINE_WIDTH);
        self.ctx.begin_path();
        for (a, b) in HAND_CONNECTIONS {
            let pa = mirror.to_frame(lm[a]);
            let pb = mirror.to_frame(lm[b]);
            self.ctx.move_to(pa.x, pa.y);
            self.ctx.line_to(pb.x, pb.y);
        }
        self.ctx.stroke();
    }

    fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }
}
