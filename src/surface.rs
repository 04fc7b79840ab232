//! The drawing primitives the engine needs from a draw layer.
//!
//! Two implementations exist: [`crate::render::CanvasSurface`] over a browser
//! 2D context, and `raster::RasterLayer` over an in-memory RGBA
//! buffer (`headless` feature).

use crate::camera::Point;
use crate::config::Brush;
use crate::error::BoardError;

pub trait DrawSurface {
    /// A full, self-contained copy of the layer's pixels.
    type Snapshot;

    /// Layer size in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Reallocate the layer. Existing pixels are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing surface cannot be resized.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), BoardError>;

    /// Stroke a straight segment with the given brush.
    ///
    /// # Errors
    ///
    /// Returns an error if the brush is invalid or the draw call fails.
    fn stroke_segment(&mut self, from: Point, to: Point, brush: &Brush) -> Result<(), BoardError>;

    /// Make every pixel within `radius` of `center` transparent.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw call fails.
    fn erase_disk(&mut self, center: Point, radius: f64) -> Result<(), BoardError>;

    /// Make the whole layer transparent.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw call fails.
    fn clear(&mut self) -> Result<(), BoardError>;

    /// Copy the whole layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the pixels cannot be read.
    fn snapshot(&self) -> Result<Self::Snapshot, BoardError>;

    /// Replace the whole layer with a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the pixels cannot be written.
    fn restore(&mut self, snapshot: &Self::Snapshot) -> Result<(), BoardError>;
}
