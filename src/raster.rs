//! In-memory draw layer backed by an RGBA image buffer.
//!
//! Used where there is no browser canvas: headless hosts and tests. Strokes
//! are rasterized with round caps and no anti-aliasing; a pixel is covered
//! when its center lies inside the shape.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use std::io::Cursor;
use std::ops::Range;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::camera::Point;
use crate::config::Brush;
use crate::error::BoardError;
use crate::surface::DrawSurface;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone)]
pub struct RasterLayer {
    image: RgbaImage,
}

impl RasterLayer {
    /// A fully transparent layer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    /// RGBA value at `(x, y)`, or `None` outside the layer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Number of pixels that are not fully transparent.
    #[must_use]
    pub fn painted_pixels(&self) -> usize {
        self.image.pixels().filter(|p| p.0[3] != 0).count()
    }

    /// Encode the layer as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Encode`] if encoding fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, BoardError> {
        let mut bytes = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Set every pixel whose center satisfies `covered` to `color`.
    fn fill_where(&mut self, xs: Range<u32>, ys: Range<u32>, color: Rgba<u8>, covered: impl Fn(Point) -> bool) {
        for y in ys {
            for x in xs.clone() {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if covered(center) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }
}

impl DrawSurface for RasterLayer {
    type Snapshot = RgbaImage;

    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), BoardError> {
        self.image = RgbaImage::new(width, height);
        Ok(())
    }

    fn stroke_segment(&mut self, from: Point, to: Point, brush: &Brush) -> Result<(), BoardError> {
        let [r, g, b] = brush.rgb()?;
        let half = brush.width / 2.0;
        let (w, h) = self.size();
        let xs = pixel_range(from.x.min(to.x) - half, from.x.max(to.x) + half, w);
        let ys = pixel_range(from.y.min(to.y) - half, from.y.max(to.y) + half, h);
        self.fill_where(xs, ys, Rgba([r, g, b, 255]), |p| distance_to_segment(p, from, to) <= half);
        Ok(())
    }

    fn erase_disk(&mut self, center: Point, radius: f64) -> Result<(), BoardError> {
        let (w, h) = self.size();
        let xs = pixel_range(center.x - radius, center.x + radius, w);
        let ys = pixel_range(center.y - radius, center.y + radius, h);
        self.fill_where(xs, ys, TRANSPARENT, |p| p.distance(center) <= radius);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), BoardError> {
        for p in self.image.pixels_mut() {
            *p = TRANSPARENT;
        }
        Ok(())
    }

    fn snapshot(&self) -> Result<RgbaImage, BoardError> {
        Ok(self.image.clone())
    }

    fn restore(&mut self, snapshot: &RgbaImage) -> Result<(), BoardError> {
        if snapshot.dimensions() == self.image.dimensions() {
            self.image.clone_from(snapshot);
        } else {
            // Same as putting smaller/larger image data onto a canvas: the
            // overlap is copied at the origin, the rest is cleared.
            self.clear()?;
            image::imageops::replace(&mut self.image, snapshot, 0, 0);
        }
        Ok(())
    }
}

/// Pixel indices covering `[lo, hi]`, clamped to `0..limit`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_range(lo: f64, hi: f64, limit: u32) -> Range<u32> {
    let limit_f = f64::from(limit);
    let start = lo.floor().max(0.0).min(limit_f) as u32;
    let end = hi.ceil().max(0.0).min(limit_f) as u32;
    start..end
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 <= f64::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}
