//! Module implementing the drawing surface and its shape primitives.
//!
//! Coordinates are signed so that shapes may extend past the edges;
//! everything outside the image is clipped. Bounding boxes are inclusive
//! on both ends, so a box from `(0, 0)` to `(9, 9)` covers 10x10 pixels.

use std::fmt;

use image::{Pixel, RgbImage};

use crate::model::Color;


/// Inclusive rectangle given by its top-left and bottom-right pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        BBox{x0, y0, x1, y1}
    }

    /// Create a box at given position, spanning `width` by `height` pixels
    /// *between* its corners (so it covers one pixel more in each direction).
    #[inline]
    pub fn at(x: i32, y: i32, width: i32, height: i32) -> Self {
        BBox::new(x, y, x + width, y + height)
    }
}


/// RGB drawing surface.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with given color.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Canvas{img: RgbImage::from_pixel(width, height, background.into())}
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Color of the pixel at given position, if it's within the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.coords(x, y).map(|(x, y)| (*self.img.get_pixel(x, y)).into())
    }

    #[inline]
    pub fn as_image(&self) -> &RgbImage {
        &self.img
    }

    #[inline]
    pub fn into_image(self) -> RgbImage {
        self.img
    }

    fn coords(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.img.width() && y < self.img.height() { Some((x, y)) } else { None }
    }
}

// Pixel operations.
impl Canvas {
    /// Set a single pixel. Does nothing if it's outside the canvas.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some((x, y)) = self.coords(x, y) {
            self.img.put_pixel(x, y, color.into());
        }
    }

    /// Paint a pixel with given color at partial coverage (0.0 to 1.0).
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if let Some((x, y)) = self.coords(x, y) {
            let alpha = (coverage.clamp(0.0, 1.0) * 255f32) as u8;
            let pixel = self.img.get_pixel_mut(x, y);
            let mut dst = pixel.to_rgba();
            dst.blend(&color.to_rgba(alpha));
            *pixel = dst.to_rgb();
        }
    }

    /// Set every pixel to a color computed from its position.
    pub fn fill_with<F>(&mut self, f: F)
        where F: Fn(u32, u32) -> Color
    {
        for (x, y, pixel) in self.img.enumerate_pixels_mut() {
            *pixel = f(x, y).into();
        }
    }
}

// Shapes.
impl Canvas {
    /// Draw a one pixel wide vertical line between two rows (inclusive).
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Color) {
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        for y in top.max(0)..=bottom.min(self.height() as i32 - 1) {
            self.put(x, y, color);
        }
    }

    /// Draw a one pixel wide horizontal line between two columns (inclusive).
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        for x in left.max(0)..=right.min(self.width() as i32 - 1) {
            self.put(x, y, color);
        }
    }

    /// Fill the ellipse inscribed in given bounding box.
    ///
    /// A pixel is filled when its center lies within the ellipse.
    pub fn fill_ellipse(&mut self, bbox: BBox, color: Color) {
        let cx = (bbox.x0 + bbox.x1 + 1) as f32 / 2.0;
        let cy = (bbox.y0 + bbox.y1 + 1) as f32 / 2.0;
        let rx = (bbox.x1 - bbox.x0 + 1) as f32 / 2.0;
        let ry = (bbox.y1 - bbox.y0 + 1) as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        self.fill_where(bbox, color, |px, py| {
            let dx = (px - cx) / rx;
            let dy = (py - cy) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    /// Fill a rectangle whose corners are rounded with given radius.
    pub fn fill_rounded_rect(&mut self, bbox: BBox, radius: u32, color: Color) {
        let width = (bbox.x1 - bbox.x0 + 1) as f32;
        let height = (bbox.y1 - bbox.y0 + 1) as f32;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let r = (radius as f32).min(width / 2.0).min(height / 2.0);

        // Centers of the corner arcs.
        let (left, right) = (bbox.x0 as f32 + r, (bbox.x1 + 1) as f32 - r);
        let (top, bottom) = (bbox.y0 as f32 + r, (bbox.y1 + 1) as f32 - r);
        self.fill_where(bbox, color, |px, py| {
            let dx = px - px.max(left).min(right);
            let dy = py - py.max(top).min(bottom);
            dx * dx + dy * dy <= r * r
        });
    }

    /// Fill pixels of the box (clipped to the canvas) whose centers satisfy a predicate.
    fn fill_where<P>(&mut self, bbox: BBox, color: Color, inside: P)
        where P: Fn(f32, f32) -> bool
    {
        let x_range = bbox.x0.max(0)..=bbox.x1.min(self.width() as i32 - 1);
        let y_range = bbox.y0.max(0)..=bbox.y1.min(self.height() as i32 - 1);
        for y in y_range {
            for x in x_range.clone() {
                if inside(x as f32 + 0.5, y as f32 + 0.5) {
                    self.put(x, y, color);
                }
            }
        }
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(fmt, "Canvas({}x{})", width, height)
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use crate::model::Color;
    use super::{BBox, Canvas};

    const BG: Color = Color(0, 0, 0);
    const INK: Color = Color(200, 100, 50);

    #[test]
    fn new_canvas_is_filled() {
        let canvas = Canvas::new(4, 3, INK);
        assert_that!(canvas.dimensions()).is_equal_to((4, 3));
        assert_that!(canvas.get(3, 2)).is_equal_to(Some(INK));
        assert_that!(canvas.get(4, 2)).is_none();
        assert_that!(canvas.get(-1, 0)).is_none();
    }

    #[test]
    fn lines_are_inclusive_and_clipped() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.vline(3, -5, 20, INK);
        assert_that!((0..10).all(|y| canvas.get(3, y) == Some(INK))).is_true();
        assert_that!(canvas.get(2, 5)).is_equal_to(Some(BG));

        canvas.hline(7, 2, 4, INK);
        assert_that!(canvas.get(2, 7)).is_equal_to(Some(INK));
        assert_that!(canvas.get(4, 7)).is_equal_to(Some(INK));
        assert_that!(canvas.get(5, 7)).is_equal_to(Some(BG));
    }

    #[test]
    fn ellipse() {
        let mut canvas = Canvas::new(20, 20, BG);
        canvas.fill_ellipse(BBox::new(0, 0, 9, 9), INK);
        assert_that!(canvas.get(5, 5)).is_equal_to(Some(INK));
        assert_that!(canvas.get(0, 5)).is_equal_to(Some(INK));
        assert_that!(canvas.get(0, 0)).is_equal_to(Some(BG));
        assert_that!(canvas.get(10, 5)).is_equal_to(Some(BG));
    }

    #[test]
    fn ellipse_partly_outside() {
        let mut canvas = Canvas::new(20, 20, BG);
        canvas.fill_ellipse(BBox::new(-10, -10, 9, 9), INK);
        assert_that!(canvas.get(0, 0)).is_equal_to(Some(INK));
        assert_that!(canvas.get(9, 9)).is_equal_to(Some(BG));
    }

    #[test]
    fn rounded_rect_corners() {
        let mut canvas = Canvas::new(40, 20, BG);
        canvas.fill_rounded_rect(BBox::at(0, 0, 30, 10), 5, INK);
        assert_that!(canvas.get(0, 0)).is_equal_to(Some(BG));
        assert_that!(canvas.get(30, 10)).is_equal_to(Some(BG));
        assert_that!(canvas.get(0, 5)).is_equal_to(Some(INK));
        assert_that!(canvas.get(15, 0)).is_equal_to(Some(INK));
        assert_that!(canvas.get(15, 10)).is_equal_to(Some(INK));
        assert_that!(canvas.get(31, 5)).is_equal_to(Some(BG));
    }

    #[test]
    fn blending() {
        let mut canvas = Canvas::new(3, 1, BG);
        canvas.blend(0, 0, INK, 1.0);
        canvas.blend(1, 0, INK, 0.0);
        canvas.blend(2, 0, Color(255, 255, 255), 0.5);
        assert_that!(canvas.get(0, 0)).is_equal_to(Some(INK));
        assert_that!(canvas.get(1, 0)).is_equal_to(Some(BG));

        let Color(r, g, b) = canvas.get(2, 0).unwrap();
        assert_that!(r > 100 && r < 155).is_true();
        assert_that!(r == g && g == b).is_true();
    }

    #[test]
    fn fill_with_position() {
        let mut canvas = Canvas::new(3, 2, BG);
        canvas.fill_with(|x, y| Color(x as u8, y as u8, 7));
        assert_that!(canvas.get(2, 1)).is_equal_to(Some(Color(2, 1, 7)));
    }
}
