//! Module responsible for rendering text.
//!
//! Text is positioned the way most 2D drawing APIs do it: the origin
//! is the top-left corner of the line box, with the glyphs' baseline
//! one ascent below it. Text size is the em size in pixels.

use std::collections::HashSet;
use std::fmt;

use rusttype::{self, point, GlyphId, Scale};

use crate::model::{Color, HAlign};
use crate::resources::{BitmapFont, Font};
use super::canvas::Canvas;


/// Check if given font has all the glyphs for given text.
pub fn check(font: &Font, text: &str) {
    let mut missing = HashSet::new();
    for ch in text.chars() {
        let has_glyph = match *font {
            Font::Outline(ref f) => f.glyph(ch).id() != GlyphId(0),
            Font::Builtin(ref f) => f.has_glyph(ch),
        };
        if !has_glyph {
            missing.insert(ch as u32);
        }
    }
    if !missing.is_empty() {
        let mut missing: Vec<_> = missing.into_iter().collect();
        missing.sort();
        warn!("Missing glyphs for {} codepoint(s): {}", missing.len(),
            missing.into_iter().map(|c| format!("{:#x}", c)).collect::<Vec<_>>().join(", "));
    }
}


/// Style that the text is rendered with.
pub struct Style<'f> {
    font: &'f Font,
    size: f32,
    color: Color,
}

impl<'f> Style<'f> {
    #[inline]
    pub fn new(font: &'f Font, size: f32, color: Color) -> Self {
        assert!(size > 0.0, "text::Style got non-positive size ({})", size);
        Style{font, size, color}
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Scale that makes an outline font's em square `size` pixels tall.
    ///
    /// rusttype scales fonts by their ascent-to-descent height instead,
    /// so the two have to be reconciled using the unscaled metrics.
    fn outline_scale(&self, font: &rusttype::Font) -> Scale {
        let units_per_em = font.units_per_em() as f32;
        let v_metrics = font.v_metrics_unscaled();
        let height = v_metrics.ascent - v_metrics.descent;
        if units_per_em <= 0.0 || height <= 0.0 {
            return Scale::uniform(self.size);
        }
        Scale::uniform(self.size * height / units_per_em)
    }
}

impl<'f> fmt::Debug for Style<'f> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Style")
            .field("font", &self.font)
            .field("size", &self.size)
            .field("color", &self.color)
            .finish()
    }
}


/// Renders a line of text onto given canvas, with its box's top-left corner at `origin`.
///
/// Text should be single-line (line breaks are not interpreted)
/// and short enough to fit (or it will be clipped).
pub fn render_line(canvas: &mut Canvas, s: &str, origin: (i32, i32), style: &Style) {
    trace!("render_line(..., {:?}, {:?}, {:?})", s, origin, style);
    match *style.font {
        Font::Outline(ref font) => render_outline_line(canvas, font, s, origin, style),
        Font::Builtin(ref font) => render_bitmap_line(canvas, font, s, origin, style),
    }
}

/// Renders a line of text aligned horizontally within a span of `width` pixels
/// that starts at `origin`.
///
/// Returns the horizontal position the text ended up starting at.
pub fn render_aligned(canvas: &mut Canvas, s: &str, align: HAlign,
                      origin: (i32, i32), width: i32, style: &Style) -> i32 {
    let text_width = text_width(s, style) as i32;
    let x = origin.0 + align.offset_within(width, text_width);
    render_line(canvas, s, (x, origin.1), style);
    x
}

/// Compute the pixel width of given text: the horizontal extent of the ink
/// it would leave on the canvas.
pub fn text_width(s: &str, style: &Style) -> u32 {
    match *style.font {
        Font::Outline(ref font) => {
            let scale = style.outline_scale(font);
            let (left, right) = font.layout(s, scale, point(0.0, 0.0))
                .filter_map(|g| g.pixel_bounding_box())
                .fold((i32::MAX, i32::MIN), |(left, right), bb| {
                    (left.min(bb.min.x), right.max(bb.max.x))
                });
            if left > right { 0 } else { (right - left) as u32 }
        }
        Font::Builtin(ref font) => font.text_width(s, font.scale_for(style.size)),
    }
}


fn render_outline_line(canvas: &mut Canvas, font: &rusttype::Font, s: &str,
                       origin: (i32, i32), style: &Style) {
    let scale = style.outline_scale(font);
    let v_metrics = font.v_metrics(scale);
    let position = point(origin.0 as f32, origin.1 as f32 + v_metrics.ascent);

    for glyph in font.layout(s, scale, position) {
        if let Some(bbox) = glyph.pixel_bounding_box() {
            glyph.draw(|x, y, v| {
                let x = bbox.min.x + x as i32;
                let y = bbox.min.y + y as i32;
                canvas.blend(x, y, style.color, v);
            });
        }
    }
}

fn render_bitmap_line(canvas: &mut Canvas, font: &BitmapFont, s: &str,
                      origin: (i32, i32), style: &Style) {
    use crate::resources::bitmap::{GLYPH_ROWS, GLYPH_SPACING, GLYPH_WIDTH};

    let scale = font.scale_for(style.size);
    let advance = ((GLYPH_WIDTH + GLYPH_SPACING) * scale) as i32;
    let (mut x, y) = origin;
    for ch in s.chars() {
        for column in 0..GLYPH_WIDTH {
            for row in 0..GLYPH_ROWS {
                if !font.is_set(ch, column, row) {
                    continue;
                }
                let left = x + (column * scale) as i32;
                let top = y + (row * scale) as i32;
                for dy in 0..scale as i32 {
                    for dx in 0..scale as i32 {
                        canvas.put(left + dx, top + dy, style.color);
                    }
                }
            }
        }
        x += advance;
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use crate::model::{Color, HAlign};
    use crate::resources::Font;
    use super::super::canvas::Canvas;
    use super::{render_aligned, render_line, text_width, Style};

    const BG: Color = Color(0, 0, 0);
    const INK: Color = Color(255, 255, 255);

    #[test]
    fn builtin_width() {
        let font = Font::default();
        // Size 20 magnifies the 5x7 glyphs twice: (3 * 6 - 1) * 2.
        let style = Style::new(&font, 20.0, INK);
        assert_that!(text_width("abc", &style)).is_equal_to(34);
        assert_that!(text_width("", &style)).is_equal_to(0);
    }

    #[test]
    fn builtin_render_at_origin() {
        let font = Font::default();
        let style = Style::new(&font, 10.0, INK);
        let mut canvas = Canvas::new(20, 10, BG);
        render_line(&mut canvas, "|", (3, 1), &style);

        // The bar glyph occupies the middle column across all rows.
        assert_that!(canvas.get(5, 1)).is_equal_to(Some(INK));
        assert_that!(canvas.get(5, 7)).is_equal_to(Some(INK));
        assert_that!(canvas.get(5, 8)).is_equal_to(Some(BG));
        assert_that!(canvas.get(4, 1)).is_equal_to(Some(BG));
    }

    #[test]
    fn builtin_render_clips() {
        let font = Font::default();
        let style = Style::new(&font, 40.0, INK);
        let mut canvas = Canvas::new(8, 8, BG);
        render_line(&mut canvas, "WWW", (-10, -10), &style);
        render_line(&mut canvas, "WWW", (5, 5), &style);
    }

    #[test]
    fn centered_text() {
        let font = Font::default();
        let style = Style::new(&font, 10.0, INK);
        let mut canvas = Canvas::new(40, 10, BG);
        // "ab" is 11 pixels wide, leaving 29 to split as 14 + 15.
        let x = render_aligned(&mut canvas, "ab", HAlign::Center, (0, 0), 40, &style);
        assert_that!(x).is_equal_to(14);
    }

    /// DejaVu Sans: 2048 units per em, ascender at 1901, cap height 1493.
    const OUTLINE_FONT: &[u8] = include_bytes!(
        concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/DejaVuSans.ttf"));

    fn outline_font() -> Font {
        rusttype::Font::try_from_bytes(OUTLINE_FONT).unwrap().into()
    }

    /// Leftmost, rightmost, topmost and bottommost pixel that isn't background.
    fn ink_extent(canvas: &Canvas) -> Option<(i32, i32, i32, i32)> {
        let (width, height) = canvas.dimensions();
        let mut extent: Option<(i32, i32, i32, i32)> = None;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if canvas.get(x, y) == Some(BG) {
                    continue;
                }
                let (l, r, t, b) = extent.unwrap_or((x, x, y, y));
                extent = Some((l.min(x), r.max(x), t.min(y), b.max(y)));
            }
        }
        extent
    }

    #[test]
    fn outline_origin_is_ascender_line() {
        let font = outline_font();
        let style = Style::new(&font, 48.0, INK);
        let mut canvas = Canvas::new(100, 100, BG);
        render_line(&mut canvas, "H", (10, 10), &style);

        let (_, _, top, _) = ink_extent(&canvas).unwrap();
        let expected = 10.0 + (1901.0 - 1493.0) * 48.0 / 2048.0;
        assert_that!((top as f32 - expected).abs() <= 1.0).is_true();
    }

    #[test]
    fn outline_width_is_ink_extent() {
        let font = outline_font();
        let style = Style::new(&font, 32.0, INK);
        let mut canvas = Canvas::new(300, 80, BG);
        render_line(&mut canvas, "Hello", (5, 5), &style);

        let (left, right, _, _) = ink_extent(&canvas).unwrap();
        let ink_width = right - left + 1;
        // Pixel bounding boxes round outwards, so edge columns may stay blank.
        let slack = text_width("Hello", &style) as i32 - ink_width;
        assert_that!((0..=2).contains(&slack)).is_true();

        // Antialiased edges are blended with the background.
        let blended = (0..80).any(|y| (0..300).any(|x| {
            let color = canvas.get(x, y);
            color != Some(BG) && color != Some(INK)
        }));
        assert_that!(blended).is_true();
    }

    #[test]
    fn outline_centered_text() {
        let font = outline_font();
        let style = Style::new(&font, 48.0, INK);
        let width = text_width("H", &style) as i32;

        let mut reference = Canvas::new(200, 80, BG);
        render_line(&mut reference, "H", (0, 10), &style);
        let (bearing, _, _, _) = ink_extent(&reference).unwrap();

        let mut canvas = Canvas::new(200, 80, BG);
        let x = render_aligned(&mut canvas, "H", HAlign::Center, (0, 10), 200, &style);
        assert_that!(x).is_equal_to((200 - width).div_euclid(2));

        let (left, _, _, _) = ink_extent(&canvas).unwrap();
        assert_that!(left).is_equal_to(x + bearing);
    }

    #[test]
    #[should_panic]
    fn zero_size() {
        let font = Font::default();
        Style::new(&font, 0.0, INK);
    }
}
