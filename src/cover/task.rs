//! Module implementing the actual cover drawing task.
//! All of the banner's content and layout lives here.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::model::{Color, HAlign, BLUE, DARK_BG, EMERALD, INDIGO_400, PURPLE, SLATE_400,
                   SLATE_500, SLATE_800, WHITE};
use crate::resources::Font;
use super::canvas::{BBox, Canvas};
use super::error::CoverError;
use super::output::CoverOutput;
use super::text::{self, Style};


/// Width of a LinkedIn cover image.
pub const WIDTH: u32 = 1584;
/// Height of a LinkedIn cover image.
pub const HEIGHT: u32 = 396;

/// Distance between the background grid lines.
const GRID_SPACING: usize = 60;

const HEADLINE_SIZE: f32 = 48.0;
const SUBHEADLINE_SIZE: f32 = 20.0;
const SMALL_SIZE: f32 = 16.0;

/// Left edge of the headline block. The leftmost ~200px are covered
/// by the profile picture, so text stays well clear of it.
const TEXT_LEFT: i32 = 450;

const ACCENT_FROM: Color = BLUE;
const ACCENT_TO: Color = PURPLE;
const ACCENT_WIDTH: i32 = 200;
const ACCENT_TOP: i32 = 280;
const ACCENT_BOTTOM: i32 = 284;

const PILL_LEFT: i32 = 1100;
const PILL_WIDTH: i32 = 160;
const PILL_HEIGHT: i32 = 32;
const PILL_RADIUS: u32 = 16;
const PILL_TEXT_INSET: i32 = 7;


/// A rounded label on the right side of the cover.
#[derive(Clone, Copy, Debug)]
struct Pill {
    text: &'static str,
    color: Color,
    top: i32,
}

const PILLS: &[Pill] = &[
    Pill{text: "Live Builds", color: BLUE, top: 90},
    Pill{text: "Your Tools", color: PURPLE, top: 145},
    Pill{text: "Measurable ROI", color: EMERALD, top: 200},
];


/// Represents a single cover rendering task.
///
/// This is a separate struct so that the font
/// can be easily carried between its methods.
pub(super) struct CoverTask<'f> {
    font: &'f Font,
}

impl<'f> CoverTask<'f> {
    #[inline]
    pub fn new(font: &'f Font) -> Self {
        CoverTask{font}
    }
}

impl<'f> CoverTask<'f> {
    /// Perform the drawing task and encode the result.
    pub fn perform(self) -> Result<CoverOutput, CoverError> {
        debug!("Drawing {}x{} cover with {:?}", WIDTH, HEIGHT, self.font);
        let canvas = self.draw();
        self.encode_result(canvas)
    }

    /// Draw the whole cover, back to front.
    pub fn draw(&self) -> Canvas {
        let mut canvas = Canvas::new(WIDTH, HEIGHT, DARK_BG);
        self.draw_background(&mut canvas);
        self.draw_grid(&mut canvas);
        self.draw_decorations(&mut canvas);
        self.draw_headline(&mut canvas);
        self.draw_accent_bar(&mut canvas);
        self.draw_pills(&mut canvas);
        self.draw_url(&mut canvas);
        canvas
    }

    /// Subtle diagonal gradient, brightening towards the bottom-right corner.
    fn draw_background(&self, canvas: &mut Canvas) {
        trace!("Filling background gradient");
        let (width, height) = (WIDTH as f64, HEIGHT as f64);
        canvas.fill_with(|x, y| {
            let factor = (x as f64 / width + y as f64 / height) / 2.0;
            Color(
                (15.0 + factor * 15.0) as u8,
                (23.0 + factor * 18.0) as u8,
                (42.0 + factor * 17.0) as u8,
            )
        });
    }

    fn draw_grid(&self, canvas: &mut Canvas) {
        trace!("Drawing grid every {}px", GRID_SPACING);
        for x in (0..WIDTH as i32).step_by(GRID_SPACING) {
            canvas.vline(x, 0, HEIGHT as i32, SLATE_800);
        }
        for y in (0..HEIGHT as i32).step_by(GRID_SPACING) {
            canvas.hline(y, 0, WIDTH as i32, SLATE_800);
        }
    }

    /// Dim colored blobs in the top-left and bottom-right corners.
    fn draw_decorations(&self, canvas: &mut Canvas) {
        canvas.fill_ellipse(BBox::new(-50, -100, 250, 200), Color(20, 30, 50));
        canvas.fill_ellipse(BBox::new(1350, 250, 1650, 500), Color(25, 28, 52));
    }

    fn draw_headline(&self, canvas: &mut Canvas) {
        let lines = [
            ("Bridge the Enterprise", 100, HEADLINE_SIZE, WHITE),
            ("AI Skills Gap", 160, HEADLINE_SIZE, INDIGO_400),
            ("From pilots to production. Training that delivers ROI.",
                235, SUBHEADLINE_SIZE, SLATE_400),
        ];
        for &(s, top, size, color) in lines.iter() {
            self.draw_text(canvas, s, (TEXT_LEFT, top), size, color);
        }
    }

    /// Short horizontal bar under the headline, fading from blue to purple.
    fn draw_accent_bar(&self, canvas: &mut Canvas) {
        for x in TEXT_LEFT..TEXT_LEFT + ACCENT_WIDTH {
            let progress = (x - TEXT_LEFT) as f64 / ACCENT_WIDTH as f64;
            let color = Color::lerp(ACCENT_FROM, ACCENT_TO, progress);
            canvas.vline(x, ACCENT_TOP, ACCENT_BOTTOM, color);
        }
    }

    fn draw_pills(&self, canvas: &mut Canvas) {
        for pill in PILLS {
            trace!("Drawing pill {:?}", pill.text);
            let bbox = BBox::at(PILL_LEFT, pill.top, PILL_WIDTH, PILL_HEIGHT);
            canvas.fill_rounded_rect(bbox, PILL_RADIUS, pill.color.quarter());

            text::check(self.font, pill.text);
            let style = Style::new(self.font, SMALL_SIZE, pill.color.lighten(60));
            text::render_aligned(canvas, pill.text, HAlign::Center,
                (PILL_LEFT, pill.top + PILL_TEXT_INSET), PILL_WIDTH, &style);
        }
    }

    fn draw_url(&self, canvas: &mut Canvas) {
        self.draw_text(canvas, "workflowy.ai", (1420, 355), SMALL_SIZE, SLATE_500);
    }

    fn draw_text(&self, canvas: &mut Canvas, s: &str, origin: (i32, i32),
                 size: f32, color: Color) {
        text::check(self.font, s);
        let style = Style::new(self.font, size, color);
        text::render_line(canvas, s, origin, &style);
    }

    /// Encode final result as PNG.
    fn encode_result(&self, canvas: Canvas) -> Result<CoverOutput, CoverError> {
        let img = canvas.into_image();
        let (width, height) = img.dimensions();
        trace!("Encoding {}x{} image as PNG", width, height);

        let mut result = vec![];
        PngEncoder::new(&mut result)
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)?;
        debug!("Encoded cover into {} bytes", result.len());
        Ok(CoverOutput::new(width, height, result))
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use crate::model::Color;
    use crate::resources::Font;
    use super::{CoverTask, HEIGHT, WIDTH};

    fn draw() -> super::Canvas {
        let font = Font::default();
        CoverTask::new(&font).draw()
    }

    #[test]
    fn dimensions() {
        assert_that!(draw().dimensions()).is_equal_to((WIDTH, HEIGHT));
    }

    #[test]
    fn gradient() {
        // factor = (700/1584 + 50/396) / 2 = 0.284...
        assert_that!(draw().get(700, 50)).is_equal_to(Some(Color(19, 28, 46)));
    }

    #[test]
    fn grid() {
        let canvas = draw();
        assert_that!(canvas.get(600, 30)).is_equal_to(Some(Color(30, 41, 59)));
        assert_that!(canvas.get(700, 360)).is_equal_to(Some(Color(30, 41, 59)));
        assert_that!(canvas.get(601, 31)).is_not_equal_to(Some(Color(30, 41, 59)));
    }

    #[test]
    fn decorations() {
        let canvas = draw();
        assert_that!(canvas.get(60, 30)).is_equal_to(Some(Color(20, 30, 50)));
        assert_that!(canvas.get(1583, 395)).is_equal_to(Some(Color(25, 28, 52)));
    }

    #[test]
    fn accent_bar() {
        let canvas = draw();
        assert_that!(canvas.get(450, 280)).is_equal_to(Some(Color(59, 130, 246)));
        assert_that!(canvas.get(450, 284)).is_equal_to(Some(Color(59, 130, 246)));
        assert_that!(canvas.get(649, 282)).is_equal_to(Some(Color(138, 92, 246)));
        assert_that!(canvas.get(650, 282)).is_not_equal_to(Some(Color(139, 92, 246)));
        assert_that!(canvas.get(500, 285)).is_not_equal_to(canvas.get(500, 284));
    }

    #[test]
    fn pills() {
        let canvas = draw();
        // Below the text, clear of the rounded corners.
        assert_that!(canvas.get(1180, 115)).is_equal_to(Some(Color(14, 32, 61)));
        assert_that!(canvas.get(1180, 170)).is_equal_to(Some(Color(34, 23, 61)));
        assert_that!(canvas.get(1180, 225)).is_equal_to(Some(Color(4, 46, 32)));
        // Rounded corner leaves the background visible.
        assert_that!(canvas.get(1100, 90)).is_not_equal_to(Some(Color(14, 32, 61)));
    }

    #[test]
    fn pill_text_is_drawn() {
        let canvas = draw();
        let text_color = Some(Color(119, 190, 255));
        let has_text = (1100..1261).any(|x| (97..122).any(|y| canvas.get(x, y) == text_color));
        assert_that!(has_text).is_true();
    }
}
