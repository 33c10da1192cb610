//! Module implementing the `Color` type.

use std::fmt;
use std::str::FromStr;

use image::{Rgb, Rgba};
use thiserror::Error;


/// RGB color used for shapes, fills, and text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Create a white color.
    #[inline]
    pub const fn white() -> Self {
        Self::gray(0xff)
    }

    /// Create a black color.
    #[inline]
    pub const fn black() -> Self {
        Self::gray(0x00)
    }

    /// Create a gray color of given intensity.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Color(value, value, value)
    }

    /// Parse a color from six hexadecimal digits, optionally prefixed with `#`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::Length(s.to_owned()));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorError::Digit(s.to_owned()));
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Color {
    /// Divide every channel by four, producing a darker shade.
    #[inline]
    pub fn quarter(self) -> Self {
        let Color(r, g, b) = self;
        Color(r / 4, g / 4, b / 4)
    }

    /// Add given amount to every channel, saturating at full intensity.
    #[inline]
    pub fn lighten(self, amount: u8) -> Self {
        let Color(r, g, b) = self;
        Color(r.saturating_add(amount), g.saturating_add(amount), b.saturating_add(amount))
    }

    /// Linear interpolation between two colors.
    ///
    /// Each channel is computed as `from + t * (to - from)`, truncated towards zero.
    pub fn lerp(from: Color, to: Color, t: f64) -> Self {
        let channel = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)) as u8;
        Color(channel(from.0, to.0), channel(from.1, to.1), channel(from.2, to.2))
    }

    /// Uppercase hex digits without the `#`, as used by OOXML `srgbClr` elements.
    pub fn to_ooxml(&self) -> String {
        let &Color(r, g, b) = self;
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    #[inline]
    pub(crate) fn to_rgb(self) -> Rgb<u8> {
        let Color(r, g, b) = self;
        Rgb([r, g, b])
    }

    #[inline]
    pub(crate) fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        let Color(r, g, b) = self;
        Rgba([r, g, b, alpha])
    }
}

impl From<Color> for Rgb<u8> {
    #[inline]
    fn from(color: Color) -> Rgb<u8> {
        color.to_rgb()
    }
}

impl From<Rgb<u8>> for Color {
    #[inline]
    fn from(rgb: Rgb<u8>) -> Color {
        let Rgb([r, g, b]) = rgb;
        Color(r, g, b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let &Color(r, g, b) = self;
        write!(fmt, "#{:0>2x}{:0>2x}{:0>2x}", r, g, b)
    }
}


/// Error from parsing a `Color` out of a string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color `{0}` must have exactly six hex digits")]
    Length(String),
    #[error("color `{0}` contains a non-hexadecimal digit")]
    Digit(String),
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::{Color, ColorError};

    #[test]
    fn hex_with_and_without_hash() {
        assert_that!(Color::from_hex("#0f172a")).is_ok().is_equal_to(Color(15, 23, 42));
        assert_that!(Color::from_hex("818CF8")).is_ok().is_equal_to(Color(129, 140, 248));
        assert_that!("#94a3b8".parse::<Color>()).is_ok().is_equal_to(Color(148, 163, 184));
    }

    #[test]
    fn hex_errors() {
        assert_that!(Color::from_hex("#fff"))
            .is_err().is_equal_to(ColorError::Length("#fff".into()));
        assert_that!(Color::from_hex("#zz0000"))
            .is_err().is_equal_to(ColorError::Digit("#zz0000".into()));
        assert_that!(Color::from_hex("#ééé")).is_err();
    }

    #[test]
    fn display_and_ooxml() {
        let color = Color(59, 130, 246);
        assert_that!(format!("{}", color)).is_equal_to("#3b82f6".to_owned());
        assert_that!(color.to_ooxml()).is_equal_to("3B82F6".to_owned());
    }

    #[test]
    fn pill_shades() {
        let blue = Color(59, 130, 246);
        assert_that!(blue.quarter()).is_equal_to(Color(14, 32, 61));
        assert_that!(blue.lighten(60)).is_equal_to(Color(119, 190, 255));
        assert_that!(Color(245, 10, 10).lighten(60)).is_equal_to(Color(255, 70, 70));
    }

    #[test]
    fn lerp_truncates() {
        let from = Color(59, 130, 246);
        let to = Color(139, 92, 246);
        assert_that!(Color::lerp(from, to, 0.0)).is_equal_to(from);
        // 59 + 0.5 * 80 = 99, 130 - 0.5 * 38 = 111
        assert_that!(Color::lerp(from, to, 0.5)).is_equal_to(Color(99, 111, 246));
        // 130 - 0.995 * 38 = 92.19
        assert_that!(Color::lerp(from, to, 0.995)).is_equal_to(Color(138, 92, 246));
    }

    #[test]
    fn white_and_black() {
        assert_that!(Color::white()).is_equal_to(Color(255, 255, 255));
        assert_that!(Color::black()).is_equal_to(Color(0, 0, 0));
    }
}
