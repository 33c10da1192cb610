//! Module defining the length units of DrawingML documents.

use std::fmt;
use std::ops::{Add, Sub};


/// English Metric Units per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;
/// English Metric Units per typographic point.
pub const EMU_PER_POINT: f64 = 12_700.0;


/// Length in English Metric Units, the integral unit of Office documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Emu(pub i64);

impl Emu {
    /// Convert a length in inches, truncating any fractional EMU.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH) as i64)
    }

    /// Convert a length in points, truncating any fractional EMU.
    #[inline]
    pub fn from_points(points: f64) -> Self {
        Emu((points * EMU_PER_POINT) as i64)
    }

    #[inline]
    pub fn to_inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH
    }
}

/// Shorthand for `Emu::from_inches`.
#[inline]
pub fn inches(value: f64) -> Emu {
    Emu::from_inches(value)
}

/// Shorthand for `Emu::from_points`.
#[inline]
pub fn pt(value: f64) -> Emu {
    Emu::from_points(value)
}

impl Add for Emu {
    type Output = Emu;
    fn add(self, other: Emu) -> Emu {
        Emu(self.0 + other.0)
    }
}

impl Sub for Emu {
    type Output = Emu;
    fn sub(self, other: Emu) -> Emu {
        Emu(self.0 - other.0)
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}


/// Font size in hundredths of a point, as stored in `sz` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(pub u32);

impl FontSize {
    #[inline]
    pub fn from_points(points: f64) -> Self {
        FontSize((points * 100.0).round() as u32)
    }

    #[inline]
    pub fn points(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::{inches, pt, Emu, FontSize};

    #[test]
    fn widescreen_slide() {
        assert_that!(inches(13.333)).is_equal_to(Emu(12_191_695));
        assert_that!(inches(7.5)).is_equal_to(Emu(6_858_000));
    }

    #[test]
    fn fractional_positions_truncate() {
        assert_that!(inches(0.8)).is_equal_to(Emu(731_520));
        assert_that!(inches(0.8 + 4.0)).is_equal_to(Emu(4_389_120));
        assert_that!(pt(1.0)).is_equal_to(Emu(12_700));
    }

    #[test]
    fn arithmetic() {
        assert_that!(inches(1.0) + inches(0.5)).is_equal_to(Emu(1_371_600));
        assert_that!(inches(1.0) - pt(72.0)).is_equal_to(Emu(0));
        assert_that!(inches(2.5).to_inches() == 2.5).is_true();
    }

    #[test]
    fn font_sizes() {
        assert_that!(FontSize::from_points(24.0)).is_equal_to(FontSize(2400));
        assert_that!(FontSize::from_points(10.5).to_string()).is_equal_to("1050".to_owned());
        assert_that!(FontSize(1100).points() == 11.0).is_true();
    }
}
