//! Module defining the alignment enum.


/// Horizontal alignment of text within a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HAlign {
    /// Left alignment.
    #[default]
    Left,
    /// Horizontal centering.
    Center,
    /// Right alignment.
    Right,
}

impl HAlign {
    /// Value of the `algn` attribute of a DrawingML paragraph.
    #[inline]
    pub fn ooxml_value(self) -> &'static str {
        match self {
            HAlign::Left => "l",
            HAlign::Center => "ctr",
            HAlign::Right => "r",
        }
    }

    /// Horizontal offset at which a run of given width starts
    /// when aligned this way inside a span of `span` pixels.
    ///
    /// Centering rounds towards the left edge.
    pub fn offset_within(self, span: i32, width: i32) -> i32 {
        match self {
            HAlign::Left => 0,
            HAlign::Center => (span - width).div_euclid(2),
            HAlign::Right => span - width,
        }
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::HAlign;

    #[test]
    fn offsets() {
        assert_that!(HAlign::Left.offset_within(160, 100)).is_equal_to(0);
        assert_that!(HAlign::Center.offset_within(160, 100)).is_equal_to(30);
        assert_that!(HAlign::Center.offset_within(160, 101)).is_equal_to(29);
        assert_that!(HAlign::Right.offset_within(160, 100)).is_equal_to(60);
    }

    #[test]
    fn center_offset_of_overflowing_text_floors() {
        // Matches integer floor division of a negative remainder.
        assert_that!(HAlign::Center.offset_within(10, 13)).is_equal_to(-2);
    }
}
