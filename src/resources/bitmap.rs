//! Built-in bitmap font, used when none of the font files can be loaded.
//!
//! Glyphs are 5 columns by 7 rows above the baseline, plus 2 rows below it
//! for the descenders of `g`, `j`, `p`, `q` and `y`. Each glyph is stored
//! column-major, one `u16` per column, with bit 0 being the top row.

/// Width of a single glyph in font units (unscaled pixels).
pub const GLYPH_WIDTH: u32 = 5;
/// Height of a glyph above the baseline in font units.
pub const GLYPH_HEIGHT: u32 = 7;
/// Rows below the baseline, used only by descenders.
pub const GLYPH_DESCENT: u32 = 2;
/// Total number of rows in a glyph's bitmap.
pub const GLYPH_ROWS: u32 = GLYPH_HEIGHT + GLYPH_DESCENT;
/// Horizontal gap between consecutive glyphs in font units.
pub const GLYPH_SPACING: u32 = 1;

/// First character covered by the glyph table.
const FIRST_CHAR: char = ' ';

/// Glyphs for printable ASCII, from `' '` (0x20) up to `'~'` (0x7e).
const GLYPHS: [[u16; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00],  // ' '
    [0x00, 0x00, 0x5f, 0x00, 0x00],  // !
    [0x00, 0x07, 0x00, 0x07, 0x00],  // "
    [0x14, 0x7f, 0x14, 0x7f, 0x14],  // #
    [0x24, 0x2a, 0x7f, 0x2a, 0x12],  // $
    [0x23, 0x13, 0x08, 0x64, 0x62],  // %
    [0x36, 0x49, 0x56, 0x20, 0x50],  // &
    [0x00, 0x05, 0x03, 0x00, 0x00],  // '
    [0x00, 0x1c, 0x22, 0x41, 0x00],  // (
    [0x00, 0x41, 0x22, 0x1c, 0x00],  // )
    [0x2a, 0x1c, 0x7f, 0x1c, 0x2a],  // *
    [0x08, 0x08, 0x3e, 0x08, 0x08],  // +
    [0x00, 0x50, 0x30, 0x00, 0x00],  // ,
    [0x08, 0x08, 0x08, 0x08, 0x08],  // -
    [0x00, 0x60, 0x60, 0x00, 0x00],  // .
    [0x20, 0x10, 0x08, 0x04, 0x02],  // /
    [0x3e, 0x51, 0x49, 0x45, 0x3e],  // 0
    [0x00, 0x42, 0x7f, 0x40, 0x00],  // 1
    [0x42, 0x61, 0x51, 0x49, 0x46],  // 2
    [0x21, 0x41, 0x45, 0x4b, 0x31],  // 3
    [0x18, 0x14, 0x12, 0x7f, 0x10],  // 4
    [0x27, 0x45, 0x45, 0x45, 0x39],  // 5
    [0x3c, 0x4a, 0x49, 0x49, 0x30],  // 6
    [0x01, 0x71, 0x09, 0x05, 0x03],  // 7
    [0x36, 0x49, 0x49, 0x49, 0x36],  // 8
    [0x06, 0x49, 0x49, 0x29, 0x1e],  // 9
    [0x00, 0x36, 0x36, 0x00, 0x00],  // :
    [0x00, 0x56, 0x36, 0x00, 0x00],  // ;
    [0x08, 0x14, 0x22, 0x41, 0x00],  // <
    [0x14, 0x14, 0x14, 0x14, 0x14],  // =
    [0x00, 0x41, 0x22, 0x14, 0x08],  // >
    [0x02, 0x01, 0x51, 0x09, 0x06],  // ?
    [0x32, 0x49, 0x79, 0x41, 0x3e],  // @
    [0x7e, 0x11, 0x11, 0x11, 0x7e],  // A
    [0x7f, 0x49, 0x49, 0x49, 0x36],  // B
    [0x3e, 0x41, 0x41, 0x41, 0x22],  // C
    [0x7f, 0x41, 0x41, 0x22, 0x1c],  // D
    [0x7f, 0x49, 0x49, 0x49, 0x41],  // E
    [0x7f, 0x09, 0x09, 0x09, 0x01],  // F
    [0x3e, 0x41, 0x49, 0x49, 0x7a],  // G
    [0x7f, 0x08, 0x08, 0x08, 0x7f],  // H
    [0x00, 0x41, 0x7f, 0x41, 0x00],  // I
    [0x20, 0x40, 0x41, 0x3f, 0x01],  // J
    [0x7f, 0x08, 0x14, 0x22, 0x41],  // K
    [0x7f, 0x40, 0x40, 0x40, 0x40],  // L
    [0x7f, 0x02, 0x0c, 0x02, 0x7f],  // M
    [0x7f, 0x04, 0x08, 0x10, 0x7f],  // N
    [0x3e, 0x41, 0x41, 0x41, 0x3e],  // O
    [0x7f, 0x09, 0x09, 0x09, 0x06],  // P
    [0x3e, 0x41, 0x51, 0x21, 0x5e],  // Q
    [0x7f, 0x09, 0x19, 0x29, 0x46],  // R
    [0x46, 0x49, 0x49, 0x49, 0x31],  // S
    [0x01, 0x01, 0x7f, 0x01, 0x01],  // T
    [0x3f, 0x40, 0x40, 0x40, 0x3f],  // U
    [0x1f, 0x20, 0x40, 0x20, 0x1f],  // V
    [0x3f, 0x40, 0x38, 0x40, 0x3f],  // W
    [0x63, 0x14, 0x08, 0x14, 0x63],  // X
    [0x07, 0x08, 0x70, 0x08, 0x07],  // Y
    [0x61, 0x51, 0x49, 0x45, 0x43],  // Z
    [0x00, 0x7f, 0x41, 0x41, 0x00],  // [
    [0x02, 0x04, 0x08, 0x10, 0x20],  // backslash
    [0x00, 0x41, 0x41, 0x7f, 0x00],  // ]
    [0x04, 0x02, 0x01, 0x02, 0x04],  // ^
    [0x40, 0x40, 0x40, 0x40, 0x40],  // _
    [0x00, 0x01, 0x02, 0x04, 0x00],  // `
    [0x20, 0x54, 0x54, 0x54, 0x78],  // a
    [0x7f, 0x48, 0x44, 0x44, 0x38],  // b
    [0x38, 0x44, 0x44, 0x44, 0x20],  // c
    [0x38, 0x44, 0x44, 0x48, 0x7f],  // d
    [0x38, 0x54, 0x54, 0x54, 0x18],  // e
    [0x08, 0x7e, 0x09, 0x01, 0x02],  // f
    [0x138, 0x144, 0x144, 0x144, 0x0fc],  // g
    [0x7f, 0x08, 0x04, 0x04, 0x78],  // h
    [0x00, 0x44, 0x7d, 0x40, 0x00],  // i
    [0x080, 0x100, 0x104, 0x0fd, 0x000],  // j
    [0x7f, 0x10, 0x28, 0x44, 0x00],  // k
    [0x00, 0x41, 0x7f, 0x40, 0x00],  // l
    [0x7c, 0x04, 0x18, 0x04, 0x78],  // m
    [0x7c, 0x08, 0x04, 0x04, 0x78],  // n
    [0x38, 0x44, 0x44, 0x44, 0x38],  // o
    [0x1fc, 0x044, 0x044, 0x044, 0x038],  // p
    [0x038, 0x044, 0x044, 0x044, 0x1fc],  // q
    [0x7c, 0x08, 0x04, 0x04, 0x08],  // r
    [0x48, 0x54, 0x54, 0x54, 0x20],  // s
    [0x04, 0x3f, 0x44, 0x40, 0x20],  // t
    [0x3c, 0x40, 0x40, 0x20, 0x7c],  // u
    [0x1c, 0x20, 0x40, 0x20, 0x1c],  // v
    [0x3c, 0x40, 0x30, 0x40, 0x3c],  // w
    [0x44, 0x28, 0x10, 0x28, 0x44],  // x
    [0x13c, 0x140, 0x140, 0x140, 0x0fc],  // y
    [0x44, 0x64, 0x54, 0x4c, 0x44],  // z
    [0x00, 0x08, 0x36, 0x41, 0x00],  // {
    [0x00, 0x00, 0x7f, 0x00, 0x00],  // |
    [0x00, 0x41, 0x36, 0x08, 0x00],  // }
    [0x08, 0x04, 0x08, 0x10, 0x08],  // ~
];

/// Hollow box drawn for characters outside the table.
const MISSING_GLYPH: [u16; 5] = [0x7f, 0x41, 0x41, 0x41, 0x7f];


/// Fixed-size bitmap font compiled into the binary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitmapFont;

impl BitmapFont {
    /// Integer magnification that approximates the requested text size
    /// (in pixels) with the 7 pixel tall glyphs.
    pub fn scale_for(&self, size: f32) -> u32 {
        ((size / 10.0).round() as u32).max(1)
    }

    /// Whether the font has a real glyph for given character.
    #[inline]
    pub fn has_glyph(&self, ch: char) -> bool {
        Self::index(ch).is_some()
    }

    /// Column bitmaps of a character's glyph.
    pub fn glyph(&self, ch: char) -> &'static [u16; 5] {
        match Self::index(ch) {
            Some(i) => &GLYPHS[i],
            None => &MISSING_GLYPH,
        }
    }

    /// Whether the pixel at given column & row (in font units) of a glyph is set.
    #[inline]
    pub fn is_set(&self, ch: char, column: u32, row: u32) -> bool {
        column < GLYPH_WIDTH && row < GLYPH_ROWS
            && self.glyph(ch)[column as usize] & (1 << row) != 0
    }

    /// Width in pixels of a run of text at given magnification.
    ///
    /// Spacing after the last glyph is not included.
    pub fn text_width(&self, s: &str, scale: u32) -> u32 {
        let count = s.chars().count() as u32;
        if count == 0 {
            return 0;
        }
        (count * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING) * scale
    }

    /// Height in pixels of a line at given magnification, descenders included.
    #[inline]
    pub fn line_height(&self, scale: u32) -> u32 {
        GLYPH_ROWS * scale
    }

    fn index(ch: char) -> Option<usize> {
        let offset = (ch as u32).checked_sub(FIRST_CHAR as u32)?;
        if (offset as usize) < GLYPHS.len() { Some(offset as usize) } else { None }
    }
}
