//! Defines the output of a cover rendering.

use std::ops::Deref;


/// Output of the cover rendering: an encoded PNG image.
#[derive(Clone, Debug)]
#[must_use = "unused cover output which must be used"]
pub struct CoverOutput {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl CoverOutput {
    #[inline]
    pub(super) fn new(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        CoverOutput{width, height, bytes}
    }
}

impl CoverOutput {
    /// Pixel dimensions of the image, as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw bytes of the PNG file.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the output into a vector of bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for CoverOutput {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl From<CoverOutput> for Vec<u8> {
    fn from(output: CoverOutput) -> Vec<u8> {
        output.into_bytes()
    }
}
