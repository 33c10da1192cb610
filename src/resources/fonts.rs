//! Module for loading the fonts text is rendered with.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Loader;
use super::bitmap::BitmapFont;
use super::filesystem::{BytesLoader, FileLoader};


/// Font files tried in order when no other candidates are given.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];


/// Font that text can be rendered with.
pub enum Font {
    /// TrueType/OpenType outline font loaded from a file.
    Outline(rusttype::Font<'static>),
    /// The bitmap font compiled into the binary.
    Builtin(BitmapFont),
}

impl Font {
    #[inline]
    pub fn is_builtin(&self) -> bool {
        matches!(*self, Font::Builtin(..))
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::Builtin(BitmapFont)
    }
}

impl From<rusttype::Font<'static>> for Font {
    fn from(font: rusttype::Font<'static>) -> Self {
        Font::Outline(font)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Font::Outline(ref f) => write!(fmt, "Font::Outline(<{} glyphs>)", f.glyph_count()),
            Font::Builtin(_) => write!(fmt, "Font::Builtin"),
        }
    }
}


/// Error that may occur while loading a single font file.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("cannot read font file `{0}`: {1}")]
    Read(String, #[source] io::Error),
    #[error("`{0}` is not a valid TrueType or OpenType font")]
    Parse(String),
}


/// Loader of fonts from a list of candidate files.
///
/// As a `Loader`, it loads a single font file by path.
/// `FontLoader::load_first` walks the candidate list instead
/// and never fails, ending up with the built-in font if it has to.
#[derive(Debug)]
pub struct FontLoader {
    inner: BytesLoader,
    candidates: Vec<PathBuf>,
}

impl FontLoader {
    /// Create a loader trying `DEFAULT_FONT_PATHS`.
    #[inline]
    pub fn new() -> Self {
        Self::with_candidates(DEFAULT_FONT_PATHS)
    }

    /// Create a loader trying given font files, in order.
    pub fn with_candidates<I, P>(candidates: I) -> Self
        where I: IntoIterator<Item=P>, P: AsRef<Path>
    {
        FontLoader{
            inner: BytesLoader::new(FileLoader::new()),
            candidates: candidates.into_iter().map(|p| p.as_ref().to_owned()).collect(),
        }
    }

    #[inline]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

impl Default for FontLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FontLoader {
    /// Load the first candidate font that can be read and parsed.
    ///
    /// Falls back to the built-in bitmap font if none of them can.
    pub fn load_first(&self) -> Font {
        for path in &self.candidates {
            let name = match path.to_str() {
                Some(name) => name,
                None => {
                    warn!("Skipping font path that is not valid UTF-8: {}", path.display());
                    continue;
                }
            };
            match self.load(name) {
                Ok(font) => {
                    info!("Using font {}", name);
                    return font;
                }
                Err(FontError::Read(_, ref e)) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("Font {} not found", name);
                }
                Err(e) => warn!("{}", e),
            }
        }
        warn!("None of {} candidate font(s) could be loaded, using the built-in font",
            self.candidates.len());
        Font::default()
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    /// Load a font file. For font collections, the first font is used.
    fn load(&self, name: &str) -> Result<Font, Self::Err> {
        trace!("Loading font {}...", name);
        let bytes = self.inner.load(name)
            .map_err(|e| FontError::Read(name.to_owned(), e))?;

        let font = rusttype::Font::try_from_vec_and_index(bytes, 0)
            .ok_or_else(|| FontError::Parse(name.to_owned()))?;
        debug!("Font `{}` loaded successfully", name);
        Ok(font.into())
    }
}
