//! Module implementing the LinkedIn cover image.

pub mod canvas;
mod error;
mod output;
mod task;
pub mod text;


pub use self::error::CoverError;
pub use self::output::CoverOutput;
pub use self::task::{HEIGHT, WIDTH};


use std::path::PathBuf;

use crate::resources::{Font, FontLoader, DEFAULT_FONT_PATHS};
use self::task::CoverTask;


/// Default name of the file the cover is saved to.
pub const DEFAULT_OUTPUT: &str = "linkedin-cover-1584x396.png";


/// Configuration of the cover rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverConfig {
    /// Font files to try, in order. The first one that loads is used
    /// for all text; if none does, the built-in bitmap font is.
    pub font_candidates: Vec<PathBuf>,
}

impl Default for CoverConfig {
    fn default() -> Self {
        CoverConfig {
            font_candidates: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}


/// Render the cover as PNG, loading the font according to given config.
pub fn render(config: &CoverConfig) -> Result<CoverOutput, CoverError> {
    let font = FontLoader::with_candidates(&config.font_candidates).load_first();
    render_with_font(&font)
}

/// Render the cover as PNG using given font for all of its text.
pub fn render_with_font(font: &Font) -> Result<CoverOutput, CoverError> {
    CoverTask::new(font).perform()
}
