//! Presentation writing error.

use std::io;

use thiserror::Error;
use zip::result::ZipError;


/// Error that may occur while writing a presentation package.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to write the package archive: {0}")]
    Zip(#[from] ZipError),
    #[error("I/O error while writing the package: {0}")]
    Io(#[from] io::Error),
}
