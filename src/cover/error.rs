//! Cover rendering error.

use image::ImageError;
use thiserror::Error;


/// Error that may occur while rendering the cover.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("failed to encode the final image: {0}")]
    Encode(#[from] ImageError),
}
