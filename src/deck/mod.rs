//! Module implementing the proposal slide deck and its .pptx packaging.

mod error;
mod model;
mod package;
mod parts;
mod proposal;
mod theme;
pub mod units;
mod xml;


pub use self::error::DeckError;
pub use self::model::{AutoShape, Geometry, Outline, Presentation, Shape, ShapeKind, Slide, TextBox};
pub use self::package::{to_bytes, write_package};
pub use self::proposal::{proposal, TITLE};
pub use self::xml::escape;


/// Default name of the file the deck is saved to.
pub const DEFAULT_OUTPUT: &str = "Deloitte_AI_Training_Proposal.pptx";


/// Build the proposal deck and package it into memory.
pub fn render() -> Result<Vec<u8>, DeckError> {
    let prs = proposal();
    let bytes = to_bytes(&prs)?;
    debug!("Packaged {} slides into {} bytes", prs.slide_count(), bytes.len());
    Ok(bytes)
}
