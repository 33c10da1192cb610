//!
//! brandkit  -- Marketing assets on demand
//!
//! Two fixed-content generators: a LinkedIn cover image (`cover`)
//! and a training proposal slide deck (`deck`).
//!

             extern crate image;
#[macro_use] extern crate log;
             extern crate rusttype;
             extern crate thiserror;
             extern crate zip;


#[cfg(test)] #[macro_use] extern crate spectral;
#[cfg(test)]              extern crate tempfile;


pub mod cover;
pub mod deck;
mod model;
mod resources;


pub use cover::{CoverConfig, CoverError, CoverOutput};
pub use deck::{DeckError, Presentation};
pub use model::*;
pub use resources::*;
