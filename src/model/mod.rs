//! Module defining the data model shared by both generators.

mod align;
mod color;
mod constants;

pub use self::align::HAlign;
pub use self::color::{Color, ColorError};
pub use self::constants::*;
