//! Module handling the resources used for rendering.

pub mod bitmap;
mod filesystem;
mod fonts;


pub use self::bitmap::BitmapFont;
pub use self::filesystem::{BytesLoader, FileLoader};
pub use self::fonts::{DEFAULT_FONT_PATHS, Font, FontError, FontLoader};


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err;

    /// Load a resource of given name.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err>;
}
