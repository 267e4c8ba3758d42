pub mod content;
pub mod error;
pub mod font;
pub mod manifest;
pub mod registry;

pub use content::{Content, ContentBuilder};
pub use error::ContentError;
pub use font::{SpriteFont, SpriteFontChar};
pub use manifest::{AtlasDescriptor, FontDescriptor};
pub use registry::SpriteAtlas;
