pub mod camera;
pub mod draw_list;
pub mod sprite_renderer;
pub mod texture;
pub mod traits;
pub mod vertex;

// Re-export key types for convenient access
pub use camera::Camera2D;
pub use draw_list::DrawList;
pub use sprite_renderer::{BatchOrder, BatchStats, SpriteRenderer};
pub use texture::{Texture, TextureId};
pub use traits::{BatchFrame, DrawBatch, RenderBackend};
pub use vertex::SpriteVertex;
