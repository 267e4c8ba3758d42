pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{SoundEvent, GameEvent};
pub use assets::content::{Content, ContentBuilder};
pub use assets::error::ContentError;
pub use assets::font::{SpriteFont, SpriteFontChar};
pub use assets::registry::SpriteAtlas;
pub use components::animation::{AnimationDef, FrameAnimation, SpriteSheet};
pub use components::sprite::Sprite;
pub use core::driver::{FrameDriver, FrameHandler, FrameSource, FrameTick};
pub use core::geometry::{Color, Quad, Rect};
pub use core::pool::Pool;
pub use core::rng::Rng;
pub use core::time::{FixedTimestep, FrameClock};
pub use renderer::camera::Camera2D;
pub use renderer::{BatchOrder, BatchStats, DrawList, RenderBackend, SpriteRenderer, Texture, TextureId};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{InputState, Key};

pub use glam::Vec2;
