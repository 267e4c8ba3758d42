use crate::core::geometry::Rect;
use crate::renderer::texture::Texture;

/// A named view into an atlas texture. Never owns pixel data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    texture: Texture,
    /// Default placement: origin at (0, 0), declared size.
    draw_rect: Rect,
    /// Pixel region inside the atlas.
    source_rect: Rect,
}

impl Sprite {
    pub fn new(texture: Texture, draw_rect: Rect, source_rect: Rect) -> Self {
        Self {
            texture,
            draw_rect,
            source_rect,
        }
    }

    /// A sprite covering a whole texture.
    pub fn from_texture(texture: Texture) -> Self {
        let bounds = texture.bounds();
        Self::new(texture, bounds, bounds)
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn draw_rect(&self) -> Rect {
        self.draw_rect
    }

    pub fn source_rect(&self) -> Rect {
        self.source_rect
    }

    pub fn width(&self) -> f32 {
        self.draw_rect.width
    }

    pub fn height(&self) -> f32 {
        self.draw_rect.height
    }
}
