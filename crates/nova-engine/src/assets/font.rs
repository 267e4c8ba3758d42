use std::collections::HashMap;

use glam::Vec2;

use crate::core::geometry::{Quad, Rect};
use crate::renderer::texture::Texture;

use super::error::ContentError;
use super::manifest::FontDescriptor;

/// Metrics and UVs of one glyph, in font pixels at scale 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFontChar {
    pub texture_coords: Quad,
    pub size: Vec2,
    /// Horizontal distance to the next glyph's origin.
    pub advance: f32,
    /// Drawing offset from the pen position.
    pub offset: Vec2,
}

/// A bitmap font: one texture plus per-character metrics.
#[derive(Debug, Clone)]
pub struct SpriteFont {
    texture: Texture,
    line_height: f32,
    chars: HashMap<char, SpriteFontChar>,
}

impl SpriteFont {
    pub fn new(texture: Texture, line_height: f32) -> Self {
        Self {
            texture,
            line_height,
            chars: HashMap::new(),
        }
    }

    /// Build a font from a parsed descriptor. Glyph UVs are derived from the
    /// pixel rects with the texture's V flip.
    pub fn from_descriptor(texture: Texture, descriptor: &FontDescriptor) -> Result<Self, ContentError> {
        let mut font = Self::new(texture, descriptor.common.line_height as f32);
        font.chars.reserve(descriptor.chars.len());
        for g in &descriptor.chars {
            let c = char::from_u32(g.id).ok_or(ContentError::InvalidCodePoint(g.id))?;
            let rect = Rect::new(g.x as f32, g.y as f32, g.width as f32, g.height as f32);
            font.insert_glyph(
                c,
                texture.uv_quad(&rect),
                Vec2::new(g.width as f32, g.height as f32),
                g.xadvance as f32,
                Vec2::new(g.xoffset as f32, g.yoffset as f32),
            );
        }
        log::debug!("font: {} glyphs, line height {}", font.chars.len(), font.line_height);
        Ok(font)
    }

    pub fn from_json(texture: Texture, json: &str) -> Result<Self, ContentError> {
        Self::from_descriptor(texture, &FontDescriptor::from_json(json)?)
    }

    pub fn insert_glyph(&mut self, c: char, texture_coords: Quad, size: Vec2, advance: f32, offset: Vec2) {
        self.chars.insert(c, SpriteFontChar { texture_coords, size, advance, offset });
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn glyph(&self, c: char) -> Option<&SpriteFontChar> {
        self.chars.get(&c)
    }

    pub fn glyph_count(&self) -> usize {
        self.chars.len()
    }

    /// Size of `text` rendered on one line at `scale`.
    ///
    /// Width is the sum of known glyph advances; unknown characters count as
    /// zero. Height is always one line, even for empty text.
    pub fn measure_text(&self, text: &str, scale: f32) -> Vec2 {
        let width: f32 = text
            .chars()
            .filter_map(|c| self.chars.get(&c))
            .map(|g| g.advance * scale)
            .sum();
        Vec2::new(width, self.line_height * scale)
    }
}
