use std::collections::HashMap;

use crate::components::sprite::Sprite;
use crate::core::geometry::Rect;
use crate::renderer::texture::Texture;

use super::error::ContentError;
use super::manifest::AtlasDescriptor;

/// File extension stripped from region names.
const NAME_SUFFIX: &str = ".png";

/// Registry of named sprites cut from one atlas texture.
/// Provides name-based sprite lookup for game code.
#[derive(Debug, Clone, Default)]
pub struct SpriteAtlas {
    sprites: HashMap<String, Sprite>,
}

impl SpriteAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from a parsed descriptor.
    ///
    /// Source rectangles are inset by one pixel on width and height so
    /// sampling never bleeds into the neighbouring region. A repeated name
    /// replaces the earlier entry.
    pub fn from_descriptor(texture: Texture, descriptor: &AtlasDescriptor) -> Result<Self, ContentError> {
        let mut atlas = Self {
            sprites: HashMap::with_capacity(descriptor.sub_textures.len()),
        };
        for region in &descriptor.sub_textures {
            if region.width == 0 || region.height == 0 {
                return Err(ContentError::EmptyRegion { name: region.name.clone() });
            }
            let name = region.name.strip_suffix(NAME_SUFFIX).unwrap_or(&region.name);
            let (w, h) = (region.width as f32, region.height as f32);
            let draw_rect = Rect::new(0.0, 0.0, w, h);
            let source_rect = Rect::new(region.x as f32, region.y as f32, w - 1.0, h - 1.0);
            atlas.insert(name, Sprite::new(texture, draw_rect, source_rect));
        }
        Ok(atlas)
    }

    /// Parse a JSON descriptor and build the registry.
    pub fn from_json(texture: Texture, json: &str) -> Result<Self, ContentError> {
        Self::from_descriptor(texture, &AtlasDescriptor::from_json(json)?)
    }

    /// Add or replace a sprite.
    pub fn insert(&mut self, name: &str, sprite: Sprite) {
        if self.sprites.insert(name.to_string(), sprite).is_some() {
            log::debug!("atlas: duplicate sprite name {name:?}, keeping the later entry");
        }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&Sprite> {
        self.sprites.get(name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Move every sprite into `other`, later entries winning.
    pub fn merge_into(self, other: &mut SpriteAtlas) {
        for (name, sprite) in self.sprites {
            other.insert(&name, sprite);
        }
    }
}
