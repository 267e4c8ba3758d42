//! Load-then-freeze content bundle.
//!
//! The host fetches and decodes images, sounds and descriptors, uploads the
//! images itself, then hands the resulting handles to a [`ContentBuilder`].
//! Once everything has arrived, [`ContentBuilder::build`] freezes the bundle
//! into an immutable [`Content`] that is passed explicitly to whatever needs
//! it. Nothing here is global.

use std::collections::HashMap;

use crate::api::types::SoundEvent;
use crate::components::sprite::Sprite;
use crate::renderer::texture::{Texture, TextureId};

use super::error::ContentError;
use super::font::SpriteFont;
use super::registry::SpriteAtlas;

/// Mutable collection of content while the host is still loading.
#[derive(Debug, Default)]
pub struct ContentBuilder {
    textures: HashMap<String, Texture>,
    sprites: SpriteAtlas,
    font: Option<SpriteFont>,
    sounds: HashMap<String, SoundEvent>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an uploaded texture under `name`.
    pub fn add_texture(&mut self, name: &str, texture: Texture) -> &mut Self {
        self.textures.insert(name.to_string(), texture);
        self
    }

    /// Register a 1x1 solid texture the host created directly on the GPU.
    pub fn add_solid_texture(&mut self, name: &str, id: TextureId) -> Result<Texture, ContentError> {
        let texture = Texture::new(id, 1, 1)?;
        self.add_texture(name, texture);
        Ok(texture)
    }

    /// Cut the named texture into sprites using a JSON atlas descriptor.
    /// Returns the number of regions read.
    pub fn add_atlas(&mut self, texture_name: &str, json: &str) -> Result<usize, ContentError> {
        let texture = self.texture(texture_name)?;
        let atlas = SpriteAtlas::from_json(texture, json)?;
        let count = atlas.len();
        atlas.merge_into(&mut self.sprites);
        Ok(count)
    }

    /// Build the bitmap font from a JSON descriptor over the named texture.
    pub fn set_font(&mut self, texture_name: &str, json: &str) -> Result<(), ContentError> {
        let texture = self.texture(texture_name)?;
        self.font = Some(SpriteFont::from_json(texture, json)?);
        Ok(())
    }

    /// Register a decoded sound. The host plays it when `event` is emitted.
    pub fn add_sound(&mut self, name: &str, event: SoundEvent) -> &mut Self {
        self.sounds.insert(name.to_string(), event);
        self
    }

    fn texture(&self, name: &str) -> Result<Texture, ContentError> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| ContentError::MissingTexture(name.to_string()))
    }

    /// Freeze into an immutable bundle.
    pub fn build(self) -> Content {
        log::info!(
            "content: {} textures, {} sprites, {} glyphs, {} sounds",
            self.textures.len(),
            self.sprites.len(),
            self.font.as_ref().map_or(0, SpriteFont::glyph_count),
            self.sounds.len(),
        );
        Content {
            textures: self.textures,
            sprites: self.sprites,
            font: self.font,
            sounds: self.sounds,
        }
    }
}

/// Immutable, fully loaded content.
#[derive(Debug)]
pub struct Content {
    textures: HashMap<String, Texture>,
    sprites: SpriteAtlas,
    font: Option<SpriteFont>,
    sounds: HashMap<String, SoundEvent>,
}

impl Content {
    pub fn texture(&self, name: &str) -> Result<&Texture, ContentError> {
        self.textures
            .get(name)
            .ok_or_else(|| ContentError::MissingTexture(name.to_string()))
    }

    pub fn sprite(&self, name: &str) -> Result<&Sprite, ContentError> {
        self.sprites
            .get(name)
            .ok_or_else(|| ContentError::MissingSprite(name.to_string()))
    }

    pub fn font(&self) -> Result<&SpriteFont, ContentError> {
        self.font.as_ref().ok_or(ContentError::MissingFont)
    }

    pub fn sound(&self, name: &str) -> Result<SoundEvent, ContentError> {
        self.sounds
            .get(name)
            .copied()
            .ok_or_else(|| ContentError::MissingSound(name.to_string()))
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }
}
