use nova_engine::{Content, ContentError, SoundEvent, Sprite, SpriteFont, SpriteSheet, Texture};

use crate::config::ShooterConfig;
use crate::enemy::EnemySprites;

pub const PLAYER_SPRITE: &str = "playerShip1_blue";
pub const LASER_SPRITE: &str = "laserBlue01";
pub const BACKGROUND_TEXTURE: &str = "background";
pub const HEART_TEXTURE: &str = "heart";
pub const EXPLOSION_TEXTURE: &str = "explosion";
pub const WHITE_PIXEL_TEXTURE: &str = "white";
pub const LASER_SOUND: &str = "laser";

/// Every handle the game draws or plays, resolved once after loading.
#[derive(Debug, Clone)]
pub struct ShooterAssets {
    pub player: Sprite,
    pub laser: Sprite,
    pub enemies: EnemySprites,
    pub explosion: SpriteSheet,
    pub background: Texture,
    pub heart: Texture,
    pub white_pixel: Texture,
    pub font: SpriteFont,
    pub laser_sound: SoundEvent,
}

impl ShooterAssets {
    /// Fails on the first missing name.
    pub fn load(content: &Content, config: &ShooterConfig) -> Result<Self, ContentError> {
        Ok(Self {
            player: *content.sprite(PLAYER_SPRITE)?,
            laser: *content.sprite(LASER_SPRITE)?,
            enemies: EnemySprites::load(content)?,
            explosion: SpriteSheet::new(
                *content.texture(EXPLOSION_TEXTURE)?,
                config.explosion_cols,
                config.explosion_rows,
            ),
            background: *content.texture(BACKGROUND_TEXTURE)?,
            heart: *content.texture(HEART_TEXTURE)?,
            white_pixel: *content.texture(WHITE_PIXEL_TEXTURE)?,
            font: content.font()?.clone(),
            laser_sound: content.sound(LASER_SOUND)?,
        })
    }
}
