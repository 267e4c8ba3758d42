use glam::Vec2;
use nova_engine::{Color, Rect, SpriteFont, SpriteRenderer, Texture};

use crate::config::ShooterConfig;

const FADED: Color = Color::rgb(0.5, 0.5, 0.5);

/// Score text and a row of heart icons for health.
pub struct Hud {
    heart: Texture,
    score_position: Vec2,
    score_scale: f32,
    heart_origin: Vec2,
    heart_size: f32,
    heart_spacing: f32,
    max_hearts: u32,
    max_health: u32,
}

impl Hud {
    pub fn new(heart: Texture, config: &ShooterConfig) -> Self {
        Self {
            heart,
            score_position: config.score_position,
            score_scale: config.score_scale,
            heart_origin: config.heart_origin,
            heart_size: config.heart_size,
            heart_spacing: config.heart_spacing,
            max_hearts: config.max_hearts.max(1),
            max_health: config.player_max_health.max(1),
        }
    }

    /// Hearts drawn at full color for `health`; the rest are faded.
    pub fn full_hearts(&self, health: u32) -> u32 {
        let per_heart = self.max_health as f32 / self.max_hearts as f32;
        ((health as f32 / per_heart).floor() as u32).min(self.max_hearts)
    }

    pub fn heart_rect(&self, index: u32) -> Rect {
        Rect::new(
            self.heart_origin.x + index as f32 * (self.heart_size + self.heart_spacing),
            self.heart_origin.y,
            self.heart_size,
            self.heart_size,
        )
    }

    pub fn draw(&self, renderer: &mut SpriteRenderer, font: &SpriteFont, score: u32, health: u32) {
        let text = format!("Score: {score}");
        renderer.draw_string(font, &text, self.score_position, None, self.score_scale);

        let full = self.full_hearts(health);
        for i in 0..self.max_hearts {
            let tint = if i < full { None } else { Some(FADED) };
            renderer.draw_sprite(&self.heart, self.heart_rect(i), tint);
        }
    }
}
