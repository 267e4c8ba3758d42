use glam::Vec2;
use nova_engine::{Rect, SpriteRenderer, Texture};

/// Texture tiled over the stage, scrolling downward forever.
pub struct Background {
    texture: Texture,
    stage: Vec2,
    speed: f32,
    offset: f32,
}

impl Background {
    pub fn new(texture: Texture, stage: Vec2, speed: f32) -> Self {
        Self {
            texture,
            stage,
            speed,
            offset: 0.0,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn update(&mut self, dt: f32) {
        let tile_height = self.texture.height() as f32;
        self.offset = (self.offset + self.speed * dt).rem_euclid(tile_height);
    }

    /// Tiles covering the stage, top row starting one tile above the offset.
    pub fn tiles(&self) -> Vec<Rect> {
        let (tw, th) = (self.texture.width() as f32, self.texture.height() as f32);
        let mut tiles = Vec::new();
        let mut y = self.offset - th;
        while y < self.stage.y {
            let mut x = 0.0;
            while x < self.stage.x {
                tiles.push(Rect::new(x, y, tw, th));
                x += tw;
            }
            y += th;
        }
        tiles
    }

    pub fn draw(&self, renderer: &mut SpriteRenderer) {
        for tile in self.tiles() {
            renderer.draw_sprite(&self.texture, tile, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_engine::TextureId;

    fn background() -> Background {
        let tex = Texture::new(TextureId(8), 256, 256).unwrap();
        Background::new(tex, Vec2::new(800.0, 900.0), 60.0)
    }

    #[test]
    fn offset_wraps_at_tile_height() {
        let mut bg = background();
        bg.update(4.0);
        assert!((bg.offset() - 240.0).abs() < 1e-3);
        bg.update(1.0);
        assert!((bg.offset() - 44.0).abs() < 1e-3);
    }

    #[test]
    fn tiles_cover_the_stage() {
        let mut bg = background();
        bg.update(1.0);
        let tiles = bg.tiles();
        // 4 columns, rows from -196 down past 900.
        assert_eq!(tiles.len(), 4 * 5);
        assert!(tiles.iter().any(|t| t.y <= 0.0 && t.bottom() >= 0.0));
        assert!(tiles.iter().any(|t| t.bottom() >= 900.0));
    }
}
