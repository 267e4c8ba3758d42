use glam::Vec2;
use nova_engine::{AnimationDef, FrameAnimation, Pool, Rect, SpriteRenderer, SpriteSheet};

use crate::config::ShooterConfig;

pub struct Explosion {
    pub center: Vec2,
    animation: FrameAnimation,
}

impl Explosion {
    pub fn is_finished(&self) -> bool {
        self.animation.is_finished()
    }
}

/// One-shot explosion animations, played out of a grid sheet.
pub struct ExplosionManager {
    explosions: Pool<Explosion>,
    sheet: SpriteSheet,
    animation: AnimationDef,
}

impl ExplosionManager {
    pub fn new(sheet: SpriteSheet, config: &ShooterConfig) -> Self {
        Self {
            explosions: Pool::new(),
            animation: AnimationDef::grid(sheet.cols(), sheet.rows(), config.explosion_fps),
            sheet,
        }
    }

    pub fn explosions(&self) -> &Pool<Explosion> {
        &self.explosions
    }

    /// Start an explosion centered on `center`.
    pub fn spawn(&mut self, center: Vec2) {
        self.explosions.spawn(Explosion {
            center,
            animation: FrameAnimation::new(self.animation.clone()),
        });
    }

    pub fn update(&mut self, dt: f32) {
        for explosion in self.explosions.iter_mut() {
            explosion.animation.tick(dt);
        }
    }

    /// Drop explosions whose last frame has played.
    pub fn cull(&mut self) -> usize {
        self.explosions.retain(|e| !e.is_finished())
    }

    pub fn draw(&self, renderer: &mut SpriteRenderer) {
        let (w, h) = self.sheet.frame_size();
        for explosion in self.explosions.iter() {
            let Some((col, row)) = explosion.animation.current_frame() else {
                continue;
            };
            let dest = Rect::new(explosion.center.x - w / 2.0, explosion.center.y - h / 2.0, w, h);
            renderer.draw_sprite_source(self.sheet.texture(), dest, self.sheet.frame_rect(col, row), None);
        }
    }
}
