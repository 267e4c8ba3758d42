use nova_engine::{EngineContext, Pool, Rect, SoundEvent, Sprite, SpriteRenderer};

use crate::config::ShooterConfig;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    pub alive: bool,
}

/// Auto-fire from the player's nose and move bullets straight up.
pub struct BulletManager {
    bullets: Pool<Bullet>,
    sprite: Sprite,
    sound: SoundEvent,
    speed: f32,
    fire_interval: f32,
    fire_timer: f32,
}

impl BulletManager {
    pub fn new(sprite: Sprite, sound: SoundEvent, config: &ShooterConfig) -> Self {
        Self {
            bullets: Pool::new(),
            sprite,
            sound,
            speed: config.bullet_speed,
            fire_interval: config.fire_interval,
            fire_timer: 0.0,
        }
    }

    pub fn bullets(&self) -> &Pool<Bullet> {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut Pool<Bullet> {
        &mut self.bullets
    }

    /// Spawn a bullet sitting just above the ship's nose.
    pub fn fire(&mut self, player: &Player) {
        let nose = player.nose();
        let (w, h) = (self.sprite.width(), self.sprite.height());
        self.bullets.spawn(Bullet {
            rect: Rect::new(nose.x - w / 2.0, nose.y - h, w, h),
            alive: true,
        });
    }

    /// Spawn on the fire timer, then move every bullet.
    pub fn update(&mut self, ctx: &mut EngineContext, player: &Player, dt: f32) {
        if !player.is_dead() {
            self.fire_timer += dt;
            if self.fire_timer >= self.fire_interval {
                self.fire_timer -= self.fire_interval;
                self.fire(player);
                ctx.emit_sound(self.sound);
            }
        }

        for bullet in self.bullets.iter_mut() {
            bullet.rect.y -= self.speed * dt;
        }
    }

    /// Drop bullets that hit something or left the top of the stage.
    pub fn cull(&mut self) -> usize {
        self.bullets.retain(|b| b.alive && b.rect.bottom() >= 0.0)
    }

    pub fn draw(&self, renderer: &mut SpriteRenderer) {
        for bullet in self.bullets.iter() {
            renderer.draw(&self.sprite, bullet.rect, None);
        }
    }
}
