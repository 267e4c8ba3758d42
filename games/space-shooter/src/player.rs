use glam::Vec2;
use nova_engine::{InputState, Key, Rect, Sprite, SpriteRenderer};

use crate::config::ShooterConfig;

/// Life cycle of the ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerState {
    Normal,
    /// Recently hit. Damage is ignored until `remaining` runs out.
    Invincible {
        remaining: f32,
        blink_timer: f32,
        visible: bool,
    },
    /// Health reached zero. Terminal.
    Dead,
}

pub struct Player {
    sprite: Sprite,
    draw_rect: Rect,
    health: u32,
    state: PlayerState,
    speed: f32,
    invincibility_duration: f32,
    blink_interval: f32,
    stage: Vec2,
}

impl Player {
    /// Spawn centered horizontally near the bottom of the stage.
    pub fn new(sprite: Sprite, stage: Vec2, config: &ShooterConfig) -> Self {
        let mut draw_rect = sprite.draw_rect();
        draw_rect.x = stage.x / 2.0 - draw_rect.width / 2.0;
        draw_rect.y = stage.y - draw_rect.height - config.player_bottom_margin;
        Self {
            sprite,
            draw_rect,
            health: config.player_max_health,
            // Zero health is terminal from the start.
            state: if config.player_max_health == 0 {
                PlayerState::Dead
            } else {
                PlayerState::Normal
            },
            speed: config.player_speed,
            invincibility_duration: config.invincibility_duration,
            blink_interval: config.blink_interval,
            stage,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn rect(&self) -> Rect {
        self.draw_rect
    }

    pub fn is_dead(&self) -> bool {
        self.state == PlayerState::Dead
    }

    pub fn is_invincible(&self) -> bool {
        matches!(self.state, PlayerState::Invincible { .. })
    }

    pub fn is_visible(&self) -> bool {
        match self.state {
            PlayerState::Normal => true,
            PlayerState::Invincible { visible, .. } => visible,
            PlayerState::Dead => false,
        }
    }

    /// Apply contact damage. Returns false when the hit was ignored
    /// (invincible or already dead).
    pub fn take_damage(&mut self, damage: u32) -> bool {
        if self.state != PlayerState::Normal {
            return false;
        }

        self.health = self.health.saturating_sub(damage);
        self.state = if self.health == 0 {
            log::info!("player destroyed");
            PlayerState::Dead
        } else {
            PlayerState::Invincible {
                remaining: self.invincibility_duration,
                blink_timer: 0.0,
                visible: true,
            }
        };
        true
    }

    pub fn update(&mut self, input: &InputState, dt: f32) {
        match &mut self.state {
            PlayerState::Dead => return,
            PlayerState::Normal => {}
            PlayerState::Invincible { remaining, blink_timer, visible } => {
                *remaining -= dt;
                *blink_timer += dt;
                if *blink_timer > self.blink_interval {
                    *visible = !*visible;
                    *blink_timer = 0.0;
                }
                if *remaining <= 0.0 {
                    self.state = PlayerState::Normal;
                }
            }
        }

        let direction = Self::direction(input);
        let step = direction.normalize_or_zero() * self.speed * dt;
        self.draw_rect.x += step.x;
        self.draw_rect.y += step.y;

        self.draw_rect.x = self.draw_rect.x.clamp(0.0, (self.stage.x - self.draw_rect.width).max(0.0));
        self.draw_rect.y = self.draw_rect.y.clamp(0.0, (self.stage.y - self.draw_rect.height).max(0.0));
    }

    fn direction(input: &InputState) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if input.is_key_down(Key::ArrowUp) {
            dir.y = -1.0;
        }
        if input.is_key_down(Key::ArrowDown) {
            dir.y = 1.0;
        }
        if input.is_key_down(Key::ArrowLeft) {
            dir.x = -1.0;
        }
        if input.is_key_down(Key::ArrowRight) {
            dir.x = 1.0;
        }
        dir
    }

    /// Point bullets leave from: top center of the ship.
    pub fn nose(&self) -> Vec2 {
        Vec2::new(self.draw_rect.x + self.draw_rect.width / 2.0, self.draw_rect.y)
    }

    pub fn draw(&self, renderer: &mut SpriteRenderer) {
        if !self.is_visible() {
            return;
        }
        renderer.draw(&self.sprite, self.draw_rect, None);
    }
}
