use glam::Vec2;
use nova_engine::{Content, ContentError, Pool, Rect, Rng, Sprite, SpriteRenderer};

use crate::config::ShooterConfig;

/// Every kind of enemy. Behaviour differences live in [`EnemyProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    SmallMeteor,
    BigMeteor,
    Fighter,
}

/// Static per-kind tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub sprite: &'static str,
    /// Downward speed, px/s.
    pub fall_speed: f32,
    /// Largest horizontal speed either way, px/s.
    pub drift: f32,
    pub score: u32,
    pub contact_damage: u32,
    /// Whether ramming the player destroys this enemy.
    pub removed_on_contact: bool,
    /// Relative spawn frequency.
    pub spawn_weight: u32,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::SmallMeteor, EnemyKind::BigMeteor, EnemyKind::Fighter];

    pub fn profile(self) -> EnemyProfile {
        match self {
            EnemyKind::SmallMeteor => EnemyProfile {
                sprite: "meteorBrown_small1",
                fall_speed: 220.0,
                drift: 40.0,
                score: 5,
                contact_damage: 10,
                removed_on_contact: true,
                spawn_weight: 5,
            },
            // Heavy rock: shrugs off a collision with the ship and keeps falling.
            EnemyKind::BigMeteor => EnemyProfile {
                sprite: "meteorBrown_big1",
                fall_speed: 120.0,
                drift: 20.0,
                score: 10,
                contact_damage: 30,
                removed_on_contact: false,
                spawn_weight: 3,
            },
            EnemyKind::Fighter => EnemyProfile {
                sprite: "enemyRed1",
                fall_speed: 170.0,
                drift: 120.0,
                score: 25,
                contact_damage: 25,
                removed_on_contact: true,
                spawn_weight: 2,
            },
        }
    }

    /// Fighters bounce off the side walls; meteors drift out of the stage.
    fn bounces(self) -> bool {
        matches!(self, EnemyKind::Fighter)
    }

    /// Weighted pick over [`EnemyKind::ALL`].
    pub fn pick(rng: &mut Rng) -> EnemyKind {
        let total: u32 = Self::ALL.iter().map(|k| k.profile().spawn_weight).sum();
        let mut roll = rng.next_int(total);
        for kind in Self::ALL {
            let weight = kind.profile().spawn_weight;
            if roll < weight {
                return kind;
            }
            roll -= weight;
        }
        EnemyKind::SmallMeteor
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub rect: Rect,
    pub velocity: Vec2,
    pub alive: bool,
}

impl Enemy {
    pub fn profile(&self) -> EnemyProfile {
        self.kind.profile()
    }
}

/// One sprite per enemy kind, resolved from content at startup.
#[derive(Debug, Clone, Copy)]
pub struct EnemySprites {
    small_meteor: Sprite,
    big_meteor: Sprite,
    fighter: Sprite,
}

impl EnemySprites {
    pub fn load(content: &Content) -> Result<Self, ContentError> {
        Ok(Self {
            small_meteor: *content.sprite(EnemyKind::SmallMeteor.profile().sprite)?,
            big_meteor: *content.sprite(EnemyKind::BigMeteor.profile().sprite)?,
            fighter: *content.sprite(EnemyKind::Fighter.profile().sprite)?,
        })
    }

    /// The same sprite for every kind. Handy when the art doesn't matter.
    pub fn uniform(sprite: Sprite) -> Self {
        Self {
            small_meteor: sprite,
            big_meteor: sprite,
            fighter: sprite,
        }
    }

    pub fn get(&self, kind: EnemyKind) -> &Sprite {
        match kind {
            EnemyKind::SmallMeteor => &self.small_meteor,
            EnemyKind::BigMeteor => &self.big_meteor,
            EnemyKind::Fighter => &self.fighter,
        }
    }
}

/// Timed spawns from above the stage, movement and culling.
pub struct EnemyManager {
    enemies: Pool<Enemy>,
    sprites: EnemySprites,
    rng: Rng,
    spawn_interval: f32,
    spawn_timer: f32,
    speed_scale: f32,
    stage: Vec2,
}

impl EnemyManager {
    pub fn new(sprites: EnemySprites, stage: Vec2, config: &ShooterConfig) -> Self {
        Self {
            enemies: Pool::new(),
            sprites,
            rng: Rng::new(config.seed),
            spawn_interval: config.enemy_spawn_interval,
            spawn_timer: 0.0,
            speed_scale: config.enemy_speed_scale,
            stage,
        }
    }

    pub fn enemies(&self) -> &Pool<Enemy> {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Pool<Enemy> {
        &mut self.enemies
    }

    /// Place an enemy of `kind` with its top-left at `position`.
    pub fn spawn_at(&mut self, kind: EnemyKind, position: Vec2, velocity: Vec2) {
        let sprite = self.sprites.get(kind);
        self.enemies.spawn(Enemy {
            kind,
            rect: Rect::new(position.x, position.y, sprite.width(), sprite.height()),
            velocity,
            alive: true,
        });
    }

    /// Spawn a random enemy just above the top edge.
    pub fn spawn_random(&mut self) {
        let kind = EnemyKind::pick(&mut self.rng);
        let profile = kind.profile();
        let sprite = self.sprites.get(kind);
        let max_x = (self.stage.x - sprite.width()).max(0.0);
        let position = Vec2::new(self.rng.range_f32(0.0, max_x), -sprite.height());
        let velocity = Vec2::new(
            self.rng.range_f32(-profile.drift, profile.drift),
            profile.fall_speed,
        ) * self.speed_scale;
        self.spawn_at(kind, position, velocity);
    }

    /// Spawn on the timer, then move every enemy.
    pub fn update(&mut self, dt: f32) {
        self.spawn_timer += dt;
        while self.spawn_timer >= self.spawn_interval {
            self.spawn_timer -= self.spawn_interval;
            self.spawn_random();
        }

        let stage_width = self.stage.x;
        for enemy in self.enemies.iter_mut() {
            enemy.rect.x += enemy.velocity.x * dt;
            enemy.rect.y += enemy.velocity.y * dt;

            if enemy.kind.bounces() {
                let max_x = (stage_width - enemy.rect.width).max(0.0);
                if enemy.rect.x < 0.0 || enemy.rect.x > max_x {
                    enemy.rect.x = enemy.rect.x.clamp(0.0, max_x);
                    enemy.velocity.x = -enemy.velocity.x;
                }
            }
        }
    }

    /// Drop destroyed enemies and those that left the stage.
    pub fn cull(&mut self) -> usize {
        let stage = self.stage;
        self.enemies.retain(|e| {
            e.alive && e.rect.y <= stage.y && e.rect.right() >= 0.0 && e.rect.x <= stage.x
        })
    }

    pub fn draw(&self, renderer: &mut SpriteRenderer) {
        for enemy in self.enemies.iter() {
            renderer.draw(self.sprites.get(enemy.kind), enemy.rect, None);
        }
    }
}
