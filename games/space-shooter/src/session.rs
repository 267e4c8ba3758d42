use glam::Vec2;
use nova_engine::{EngineContext, InputState, SpriteRenderer};

use crate::assets::ShooterAssets;
use crate::bullet::BulletManager;
use crate::collision::{resolve_bullet_hits, resolve_player_hits, HitReport};
use crate::config::ShooterConfig;
use crate::enemy::EnemyManager;
use crate::explosion::ExplosionManager;
use crate::player::Player;

/// All per-run state. A new run replaces the whole value.
pub struct Session {
    pub player: Player,
    pub enemies: EnemyManager,
    pub bullets: BulletManager,
    pub explosions: ExplosionManager,
    pub score: u32,
}

impl Session {
    pub fn new(assets: &ShooterAssets, stage: Vec2, config: &ShooterConfig) -> Self {
        Self {
            player: Player::new(assets.player, stage, config),
            enemies: EnemyManager::new(assets.enemies, stage, config),
            bullets: BulletManager::new(assets.laser, assets.laser_sound, config),
            explosions: ExplosionManager::new(assets.explosion, config),
            score: 0,
        }
    }

    /// One simulation step: spawn and move, resolve collisions, then cull.
    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32) -> HitReport {
        let was_alive = !self.player.is_dead();

        self.player.update(input, dt);
        self.bullets.update(ctx, &self.player, dt);
        self.enemies.update(dt);
        self.explosions.update(dt);

        let shots = resolve_bullet_hits(&mut self.bullets, &mut self.enemies, &mut self.explosions);
        let rams = resolve_player_hits(&mut self.player, &mut self.enemies, &mut self.explosions);
        self.score += shots.score;

        if was_alive && self.player.is_dead() {
            self.explosions.spawn(self.player.rect().center());
        }

        self.bullets.cull();
        self.enemies.cull();
        self.explosions.cull();

        HitReport {
            enemies_destroyed: shots.enemies_destroyed + rams.enemies_destroyed,
            score: shots.score,
            player_damage: rams.player_damage,
        }
    }

    /// Keep explosions playing after the run has ended.
    pub fn update_effects(&mut self, dt: f32) {
        self.explosions.update(dt);
        self.explosions.cull();
    }

    pub fn draw(&self, renderer: &mut SpriteRenderer) {
        self.player.draw(renderer);
        self.enemies.draw(renderer);
        self.bullets.draw(renderer);
        self.explosions.draw(renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::fixtures;
    use crate::bullet::Bullet;
    use crate::enemy::EnemyKind;
    use nova_engine::Rect;

    const DT: f32 = 1.0 / 60.0;

    fn session() -> Session {
        Session::new(&fixtures::assets(), Vec2::new(800.0, 900.0), &ShooterConfig::default())
    }

    #[test]
    fn shooting_an_enemy_scores() {
        let mut s = session();
        s.enemies.spawn_at(EnemyKind::SmallMeteor, Vec2::new(100.0, 100.0), Vec2::ZERO);
        s.bullets.bullets_mut().spawn(Bullet {
            rect: Rect::new(110.0, 110.0, 9.0, 54.0),
            alive: true,
        });

        let report = s.update(&mut EngineContext::new(), &InputState::new(), DT);
        assert_eq!(report.enemies_destroyed, 1);
        assert_eq!(report.score, 5);
        assert_eq!(s.score, 5);
        assert!(s.enemies.enemies().is_empty());
        assert!(s.bullets.bullets().is_empty());
        assert_eq!(s.explosions.explosions().len(), 1);
    }

    #[test]
    fn lethal_ram_explodes_the_ship() {
        let mut s = session();
        s.player.take_damage(90);
        s.player.update(&InputState::new(), 1.1);
        assert!(!s.player.is_invincible());

        let top_left = s.player.rect().position();
        s.enemies.spawn_at(EnemyKind::BigMeteor, top_left, Vec2::ZERO);
        let report = s.update(&mut EngineContext::new(), &InputState::new(), DT);

        assert_eq!(report.player_damage, 30);
        assert!(s.player.is_dead());
        assert!(!s.player.is_visible());
        // Big meteors survive contact; the only explosion is the ship.
        assert_eq!(s.enemies.enemies().len(), 1);
        assert_eq!(s.explosions.explosions().len(), 1);
    }

    #[test]
    fn effects_run_down_after_death() {
        let mut s = session();
        s.explosions.spawn(Vec2::new(50.0, 50.0));
        for _ in 0..120 {
            s.update_effects(DT);
        }
        assert!(s.explosions.explosions().is_empty());
    }
}
