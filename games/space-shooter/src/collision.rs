//! Cross-pool collision resolution.
//!
//! Every check is an axis-aligned rectangle overlap with closed intervals, so
//! touching edges count as a hit. Resolution only flips `alive` flags; the
//! managers compact their pools afterwards in a separate pass.

use crate::bullet::BulletManager;
use crate::enemy::EnemyManager;
use crate::explosion::ExplosionManager;
use crate::player::Player;

/// What one collision pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitReport {
    pub enemies_destroyed: u32,
    pub score: u32,
    /// Damage that actually landed on the player.
    pub player_damage: u32,
}

/// Bullets against enemies. Each bullet destroys at most one enemy and each
/// enemy absorbs at most one bullet. Destroyed enemies explode where they
/// were and award their kind's score.
pub fn resolve_bullet_hits(
    bullets: &mut BulletManager,
    enemies: &mut EnemyManager,
    explosions: &mut ExplosionManager,
) -> HitReport {
    let mut report = HitReport::default();

    for enemy in enemies.enemies_mut().iter_mut().filter(|e| e.alive) {
        let hit = bullets
            .bullets_mut()
            .iter_mut()
            .find(|b| b.alive && b.rect.intersects(&enemy.rect));
        if let Some(bullet) = hit {
            bullet.alive = false;
            enemy.alive = false;
            report.enemies_destroyed += 1;
            report.score += enemy.profile().score;
            explosions.spawn(enemy.rect.center());
        }
    }

    report
}

/// Enemies against the player. Damage respects the invincibility window;
/// whether the enemy survives the contact is decided by its kind.
pub fn resolve_player_hits(
    player: &mut Player,
    enemies: &mut EnemyManager,
    explosions: &mut ExplosionManager,
) -> HitReport {
    let mut report = HitReport::default();
    if player.is_dead() {
        return report;
    }

    let player_rect = player.rect();
    for enemy in enemies.enemies_mut().iter_mut().filter(|e| e.alive) {
        if !enemy.rect.intersects(&player_rect) {
            continue;
        }
        let profile = enemy.profile();
        if player.take_damage(profile.contact_damage) {
            report.player_damage += profile.contact_damage;
        }
        if profile.removed_on_contact {
            enemy.alive = false;
            report.enemies_destroyed += 1;
            explosions.spawn(enemy.rect.center());
        }
        if player.is_dead() {
            break;
        }
    }

    report
}
