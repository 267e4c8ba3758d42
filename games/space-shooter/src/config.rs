use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

/// Gameplay tuning. Times are in seconds, speeds in pixels per second.
///
/// Every field has a default, so a host override only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    pub player_speed: f32,
    pub player_max_health: u32,
    /// Gap between the ship and the bottom edge at spawn.
    pub player_bottom_margin: f32,
    pub invincibility_duration: f32,
    pub blink_interval: f32,

    pub fire_interval: f32,
    pub bullet_speed: f32,

    pub enemy_spawn_interval: f32,
    /// Multiplier applied to every enemy kind's base speed.
    pub enemy_speed_scale: f32,

    pub explosion_cols: u32,
    pub explosion_rows: u32,
    pub explosion_fps: f32,

    pub background_speed: f32,

    pub score_position: Vec2,
    pub score_scale: f32,
    pub heart_origin: Vec2,
    pub heart_size: f32,
    pub heart_spacing: f32,
    pub max_hearts: u32,

    pub seed: u64,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            player_speed: 250.0,
            player_max_health: 100,
            player_bottom_margin: 20.0,
            invincibility_duration: 1.0,
            blink_interval: 0.1,

            fire_interval: 0.25,
            bullet_speed: 600.0,

            enemy_spawn_interval: 0.8,
            enemy_speed_scale: 1.0,

            explosion_cols: 4,
            explosion_rows: 4,
            explosion_fps: 30.0,

            background_speed: 60.0,

            score_position: Vec2::new(10.0, 10.0),
            score_scale: 0.5,
            heart_origin: Vec2::new(445.0, 855.0),
            heart_size: 30.0,
            heart_spacing: 5.0,
            max_hearts: 4,

            seed: 42,
        }
    }
}

impl ShooterConfig {
    /// Parse a host override. Fields left out keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tuning the simulation cannot run with: timers that never
    /// elapse or elapse on every step, a ship born dead, an empty
    /// explosion sheet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timers = [
            ("enemy_spawn_interval", self.enemy_spawn_interval),
            ("fire_interval", self.fire_interval),
            ("explosion_fps", self.explosion_fps),
            ("blink_interval", self.blink_interval),
            ("invincibility_duration", self.invincibility_duration),
        ];
        // Written negated so NaN fails too.
        if let Some((field, _)) = timers.iter().find(|(_, v)| !(*v > 0.0 && v.is_finite())) {
            return Err(ConfigError::NotPositive { field: *field });
        }

        let counts = [
            ("player_max_health", self.player_max_health),
            ("explosion_cols", self.explosion_cols),
            ("explosion_rows", self.explosion_rows),
        ];
        if let Some((field, _)) = counts.iter().find(|(_, n)| *n == 0) {
            return Err(ConfigError::NotPositive { field: *field });
        }
        Ok(())
    }
}
