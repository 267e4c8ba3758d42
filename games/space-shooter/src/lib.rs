use wasm_bindgen::prelude::*;
use nova_engine::*;

pub mod assets;
pub mod background;
pub mod bullet;
pub mod button;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod explosion;
pub mod game;
pub mod hud;
pub mod player;
pub mod session;

use config::ShooterConfig;
use game::SpaceShooter;

nova_web::export_game!(SpaceShooter, "space-shooter");

/// Override gameplay tuning from JSON. Call before `game_finish_loading`.
#[wasm_bindgen]
pub fn game_configure(json: &str) -> Result<(), JsValue> {
    let config = ShooterConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_runner(|r| r.game_mut().configure(config)).map_err(|e| JsValue::from_str(&e.to_string()))
}
