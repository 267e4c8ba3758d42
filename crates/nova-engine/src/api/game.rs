use crate::api::types::{GameEvent, SoundEvent};
use crate::assets::content::Content;
use crate::assets::error::ContentError;
use crate::input::state::InputState;
use crate::renderer::sprite_renderer::{BatchOrder, SpriteRenderer};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Stage width in pixels.
    pub stage_width: f32,
    /// Stage height in pixels.
    pub stage_height: f32,
    /// Quads pre-allocated by the sprite renderer (default: 2048).
    pub max_quads: usize,
    /// Longest frame the clock will report, in seconds (default: 0.25).
    pub max_frame_dt: f32,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// How the renderer groups quads into batches.
    pub batch_order: BatchOrder,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            stage_width: 800.0,
            stage_height: 900.0,
            max_quads: 2048,
            max_frame_dt: 0.25,
            max_sounds: 32,
            max_events: 32,
            batch_order: BatchOrder::Deferred,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Resolve content and build the initial state. Runs once, after all
    /// content is loaded. An error aborts startup.
    fn init(&mut self, ctx: &mut EngineContext, content: &Content) -> Result<(), ContentError>;

    /// One fixed step of `dt` seconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &mut InputState, dt: f32);

    /// Queue this frame's sprites. Called between `begin` and `end`.
    fn draw(&self, renderer: &mut SpriteRenderer, content: &Content);
}

/// Per-frame outputs the game hands back to the host.
#[derive(Debug, Default)]
pub struct EngineContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_sounds: usize, max_events: usize) -> Self {
        Self {
            sounds: Vec::with_capacity(max_sounds),
            events: Vec::with_capacity(max_events),
        }
    }

    /// Emit a sound event to be forwarded to the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert!((config.fixed_dt - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(config.stage_width, 800.0);
        assert_eq!(config.batch_order, BatchOrder::Deferred);
    }

    #[test]
    fn clear_frame_data_empties_outputs() {
        let mut ctx = EngineContext::with_capacity(4, 4);
        ctx.emit_sound(SoundEvent(1));
        ctx.emit_event(GameEvent::new(1, 0.0, 0.0, 0.0));
        assert_eq!(ctx.sounds.len(), 1);

        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
        assert!(ctx.events.is_empty());
    }
}
