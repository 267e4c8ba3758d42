use glam::Vec2;
use nova_engine::*;

use crate::assets::ShooterAssets;
use crate::background::Background;
use crate::button::Button;
use crate::config::{ConfigError, ShooterConfig};
use crate::hud::Hud;
use crate::session::Session;

const STAGE_WIDTH: f32 = 800.0;
const STAGE_HEIGHT: f32 = 900.0;

// Game event kinds (Rust → host)
pub const EVENT_SCORE: u32 = 1;
pub const EVENT_STATE: u32 = 2;
pub const EVENT_PLAYER_DAMAGED: u32 = 3;

const TITLE_TEXT: &str = "SPACE SHOOTER";
const PROMPT_TEXT: &str = "PRESS SPACE OR CLICK";
const GAME_OVER_TEXT: &str = "GAME OVER";
const HEADLINE_SCALE: f32 = 1.0;
const SUBLINE_SCALE: f32 = 0.75;
const HEADLINE_OFFSET: f32 = -50.0;
const SUBLINE_OFFSET: f32 = 20.0;

const RETRY_TEXT: &str = "RETRY";
const RETRY_SIZE: Vec2 = Vec2::new(200.0, 65.0);
const RETRY_SCALE: f32 = 0.7;
const RETRY_GAP: f32 = 30.0;
const RETRY_BACKGROUND: Color = Color::rgb(0.2, 0.5, 0.8);

/// Top-level game state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    GameOver,
}

impl GameState {
    fn code(self) -> f32 {
        match self {
            GameState::Start => 0.0,
            GameState::Playing => 1.0,
            GameState::GameOver => 2.0,
        }
    }
}

/// Everything that needs loaded content.
struct World {
    assets: ShooterAssets,
    session: Session,
    background: Background,
    hud: Hud,
    retry: Button,
}

pub struct SpaceShooter {
    config: ShooterConfig,
    state: GameState,
    world: Option<World>,
}

impl Default for SpaceShooter {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceShooter {
    pub fn new() -> Self {
        Self::with_config(ShooterConfig::default())
    }

    pub fn with_config(config: ShooterConfig) -> Self {
        Self {
            config,
            state: GameState::Start,
            world: None,
        }
    }

    /// Replace gameplay tuning. Takes effect for the next session.
    /// Invalid tuning is rejected and the current config kept.
    pub fn configure(&mut self, config: ShooterConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.world.as_ref().map(|w| &w.session)
    }

    pub fn score(&self) -> u32 {
        self.session().map_or(0, |s| s.score)
    }

    pub fn retry_rect(&self) -> Option<Rect> {
        self.world.as_ref().map(|w| w.retry.rect())
    }

    fn stage() -> Vec2 {
        Vec2::new(STAGE_WIDTH, STAGE_HEIGHT)
    }

    /// Top-left for `text` centered on the stage, shifted by `y_offset`.
    fn centered_text(font: &SpriteFont, text: &str, scale: f32, y_offset: f32) -> (Vec2, Vec2) {
        let size = font.measure_text(text, scale);
        let position = Self::stage() / 2.0 - size / 2.0 + Vec2::new(0.0, y_offset);
        (position, size)
    }

    /// The retry button sits below the final score line. Its height is one
    /// line of text, so the layout does not depend on the score value.
    fn retry_button(font: &SpriteFont) -> Button {
        let (position, size) = Self::centered_text(font, "", SUBLINE_SCALE, SUBLINE_OFFSET);
        let rect = Rect::new(
            STAGE_WIDTH / 2.0 - RETRY_SIZE.x / 2.0,
            position.y + size.y + RETRY_GAP,
            RETRY_SIZE.x,
            RETRY_SIZE.y,
        );
        Button::new(RETRY_TEXT, rect, Color::WHITE, RETRY_BACKGROUND, RETRY_SCALE)
    }

    fn draw_centered(renderer: &mut SpriteRenderer, font: &SpriteFont, text: &str, scale: f32, y_offset: f32) {
        let (position, _) = Self::centered_text(font, text, scale, y_offset);
        renderer.draw_string(font, text, position, None, scale);
    }
}

impl Game for SpaceShooter {
    fn config(&self) -> GameConfig {
        GameConfig {
            stage_width: STAGE_WIDTH,
            stage_height: STAGE_HEIGHT,
            max_quads: 1024,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext, content: &Content) -> Result<(), ContentError> {
        let assets = ShooterAssets::load(content, &self.config)?;
        let stage = Self::stage();
        self.world = Some(World {
            session: Session::new(&assets, stage, &self.config),
            background: Background::new(assets.background, stage, self.config.background_speed),
            hud: Hud::new(assets.heart, &self.config),
            retry: Self::retry_button(&assets.font),
            assets,
        });
        self.state = GameState::Start;
        ctx.emit_event(GameEvent::new(EVENT_STATE, self.state.code(), 0.0, 0.0));
        log::info!("space-shooter: {} sprites resolved", content.sprite_count());
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &mut InputState, dt: f32) {
        let Some(world) = self.world.as_mut() else {
            return;
        };

        // Scrolls in every state.
        world.background.update(dt);

        let next = match self.state {
            GameState::Start => {
                let start = input.mouse_clicked() || input.is_key_down(Key::Space);
                input.reset_mouse_clicked();
                start.then_some(GameState::Playing)
            }

            GameState::Playing => {
                let report = world.session.update(ctx, input, dt);
                if report.score > 0 {
                    ctx.emit_event(GameEvent::new(
                        EVENT_SCORE,
                        world.session.score as f32,
                        report.score as f32,
                        0.0,
                    ));
                }
                if report.player_damage > 0 {
                    ctx.emit_event(GameEvent::new(
                        EVENT_PLAYER_DAMAGED,
                        world.session.player.health() as f32,
                        report.player_damage as f32,
                        0.0,
                    ));
                }
                // Clicks mean nothing mid-run; don't let one carry over to the retry screen.
                input.reset_mouse_clicked();
                world.session.player.is_dead().then_some(GameState::GameOver)
            }

            GameState::GameOver => {
                world.session.update_effects(dt);
                let mut retry = input.is_key_down(Key::Enter);
                if input.mouse_clicked() {
                    retry |= world.retry.is_clicked(input.mouse_click_position());
                    input.reset_mouse_clicked();
                }
                if retry {
                    world.session = Session::new(&world.assets, Self::stage(), &self.config);
                    log::info!("session reset");
                    ctx.emit_event(GameEvent::new(EVENT_SCORE, 0.0, 0.0, 0.0));
                }
                retry.then_some(GameState::Playing)
            }
        };

        if let Some(next) = next {
            log::info!("state {:?} -> {:?}", self.state, next);
            self.state = next;
            ctx.emit_event(GameEvent::new(EVENT_STATE, next.code(), 0.0, 0.0));
        }
    }

    fn draw(&self, renderer: &mut SpriteRenderer, _content: &Content) {
        let Some(world) = &self.world else {
            return;
        };
        let font = &world.assets.font;

        world.background.draw(renderer);
        world.session.draw(renderer);
        world.hud.draw(renderer, font, world.session.score, world.session.player.health());

        match self.state {
            GameState::Start => {
                Self::draw_centered(renderer, font, TITLE_TEXT, HEADLINE_SCALE, HEADLINE_OFFSET);
                Self::draw_centered(renderer, font, PROMPT_TEXT, SUBLINE_SCALE, SUBLINE_OFFSET);
            }
            GameState::Playing => {}
            GameState::GameOver => {
                let final_score = format!("Final Score: {}", world.session.score);
                Self::draw_centered(renderer, font, GAME_OVER_TEXT, HEADLINE_SCALE, HEADLINE_OFFSET);
                Self::draw_centered(renderer, font, &final_score, SUBLINE_SCALE, SUBLINE_OFFSET);
                world.retry.draw(renderer, font, &world.assets.white_pixel);
            }
        }
    }
}
