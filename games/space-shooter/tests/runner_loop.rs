//! Drives the full runner -> game -> renderer path with scripted frames.

use nova_engine::{ContentError, FrameSource, InputEvent, Key};
use nova_web::GameRunner;
use space_shooter::game::{GameState, SpaceShooter};

const SHEET: &str = r#"{ "subTextures": [
    { "name": "playerShip1_blue.png", "x": 211, "y": 941, "width": 99, "height": 75 },
    { "name": "laserBlue01.png", "x": 856, "y": 421, "width": 9, "height": 54 },
    { "name": "meteorBrown_small1.png", "x": 346, "y": 814, "width": 28, "height": 28 },
    { "name": "meteorBrown_big1.png", "x": 224, "y": 664, "width": 101, "height": 84 },
    { "name": "enemyRed1.png", "x": 425, "y": 384, "width": 93, "height": 84 }
] }"#;

const FONT: &str = r#"{ "common": { "lineHeight": 64 }, "chars": [
    { "id": 48, "x": 0, "y": 0, "width": 30, "height": 40, "xadvance": 32, "xoffset": 0, "yoffset": 8 },
    { "id": 83, "x": 32, "y": 0, "width": 30, "height": 40, "xadvance": 32, "xoffset": 0, "yoffset": 8 }
] }"#;

fn loaded_runner() -> GameRunner<SpaceShooter> {
    let mut runner = GameRunner::new(SpaceShooter::new());
    runner.load_texture("sheet", 1, 1024, 1024).unwrap();
    runner.load_texture("font", 2, 512, 512).unwrap();
    runner.load_texture("background", 3, 256, 256).unwrap();
    runner.load_texture("heart", 4, 64, 64).unwrap();
    runner.load_texture("explosion", 5, 512, 512).unwrap();
    runner.load_solid_texture("white", 6).unwrap();
    runner.load_atlas("sheet", SHEET).unwrap();
    runner.load_font("font", FONT).unwrap();
    runner.load_sound("laser", 1).unwrap();
    runner.finish_loading().unwrap();
    runner
}

/// Frame interval a little longer than one fixed step, so every frame
/// runs at least one update.
const FRAME_MS: f64 = 20.0;

fn frames(start_ms: f64, count: usize) -> impl FrameSource {
    (0..count).map(move |i| start_ms + i as f64 * FRAME_MS)
}

fn run(runner: &mut GameRunner<SpaceShooter>, mut source: impl FrameSource) {
    while let Some(ts) = source.next_frame() {
        runner.tick(ts);
    }
}

#[test]
fn frames_are_skipped_until_content_is_ready() {
    let mut runner = GameRunner::new(SpaceShooter::new());
    runner.push_input(InputEvent::KeyDown { key_code: Key::Space.code() });
    runner.tick(0.0);
    runner.tick(16.0);

    assert!(!runner.is_ready());
    assert_eq!(runner.vertex_count(), 0);
    assert_eq!(runner.game().state(), GameState::Start);
}

#[test]
fn missing_content_aborts_startup() {
    let mut runner = GameRunner::new(SpaceShooter::new());
    runner.load_texture("sheet", 1, 1024, 1024).unwrap();
    let err = runner.finish_loading().unwrap_err();
    assert!(matches!(err, ContentError::MissingSprite(_)));
    assert!(!runner.is_ready());
}

#[test]
fn loading_after_freeze_is_rejected() {
    let mut runner = loaded_runner();
    assert!(matches!(runner.load_sound("late", 9), Err(ContentError::AlreadyFrozen)));
    assert!(matches!(runner.finish_loading(), Err(ContentError::AlreadyFrozen)));
}

#[test]
fn zero_sized_texture_is_rejected() {
    let mut runner = GameRunner::new(SpaceShooter::new());
    let err = runner.load_texture("broken", 7, 0, 64).unwrap_err();
    assert!(matches!(err, ContentError::ZeroSizedTexture { .. }));
}

#[test]
fn load_failure_is_fatal() {
    let mut runner = GameRunner::new(SpaceShooter::new());
    let err = runner.fail_load("assets/heart.png", "404");
    assert!(matches!(err, ContentError::LoadFailed { .. }));
    assert!(matches!(runner.finish_loading(), Err(ContentError::AlreadyFrozen)));
}

#[test]
fn title_frame_renders() {
    let mut runner = loaded_runner();
    run(&mut runner, frames(0.0, 2));

    assert!(runner.is_ready());
    assert_eq!(runner.game().state(), GameState::Start);
    assert!(runner.vertex_count() > 0);
    assert_eq!(runner.index_count(), runner.vertex_count() / 4 * 6);
    assert!(runner.batch_count() >= 1);
}

#[test]
fn playing_fires_lasers_with_sound() {
    let mut runner = loaded_runner();
    runner.tick(0.0);
    runner.push_input(InputEvent::KeyDown { key_code: Key::Space.code() });
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().state(), GameState::Playing);

    let mut heard = 0;
    let mut source = frames(2.0 * FRAME_MS, 50);
    while let Some(ts) = source.next_frame() {
        runner.tick(ts);
        heard += runner.sound_events_len();
    }

    // One second at a 0.25 s fire interval.
    assert!((3..=5).contains(&heard), "heard {heard}");
    let session = runner.game().session().unwrap();
    assert!(!session.bullets.bullets().is_empty());
    assert!(!session.enemies.enemies().is_empty());
}

#[test]
fn long_stall_is_clamped() {
    let mut runner = loaded_runner();
    runner.tick(0.0);
    runner.push_input(InputEvent::PointerUp { x: 10.0, y: 10.0 });
    runner.tick(FRAME_MS);
    assert_eq!(runner.game().state(), GameState::Playing);

    // A ten second gap runs at most ten fixed steps: too short to fire or spawn.
    runner.tick(10_000.0 + FRAME_MS);
    let session = runner.game().session().unwrap();
    assert!(session.bullets.bullets().is_empty());
    assert!(session.enemies.enemies().is_empty());
}
