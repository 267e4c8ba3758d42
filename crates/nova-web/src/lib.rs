pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, content loading, tick, input handlers,
///   draw-list accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use nova_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// nova_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `nova_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        fn to_js(err: ContentError) -> JsValue {
            JsValue::from_str(&err.to_string())
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized, waiting for content", $game_name);
        }

        // ---- Content loading ----

        #[wasm_bindgen]
        pub fn game_load_texture(name: &str, id: u32, width: u32, height: u32) -> Result<(), JsValue> {
            with_runner(|r| r.load_texture(name, id, width, height)).map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn game_load_solid_texture(name: &str, id: u32) -> Result<(), JsValue> {
            with_runner(|r| r.load_solid_texture(name, id)).map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn game_load_atlas(texture_name: &str, json: &str) -> Result<(), JsValue> {
            with_runner(|r| r.load_atlas(texture_name, json)).map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn game_load_font(texture_name: &str, json: &str) -> Result<(), JsValue> {
            with_runner(|r| r.load_font(texture_name, json)).map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn game_load_sound(name: &str, id: u32) -> Result<(), JsValue> {
            with_runner(|r| r.load_sound(name, id)).map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn game_load_failed(path: &str, reason: &str) -> JsValue {
            to_js(with_runner(|r| r.fail_load(path, reason)))
        }

        #[wasm_bindgen]
        pub fn game_finish_loading() -> Result<(), JsValue> {
            with_runner(|r| r.finish_loading()).map_err(to_js)?;
            log::info!("{}: content ready", $game_name);
            Ok(())
        }

        // ---- Frame loop and input ----

        #[wasm_bindgen]
        pub fn game_tick(timestamp_ms: f64) {
            with_runner(|r| r.tick(timestamp_ms));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vertex_count() -> u32 {
            with_runner(|r| r.vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_indices_ptr() -> *const u32 {
            with_runner(|r| r.indices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_index_count() -> u32 {
            with_runner(|r| r.index_count())
        }

        #[wasm_bindgen]
        pub fn get_batches_ptr() -> *const u32 {
            with_runner(|r| r.batches_ptr())
        }

        #[wasm_bindgen]
        pub fn get_batch_count() -> u32 {
            with_runner(|r| r.batch_count())
        }

        #[wasm_bindgen]
        pub fn get_projection() -> Vec<f32> {
            with_runner(|r| r.projection().to_vec())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u8 {
            with_runner(|r| r.sound_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_stage_width() -> f32 {
            with_runner(|r| r.stage_width())
        }

        #[wasm_bindgen]
        pub fn get_stage_height() -> f32 {
            with_runner(|r| r.stage_height())
        }

        #[wasm_bindgen]
        pub fn get_max_quads() -> u32 {
            with_runner(|r| r.max_quads())
        }
    };
}
