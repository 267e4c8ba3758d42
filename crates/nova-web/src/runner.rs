use nova_engine::{
    Camera2D, Content, ContentBuilder, ContentError, DrawList, EngineContext, FrameDriver, Game,
    GameConfig, InputEvent, InputQueue, InputState, SoundEvent, SpriteRenderer, Texture, TextureId,
};

/// Where the runner is in its lifecycle. Frames are only simulated once
/// content is frozen and the game has initialized against it.
enum Phase {
    Loading(ContentBuilder),
    Ready(Content),
    Failed,
}

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    config: GameConfig,
    phase: Phase,
    input: InputQueue,
    input_state: InputState,
    driver: FrameDriver,
    renderer: SpriteRenderer,
    draw_list: DrawList,
    camera: Camera2D,
    /// Flat buffer of sound event IDs for host reads.
    sound_buffer: Vec<u8>,
    skipped_frames: u64,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::with_capacity(config.max_sounds, config.max_events),
            phase: Phase::Loading(ContentBuilder::new()),
            input: InputQueue::new(),
            input_state: InputState::new(),
            driver: FrameDriver::new(config.fixed_dt, config.max_frame_dt),
            renderer: SpriteRenderer::new(config.max_quads, config.batch_order),
            draw_list: DrawList::with_capacity(config.max_quads),
            camera: Camera2D::new(config.stage_width, config.stage_height),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            skipped_frames: 0,
            config,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    /// The frozen bundle, once loading has finished.
    pub fn content(&self) -> Option<&Content> {
        match &self.phase {
            Phase::Ready(content) => Some(content),
            _ => None,
        }
    }

    // ---- Content loading (host calls these as fetches resolve) ----

    fn builder(&mut self) -> Result<&mut ContentBuilder, ContentError> {
        match &mut self.phase {
            Phase::Loading(builder) => Ok(builder),
            _ => Err(ContentError::AlreadyFrozen),
        }
    }

    pub fn load_texture(&mut self, name: &str, id: u32, width: u32, height: u32) -> Result<(), ContentError> {
        let texture = Texture::new(TextureId(id), width, height)?;
        self.builder()?.add_texture(name, texture);
        Ok(())
    }

    pub fn load_solid_texture(&mut self, name: &str, id: u32) -> Result<(), ContentError> {
        self.builder()?.add_solid_texture(name, TextureId(id))?;
        Ok(())
    }

    pub fn load_atlas(&mut self, texture_name: &str, json: &str) -> Result<(), ContentError> {
        let count = self.builder()?.add_atlas(texture_name, json)?;
        log::debug!("atlas {texture_name}: {count} regions");
        Ok(())
    }

    pub fn load_font(&mut self, texture_name: &str, json: &str) -> Result<(), ContentError> {
        self.builder()?.set_font(texture_name, json)
    }

    /// Sound ids reach the host as single bytes.
    pub fn load_sound(&mut self, name: &str, id: u32) -> Result<(), ContentError> {
        if id > u8::MAX as u32 {
            return Err(ContentError::SoundIdOutOfRange {
                name: name.to_string(),
                id,
                max: u8::MAX as u32,
            });
        }
        self.builder()?.add_sound(name, SoundEvent(id));
        Ok(())
    }

    /// The host could not fetch or decode an asset. Startup is aborted.
    pub fn fail_load(&mut self, path: &str, reason: &str) -> ContentError {
        log::error!("failed to load {path}: {reason}");
        self.phase = Phase::Failed;
        ContentError::LoadFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Freeze content and initialize the game against it.
    pub fn finish_loading(&mut self) -> Result<(), ContentError> {
        let builder = match std::mem::replace(&mut self.phase, Phase::Failed) {
            Phase::Loading(builder) => builder,
            other => {
                self.phase = other;
                return Err(ContentError::AlreadyFrozen);
            }
        };
        let content = builder.build();
        if let Err(e) = self.game.init(&mut self.ctx, &content) {
            log::error!("game init failed: {e}");
            return Err(e);
        }
        self.driver.reset_clock();
        self.phase = Phase::Ready(content);
        Ok(())
    }

    // ---- Frame loop ----

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame at host timestamp `timestamp_ms`: fold input,
    /// run the fixed steps, then rebuild the draw list.
    pub fn tick(&mut self, timestamp_ms: f64) {
        let Phase::Ready(content) = &self.phase else {
            if self.skipped_frames == 0 {
                log::debug!("content not ready, skipping frames");
            }
            self.skipped_frames += 1;
            self.input.clear();
            return;
        };

        self.ctx.clear_frame_data();

        self.input_state.apply(self.input.drain());

        let game = &mut self.game;
        let ctx = &mut self.ctx;
        let input_state = &mut self.input_state;
        self.driver.frame(timestamp_ms, &mut |dt: f32| game.update(ctx, input_state, dt));

        self.renderer.begin();
        self.game.draw(&mut self.renderer, content);
        self.renderer.end(&mut self.draw_list);

        if self.ctx.sounds.len() > self.config.max_sounds {
            log::warn!("dropping {} sound events", self.ctx.sounds.len() - self.config.max_sounds);
        }
        self.sound_buffer.clear();
        for sound in self.ctx.sounds.iter().take(self.config.max_sounds) {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    // ---- Pointer accessors for host reads ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.draw_list.vertices_ptr()
    }

    pub fn vertex_count(&self) -> u32 {
        self.draw_list.vertex_count()
    }

    pub fn indices_ptr(&self) -> *const u32 {
        self.draw_list.indices_ptr()
    }

    pub fn index_count(&self) -> u32 {
        self.draw_list.index_count()
    }

    pub fn batches_ptr(&self) -> *const u32 {
        self.draw_list.batches_ptr()
    }

    pub fn batch_count(&self) -> u32 {
        self.draw_list.batch_count()
    }

    pub fn projection(&self) -> [f32; 16] {
        self.camera.projection_matrix().to_cols_array()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.config.max_events) as u32
    }

    pub fn stage_width(&self) -> f32 {
        self.config.stage_width
    }

    pub fn stage_height(&self) -> f32 {
        self.config.stage_height
    }

    pub fn max_quads(&self) -> u32 {
        self.config.max_quads as u32
    }
}
