//! Frame animation over a grid sprite sheet.
//!
//! A sheet is one texture cut into equally sized cells; an animation walks a
//! list of (col, row) cells at a fixed rate.

use crate::core::geometry::Rect;
use crate::renderer::texture::Texture;

/// A texture divided into a uniform grid of frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    texture: Texture,
    cols: u32,
    rows: u32,
    frame_width: f32,
    frame_height: f32,
}

impl SpriteSheet {
    /// Split `texture` into `cols` x `rows` cells. Zero counts are treated as 1.
    pub fn new(texture: Texture, cols: u32, rows: u32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            texture,
            cols,
            rows,
            frame_width: texture.width() as f32 / cols as f32,
            frame_height: texture.height() as f32 / rows as f32,
        }
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn frame_size(&self) -> (f32, f32) {
        (self.frame_width, self.frame_height)
    }

    /// Pixel source rect of cell (col, row).
    pub fn frame_rect(&self, col: u32, row: u32) -> Rect {
        Rect::new(
            col as f32 * self.frame_width,
            row as f32 * self.frame_height,
            self.frame_width,
            self.frame_height,
        )
    }
}

/// Definition of a single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Frame cells as (col, row) pairs in the sheet.
    pub frames: Vec<(u32, u32)>,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl AnimationDef {
    /// Every cell of a `cols` x `rows` grid, row by row, played once.
    pub fn grid(cols: u32, rows: u32, fps: f32) -> Self {
        let frames = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (col, row)))
            .collect();
        Self {
            frames,
            frame_duration: 1.0 / fps,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn total_duration(&self) -> f32 {
        self.frame_duration * self.frames.len() as f32
    }
}

/// Playback state of one animation instance.
#[derive(Debug, Clone)]
pub struct FrameAnimation {
    def: AnimationDef,
    frame_index: usize,
    frame_timer: f32,
    finished: bool,
}

impl FrameAnimation {
    pub fn new(def: AnimationDef) -> Self {
        let finished = def.frames.is_empty();
        Self {
            def,
            frame_index: 0,
            frame_timer: 0.0,
            finished,
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Current (col, row), or None for an empty animation.
    pub fn current_frame(&self) -> Option<(u32, u32)> {
        self.def.frames.get(self.frame_index).copied()
    }

    /// True once the last frame has been shown for a full frame duration.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by dt seconds. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;
        let mut frame_changed = false;

        while self.frame_timer >= self.def.frame_duration {
            self.frame_timer -= self.def.frame_duration;

            if self.frame_index + 1 < self.def.frames.len() {
                self.frame_index += 1;
                frame_changed = true;
            } else {
                self.finished = true;
                break;
            }
        }

        frame_changed
    }
}
