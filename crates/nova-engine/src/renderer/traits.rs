//! Backend contract for submitting batched sprite geometry.
//!
//! On the web, rendering happens in TypeScript (WebGL2/WebGPU) reading the
//! buffers recorded by [`DrawList`](super::draw_list::DrawList). Native
//! backends implement [`RenderBackend`] directly and upload the frame.

use bytemuck::{Pod, Zeroable};

use super::texture::TextureId;
use super::vertex::SpriteVertex;

/// One draw call: a contiguous index range sharing a single texture.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct DrawBatch {
    pub texture: TextureId,
    /// First index in the frame's index buffer.
    pub index_start: u32,
    /// Number of indices (always a multiple of 6).
    pub index_count: u32,
}

impl DrawBatch {
    /// Quads covered by this batch.
    pub fn quad_count(&self) -> u32 {
        self.index_count / 6
    }
}

/// Everything a backend needs to draw one flushed batch.
/// Batches must be drawn in slice order.
#[derive(Debug, Clone, Copy)]
pub struct BatchFrame<'a> {
    pub vertices: &'a [SpriteVertex],
    pub indices: &'a [u32],
    pub batches: &'a [DrawBatch],
}

/// Receives flushed sprite batches. One `submit` per `SpriteRenderer::end`.
///
/// # Example Implementation
///
/// ```ignore
/// struct GlBackend { /* vao, vbo, ibo, program */ }
///
/// impl RenderBackend for GlBackend {
///     fn submit(&mut self, frame: &BatchFrame) {
///         upload(frame.vertices, frame.indices);
///         for batch in frame.batches {
///             bind_texture(batch.texture);
///             draw_elements(batch.index_start, batch.index_count);
///         }
///     }
/// }
/// ```
pub trait RenderBackend {
    fn submit(&mut self, frame: &BatchFrame<'_>);
}
