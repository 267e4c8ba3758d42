use super::traits::{BatchFrame, DrawBatch, RenderBackend};
use super::vertex::SpriteVertex;

/// Recording backend: keeps a copy of the last submitted frame so the host
/// can read the buffers through raw pointers (wasm linear memory).
pub struct DrawList {
    vertices: Vec<SpriteVertex>,
    indices: Vec<u32>,
    batches: Vec<DrawBatch>,
    submits: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_capacity(2048)
    }

    pub fn with_capacity(max_quads: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(max_quads * 4),
            indices: Vec::with_capacity(max_quads * 6),
            batches: Vec::with_capacity(32),
            submits: 0,
        }
    }

    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    /// Number of frames submitted so far.
    pub fn submits(&self) -> u64 {
        self.submits
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.batches.clear();
    }

    // ---- Raw accessors for host reads ----

    /// Vertex data as flat floats (`SpriteVertex::FLOATS` per vertex).
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn indices_ptr(&self) -> *const u32 {
        self.indices.as_ptr()
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Batch table as u32 triples: texture id, index start, index count.
    pub fn batches_ptr(&self) -> *const u32 {
        self.batches.as_ptr() as *const u32
    }

    pub fn batch_count(&self) -> u32 {
        self.batches.len() as u32
    }
}

impl RenderBackend for DrawList {
    fn submit(&mut self, frame: &BatchFrame<'_>) {
        self.clear();
        self.vertices.extend_from_slice(frame.vertices);
        self.indices.extend_from_slice(frame.indices);
        self.batches.extend_from_slice(frame.batches);
        self.submits += 1;
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
