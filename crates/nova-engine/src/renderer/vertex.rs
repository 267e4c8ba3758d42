use bytemuck::{Pod, Zeroable};

/// Per-vertex sprite data exposed to the host renderer.
/// Must match the TypeScript vertex layout: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// Stage-space position in pixels (y-down).
    pub position: [f32; 2],
    /// Normalized texture coordinate (origin bottom-left).
    pub uv: [f32; 2],
    /// RGBA tint, multiplied with the sampled texel.
    pub color: [f32; 4],
}

impl SpriteVertex {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Vertices per quad.
pub const QUAD_VERTICES: usize = 4;

/// Indices per quad (two triangles).
pub const QUAD_INDICES: usize = 6;

/// Local index pattern for one quad with corners TL, TR, BR, BL.
pub const QUAD_INDEX_PATTERN: [u32; QUAD_INDICES] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_vertex_is_8_floats() {
        assert_eq!(std::mem::size_of::<SpriteVertex>(), SpriteVertex::STRIDE_BYTES);
        assert_eq!(SpriteVertex::FLOATS, 8);
    }

    #[test]
    fn vertices_cast_to_flat_floats() {
        let verts = [SpriteVertex {
            position: [1.0, 2.0],
            uv: [0.5, 0.25],
            color: [1.0, 1.0, 1.0, 1.0],
        }];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 2.0, 0.5, 0.25, 1.0, 1.0, 1.0, 1.0]);
    }
}
