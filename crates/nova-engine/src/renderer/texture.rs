use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::assets::error::ContentError;
use crate::core::geometry::{Quad, Rect};

/// Host-side GPU texture handle. The host assigns ids when it uploads images.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Pod, Zeroable)]
pub struct TextureId(pub u32);

/// A GPU-resident image: opaque handle plus pixel dimensions.
///
/// Dimensions are validated non-zero on construction, so atlas UV math never
/// divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture {
    pub fn new(id: TextureId, width: u32, height: u32) -> Result<Self, ContentError> {
        if width == 0 || height == 0 {
            return Err(ContentError::ZeroSizedTexture { id: id.0, width, height });
        }
        Ok(Self { id, width, height })
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Map a pixel-space source rectangle (origin top-left) to normalized UVs.
    ///
    /// Texture coordinates have their origin at the bottom-left, so V is
    /// flipped: `v = 1 - y / height`.
    pub fn uv_quad(&self, source: &Rect) -> Quad {
        let w = self.width as f32;
        let h = self.height as f32;
        let u0 = source.x / w;
        let v0 = 1.0 - source.y / h;
        let u1 = (source.x + source.width) / w;
        let v1 = 1.0 - (source.y + source.height) / h;
        Quad::new(
            Vec2::new(u0, v0),
            Vec2::new(u1, v0),
            Vec2::new(u1, v1),
            Vec2::new(u0, v1),
        )
    }

    /// UVs covering the whole texture.
    pub fn full_quad(&self) -> Quad {
        self.uv_quad(&self.bounds())
    }

    /// The whole texture as a pixel rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_texture_rejected() {
        assert!(Texture::new(TextureId(1), 0, 16).is_err());
        assert!(Texture::new(TextureId(1), 16, 0).is_err());
        assert!(Texture::new(TextureId(1), 1, 1).is_ok());
    }

    #[test]
    fn full_quad_flips_v() {
        let tex = Texture::new(TextureId(0), 64, 32).unwrap();
        let q = tex.full_quad();
        assert_eq!(q.top_left, Vec2::new(0.0, 1.0));
        assert_eq!(q.top_right, Vec2::new(1.0, 1.0));
        assert_eq!(q.bottom_right, Vec2::new(1.0, 0.0));
        assert_eq!(q.bottom_left, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn source_rect_maps_into_atlas_space() {
        let tex = Texture::new(TextureId(0), 200, 100).unwrap();
        let q = tex.uv_quad(&Rect::new(50.0, 25.0, 100.0, 50.0));
        assert!((q.top_left.x - 0.25).abs() < 1e-6);
        assert!((q.top_left.y - 0.75).abs() < 1e-6);
        assert!((q.bottom_right.x - 0.75).abs() < 1e-6);
        assert!((q.bottom_right.y - 0.25).abs() < 1e-6);
    }
}
