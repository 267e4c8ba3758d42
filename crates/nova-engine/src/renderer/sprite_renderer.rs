//! Batched sprite renderer.
//!
//! Draw calls between [`SpriteRenderer::begin`] and [`SpriteRenderer::end`]
//! only enqueue quads. `end` turns the queue into one vertex buffer, one
//! index buffer and a list of [`DrawBatch`]es, then hands the lot to a
//! [`RenderBackend`] in a single submit.
//!
//! Each quad is 4 vertices / 2 triangles. Batching merges quads that share a
//! texture so a frame of a few hundred sprites costs a handful of texture
//! binds instead of one draw call per sprite.

use std::collections::HashMap;

use glam::Vec2;

use crate::assets::font::SpriteFont;
use crate::components::sprite::Sprite;
use crate::core::geometry::{Color, Quad, Rect};

use super::texture::{Texture, TextureId};
use super::traits::{BatchFrame, DrawBatch, RenderBackend};
use super::vertex::{SpriteVertex, QUAD_INDEX_PATTERN, QUAD_INDICES, QUAD_VERTICES};

/// How queued quads are grouped into draw calls at flush time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchOrder {
    /// Submit in enqueue order, merging consecutive quads that share a
    /// texture. Layering across textures is exactly the draw order.
    #[default]
    Deferred,
    /// Group all quads by texture (groups ordered by first use), keeping
    /// enqueue order inside each group. Minimizes texture binds; layering is
    /// only guaranteed between quads of the same texture.
    Texture,
}

/// Counters from the most recent flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    pub quads: u32,
    pub batches: u32,
}

#[derive(Debug, Clone, Copy)]
struct QueuedQuad {
    texture: TextureId,
    vertices: [SpriteVertex; QUAD_VERTICES],
}

pub struct SpriteRenderer {
    order: BatchOrder,
    open: bool,
    queue: Vec<QueuedQuad>,
    vertices: Vec<SpriteVertex>,
    indices: Vec<u32>,
    batches: Vec<DrawBatch>,
    stats: BatchStats,
}

impl SpriteRenderer {
    pub fn new(max_quads: usize, order: BatchOrder) -> Self {
        Self {
            order,
            open: false,
            queue: Vec::with_capacity(max_quads),
            vertices: Vec::with_capacity(max_quads * QUAD_VERTICES),
            indices: Vec::with_capacity(max_quads * QUAD_INDICES),
            batches: Vec::new(),
            stats: BatchStats::default(),
        }
    }

    pub fn order(&self) -> BatchOrder {
        self.order
    }

    pub fn set_order(&mut self, order: BatchOrder) {
        self.order = order;
    }

    /// Whether a batch is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open a batch.
    ///
    /// # Panics
    /// If a batch is already open.
    pub fn begin(&mut self) {
        assert!(!self.open, "SpriteRenderer::begin called while a batch is already open");
        self.open = true;
        self.queue.clear();
    }

    /// Queue a whole texture stretched over `dest`.
    pub fn draw_sprite(&mut self, texture: &Texture, dest: Rect, color: Option<Color>) {
        self.ensure_open("draw_sprite");
        self.push_quad(texture.id(), dest, texture.full_quad(), color.unwrap_or_default());
    }

    /// Queue the `source` pixel region of `texture` stretched over `dest`.
    pub fn draw_sprite_source(&mut self, texture: &Texture, dest: Rect, source: Rect, color: Option<Color>) {
        self.ensure_open("draw_sprite_source");
        self.push_quad(texture.id(), dest, texture.uv_quad(&source), color.unwrap_or_default());
    }

    /// Queue an atlas sprite at `dest`.
    pub fn draw(&mut self, sprite: &Sprite, dest: Rect, color: Option<Color>) {
        self.ensure_open("draw");
        self.draw_sprite_source(sprite.texture(), dest, sprite.source_rect(), color);
    }

    /// Queue one quad per glyph of `text`, starting with the pen at
    /// `position` (top-left of the line) and advancing left to right.
    ///
    /// Characters missing from the font are skipped and take no horizontal
    /// space. Glyphs with an empty bitmap (space) advance the pen without
    /// emitting a quad.
    pub fn draw_string(&mut self, font: &SpriteFont, text: &str, position: Vec2, color: Option<Color>, scale: f32) {
        self.ensure_open("draw_string");
        let color = color.unwrap_or_default();
        let texture = font.texture().id();
        let mut cursor_x = position.x;

        for c in text.chars() {
            let Some(glyph) = font.glyph(c) else {
                continue;
            };

            let size = glyph.size * scale;
            if size.x > 0.0 && size.y > 0.0 {
                let dest = Rect::new(
                    cursor_x + glyph.offset.x * scale,
                    position.y + glyph.offset.y * scale,
                    size.x,
                    size.y,
                );
                self.push_quad(texture, dest, glyph.texture_coords, color);
            }
            cursor_x += glyph.advance * scale;
        }
    }

    /// Flush the batch to `backend` and close it. Returns flush counters.
    ///
    /// # Panics
    /// If no batch is open.
    pub fn end(&mut self, backend: &mut dyn RenderBackend) -> BatchStats {
        assert!(self.open, "SpriteRenderer::end called without a matching begin");
        self.open = false;

        self.vertices.clear();
        self.indices.clear();
        self.batches.clear();

        match self.order {
            BatchOrder::Deferred => {
                for i in 0..self.queue.len() {
                    self.emit(i);
                }
            }
            BatchOrder::Texture => {
                for i in self.texture_grouped_order() {
                    self.emit(i);
                }
            }
        }

        backend.submit(&BatchFrame {
            vertices: &self.vertices,
            indices: &self.indices,
            batches: &self.batches,
        });

        self.stats = BatchStats {
            quads: self.queue.len() as u32,
            batches: self.batches.len() as u32,
        };
        self.queue.clear();
        self.stats
    }

    /// Counters from the most recent `end`.
    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    /// Quads queued in the open batch.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    fn ensure_open(&self, op: &str) {
        assert!(self.open, "SpriteRenderer::{op} called outside begin/end");
    }

    fn push_quad(&mut self, texture: TextureId, dest: Rect, uv: Quad, color: Color) {
        let color = color.to_array();
        let positions = [
            [dest.x, dest.y],
            [dest.right(), dest.y],
            [dest.right(), dest.bottom()],
            [dest.x, dest.bottom()],
        ];
        let uvs = uv.corners();
        let mut vertices = [SpriteVertex::default(); QUAD_VERTICES];
        for (i, vertex) in vertices.iter_mut().enumerate() {
            *vertex = SpriteVertex {
                position: positions[i],
                uv: uvs[i].to_array(),
                color,
            };
        }
        self.queue.push(QueuedQuad { texture, vertices });
    }

    /// Queue indices regrouped by texture, groups in order of first use.
    fn texture_grouped_order(&self) -> Vec<usize> {
        let mut group_of: HashMap<TextureId, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (i, quad) in self.queue.iter().enumerate() {
            let g = *group_of.entry(quad.texture).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[g].push(i);
        }
        groups.into_iter().flatten().collect()
    }

    /// Append queued quad `i` to the output buffers, extending the current
    /// batch when the texture matches.
    fn emit(&mut self, i: usize) {
        let quad = self.queue[i];
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&quad.vertices);

        let index_start = self.indices.len() as u32;
        self.indices.extend(QUAD_INDEX_PATTERN.iter().map(|&local| base + local));

        if let Some(last) = self.batches.last_mut() {
            if last.texture == quad.texture {
                last.index_count += QUAD_INDICES as u32;
                return;
            }
        }
        self.batches.push(DrawBatch {
            texture: quad.texture,
            index_start,
            index_count: QUAD_INDICES as u32,
        });
    }
}

impl Default for SpriteRenderer {
    fn default() -> Self {
        Self::new(2048, BatchOrder::Deferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::DrawList;

    fn tex(id: u32, w: u32, h: u32) -> Texture {
        Texture::new(TextureId(id), w, h).unwrap()
    }

    fn font() -> SpriteFont {
        let mut font = SpriteFont::new(tex(9, 128, 128), 32.0);
        let uv = font.texture().uv_quad(&Rect::new(0.0, 0.0, 10.0, 20.0));
        font.insert_glyph('A', uv, Vec2::new(10.0, 20.0), 12.0, Vec2::new(1.0, 2.0));
        font.insert_glyph('B', uv, Vec2::new(10.0, 20.0), 12.0, Vec2::new(0.0, 0.0));
        font.insert_glyph(' ', uv, Vec2::ZERO, 6.0, Vec2::ZERO);
        font
    }

    #[test]
    #[should_panic(expected = "outside begin/end")]
    fn draw_without_begin_panics() {
        let mut r = SpriteRenderer::default();
        r.draw_sprite(&tex(1, 4, 4), Rect::new(0.0, 0.0, 4.0, 4.0), None);
    }

    #[test]
    #[should_panic(expected = "outside begin/end")]
    fn draw_after_end_panics() {
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        r.end(&mut out);
        r.draw_string(&font(), "A", Vec2::ZERO, None, 1.0);
    }

    #[test]
    #[should_panic(expected = "already open")]
    fn double_begin_panics() {
        let mut r = SpriteRenderer::default();
        r.begin();
        r.begin();
    }

    #[test]
    #[should_panic(expected = "without a matching begin")]
    fn end_without_begin_panics() {
        let mut r = SpriteRenderer::default();
        r.end(&mut DrawList::new());
    }

    #[test]
    fn quad_vertices_follow_dest_rect_and_default_white() {
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        r.draw_sprite(&tex(1, 8, 8), Rect::new(10.0, 20.0, 30.0, 40.0), None);
        r.end(&mut out);

        let v = out.vertices();
        assert_eq!(v.len(), 4);
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[1].position, [40.0, 20.0]);
        assert_eq!(v[2].position, [40.0, 60.0]);
        assert_eq!(v[3].position, [10.0, 60.0]);
        assert!(v.iter().all(|vx| vx.color == [1.0, 1.0, 1.0, 1.0]));
        assert_eq!(out.indices(), &[0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn tint_is_written_to_vertex_color() {
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        r.draw_sprite(&tex(1, 8, 8), Rect::new(0.0, 0.0, 1.0, 1.0), Some(Color::rgb(0.5, 0.5, 0.5)));
        r.end(&mut out);
        assert_eq!(out.vertices()[2].color, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn source_rect_uvs_are_normalized() {
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        r.draw_sprite_source(
            &tex(1, 100, 100),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(25.0, 50.0, 25.0, 25.0),
            None,
        );
        r.end(&mut out);
        let v = out.vertices();
        assert_eq!(v[0].uv, [0.25, 0.5]);
        assert_eq!(v[2].uv, [0.5, 0.25]);
    }

    #[test]
    fn deferred_merges_consecutive_runs_only() {
        let (a, b) = (tex(1, 8, 8), tex(2, 8, 8));
        let dest = Rect::new(0.0, 0.0, 1.0, 1.0);
        let mut r = SpriteRenderer::new(16, BatchOrder::Deferred);
        let mut out = DrawList::new();
        r.begin();
        r.draw_sprite(&a, dest, None);
        r.draw_sprite(&a, dest, None);
        r.draw_sprite(&b, dest, None);
        r.draw_sprite(&a, dest, None);
        let stats = r.end(&mut out);

        assert_eq!(stats, BatchStats { quads: 4, batches: 3 });
        let batches = out.batches();
        assert_eq!(batches[0], DrawBatch { texture: TextureId(1), index_start: 0, index_count: 12 });
        assert_eq!(batches[1], DrawBatch { texture: TextureId(2), index_start: 12, index_count: 6 });
        assert_eq!(batches[2], DrawBatch { texture: TextureId(1), index_start: 18, index_count: 6 });
    }

    #[test]
    fn texture_order_groups_and_keeps_insertion_order_within_group() {
        let (a, b) = (tex(1, 8, 8), tex(2, 8, 8));
        let mut r = SpriteRenderer::new(16, BatchOrder::Texture);
        let mut out = DrawList::new();
        r.begin();
        r.draw_sprite(&a, Rect::new(0.0, 0.0, 1.0, 1.0), None);
        r.draw_sprite(&b, Rect::new(1.0, 0.0, 1.0, 1.0), None);
        r.draw_sprite(&a, Rect::new(2.0, 0.0, 1.0, 1.0), None);
        let stats = r.end(&mut out);

        assert_eq!(stats.batches, 2);
        assert_eq!(out.batches()[0].texture, TextureId(1));
        assert_eq!(out.batches()[0].quad_count(), 2);
        // Within texture 1: first-queued quad first.
        let v = out.vertices();
        assert_eq!(v[0].position[0], 0.0);
        assert_eq!(v[4].position[0], 2.0);
        assert_eq!(v[8].position[0], 1.0);
    }

    #[test]
    fn indices_reference_their_own_quad() {
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        for i in 0..3 {
            r.draw_sprite(&tex(1, 4, 4), Rect::new(i as f32, 0.0, 1.0, 1.0), None);
        }
        r.end(&mut out);
        assert_eq!(&out.indices()[12..], &[8, 9, 10, 8, 10, 11]);
    }

    #[test]
    fn draw_string_advances_and_applies_offset_and_scale() {
        let font = font();
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        r.draw_string(&font, "AB", Vec2::new(100.0, 50.0), None, 0.5);
        r.end(&mut out);

        let v = out.vertices();
        assert_eq!(v.len(), 8);
        // 'A': offset (1, 2) * 0.5, size (10, 20) * 0.5
        assert_eq!(v[0].position, [100.5, 51.0]);
        assert_eq!(v[2].position, [105.5, 61.0]);
        // 'B' starts one scaled advance (6) later
        assert_eq!(v[4].position, [106.0, 50.0]);
        assert_eq!(out.batches()[0].texture, TextureId(9));
    }

    #[test]
    fn missing_glyphs_take_no_space() {
        let font = font();
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        r.draw_string(&font, "A\u{263A}B", Vec2::ZERO, None, 1.0);
        r.end(&mut out);
        let v = out.vertices();
        assert_eq!(v.len(), 8);
        assert_eq!(v[4].position[0], 12.0);
    }

    #[test]
    fn blank_glyph_advances_without_quad() {
        let font = font();
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        r.draw_string(&font, "A B", Vec2::ZERO, None, 1.0);
        r.end(&mut out);
        let v = out.vertices();
        assert_eq!(v.len(), 8);
        assert_eq!(v[4].position[0], 18.0);
    }

    #[test]
    fn empty_batch_submits_empty_frame() {
        let mut r = SpriteRenderer::default();
        let mut out = DrawList::new();
        r.begin();
        let stats = r.end(&mut out);
        assert_eq!(stats, BatchStats::default());
        assert!(out.batches().is_empty());
        assert_eq!(out.submits(), 1);
    }
}
