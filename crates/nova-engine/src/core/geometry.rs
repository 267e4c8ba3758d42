use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Axis-aligned rectangle in pixel space (y-down, origin top-left).
/// Used both for screen placement and for atlas source regions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Overlap test on closed intervals: rectangles that only touch along an
    /// edge or corner count as overlapping.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    /// Point containment, edges inclusive.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Grow the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }
}

/// Four texture-coordinate corners in normalized [0, 1] space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl Quad {
    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_right: Vec2, bottom_left: Vec2) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Corners in vertex emission order: TL, TR, BR, BL.
    pub fn corners(&self) -> [Vec2; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

/// Linear RGBA tint multiplied into vertex color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(5.0, 5.0, 10.0, 10.0)),
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(20.0, 0.0, 10.0, 10.0)),
            (Rect::new(-5.0, 3.0, 2.0, 40.0), Rect::new(-4.0, 0.0, 1.0, 1.0)),
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(0.0, 11.0, 10.0, 10.0)),
        ];
        for (a, b) in cases {
            assert_eq!(a.intersects(&b), b.intersects(&a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn overlap_is_reflexive() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(-3.5, 7.25, 1.0, 0.5),
            Rect::new(4.0, 4.0, 0.0, 0.0),
        ];
        for r in rects {
            assert!(r.intersects(&r));
        }
    }

    #[test]
    fn touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.intersects(&right));
        assert!(a.intersects(&below));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn separated_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.01, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, -10.5, 10.0, 10.0)));
    }

    #[test]
    fn bullet_inside_enemy_overlaps() {
        let bullet = Rect::new(100.0, 100.0, 8.0, 16.0);
        let enemy = Rect::new(100.0, 100.0, 32.0, 32.0);
        assert!(bullet.intersects(&enemy));
    }

    #[test]
    fn contains_point_includes_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(r.contains_point(Vec2::new(30.0, 15.0)));
        assert!(!r.contains_point(Vec2::new(30.5, 15.0)));
    }

    #[test]
    fn inflate_grows_each_side() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0).inflate(2.0);
        assert_eq!(r, Rect::new(8.0, 8.0, 24.0, 9.0));
    }

    #[test]
    fn default_color_is_opaque_white() {
        assert_eq!(Color::default().to_array(), [1.0, 1.0, 1.0, 1.0]);
    }
}
