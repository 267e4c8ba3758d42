use glam::Vec2;
use nova_engine::{Color, Rect, SpriteFont, SpriteRenderer, Texture};

const BORDER_WIDTH: f32 = 2.0;

/// A filled rectangle with a white border and centered label.
pub struct Button {
    rect: Rect,
    text: String,
    text_color: Color,
    background: Color,
    scale: f32,
}

impl Button {
    pub fn new(text: &str, rect: Rect, text_color: Color, background: Color, scale: f32) -> Self {
        Self {
            rect,
            text: text.to_string(),
            text_color,
            background,
            scale,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Inclusive on every edge.
    pub fn is_clicked(&self, point: Vec2) -> bool {
        self.rect.contains_point(point)
    }

    /// `pixel` is a solid white texture tinted to fill the border and body.
    pub fn draw(&self, renderer: &mut SpriteRenderer, font: &SpriteFont, pixel: &Texture) {
        renderer.draw_sprite(pixel, self.rect.inflate(BORDER_WIDTH), Some(Color::WHITE));
        renderer.draw_sprite(pixel, self.rect, Some(self.background));

        let size = font.measure_text(&self.text, self.scale);
        let position = self.rect.center() - size / 2.0;
        renderer.draw_string(font, &self.text, position, Some(self.text_color), self.scale);
    }
}
