use glam::Mat4;

/// Orthographic camera over the stage.
/// Maps stage pixels (origin top-left, y-down) to clip space.
pub struct Camera2D {
    /// Visible width in stage pixels.
    pub width: f32,
    /// Visible height in stage pixels.
    pub height: f32,
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Build the projection matrix. Top edge maps to +1, Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, 0.0, 1.0)
    }
}
