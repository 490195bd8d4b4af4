/// Sketch surface size in logical pixels plus the display's pixel density.
///
/// Full-window operations (background rects, image size checks) use the
/// logical size; only the canvas backend cares about `pixel_density`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_density: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixel_density: 1.0 }
    }

    #[inline]
    pub const fn with_density(width: u32, height: u32, pixel_density: f32) -> Self {
        Self { width, height, pixel_density }
    }

    #[inline]
    pub const fn size(self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Backing-store size in physical pixels.
    #[inline]
    pub fn physical_size(self) -> (u32, u32) {
        let d = if self.pixel_density.is_finite() && self.pixel_density > 0.0 {
            self.pixel_density
        } else {
            1.0
        };
        (
            (self.width as f32 * d).round() as u32,
            (self.height as f32 * d).round() as u32,
        )
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0 && self.pixel_density.is_finite() && self.pixel_density > 0.0
    }
}
