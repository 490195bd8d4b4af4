use easel_engine::coords::Viewport;
use easel_engine::paint::Color;
use easel_engine::style::DEFAULT_BACKGROUND;

/// Sketch configuration.
///
/// Builder-style: start from [`SketchConfig::new`] and chain setters.
///
/// ```
/// use easel_sketch::SketchConfig;
///
/// let config = SketchConfig::new().title("waves").size(640, 480).frame_rate(30.0);
/// assert_eq!(config.viewport().size(), (640, 480));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub pixel_density: f32,
    /// Target frames per second for paced runs.
    pub frame_rate: f32,
    /// Painted once before `setup`.
    pub background: Color,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            width: 800,
            height: 600,
            pixel_density: 1.0,
            frame_rate: 60.0,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl SketchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Sets the sketch size in logical pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn pixel_density(mut self, density: f32) -> Self {
        self.pixel_density = density;
        self
    }

    pub fn frame_rate(mut self, fps: f32) -> Self {
        self.frame_rate = fps;
        self
    }

    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = color.into();
        self
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::with_density(self.width, self.height, self.pixel_density)
    }
}
