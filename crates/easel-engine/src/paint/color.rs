/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Canvases receive [`normalized`](Self::normalized) in canonical `r, g, b, a`
/// order.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    /// Creates a color from straight components. No clamping is applied;
    /// use [`clamped`](Self::clamped) for user input.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Opaque gray level in `[0, 1]`.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::rgba(v, v, v, 1.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Channels in `[0, 1]`, canonical RGBA order.
    #[inline]
    pub fn normalized(self) -> [f32; 4] {
        let c = self.clamped();
        [c.r, c.g, c.b, c.a]
    }

    /// Channels quantized to bytes, canonical RGBA order.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        self.normalized().map(|v| (v * 255.0).round() as u8)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`; non-finite channels become `0`.
    #[inline]
    pub fn clamped(self) -> Self {
        let c = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        Self::rgba(c(self.r), c(self.g), c(self.b), c(self.a))
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::from_rgba8(r, g, b, a)
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::from_rgb8(r, g, b)
    }
}

/// A single value is a gray level, matching `background(204)`-style calls.
impl From<u8> for Color {
    #[inline]
    fn from(v: u8) -> Self {
        Color::from_rgb8(v, v, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_keeps_canonical_channel_order() {
        let c = Color::rgba(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.normalized(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn bytes_map_to_unit_range() {
        let c = Color::from_rgba8(255, 0, 51, 255);
        assert_eq!(c.normalized(), [1.0, 0.0, 0.2, 1.0]);
        assert_eq!(c.to_rgba8(), [255, 0, 51, 255]);
    }

    #[test]
    fn clamped_handles_out_of_range_and_nan() {
        let c = Color::rgba(1.5, -0.5, f32::NAN, 0.5).clamped();
        assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn gray_byte_conversion() {
        let c: Color = 204u8.into();
        assert_eq!(c.to_rgba8(), [204, 204, 204, 255]);
    }
}
