use std::sync::Arc;

use crate::paint::Color;

/// Decoded RGBA8 image handle (straight alpha, row-major, top-left origin).
///
/// Decoding and texture upload belong to the caller; the engine only needs the
/// size for background checks and the pixels for canvases that rasterize.
/// Cloning is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Image {
    /// Wraps `pixels`; returns `None` unless `pixels.len() == width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?.checked_mul(4)?;
        (pixels.len() == expected).then(|| Self { width, height, pixels: pixels.into() })
    }

    /// Solid image of the given size.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let px = color.to_rgba8();
        let pixels: Vec<u8> = px.iter().copied().cycle().take(width as usize * height as usize * 4).collect();
        Self { width, height, pixels: pixels.into() }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_checks_buffer_length() {
        assert!(Image::from_rgba8(2, 2, vec![0; 16]).is_some());
        assert!(Image::from_rgba8(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn filled_repeats_color() {
        let img = Image::filled(3, 1, Color::from_rgba8(1, 2, 3, 4));
        assert_eq!(img.pixels(), &[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
        assert_eq!(img.size(), (3, 1));
    }
}
