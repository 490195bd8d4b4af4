use std::path::Path;

use anyhow::{Context, Result};

use easel_engine::image::Image;

/// Decodes an image file into an RGBA8 [`Image`].
pub fn load_image(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let img = image::open(path).with_context(|| format!("failed to load image {}", path.display()))?;
    let image = from_rgba(img.to_rgba8())?;
    log::debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

/// Decodes an in-memory encoded image (PNG, JPEG, BMP, GIF).
pub fn decode_image(bytes: &[u8]) -> Result<Image> {
    let img = image::load_from_memory(bytes).context("failed to decode image")?;
    from_rgba(img.to_rgba8())
}

fn from_rgba(rgba: image::RgbaImage) -> Result<Image> {
    let (width, height) = rgba.dimensions();
    Image::from_rgba8(width, height, rgba.into_raw())
        .with_context(|| format!("pixel buffer does not match {width}x{height}"))
}
