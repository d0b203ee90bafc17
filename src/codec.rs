//! Codec adapter around the core.
//!
//! The compositing core consumes and produces raw pixel buffers only;
//! this module is the explicit collaborator that turns encoded image
//! bytes into those buffers and back. Nothing in here runs during a
//! blend.

use std::io::Cursor;

use anyhow::Context;

use crate::config::{BackendSelection, BlendOptions};
use crate::foundation::buffer::{ImageRgba8, MaskU8};
use crate::foundation::error::{SeamweldError, SeamweldResult};
use crate::foundation::geometry::TileGeometry;
use crate::pipeline::blend_seam_grid;

/// Decode encoded image bytes to straight RGBA8.
///
/// Grayscale and RGB inputs are promoted to four channels.
pub fn decode_rgba8(bytes: &[u8]) -> SeamweldResult<ImageRgba8> {
    let decoded = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    ImageRgba8::from_vec(width, height, rgba.into_raw())
}

/// Decode encoded image bytes to a single-channel mask.
///
/// Alpha-bearing inputs contribute their alpha channel; color-only inputs
/// are reduced to luma.
pub fn decode_mask(bytes: &[u8]) -> SeamweldResult<MaskU8> {
    let decoded = image::load_from_memory(bytes).context("decode mask from memory")?;
    let (width, height) = (decoded.width(), decoded.height());
    let data = if decoded.color().has_alpha() {
        decoded
            .to_rgba8()
            .as_raw()
            .chunks_exact(4)
            .map(|px| px[3])
            .collect()
    } else {
        decoded.to_luma8().into_raw()
    };
    MaskU8::from_vec(width, height, data)
}

/// Encode an RGBA8 buffer as PNG bytes.
pub fn encode_png(image: &ImageRgba8) -> SeamweldResult<Vec<u8>> {
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.data.clone())
        .ok_or_else(|| SeamweldError::invalid_input("rgba buffer does not match its dimensions"))?;
    let mut out = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode blended image as png")?;
    Ok(out)
}

/// Decode three PNG inputs, blend, and encode the result as PNG.
///
/// Options and backends are resolved from the environment, once per call.
pub fn blend_seam_grid_png(
    base_png: &[u8],
    overlay_png: &[u8],
    overlay_mask_png: &[u8],
    geometry: TileGeometry,
) -> SeamweldResult<Vec<u8>> {
    let base = decode_rgba8(base_png)?;
    let overlay = decode_rgba8(overlay_png)?;
    let overlay_mask = decode_mask(overlay_mask_png)?;
    let options = BlendOptions::from_env();
    let backends = BackendSelection::from_env()?;
    let blended = blend_seam_grid(&base, &overlay, &overlay_mask, geometry, &options, &backends)?;
    encode_png(&blended)
}
