//! Final alpha composition: merge blended color with the union of all
//! validity information.

use crate::foundation::buffer::{ImageRgbF32, ImageRgba8, MaskU8};
use crate::foundation::error::{SeamweldError, SeamweldResult};

/// Merge blended color and coverage with the original validity masks.
///
/// Per pixel: alpha is the maximum of base validity, overlay validity, and
/// blended coverage; color is the blended value clamped to the 8-bit
/// display range. Any pixel left with alpha 0 has its color forced to
/// zero so no undefined color is encoded under full transparency.
pub fn compose(
    blended: &ImageRgbF32,
    coverage: &MaskU8,
    base_validity: &MaskU8,
    overlay_validity: &MaskU8,
) -> SeamweldResult<ImageRgba8> {
    if blended.width != coverage.width
        || blended.height != coverage.height
        || blended.width != base_validity.width
        || blended.height != base_validity.height
        || blended.width != overlay_validity.width
        || blended.height != overlay_validity.height
    {
        return Err(SeamweldError::invalid_input(
            "composite inputs must share identical dimensions",
        ));
    }

    let px = (blended.width as usize) * (blended.height as usize);
    let mut data = vec![0u8; px * 4];
    for i in 0..px {
        let alpha = base_validity.data[i]
            .max(overlay_validity.data[i])
            .max(coverage.data[i]);
        if alpha == 0 {
            continue;
        }
        data[i * 4] = clamp_u8(blended.data[i * 3]);
        data[i * 4 + 1] = clamp_u8(blended.data[i * 3 + 1]);
        data[i * 4 + 2] = clamp_u8(blended.data[i * 3 + 2]);
        data[i * 4 + 3] = alpha;
    }

    ImageRgba8::from_vec(blended.width, blended.height, data)
}

fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../tests/unit/composite.rs"]
mod tests;
