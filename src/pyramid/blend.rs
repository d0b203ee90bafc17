//! Multi-band blending: Laplacian pyramids of the sources, Gaussian
//! pyramids of the masks as weights, per-level weighted averaging, then
//! progressive reconstruction from the coarsest level up.

use rayon::prelude::*;

use crate::foundation::buffer::{ImageRgbF32, MaskU8};
use crate::foundation::error::{SeamweldError, SeamweldResult};
use crate::pyramid::ops;

/// One pyramid level: an interleaved multi-channel buffer plus dimensions.
#[derive(Clone, Debug)]
struct Level {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

/// Blend two sources across their mask-weighted pyramids.
///
/// Returns the reconstructed full-resolution color buffer and the blended
/// coverage mask (union of the two input masks). Where only one source has
/// nonzero weight throughout a pixel's support, the reconstruction equals
/// that source's original value; pixels with zero total weight come out
/// zero. The result stays in f32; display clamping happens downstream.
pub fn blend_multiband(
    base: &ImageRgbF32,
    overlay: &ImageRgbF32,
    base_mask: &MaskU8,
    overlay_mask: &MaskU8,
    num_bands: u32,
) -> SeamweldResult<(ImageRgbF32, MaskU8)> {
    if num_bands == 0 {
        return Err(SeamweldError::invalid_input("num_bands must be >= 1"));
    }
    if base.width != overlay.width
        || base.height != overlay.height
        || base.width != base_mask.width
        || base.height != base_mask.height
        || base.width != overlay_mask.width
        || base.height != overlay_mask.height
    {
        return Err(SeamweldError::invalid_input(
            "blend inputs must share identical dimensions",
        ));
    }

    let width = base.width as usize;
    let height = base.height as usize;
    // num_bands high-frequency levels plus the low-pass residual; capped
    // so no level collapses below 2x2.
    let levels = num_bands as usize + 1;

    let weights_base = mask_weights(base_mask);
    let weights_overlay = mask_weights(overlay_mask);
    let wa = gaussian_pyramid(weights_base, width, height, 1, levels);
    let wb = gaussian_pyramid(weights_overlay, width, height, 1, levels);

    let ga = gaussian_pyramid(base.data.clone(), width, height, 3, levels);
    let gb = gaussian_pyramid(overlay.data.clone(), width, height, 3, levels);
    let la = laplacian_pyramid(ga);
    let lb = laplacian_pyramid(gb);

    let blended: Vec<Level> = la
        .iter()
        .zip(&lb)
        .zip(wa.iter().zip(&wb))
        .map(|((a, b), (weight_a, weight_b))| blend_level(a, b, weight_a, weight_b))
        .collect();

    let color = reconstruct(blended);

    let coverage: Vec<u8> = base_mask
        .data
        .iter()
        .zip(&overlay_mask.data)
        .map(|(&a, &b)| a.max(b))
        .collect();

    Ok((
        ImageRgbF32::from_vec(base.width, base.height, color)?,
        MaskU8::from_vec(base.width, base.height, coverage)?,
    ))
}

fn mask_weights(mask: &MaskU8) -> Vec<f32> {
    mask.data.iter().map(|&v| f32::from(v) / 255.0).collect()
}

/// Low-pass levels, each blurred and decimated from the previous one.
fn gaussian_pyramid(
    data: Vec<f32>,
    width: usize,
    height: usize,
    channels: usize,
    levels: usize,
) -> Vec<Level> {
    let mut out = vec![Level {
        data,
        width,
        height,
    }];
    while out.len() < levels {
        let prev = out.last().expect("pyramid always has a level");
        if prev.width < 2 || prev.height < 2 {
            break;
        }
        let (data, w, h) = ops::downsample2(&prev.data, prev.width, prev.height, channels);
        out.push(Level {
            data,
            width: w,
            height: h,
        });
    }
    out
}

/// High-frequency differences against the next coarser level; the last
/// level keeps its Gaussian low-pass content.
fn laplacian_pyramid(gaussian: Vec<Level>) -> Vec<Level> {
    let count = gaussian.len();
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let level = &gaussian[i];
        if i + 1 == count {
            out.push(level.clone());
            continue;
        }
        let channels = level.data.len() / (level.width * level.height);
        let next = &gaussian[i + 1];
        let up = ops::upsample_to(
            &next.data,
            next.width,
            next.height,
            channels,
            level.width,
            level.height,
        );
        let data = level
            .data
            .par_iter()
            .zip(up.par_iter())
            .map(|(&g, &u)| g - u)
            .collect();
        out.push(Level {
            data,
            width: level.width,
            height: level.height,
        });
    }
    out
}

/// Weighted per-pixel average of one level pair. Zero total weight yields
/// zero output, excluded from reconstruction contribution.
fn blend_level(a: &Level, b: &Level, weight_a: &Level, weight_b: &Level) -> Level {
    let channels = a.data.len() / (a.width * a.height);
    let mut data = vec![0.0f32; a.data.len()];
    data.par_chunks_mut(a.width * channels)
        .enumerate()
        .for_each(|(y, out_row)| {
            let row = y * a.width;
            for x in 0..a.width {
                let wa = weight_a.data[row + x];
                let wb = weight_b.data[row + x];
                let total = wa + wb;
                if total <= 0.0 {
                    continue;
                }
                for c in 0..channels {
                    let i = (row + x) * channels + c;
                    out_row[x * channels + c] = (a.data[i] * wa + b.data[i] * wb) / total;
                }
            }
        });
    Level {
        data,
        width: a.width,
        height: a.height,
    }
}

/// Sum the blended levels back up, coarsest first.
fn reconstruct(mut blended: Vec<Level>) -> Vec<f32> {
    let mut current = blended.pop().expect("pyramid always has a level");
    while let Some(level) = blended.pop() {
        let channels = level.data.len() / (level.width * level.height);
        let up = ops::upsample_to(
            &current.data,
            current.width,
            current.height,
            channels,
            level.width,
            level.height,
        );
        let data = up
            .par_iter()
            .zip(level.data.par_iter())
            .map(|(&u, &l)| u + l)
            .collect();
        current = Level {
            data,
            width: level.width,
            height: level.height,
        };
    }
    current.data
}

#[cfg(test)]
#[path = "../../tests/unit/pyramid/blend.rs"]
mod tests;
