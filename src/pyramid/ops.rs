//! Separable pyramid primitives: 5-tap binomial blur, 2x decimation, and
//! zero-insert upsampling to an explicit target size.
//!
//! Borders replicate (clamp). Each pass is row-parallel; callers sequence
//! whole levels, which depend on each other, in order.

use rayon::prelude::*;

/// 1D binomial kernel [1,4,6,4,1]/16, applied separably.
const KERNEL: [f32; 5] = [
    1.0 / 16.0,
    4.0 / 16.0,
    6.0 / 16.0,
    4.0 / 16.0,
    1.0 / 16.0,
];

/// Separable low-pass filter over an interleaved multi-channel buffer.
pub(crate) fn blur5(src: &[f32], width: usize, height: usize, channels: usize) -> Vec<f32> {
    let mut tmp = vec![0.0f32; src.len()];
    let mut out = vec![0.0f32; src.len()];
    horizontal_pass(src, &mut tmp, width, height, channels);
    vertical_pass(&tmp, &mut out, width, height, channels);
    out
}

fn horizontal_pass(src: &[f32], dst: &mut [f32], width: usize, height: usize, channels: usize) {
    let row_len = width * channels;
    debug_assert_eq!(src.len(), row_len * height);
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            let in_row = &src[y * row_len..(y + 1) * row_len];
            for x in 0..width {
                for c in 0..channels {
                    let mut acc = 0.0f32;
                    for (k, &w) in KERNEL.iter().enumerate() {
                        let sx = (x + k).saturating_sub(2).min(width - 1);
                        acc += w * in_row[sx * channels + c];
                    }
                    out_row[x * channels + c] = acc;
                }
            }
        });
}

fn vertical_pass(src: &[f32], dst: &mut [f32], width: usize, height: usize, channels: usize) {
    let row_len = width * channels;
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (k, &w) in KERNEL.iter().enumerate() {
                let sy = (y + k).saturating_sub(2).min(height - 1);
                let in_row = &src[sy * row_len..(sy + 1) * row_len];
                for (o, &v) in out_row.iter_mut().zip(in_row) {
                    if k == 0 {
                        *o = w * v;
                    } else {
                        *o += w * v;
                    }
                }
            }
        });
}

/// Low-pass then decimate by 2 along both axes.
///
/// Returns the decimated buffer plus its dimensions (ceiling division, so
/// odd sizes keep their last sample).
pub(crate) fn downsample2(
    src: &[f32],
    width: usize,
    height: usize,
    channels: usize,
) -> (Vec<f32>, usize, usize) {
    let blurred = blur5(src, width, height, channels);
    let out_w = width.div_ceil(2);
    let out_h = height.div_ceil(2);
    let mut out = vec![0.0f32; out_w * out_h * channels];
    out.par_chunks_mut(out_w * channels)
        .enumerate()
        .for_each(|(y, out_row)| {
            let sy = (y * 2).min(height - 1);
            let in_row = &blurred[sy * width * channels..(sy + 1) * width * channels];
            for x in 0..out_w {
                let sx = (x * 2).min(width - 1);
                out_row[x * channels..(x + 1) * channels]
                    .copy_from_slice(&in_row[sx * channels..(sx + 1) * channels]);
            }
        });
    (out, out_w, out_h)
}

/// Upsample to an explicit `(target_w, target_h)` by zero insertion at even
/// coordinates followed by the blur kernel at 4x gain (the injected grid
/// holds one sample per four output pixels).
pub(crate) fn upsample_to(
    src: &[f32],
    src_w: usize,
    src_h: usize,
    channels: usize,
    target_w: usize,
    target_h: usize,
) -> Vec<f32> {
    debug_assert_eq!(target_w.div_ceil(2), src_w);
    debug_assert_eq!(target_h.div_ceil(2), src_h);

    let mut sparse = vec![0.0f32; target_w * target_h * channels];
    sparse
        .par_chunks_mut(target_w * channels)
        .enumerate()
        .for_each(|(y, out_row)| {
            if y % 2 != 0 {
                return;
            }
            let sy = y / 2;
            let in_row = &src[sy * src_w * channels..(sy + 1) * src_w * channels];
            for x in 0..src_w {
                out_row[(x * 2) * channels..(x * 2 + 1) * channels]
                    .copy_from_slice(&in_row[x * channels..(x + 1) * channels]);
            }
        });

    let mut out = blur5(&sparse, target_w, target_h, channels);
    for v in &mut out {
        *v *= 4.0;
    }
    out
}
