//! Per-pixel validity masks and the center lock.
//!
//! Validity marks where each source actually has content: the base is
//! present wherever its alpha is nonzero, the overlay wherever its alpha
//! and the supplied mask are both nonzero. The center lock then carves the
//! protected center region out of the base mask so the seam can never eat
//! into it past a bounded buffer band.

use crate::foundation::buffer::{ImageRgba8, MaskU8};
use crate::foundation::geometry::TileGeometry;

/// Derive base and overlay validity masks from alpha and the supplied mask.
///
/// Returns `(base_validity, overlay_validity)`, both strictly 0/255.
pub fn derive_validity(
    base: &ImageRgba8,
    overlay: &ImageRgba8,
    overlay_mask: &MaskU8,
) -> (MaskU8, MaskU8) {
    let px = (base.width as usize) * (base.height as usize);
    let mut base_validity = vec![0u8; px];
    let mut overlay_validity = vec![0u8; px];

    for i in 0..px {
        if base.data[i * 4 + 3] > 0 {
            base_validity[i] = 255;
        }
        if overlay.data[i * 4 + 3] > 0 && overlay_mask.data[i] > 0 {
            overlay_validity[i] = 255;
        }
    }

    (
        MaskU8 {
            width: base.width,
            height: base.height,
            data: base_validity,
        },
        MaskU8 {
            width: base.width,
            height: base.height,
            data: overlay_validity,
        },
    )
}

/// Copy `mask` and zero the protected center shrunk inward by the seam band.
///
/// The band width is clamped to `1..=(3*tile_size)/2 - 1` so the inner
/// rectangle never inverts. The outer `band`-pixel ring of the center stays
/// pinned to whatever the mask already held; only the inner rectangle is
/// opened up for the seam to contest.
pub fn apply_center_lock(mask: &MaskU8, geometry: TileGeometry, band_px: u32) -> MaskU8 {
    let mut output = mask.clone();

    let max_band = ((geometry.tile_size * 3) / 2).saturating_sub(1).max(1);
    let band = band_px.clamp(1, max_band);

    let inner = geometry.center_rect().shrink(band);
    if inner.is_empty() {
        return output;
    }

    let width = mask.width as usize;
    for y in inner.top..inner.bottom.min(mask.height) {
        let row = (y as usize) * width;
        let left = row + (inner.left as usize).min(width);
        let right = row + (inner.right as usize).min(width);
        output.data[left..right].fill(0);
    }
    output
}

#[cfg(test)]
#[path = "../tests/unit/mask.rs"]
mod tests;
