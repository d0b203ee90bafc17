//! Minimum-cost seam between two overlapping sources.
//!
//! Given both sources' colors and validity masks, the solver partitions the
//! overlap region into "keep base" / "keep overlay" by a minimum s-t cut,
//! then zeroes each overlap pixel out of the losing mask. Pixels outside
//! the overlap keep their original assignment.

mod flow;
mod graph;

use crate::foundation::buffer::{ImageRgbF32, MaskU8};
use crate::foundation::error::{SeamweldError, SeamweldResult};

/// Cut a seam through the overlap and update both masks in place.
///
/// Errors with [`SeamweldError::DegenerateGraph`] when the masks do not
/// overlap anywhere; callers treat that as "nothing to cut" and proceed
/// with the masks unchanged. Deterministic: identical inputs always yield
/// identical masks.
pub fn find_seam(
    base: &ImageRgbF32,
    overlay: &ImageRgbF32,
    base_mask: &mut MaskU8,
    overlay_mask: &mut MaskU8,
) -> SeamweldResult<()> {
    if base.width != overlay.width
        || base.height != overlay.height
        || base.width != base_mask.width
        || base.height != base_mask.height
        || base.width != overlay_mask.width
        || base.height != overlay_mask.height
    {
        return Err(SeamweldError::invalid_input(
            "seam inputs must share identical dimensions",
        ));
    }

    let mut seam = graph::build(base, overlay, base_mask, overlay_mask)?;
    seam.network.max_flow(seam.source, seam.sink);
    let keep_base = seam.network.min_cut_source_side(seam.source);

    for (node, &pix) in seam.overlap.iter().enumerate() {
        if keep_base[node] {
            overlay_mask.data[pix as usize] = 0;
        } else {
            base_mask.data[pix as usize] = 0;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/seam/find.rs"]
mod tests;
