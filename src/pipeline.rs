//! The end-to-end composite pipeline.
//!
//! One invocation is a single synchronous, CPU-bound computation over one
//! fixed-size canvas. There is no shared mutable state between
//! invocations, so callers may run any number of them in parallel.

use crate::composite::compose;
use crate::config::{BackendSelection, BlendBackend, BlendOptions, SeamBackend};
use crate::foundation::buffer::{ImageRgba8, MaskU8};
use crate::foundation::error::{SeamweldError, SeamweldResult};
use crate::foundation::geometry::TileGeometry;
use crate::mask::{apply_center_lock, derive_validity};
use crate::pyramid::blend::blend_multiband;
use crate::seam::find_seam;

/// Composite `overlay` onto `base` with a seam-optimized multi-band blend.
///
/// Stages: validate geometry, derive validity masks, shortcut if either
/// source contributes nothing, center-lock the base mask, cut a seam
/// through the overlap, blend across the seam, and merge alpha. All
/// geometry and shape errors are raised before any blending computation
/// begins.
#[tracing::instrument(skip(base, overlay, overlay_mask, options, backends))]
pub fn blend_seam_grid(
    base: &ImageRgba8,
    overlay: &ImageRgba8,
    overlay_mask: &MaskU8,
    geometry: TileGeometry,
    options: &BlendOptions,
    backends: &BackendSelection,
) -> SeamweldResult<ImageRgba8> {
    geometry.validate_inputs(base, overlay, overlay_mask)?;

    let (base_validity, overlay_validity) = derive_validity(base, overlay, overlay_mask);
    if overlay_validity.is_all_zero() {
        tracing::debug!("overlay contributes nothing; passing base through");
        return Ok(base.clone());
    }
    if base_validity.is_all_zero() {
        tracing::debug!("base contributes nothing; passing overlay through");
        let mut out = overlay.clone();
        for (px, &valid) in out.data.chunks_exact_mut(4).zip(&overlay_validity.data) {
            px[3] = valid;
        }
        return Ok(out);
    }

    let base_rgb = base.rgb_plane_f32();
    let overlay_rgb = overlay.rgb_plane_f32();

    let mut base_cut = apply_center_lock(&base_validity, geometry, options.seam_band_px);
    let mut overlay_cut = overlay_validity.clone();

    if base_cut.intersects(&overlay_cut) {
        match backends.seam {
            SeamBackend::GraphCut => {
                match find_seam(&base_rgb, &overlay_rgb, &mut base_cut, &mut overlay_cut) {
                    Ok(()) => {}
                    Err(SeamweldError::DegenerateGraph(reason)) => {
                        tracing::debug!(%reason, "seam cut skipped; blending masks as-is");
                    }
                    Err(other) => return Err(other),
                }
            }
        }
    }

    let (blended, coverage) = match backends.blend {
        BlendBackend::MultiBand => blend_multiband(
            &base_rgb,
            &overlay_rgb,
            &base_cut,
            &overlay_cut,
            options.num_bands,
        )?,
    };

    compose(&blended, &coverage, &base_validity, &overlay_validity)
}

/// [`blend_seam_grid`] with the default 256px tile-size/one-ring geometry
/// and options and backends resolved from the environment.
pub fn blend_seam_grid_default(
    base: &ImageRgba8,
    overlay: &ImageRgba8,
    overlay_mask: &MaskU8,
) -> SeamweldResult<ImageRgba8> {
    let geometry = TileGeometry::new(256, 1)?;
    let options = BlendOptions::from_env();
    let backends = BackendSelection::from_env()?;
    blend_seam_grid(base, overlay, overlay_mask, geometry, &options, &backends)
}
