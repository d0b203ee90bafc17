//! Seamweld composites two overlapping RGBA tile-grid images into one
//! seamless image.
//!
//! It locates a minimum-cost seam between the two sources in their overlap
//! region and blends across that seam with multi-band (Laplacian-pyramid)
//! blending, so no visible edge remains.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: input buffers against the square tile-grid geometry
//! 2. **Derive**: per-pixel validity masks, with a center lock protecting
//!    the 3x3-tile center region from the seam
//! 3. **Cut**: a minimum s-t cut through the overlap, priced by color
//!    discontinuity ([`find_seam`])
//! 4. **Blend**: mask-weighted Laplacian pyramids ([`blend_multiband`])
//! 5. **Compose**: blended color merged with the alpha union ([`compose`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: byte-identical inputs and configuration
//!   produce byte-identical output.
//! - **No IO in the core**: the pipeline consumes and produces raw pixel
//!   buffers; encoded-image handling lives in the [`codec`] adapter and
//!   runs only outside a blend.
//! - **Fixed capabilities**: seam-cut and blend backends are resolved once
//!   at startup ([`BackendSelection`]), never probed per request.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composite;
mod config;
mod foundation;
mod mask;
mod pipeline;
mod pyramid;
mod seam;

/// Decoding and encoding adapters between encoded image bytes and the raw
/// buffers the core consumes.
pub mod codec;

pub use composite::compose;
pub use config::{
    BackendSelection, BlendBackend, BlendOptions, DEFAULT_NUM_BANDS, DEFAULT_SEAM_BAND_PX,
    SeamBackend,
};
pub use foundation::buffer::{ImageRgbF32, ImageRgba8, MaskU8};
pub use foundation::error::{SeamweldError, SeamweldResult};
pub use foundation::geometry::{PixelRect, TileGeometry};
pub use mask::{apply_center_lock, derive_validity};
pub use pipeline::{blend_seam_grid, blend_seam_grid_default};
pub use pyramid::blend::blend_multiband;
pub use seam::find_seam;
