//! Process-level configuration: tunable blend parameters and backend
//! capability selection, both resolved once rather than probed per call.

use std::env;

use crate::foundation::error::{SeamweldError, SeamweldResult};

/// Default width in pixels of the protected seam band around the center.
pub const DEFAULT_SEAM_BAND_PX: u32 = 48;
/// Default number of multi-band pyramid levels.
pub const DEFAULT_NUM_BANDS: u32 = 5;

const SEAM_BAND_ENV: &str = "SEAM_BAND_PX";
const NUM_BANDS_ENV: &str = "SEAM_MULTIBAND_NUM_BANDS";
const SEAM_BACKEND_ENV: &str = "SEAM_CUT_BACKEND";
const BLEND_BACKEND_ENV: &str = "SEAM_BLEND_BACKEND";

/// Tunable blend parameters for one composite call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlendOptions {
    /// Width in pixels of the center-lock band. Clamped per geometry when
    /// applied, see [`crate::apply_center_lock`].
    pub seam_band_px: u32,
    /// Number of pyramid bands. Must be >= 1.
    pub num_bands: u32,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            seam_band_px: DEFAULT_SEAM_BAND_PX,
            num_bands: DEFAULT_NUM_BANDS,
        }
    }
}

impl BlendOptions {
    /// Resolve options from `SEAM_BAND_PX` and `SEAM_MULTIBAND_NUM_BANDS`.
    ///
    /// Unset, unparsable, or non-positive values fall back to the
    /// documented defaults rather than failing.
    pub fn from_env() -> Self {
        Self {
            seam_band_px: positive_or_default(
                env::var(SEAM_BAND_ENV).ok().as_deref(),
                DEFAULT_SEAM_BAND_PX,
            ),
            num_bands: positive_or_default(
                env::var(NUM_BANDS_ENV).ok().as_deref(),
                DEFAULT_NUM_BANDS,
            ),
        }
    }
}

fn positive_or_default(raw: Option<&str>, default: u32) -> u32 {
    let Some(raw) = raw else { return default };
    match raw.trim().parse::<i64>() {
        Ok(v) if v > 0 && v <= i64::from(u32::MAX) => v as u32,
        _ => default,
    }
}

/// Seam-cut capabilities this build can construct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SeamBackend {
    /// Minimum s-t cut over a pixel grid with color-discontinuity costs.
    #[default]
    GraphCut,
}

/// Multi-resolution blend capabilities this build can construct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlendBackend {
    /// Laplacian-pyramid blending with Gaussian mask weights.
    #[default]
    MultiBand,
}

/// Seam-cut and blend capabilities resolved once at startup.
///
/// Construction fails fast with [`SeamweldError::BackendUnavailable`] when
/// a configured backend is absent, instead of discovering the failure on
/// the first composite call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BackendSelection {
    /// Selected seam-cut capability.
    pub seam: SeamBackend,
    /// Selected blend capability.
    pub blend: BlendBackend,
}

impl BackendSelection {
    /// Resolve backends from `SEAM_CUT_BACKEND` and `SEAM_BLEND_BACKEND`.
    pub fn from_env() -> SeamweldResult<Self> {
        Ok(Self {
            seam: parse_seam_backend(env::var(SEAM_BACKEND_ENV).ok().as_deref())?,
            blend: parse_blend_backend(env::var(BLEND_BACKEND_ENV).ok().as_deref())?,
        })
    }
}

fn parse_seam_backend(raw: Option<&str>) -> SeamweldResult<SeamBackend> {
    let Some(raw) = raw else {
        return Ok(SeamBackend::default());
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "graph-cut" | "graphcut" => Ok(SeamBackend::GraphCut),
        other => Err(SeamweldError::backend_unavailable(format!(
            "unknown seam-cut backend '{other}'"
        ))),
    }
}

fn parse_blend_backend(raw: Option<&str>) -> SeamweldResult<BlendBackend> {
    let Some(raw) = raw else {
        return Ok(BlendBackend::default());
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "multiband" | "multi-band" => Ok(BlendBackend::MultiBand),
        other => Err(SeamweldError::backend_unavailable(format!(
            "unknown blend backend '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
