use crate::foundation::buffer::{ImageRgba8, MaskU8};
use crate::foundation::error::{SeamweldError, SeamweldResult};

/// Axis-aligned pixel rectangle, end-exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    /// Leftmost column (inclusive).
    pub left: u32,
    /// Topmost row (inclusive).
    pub top: u32,
    /// Rightmost column (exclusive).
    pub right: u32,
    /// Bottommost row (exclusive).
    pub bottom: u32,
}

impl PixelRect {
    /// True when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Shrink every side inward by `band` pixels, saturating to empty.
    pub fn shrink(self, band: u32) -> Self {
        Self {
            left: self.left.saturating_add(band),
            top: self.top.saturating_add(band),
            right: self.right.saturating_sub(band),
            bottom: self.bottom.saturating_sub(band),
        }
    }
}

/// Square tile-grid geometry for one composite call.
///
/// The canvas is a square of side `tile_size * (2*center_offset_tiles + 3)`
/// with a protected 3x3-tile center region at
/// `(center_offset_tiles*tile_size, center_offset_tiles*tile_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TileGeometry {
    /// Side of one square tile in pixels. Always > 0.
    pub tile_size: u32,
    /// Number of tile rings around the 3x3 center.
    pub center_offset_tiles: u32,
}

impl TileGeometry {
    /// Build a geometry, rejecting a zero tile size.
    pub fn new(tile_size: u32, center_offset_tiles: u32) -> SeamweldResult<Self> {
        if tile_size == 0 {
            return Err(SeamweldError::invalid_geometry("tile_size must be > 0"));
        }
        Ok(Self {
            tile_size,
            center_offset_tiles,
        })
    }

    /// Canvas side length implied by the tile grid.
    pub fn canvas_size(self) -> u64 {
        u64::from(self.tile_size) * (2 * u64::from(self.center_offset_tiles) + 3)
    }

    /// The protected 3x3-tile center region.
    pub fn center_rect(self) -> PixelRect {
        let left = self.center_offset_tiles * self.tile_size;
        PixelRect {
            left,
            top: left,
            right: left + self.tile_size * 3,
            bottom: left + self.tile_size * 3,
        }
    }

    /// Check all three input buffers against the tile-grid formula.
    ///
    /// Pure check with no side effects; runs before any blending work so
    /// shape errors never produce partial buffers.
    pub fn validate_inputs(
        self,
        base: &ImageRgba8,
        overlay: &ImageRgba8,
        overlay_mask: &MaskU8,
    ) -> SeamweldResult<()> {
        if base.width != overlay.width
            || base.height != overlay.height
            || base.width != overlay_mask.width
            || base.height != overlay_mask.height
        {
            return Err(SeamweldError::invalid_geometry(
                "base/overlay/overlay_mask must share identical dimensions",
            ));
        }

        let expected = self.canvas_size();
        if u64::from(base.width) != expected || u64::from(base.height) != expected {
            return Err(SeamweldError::invalid_geometry(format!(
                "image dimensions must be {expected}x{expected} for tile_size={}, center_offset_tiles={}",
                self.tile_size, self.center_offset_tiles
            )));
        }

        let center = self.center_rect();
        if u64::from(center.right) > expected || u64::from(center.bottom) > expected {
            return Err(SeamweldError::invalid_geometry(
                "center 3x3 region exceeds image bounds",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
