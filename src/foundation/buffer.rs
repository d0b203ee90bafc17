use crate::foundation::error::{SeamweldError, SeamweldResult};

fn expected_len(width: u32, height: u32, channels: usize, what: &str) -> SeamweldResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| SeamweldError::invalid_input(format!("{what} buffer size overflow")))
}

/// Straight (non-premultiplied) RGBA8 image, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgba8 {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA8 bytes, 4 per pixel.
    pub data: Vec<u8>,
}

impl ImageRgba8 {
    /// Allocate a transparent-black image.
    pub fn new(width: u32, height: u32) -> SeamweldResult<Self> {
        let len = expected_len(width, height, 4, "rgba8")?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing byte buffer, validating its length.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> SeamweldResult<Self> {
        let len = expected_len(width, height, 4, "rgba8")?;
        if data.len() != len {
            return Err(SeamweldError::invalid_input(
                "rgba8 buffer must match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Read one pixel. Callers guarantee `x < width && y < height`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Split off the color channels as a float plane, dropping alpha.
    pub fn rgb_plane_f32(&self) -> ImageRgbF32 {
        let px = (self.width as usize) * (self.height as usize);
        let mut data = Vec::with_capacity(px * 3);
        for p in self.data.chunks_exact(4) {
            data.push(f32::from(p[0]));
            data.push(f32::from(p[1]));
            data.push(f32::from(p[2]));
        }
        ImageRgbF32 {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Single-channel 8-bit mask. Validity masks hold strictly 0 or 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskU8 {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// One byte per pixel.
    pub data: Vec<u8>,
}

impl MaskU8 {
    /// Allocate an all-zero mask.
    pub fn new(width: u32, height: u32) -> SeamweldResult<Self> {
        let len = expected_len(width, height, 1, "mask")?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing byte buffer, validating its length.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> SeamweldResult<Self> {
        let len = expected_len(width, height, 1, "mask")?;
        if data.len() != len {
            return Err(SeamweldError::invalid_input(
                "mask buffer must match width*height",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// True when no pixel is marked present.
    pub fn is_all_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// True when this mask and `other` are both nonzero at some pixel.
    pub fn intersects(&self, other: &MaskU8) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .any(|(&a, &b)| a > 0 && b > 0)
    }
}

/// Three-channel float image used for pyramid arithmetic.
///
/// Channel values track the 8-bit display range (0..=255) but are kept in
/// f32 so difference-of-Gaussians levels can go negative without clipping.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRgbF32 {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB f32 samples, 3 per pixel.
    pub data: Vec<f32>,
}

impl ImageRgbF32 {
    /// Wrap an existing sample buffer, validating its length.
    pub fn from_vec(width: u32, height: u32, data: Vec<f32>) -> SeamweldResult<Self> {
        let len = expected_len(width, height, 3, "rgb f32")?;
        if data.len() != len {
            return Err(SeamweldError::invalid_input(
                "rgb f32 buffer must match width*height*3",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Read one pixel. Callers guarantee `x < width && y < height`.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
