//! Single-channel frames and their 8-bit storage format.
//!
//! Frames are stored as `u8` intensities to keep the memory footprint at one
//! byte per pixel. The conversion from the normalized `[0, 1]` range is lossy:
//! [`quantize`] truncates `v * 255` towards zero, so a value read back through
//! [`dequantize`] may be up to one quantization step (`1 / 255`) below the
//! original.
use serde::{Deserialize, Serialize};

/// Spatial shape of a stored frame.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct FrameShape {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,
}

impl FrameShape {
    /// Creates a frame shape.
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Number of pixels in a frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.height * self.width
    }

    /// Returns `true` if the frame has no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FrameShape {
    /// The 84x84 frame used for Atari games.
    fn default() -> Self {
        Self::new(84, 84)
    }
}

/// Discretizes a normalized intensity into a byte.
///
/// Values outside `[0, 1]` saturate; `NaN` maps to 0.
#[inline]
pub fn quantize(v: f32) -> u8 {
    (v * 255.0) as u8
}

/// Maps a stored byte back to the normalized range.
#[inline]
pub fn dequantize(b: u8) -> f32 {
    b as f32 / 255.0
}
