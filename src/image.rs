use crate::error::{Error, Result};

/// Bytes per pixel: red, green, blue, alpha
pub const CHANNELS: usize = 4;

/// A dense RGBA8 image, row-major with pixel offset `x + y * width`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer, reporting failure instead of aborting
    pub fn allocate(width: usize, height: usize) -> Result<PixelBuffer> {
        let bytes = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or_else(|| Error::InvalidSettings(format!("{}x{} image is too large to address", width, height)))?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|source| Error::Allocation { width, height, bytes, source })?;
        data.resize(bytes, 0);

        Ok(PixelBuffer { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (x + y * self.width) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Each row as a slice of `width * CHANNELS` bytes, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() rejects a zero size; a zero-width image has no bytes to split anyway
        self.data.chunks(self.row_len().max(1))
    }

    pub fn row_len(&self) -> usize {
        self.width * CHANNELS
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
