//! Pixel grids consumed and produced by the crop engine.
//!
//! `RgbView` and `GrayView` are borrowed 2-D views into 1-D sample buffers
//! with an explicit stride, counted in pixels between the starts of
//! consecutive rows. Sub-region (`roi`) views are zero-copy and keep the
//! parent stride. Cropping never mutates a grid in place; it copies the
//! selected region into a new owned buffer.

use crate::util::{ChromaSortError, ChromaSortResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Samples per pixel in an RGB grid.
pub const RGB_CHANNELS: usize = 3;

/// Borrowed 2-D view over interleaved 8-bit RGB samples.
#[derive(Copy, Clone, Debug)]
pub struct RgbView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> RgbView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> ChromaSortResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride (in pixels).
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> ChromaSortResult<Self> {
        let needed = required_samples(width, height, stride, RGB_CHANNELS)?;
        if data.len() < needed {
            return Err(ChromaSortError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in pixels between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the RGB triple at `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.stride + x) * RGB_CHANNELS;
        let px = self.data.get(idx..idx + RGB_CHANNELS)?;
        Some([px[0], px[1], px[2]])
    }

    /// Returns the contiguous samples of row `y` (`width * 3` values).
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride * RGB_CHANNELS;
        let end = start + self.width * RGB_CHANNELS;
        self.data.get(start..end)
    }

    /// Returns a zero-copy sub-region view into the same backing buffer.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> ChromaSortResult<RgbView<'a>> {
        check_roi(x, y, width, height, self.width, self.height)?;
        let start = (y * self.stride + x) * RGB_CHANNELS;
        RgbView::new(&self.data[start..], width, height, self.stride)
    }

    /// Copies the viewed region into a new owned grid.
    pub fn to_owned_rgb(&self) -> OwnedRgb {
        let mut data = Vec::with_capacity(self.width * self.height * RGB_CHANNELS);
        for y in 0..self.height {
            let start = y * self.stride * RGB_CHANNELS;
            data.extend_from_slice(&self.data[start..start + self.width * RGB_CHANNELS]);
        }
        OwnedRgb {
            data,
            width: self.width,
            height: self.height,
        }
    }

    /// Projects the view to grayscale with Rec. 601 luma weights.
    ///
    /// A pixel maps to intensity 0 only when its weighted sum rounds to zero,
    /// which in particular holds for pure black `(0, 0, 0)`.
    pub fn luminance(&self) -> OwnedGray {
        let mut data = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            let row = &self.data[y * self.stride * RGB_CHANNELS..];
            for x in 0..self.width {
                let idx = x * RGB_CHANNELS;
                data.push(luma(row[idx], row[idx + 1], row[idx + 2]));
            }
        }
        OwnedGray {
            data,
            width: self.width,
            height: self.height,
        }
    }
}

/// Owned contiguous interleaved RGB buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRgb {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedRgb {
    /// Creates an owned grid from a contiguous buffer of exactly
    /// `width * height * 3` samples.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> ChromaSortResult<Self> {
        let needed = required_samples(width, height, width, RGB_CHANNELS)?;
        if data.len() != needed {
            return Err(ChromaSortError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the raw interleaved samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a borrowed view of the grid.
    pub fn view(&self) -> RgbView<'_> {
        RgbView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

/// Borrowed 2-D view over single-channel 8-bit samples.
#[derive(Copy, Clone)]
pub struct GrayView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> GrayView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> ChromaSortResult<Self> {
        let needed = required_samples(width, height, width, 1)?;
        if data.len() < needed {
            return Err(ChromaSortError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride: width,
        })
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the intensity at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x).copied()
    }

    /// Returns the contiguous samples of row `y`.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get(start..start + self.width)
    }

    /// Returns a zero-copy sub-region view into the same backing buffer.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> ChromaSortResult<GrayView<'a>> {
        check_roi(x, y, width, height, self.width, self.height)?;
        Ok(GrayView {
            data: &self.data[y * self.stride + x..],
            width,
            height,
            stride: self.stride,
        })
    }
}

/// Owned contiguous single-channel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedGray {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedGray {
    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the raw samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a borrowed view of the grid.
    pub fn view(&self) -> GrayView<'_> {
        GrayView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((weighted + 500) / 1000) as u8
}

fn required_samples(
    width: usize,
    height: usize,
    stride: usize,
    channels: usize,
) -> ChromaSortResult<usize> {
    if width == 0 || height == 0 {
        return Err(ChromaSortError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(ChromaSortError::InvalidStride { width, stride });
    }
    let pixels = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(ChromaSortError::InvalidDimensions { width, height })?;
    pixels
        .checked_mul(channels)
        .ok_or(ChromaSortError::InvalidDimensions { width, height })
}

fn check_roi(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    img_width: usize,
    img_height: usize,
) -> ChromaSortResult<()> {
    let oob = ChromaSortError::RegionOutOfBounds {
        x,
        y,
        width,
        height,
        img_width,
        img_height,
    };
    if width == 0 || height == 0 {
        return Err(ChromaSortError::InvalidDimensions { width, height });
    }
    let end_x = x.checked_add(width).ok_or_else(|| oob.clone())?;
    let end_y = y.checked_add(height).ok_or_else(|| oob.clone())?;
    if end_x > img_width || end_y > img_height {
        return Err(oob);
    }
    Ok(())
}
