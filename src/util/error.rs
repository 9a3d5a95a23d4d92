//! Error types for chromasort.

use thiserror::Error;

/// Result alias for chromasort operations.
pub type ChromaSortResult<T> = std::result::Result<T, ChromaSortError>;

/// Errors surfaced by the crop engine, the classifier, and their inputs.
///
/// `NoForegroundFound` is the only error a well-formed image can produce;
/// everything else indicates malformed buffers, parameters, or catalogs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChromaSortError {
    /// A pixel grid was declared with a zero dimension.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// A pixel grid was declared with a stride below its width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is shorter than the declared geometry requires.
    #[error("buffer too small: needed {needed} samples, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A requested sub-region does not fit inside its parent grid.
    #[error("region ({x}, {y}) {width}x{height} out of bounds for {img_width}x{img_height} image")]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// A configuration parameter was rejected at construction time.
    #[error("invalid {name}: {reason}")]
    InvalidConfig {
        name: &'static str,
        reason: &'static str,
    },
    /// The foreground mask contained no connected components (all-black image).
    #[error("no foreground found in image")]
    NoForegroundFound,
    /// The reference catalog failed validation or parsing.
    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },
    /// Decoding an image file failed.
    #[cfg(feature = "image-io")]
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
