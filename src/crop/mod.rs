//! Subject isolation from uniform black background padding.
//!
//! The crop engine runs two stages per image: foreground bounding (largest
//! connected component of nonzero-luminance pixels) and iterative border
//! trimming toward a fixed point. Both stages are deterministic pure
//! functions of the pixel data; one invocation owns its trimming state.

mod foreground;
mod trim;

pub use foreground::locate_largest_foreground;
pub use trim::CropRect;

use crate::image::{OwnedRgb, RgbView};
use crate::trace::{trace_event, trace_span};
use crate::util::{ChromaSortError, ChromaSortResult};

/// Axis-aligned rectangle returned by foreground detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingRegion {
    /// Leftmost column of the region.
    pub x: usize,
    /// Topmost row of the region.
    pub y: usize,
    /// Horizontal extent in pixels.
    pub width: usize,
    /// Vertical extent in pixels.
    pub height: usize,
}

impl BoundingRegion {
    /// Returns the enclosed area in pixels.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Validated crop parameters.
///
/// Construction rejects out-of-range values so the trimming loop never has
/// to re-check them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropConfig {
    step: usize,
    min_span: (usize, usize),
    background_density_threshold: f64,
    min_side_length: usize,
}

impl CropConfig {
    /// Creates a configuration.
    ///
    /// `step` is the pixels an edge moves per trim, `min_span` the minimum
    /// `(width, height)` of the final crop, `background_density_threshold`
    /// the fraction of an edge that may be background before the edge counts
    /// as dirty, and `min_side_length` the rejection threshold for
    /// [`Cropper::crop`].
    ///
    /// # Errors
    ///
    /// Returns [`ChromaSortError::InvalidConfig`] when `step`, either side of
    /// `min_span`, or `min_side_length` is zero, or when the threshold lies
    /// outside `[0, 1]`.
    pub fn new(
        step: usize,
        min_span: (usize, usize),
        background_density_threshold: f64,
        min_side_length: usize,
    ) -> ChromaSortResult<Self> {
        if step == 0 {
            return Err(ChromaSortError::InvalidConfig {
                name: "step",
                reason: "must be positive",
            });
        }
        if min_span.0 == 0 || min_span.1 == 0 {
            return Err(ChromaSortError::InvalidConfig {
                name: "min_span",
                reason: "both sides must be positive",
            });
        }
        if !(0.0..=1.0).contains(&background_density_threshold) {
            return Err(ChromaSortError::InvalidConfig {
                name: "background_density_threshold",
                reason: "must lie in [0, 1]",
            });
        }
        if min_side_length == 0 {
            return Err(ChromaSortError::InvalidConfig {
                name: "min_side_length",
                reason: "must be positive",
            });
        }
        Ok(Self {
            step,
            min_span,
            background_density_threshold,
            min_side_length,
        })
    }

    /// Returns the per-trim step in pixels.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the minimum `(width, height)` of the final crop.
    pub fn min_span(&self) -> (usize, usize) {
        self.min_span
    }

    /// Returns the background-density threshold.
    pub fn background_density_threshold(&self) -> f64 {
        self.background_density_threshold
    }

    /// Returns the rejection threshold for cropped subjects.
    pub fn min_side_length(&self) -> usize {
        self.min_side_length
    }
}

impl Default for CropConfig {
    /// Single-pixel steps, a 50x50 minimum crop, zero background tolerance
    /// on edges, and a 32-pixel rejection threshold.
    fn default() -> Self {
        Self {
            step: 1,
            min_span: (50, 50),
            background_density_threshold: 0.0,
            min_side_length: 32,
        }
    }
}

/// Result of a crop: the isolated subject or a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropOutcome {
    /// The subject region, border-trimmed, as a new grid.
    Cropped(OwnedRgb),
    /// Both bounding-region dimensions fell below the minimum side length;
    /// disposal of the source is the caller's decision.
    Rejected {
        /// Width of the rejected bounding region.
        width: usize,
        /// Height of the rejected bounding region.
        height: usize,
    },
}

/// Crop engine bound to a validated configuration.
#[derive(Debug, Clone, Copy)]
pub struct Cropper {
    config: CropConfig,
}

impl Cropper {
    /// Creates a crop engine.
    pub fn new(config: CropConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Isolates the subject of `image`.
    ///
    /// Bounds the largest foreground component, rejects subjects whose
    /// bounding region is below the minimum side length on both axes, and
    /// trims residual background borders from the rest.
    ///
    /// # Errors
    ///
    /// Propagates [`ChromaSortError::NoForegroundFound`] for fully black
    /// images; the caller decides whether to skip or discard the source.
    pub fn crop(&self, image: RgbView<'_>) -> ChromaSortResult<CropOutcome> {
        let _span = trace_span!("crop", width = image.width(), height = image.height()).entered();

        let gray = image.luminance();
        let region = locate_largest_foreground(gray.view())?;
        let min_side = self.config.min_side_length;
        if region.width < min_side && region.height < min_side {
            trace_event!("subject_rejected", width = region.width, height = region.height);
            return Ok(CropOutcome::Rejected {
                width: region.width,
                height: region.height,
            });
        }

        let subject = image.roi(region.x, region.y, region.width, region.height)?;
        let trimmed = self.trim_borders(subject)?;
        Ok(CropOutcome::Cropped(trimmed))
    }

    /// Trims background borders from `image` until a pass changes nothing.
    ///
    /// Per pass, each axis compares its two edges by background pixel count
    /// and moves the dirtier edge inward by the configured step, provided
    /// the span stays at or above the minimum and the edge's count exceeds
    /// the density threshold. Spans only shrink and are bounded below, so
    /// the loop always terminates.
    pub fn trim_borders(&self, image: RgbView<'_>) -> ChromaSortResult<OwnedRgb> {
        let _span = trace_span!(
            "trim_borders",
            width = image.width(),
            height = image.height()
        )
        .entered();

        let gray = image.luminance();
        let mut rect = CropRect::full(image.width(), image.height());
        let mut passes = 0usize;
        while trim::trim_pass(gray.view(), &mut rect, &self.config) {
            passes += 1;
        }
        trace_event!(
            "trim_converged",
            passes = passes,
            width = rect.width(),
            height = rect.height()
        );

        let view = image.roi(rect.left(), rect.top(), rect.width(), rect.height())?;
        Ok(view.to_owned_rgb())
    }
}
