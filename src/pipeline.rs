//! Per-image composition of crop, palette extraction, and classification.
//!
//! Palette extraction is an external capability supplied through the
//! [`PaletteExtractor`] seam; the pipeline itself stays a synchronous pure
//! function of its inputs, so batches parallelize without coordination.

use crate::classify::{classify_top_k, Catalog, Classification, Swatch};
use crate::crop::{CropOutcome, Cropper};
use crate::image::RgbView;
use crate::trace::{trace_event, trace_span};
use crate::util::{ChromaSortError, ChromaSortResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// External dominant-color capability.
///
/// Implementations receive the cropped subject and return swatches ordered
/// most prevalent first; resizing or sampling for speed is the
/// implementation's own concern.
pub trait PaletteExtractor {
    /// Extracts ranked dominant colors from `image`.
    fn extract(&self, image: RgbView<'_>) -> Vec<Swatch>;
}

/// Typed per-image outcome the batch driver branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'c> {
    /// The image was cropped, extracted, and assigned this category.
    Category(&'c str),
    /// The image is fully black; there is nothing to crop.
    NoForeground,
    /// The subject's bounding region was below the minimum side length on
    /// both axes.
    SubjectTooSmall {
        /// Width of the rejected bounding region.
        width: usize,
        /// Height of the rejected bounding region.
        height: usize,
    },
    /// The extractor produced no swatches.
    NoMatch,
}

/// Crop-extract-classify pipeline over a shared read-only catalog.
pub struct Pipeline<'c, E> {
    cropper: Cropper,
    extractor: E,
    catalog: &'c Catalog,
    top_k: usize,
}

impl<'c, E: PaletteExtractor> Pipeline<'c, E> {
    /// Creates a pipeline inspecting only the most prevalent swatch.
    pub fn new(cropper: Cropper, extractor: E, catalog: &'c Catalog) -> Self {
        Self {
            cropper,
            extractor,
            catalog,
            top_k: 1,
        }
    }

    /// Sets how many leading swatches the classifier may inspect.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Runs one image through crop, extraction, and classification.
    ///
    /// Crop rejections and the all-black case surface as [`Verdict`]
    /// variants rather than errors, so callers branch on the outcome for
    /// their disposal policy.
    ///
    /// # Errors
    ///
    /// Only malformed-input errors propagate; see [`ChromaSortError`].
    pub fn process(&self, image: RgbView<'_>) -> ChromaSortResult<Verdict<'c>> {
        let _span = trace_span!(
            "process_image",
            width = image.width(),
            height = image.height()
        )
        .entered();

        let cropped = match self.cropper.crop(image) {
            Ok(CropOutcome::Cropped(img)) => img,
            Ok(CropOutcome::Rejected { width, height }) => {
                return Ok(Verdict::SubjectTooSmall { width, height });
            }
            Err(ChromaSortError::NoForegroundFound) => return Ok(Verdict::NoForeground),
            Err(err) => return Err(err),
        };

        let swatches = self.extractor.extract(cropped.view());
        let verdict = match classify_top_k(&swatches, self.catalog, self.top_k) {
            Classification::Category(name) => Verdict::Category(name),
            Classification::NoMatch => Verdict::NoMatch,
        };
        trace_event!("image_classified", swatches = swatches.len());
        Ok(verdict)
    }

    /// Processes a batch of images in parallel.
    ///
    /// Each image is independent; verdicts come back in input order.
    #[cfg(feature = "rayon")]
    pub fn process_batch(&self, images: &[RgbView<'_>]) -> Vec<ChromaSortResult<Verdict<'c>>>
    where
        E: Sync,
    {
        images
            .par_iter()
            .map(|image| self.process(*image))
            .collect()
    }
}
