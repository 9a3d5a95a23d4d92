//! ChromaSort sorts photographs into categories by dominant color after
//! isolating the subject from a uniform black background.
//!
//! Two components do the engineering work: the crop engine (foreground
//! bounding plus iterative border trimming) and the color classifier
//! (achromatic band shortcuts plus nearest-neighbor search over a reference
//! catalog). Both are synchronous, stateless, deterministic functions of
//! their inputs; the `rayon` feature adds a parallel batch helper and the
//! `image-io` feature adds conversions for the `image` crate.

pub mod classify;
pub mod crop;
pub mod image;
pub mod pipeline;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use image::io;

pub use classify::{
    classify, classify_top_k, AchromaticBand, Catalog, CatalogEntry, Classification, Swatch,
};
pub use crop::{
    locate_largest_foreground, BoundingRegion, CropConfig, CropOutcome, CropRect, Cropper,
};
pub use image::{GrayView, OwnedGray, OwnedRgb, RgbView};
pub use pipeline::{PaletteExtractor, Pipeline, Verdict};
pub use util::{ChromaSortError, ChromaSortResult};
