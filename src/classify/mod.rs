//! Dominant-color classification against a reference catalog.
//!
//! Classification walks a fixed decision ladder per swatch: achromatic band
//! shortcuts first (black, white, light gray, dark gray), then
//! nearest-neighbor search over the catalog's searchable entries. Swatches
//! arrive ordered by prevalence; only the most prevalent ones are inspected.

mod bands;
mod catalog;

pub use bands::{
    AchromaticBand, BLACK_CHANNEL_MAX, DARK_GRAY_RANGE, GRAY_CHANNEL_DELTA, LIGHT_GRAY_RANGE,
    WHITE_CHANNEL_MIN,
};
pub use catalog::{Catalog, CatalogEntry};

/// One dominant color reported by a palette extractor; its prevalence rank
/// is its position in the swatch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// The swatch color.
    pub rgb: [u8; 3],
}

impl Swatch {
    /// Creates a swatch.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }
}

impl From<[u8; 3]> for Swatch {
    fn from(rgb: [u8; 3]) -> Self {
        Self { rgb }
    }
}

/// Terminal classification outcome.
///
/// `NoMatch` is a normal value for empty swatch input, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'c> {
    /// The assigned category name, borrowed from the catalog or from the
    /// achromatic band set.
    Category(&'c str),
    /// No usable swatches; no category assigned.
    NoMatch,
}

impl<'c> Classification<'c> {
    /// Returns the category name, if one was assigned.
    pub fn category(self) -> Option<&'c str> {
        match self {
            Self::Category(name) => Some(name),
            Self::NoMatch => None,
        }
    }

    /// Returns true when no category was assigned.
    pub fn is_no_match(self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// Classifies by the single most prevalent swatch.
pub fn classify<'c>(swatches: &[Swatch], catalog: &'c Catalog) -> Classification<'c> {
    classify_top_k(swatches, catalog, 1)
}

/// Classifies by the first `top_k` swatches, in prevalence order, stopping
/// at the first swatch the decision ladder names.
///
/// Ladder per swatch: black shortcut, white shortcut, light-gray band,
/// dark-gray band, then nearest searchable catalog entry. A swatch inside a
/// gray band's numeric range that fails the pairwise-difference test falls
/// through to nearest-neighbor search; that fallthrough is deliberate,
/// documented behavior.
pub fn classify_top_k<'c>(
    swatches: &[Swatch],
    catalog: &'c Catalog,
    top_k: usize,
) -> Classification<'c> {
    for swatch in swatches.iter().take(top_k) {
        if let Some(name) = resolve(swatch.rgb, catalog) {
            return Classification::Category(name);
        }
    }
    Classification::NoMatch
}

fn resolve(rgb: [u8; 3], catalog: &Catalog) -> Option<&str> {
    if let Some(band) = AchromaticBand::of(rgb) {
        return Some(band.name());
    }
    catalog.nearest(rgb).map(|entry| entry.name.as_str())
}
