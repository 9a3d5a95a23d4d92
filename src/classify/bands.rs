//! Achromatic band shortcuts applied ahead of nearest-neighbor search.

/// Upper bound (inclusive) for every channel of a black swatch.
pub const BLACK_CHANNEL_MAX: u8 = 35;
/// Lower bound (exclusive) for every channel of a white swatch.
pub const WHITE_CHANNEL_MIN: u8 = 240;
/// Open light-gray channel range.
pub const LIGHT_GRAY_RANGE: (u8, u8) = (168, 230);
/// Open dark-gray channel range.
pub const DARK_GRAY_RANGE: (u8, u8) = (60, 132);
/// Pairwise channel difference (exclusive) below which a swatch counts as
/// gray rather than a tinted color.
pub const GRAY_CHANNEL_DELTA: u8 = 10;

/// Fixed achromatic categories recognized before catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchromaticBand {
    /// Every channel at or below [`BLACK_CHANNEL_MAX`].
    Black,
    /// Every channel above [`WHITE_CHANNEL_MIN`].
    White,
    /// Channels inside [`LIGHT_GRAY_RANGE`] with near-equal values.
    LightGray,
    /// Channels inside [`DARK_GRAY_RANGE`] with near-equal values.
    DarkGray,
}

impl AchromaticBand {
    /// Matches a swatch against the band ladder, in order: black, white,
    /// light gray, dark gray.
    ///
    /// A swatch whose channels sit inside a gray range but differ pairwise
    /// by [`GRAY_CHANNEL_DELTA`] or more matches no band; callers fall
    /// through to nearest-neighbor search.
    pub fn of(rgb: [u8; 3]) -> Option<Self> {
        if rgb.iter().all(|&c| c <= BLACK_CHANNEL_MAX) {
            return Some(Self::Black);
        }
        if rgb.iter().all(|&c| c > WHITE_CHANNEL_MIN) {
            return Some(Self::White);
        }
        if within_open(rgb, LIGHT_GRAY_RANGE) && near_uniform(rgb) {
            return Some(Self::LightGray);
        }
        if within_open(rgb, DARK_GRAY_RANGE) && near_uniform(rgb) {
            return Some(Self::DarkGray);
        }
        None
    }

    /// Returns the canonical category name for the band.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::LightGray => "LightGray",
            Self::DarkGray => "DarkGray",
        }
    }
}

fn within_open(rgb: [u8; 3], (lo, hi): (u8, u8)) -> bool {
    rgb.iter().all(|&c| c > lo && c < hi)
}

fn near_uniform([r, g, b]: [u8; 3]) -> bool {
    r.abs_diff(g) < GRAY_CHANNEL_DELTA
        && r.abs_diff(b) < GRAY_CHANNEL_DELTA
        && g.abs_diff(b) < GRAY_CHANNEL_DELTA
}
