//! Iterative two-side border trimming.
//!
//! Each pass compares the two edges of an axis by their background pixel
//! counts and moves the dirtier edge inward, subject to a minimum-span floor
//! and a background-density threshold. The caller repeats passes until one
//! moves nothing.

use crate::crop::CropConfig;
use crate::image::GrayView;

/// Mutable rectangle state owned by a single trimming run.
///
/// `top` and `left` are inclusive and only ever increase; `bottom` and
/// `right` are exclusive and only ever decrease, so the rectangle shrinks
/// monotonically and `top < bottom`, `left < right` hold throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
}

impl CropRect {
    /// Creates a rectangle covering a full `width` x `height` grid.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            top: 0,
            bottom: height,
            left: 0,
            right: width,
        }
    }

    /// Returns the first row inside the rectangle.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Returns the row just past the rectangle.
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    /// Returns the first column inside the rectangle.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Returns the column just past the rectangle.
    pub fn right(&self) -> usize {
        self.right
    }

    /// Returns the horizontal span.
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    /// Returns the vertical span.
    pub fn height(&self) -> usize {
        self.bottom - self.top
    }
}

/// Runs one trim pass and reports whether any edge moved.
///
/// Counts are taken against the rectangle as it stood at pass entry; both
/// axes may each move one edge within the same pass. On equal counts the
/// top (resp. left) edge is the trim candidate.
pub(crate) fn trim_pass(gray: GrayView<'_>, rect: &mut CropRect, cfg: &CropConfig) -> bool {
    let width = rect.width();
    let height = rect.height();
    let (min_width, min_height) = cfg.min_span();
    let threshold = cfg.background_density_threshold();
    let step = cfg.step();

    let top_count = row_background(gray, rect.top, rect.left, rect.right);
    let bottom_count = row_background(gray, rect.bottom - 1, rect.left, rect.right);
    let left_count = col_background(gray, rect.left, rect.top, rect.bottom);
    let right_count = col_background(gray, rect.right - 1, rect.top, rect.bottom);

    let mut moved = false;

    if height >= min_height + step {
        let (trim_top, count) = if bottom_count > top_count {
            (false, bottom_count)
        } else {
            (true, top_count)
        };
        if exceeds_density(count, width, threshold) {
            if trim_top {
                rect.top += step;
            } else {
                rect.bottom -= step;
            }
            moved = true;
        }
    }

    if width >= min_width + step {
        let (trim_left, count) = if right_count > left_count {
            (false, right_count)
        } else {
            (true, left_count)
        };
        if exceeds_density(count, height, threshold) {
            if trim_left {
                rect.left += step;
            } else {
                rect.right -= step;
            }
            moved = true;
        }
    }

    moved
}

/// An edge is dirty enough to trim only when its background count strictly
/// exceeds the allowed fraction of the opposite-axis span.
fn exceeds_density(count: usize, span: usize, threshold: f64) -> bool {
    count as f64 > threshold * span as f64
}

fn row_background(gray: GrayView<'_>, y: usize, x0: usize, x1: usize) -> usize {
    (x0..x1).filter(|&x| gray.get(x, y) == Some(0)).count()
}

fn col_background(gray: GrayView<'_>, x: usize, y0: usize, y1: usize) -> usize {
    (y0..y1).filter(|&y| gray.get(x, y) == Some(0)).count()
}
