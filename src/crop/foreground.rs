//! Foreground bounding via connected-component analysis.

use crate::crop::BoundingRegion;
use crate::image::GrayView;
use crate::util::{ChromaSortError, ChromaSortResult};

/// Locates the largest connected foreground component and returns its
/// axis-aligned bounding rectangle.
///
/// A pixel is foreground when its intensity is nonzero; pure black is
/// background. Components are 4-connected and ranked by pixel count, with
/// equal-area ties resolved by scan order. Deterministic for identical input.
///
/// # Errors
///
/// Returns [`ChromaSortError::NoForegroundFound`] when the mask has no
/// foreground pixels at all (fully black image).
pub fn locate_largest_foreground(gray: GrayView<'_>) -> ChromaSortResult<BoundingRegion> {
    let width = gray.width();
    let height = gray.height();
    let mut visited = vec![false; width * height];
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut best: Option<(usize, BoundingRegion)> = None;

    for y in 0..height {
        for x in 0..width {
            if visited[y * width + x] || gray.get(x, y).unwrap_or(0) == 0 {
                continue;
            }

            let mut area = 0usize;
            let (mut min_x, mut max_x, mut min_y, mut max_y) = (x, x, y, y);
            visited[y * width + x] = true;
            stack.push((x, y));

            while let Some((cx, cy)) = stack.pop() {
                area += 1;
                min_x = min_x.min(cx);
                max_x = max_x.max(cx);
                min_y = min_y.min(cy);
                max_y = max_y.max(cy);

                let mut visit = |nx: usize, ny: usize, visited: &mut Vec<bool>| {
                    let idx = ny * width + nx;
                    if !visited[idx] && gray.get(nx, ny).unwrap_or(0) != 0 {
                        visited[idx] = true;
                        stack.push((nx, ny));
                    }
                };
                if cx > 0 {
                    visit(cx - 1, cy, &mut visited);
                }
                if cx + 1 < width {
                    visit(cx + 1, cy, &mut visited);
                }
                if cy > 0 {
                    visit(cx, cy - 1, &mut visited);
                }
                if cy + 1 < height {
                    visit(cx, cy + 1, &mut visited);
                }
            }

            let region = BoundingRegion {
                x: min_x,
                y: min_y,
                width: max_x - min_x + 1,
                height: max_y - min_y + 1,
            };
            let larger = best.map_or(true, |(best_area, _)| area > best_area);
            if larger {
                best = Some((area, region));
            }
        }
    }

    best.map(|(_, region)| region)
        .ok_or(ChromaSortError::NoForegroundFound)
}
