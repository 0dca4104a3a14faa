use super::catalog::Opening;
use crate::math::Rectangle;

/// Collects the wall's bottom and top plus every opening's bottom and top,
/// sorted ascending with exact duplicates removed.
///
/// With `n` openings the result has at most `2n + 2` values.
#[must_use]
pub fn strip_boundaries(wall: &Rectangle, openings: &[Opening]) -> Vec<f64> {
    let mut ys = Vec::with_capacity(2 * openings.len() + 2);
    ys.push(wall.bottom);
    ys.push(wall.top);
    for o in openings {
        ys.push(o.rect.bottom);
        ys.push(o.rect.top);
    }
    ys.sort_by(f64::total_cmp);
    ys.dedup();
    ys
}

/// Horizontal bands `(bottom, top)` between consecutive boundaries, bottom
/// first. Zero-height bands are skipped.
pub fn strips(boundaries: &[f64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    boundaries
        .windows(2)
        .map(|w| (w[0], w[1]))
        .filter(|(bottom, top)| bottom < top)
}
