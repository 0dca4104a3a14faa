use super::catalog::Opening;
use super::strips::{strip_boundaries, strips};
use crate::math::Rectangle;

/// A solid piece of wall left after the openings are cut out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub rect: Rectangle,
}

/// Decomposes the solid part of `wall` into rectangles.
///
/// The wall is cut into horizontal strips at every opening edge, then each
/// strip is swept left to right, emitting the gaps between the openings that
/// cross it. Segments come out strip by strip from the bottom, left to right
/// within a strip.
///
/// `openings` must already have passed `validate`; overlapping or
/// out-of-bounds openings produce meaningless segments.
#[must_use]
pub fn generate(wall: &Rectangle, openings: &[Opening]) -> Vec<Segment> {
    let boundaries = strip_boundaries(wall, openings);
    let mut segments = Vec::new();
    let mut crossing: Vec<&Opening> = Vec::with_capacity(openings.len());

    for (bottom, top) in strips(&boundaries) {
        crossing.clear();
        crossing.extend(
            openings
                .iter()
                .filter(|o| o.rect.bottom < top && o.rect.top > bottom),
        );
        // Stable: equal lefts keep slice order.
        crossing.sort_by(|a, b| a.rect.left.total_cmp(&b.rect.left));

        let mut cursor = wall.left;
        for o in &crossing {
            if cursor < o.rect.left {
                segments.push(Segment {
                    rect: Rectangle::new(cursor, o.rect.left, bottom, top),
                });
            }
            cursor = cursor.max(o.rect.right);
        }
        if cursor < wall.right {
            segments.push(Segment {
                rect: Rectangle::new(cursor, wall.right, bottom, top),
            });
        }
    }

    segments
}
