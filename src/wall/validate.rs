use super::catalog::Opening;
use crate::error::ValidationError;
use crate::math::Rectangle;

/// Checks that every opening sits inside the wall and that no two openings
/// overlap.
///
/// Containment is checked for all openings before any pair is compared.
/// Openings that share an edge are legal.
///
/// # Errors
///
/// Returns [`ValidationError::Containment`] for the first opening (in slice
/// order) that leaves the wall, otherwise [`ValidationError::Overlap`] for the
/// first overlapping pair `(i, j)` with `i < j`.
pub fn validate(wall: &Rectangle, openings: &[Opening]) -> Result<(), ValidationError> {
    if let Some(outside) = openings.iter().find(|o| !wall.contains(&o.rect)) {
        return Err(ValidationError::Containment {
            kind: outside.kind,
            index: outside.index,
        });
    }

    for (i, a) in openings.iter().enumerate() {
        for b in &openings[i + 1..] {
            if a.rect.overlaps(&b.rect) {
                return Err(ValidationError::Overlap {
                    first: a.reference(),
                    second: b.reference(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::catalog::{OpeningKind, OpeningRef};

    fn wall() -> Rectangle {
        Rectangle::new(-5.0, 5.0, -2.0, 2.0)
    }

    fn window(index: usize, rect: Rectangle) -> Opening {
        Opening {
            kind: OpeningKind::Window,
            index,
            rect,
        }
    }

    #[test]
    fn empty_set_is_valid() {
        assert_eq!(validate(&wall(), &[]), Ok(()));
    }

    #[test]
    fn opening_flush_with_wall_edges_is_contained() {
        let openings = [window(0, Rectangle::new(-5.0, -3.0, -2.0, 2.0))];
        assert_eq!(validate(&wall(), &openings), Ok(()));
    }

    #[test]
    fn right_edge_past_wall_is_rejected() {
        let openings = [
            window(0, Rectangle::new(-1.0, 1.0, 0.0, 1.0)),
            Opening {
                kind: OpeningKind::Door,
                index: 3,
                rect: Rectangle::new(4.5, 5.5, -2.0, 0.0),
            },
        ];
        assert_eq!(
            validate(&wall(), &openings),
            Err(ValidationError::Containment {
                kind: OpeningKind::Door,
                index: 3
            })
        );
    }

    #[test]
    fn each_side_is_checked() {
        let cases = [
            Rectangle::new(-5.1, 0.0, 0.0, 1.0),
            Rectangle::new(0.0, 5.1, 0.0, 1.0),
            Rectangle::new(0.0, 1.0, -2.1, 1.0),
            Rectangle::new(0.0, 1.0, 0.0, 2.1),
        ];
        for rect in cases {
            assert!(
                matches!(
                    validate(&wall(), &[window(0, rect)]),
                    Err(ValidationError::Containment { .. })
                ),
                "{rect:?} should be rejected"
            );
        }
    }

    #[test]
    fn overlapping_pair_is_rejected() {
        let openings = [
            window(0, Rectangle::new(-2.0, 0.0, -1.0, 1.0)),
            window(1, Rectangle::new(3.0, 4.0, -1.0, 1.0)),
            window(2, Rectangle::new(-1.0, 1.0, 0.0, 1.5)),
        ];
        assert_eq!(
            validate(&wall(), &openings),
            Err(ValidationError::Overlap {
                first: OpeningRef {
                    kind: OpeningKind::Window,
                    index: 0
                },
                second: OpeningRef {
                    kind: OpeningKind::Window,
                    index: 2
                },
            })
        );
    }

    #[test]
    fn shared_edge_is_not_overlap() {
        let openings = [
            window(0, Rectangle::new(-2.0, 0.0, -1.0, 1.0)),
            window(1, Rectangle::new(0.0, 2.0, -1.0, 1.0)),
            window(2, Rectangle::new(-2.0, 0.0, 1.0, 2.0)),
        ];
        assert_eq!(validate(&wall(), &openings), Ok(()));
    }

    #[test]
    fn containment_reported_before_overlap() {
        let openings = [
            window(0, Rectangle::new(-1.0, 1.0, -1.0, 1.0)),
            window(1, Rectangle::new(0.0, 2.0, 0.0, 1.0)),
            window(2, Rectangle::new(4.0, 6.0, 0.0, 1.0)),
        ];
        assert!(matches!(
            validate(&wall(), &openings),
            Err(ValidationError::Containment { index: 2, .. })
        ));
    }
}
