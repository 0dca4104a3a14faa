use super::Point2;

/// An axis-aligned rectangle in wall-local coordinates.
///
/// X runs along the wall width, Y runs up. Edges are stored directly rather
/// than as a corner + extent so the sweep can compare them without
/// re-deriving anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Rectangle {
    /// Creates a rectangle from its four edges.
    #[must_use]
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Creates a rectangle of the given size centered on `(cx, cy)`.
    #[must_use]
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(
            cx - width / 2.0,
            cx + width / 2.0,
            cy - height / 2.0,
            cy + height / 2.0,
        )
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    ///
    /// Shared edges count as contained.
    #[must_use]
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.bottom >= self.bottom
            && other.top <= self.top
    }

    /// Returns `true` if the interiors of the two rectangles intersect.
    ///
    /// Rectangles that only touch along an edge or at a corner do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.bottom < other.top
            && other.bottom < self.top
    }

    /// Area of the intersection of the two rectangles, 0 if disjoint.
    #[must_use]
    pub fn intersection_area(&self, other: &Rectangle) -> f64 {
        let w = self.right.min(other.right) - self.left.max(other.left);
        let h = self.top.min(other.top) - self.bottom.max(other.bottom);
        if w <= 0.0 || h <= 0.0 {
            return 0.0;
        }
        w * h
    }
}
