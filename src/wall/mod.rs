mod catalog;
mod segments;
mod spec;
mod strips;
mod validate;

pub use catalog::{catalog, Opening, OpeningKind, OpeningRef};
pub use segments::{generate, Segment};
pub use spec::{
    DoorRequest, HingeSide, OpeningRequests, PassageRequest, WallSpec, WindowRequest,
};
pub use strips::{strip_boundaries, strips};
pub use validate::validate;

pub(crate) use spec::check_positive;

use crate::error::Result;

/// A wall whose openings passed validation, with its solid remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct DecomposedWall {
    pub spec: WallSpec,
    /// Solid pieces, bottom strip first, left to right within a strip.
    pub segments: Vec<Segment>,
    /// Normalized openings: windows, then passages, then doors.
    pub openings: Vec<Opening>,
}

/// Cuts a set of rectangular openings out of a wall panel.
///
/// Normalizes the requests, validates containment and non-overlap, then
/// decomposes the remaining solid area into axis-aligned segments.
#[derive(Debug)]
pub struct WallDecomposition<'a> {
    spec: WallSpec,
    requests: &'a OpeningRequests,
}

impl<'a> WallDecomposition<'a> {
    /// Creates a new decomposition operation.
    #[must_use]
    pub fn new(spec: WallSpec, requests: &'a OpeningRequests) -> Self {
        Self { spec, requests }
    }

    /// Executes the decomposition.
    ///
    /// # Errors
    ///
    /// Returns a shape error for malformed request fields, or a validation
    /// error if an opening leaves the wall or two openings overlap. No
    /// segments are produced on failure.
    pub fn execute(&self) -> Result<DecomposedWall> {
        let openings = catalog(&self.spec, self.requests)?;
        let wall = self.spec.rect();
        validate(&wall, &openings)?;

        let segments = generate(&wall, &openings);
        tracing::debug!(
            width = self.spec.width(),
            height = self.spec.height(),
            openings = openings.len(),
            segments = segments.len(),
            "decomposed wall"
        );

        Ok(DecomposedWall {
            spec: self.spec,
            segments,
            openings,
        })
    }
}
