use thiserror::Error;

use crate::wall::{OpeningKind, OpeningRef};

/// Top-level error type for wallsmith.
#[derive(Debug, Error)]
pub enum WallsmithError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Panel(#[from] PanelError),

    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// A numeric input field is unusable.
///
/// Raised while normalizing requests, before any rectangle is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("{field} must be greater than 0, got {value}")]
    NotPositive { field: String, value: f64 },

    #[error("{field} = {value} exceeds the maximum of {max}")]
    ExceedsMaximum { field: String, value: f64, max: f64 },
}

/// The opening set violates containment or non-overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{kind} {index} extends outside the wall")]
    Containment { kind: OpeningKind, index: usize },

    #[error("{first} overlaps {second}")]
    Overlap {
        first: OpeningRef,
        second: OpeningRef,
    },
}

/// Errors raised while attaching fixtures to a decomposed wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("no request found for {opening}")]
    MissingRequest { opening: OpeningRef },
}

/// Errors raised by the wall arena.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("wall not found")]
    WallNotFound,
}

/// Convenience type alias for results using [`WallsmithError`].
pub type Result<T> = std::result::Result<T, WallsmithError>;
