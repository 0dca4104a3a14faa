use crate::error::ShapeError;
use crate::math::Rectangle;

/// Dimensions of a wall panel.
///
/// The panel is centered on the local origin, so its rectangle spans
/// `[-width/2, width/2] x [-height/2, height/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSpec {
    width: f64,
    height: f64,
    thickness: f64,
}

impl WallSpec {
    /// Creates a new wall spec.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if any dimension is non-finite or not positive.
    pub fn new(width: f64, height: f64, thickness: f64) -> Result<Self, ShapeError> {
        check_positive(|| "wall.width".to_owned(), width)?;
        check_positive(|| "wall.height".to_owned(), height)?;
        check_positive(|| "wall.thickness".to_owned(), thickness)?;
        Ok(Self {
            width,
            height,
            thickness,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// The full panel rectangle before any cutouts.
    #[must_use]
    pub fn rect(&self) -> Rectangle {
        Rectangle::centered(0.0, 0.0, self.width, self.height)
    }
}

/// A window cut, free to sit anywhere on the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRequest {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

/// A plain passage: an empty doorway with no fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassageRequest {
    pub offset_x: f64,
    pub width: f64,
    pub height: f64,
}

/// Which jamb a door leaf swings on, seen from the front of the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HingeSide {
    /// Opens counter-clockwise.
    #[default]
    Left,
    /// Opens clockwise.
    Right,
}

/// A doorway with a hinged leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorRequest {
    pub offset_x: f64,
    pub width: f64,
    pub height: f64,
    pub hinge: HingeSide,
}

/// All cutouts requested for one wall, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpeningRequests {
    pub windows: Vec<WindowRequest>,
    pub passages: Vec<PassageRequest>,
    pub doors: Vec<DoorRequest>,
}

impl OpeningRequests {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_window(mut self, window: WindowRequest) -> Self {
        self.windows.push(window);
        self
    }

    #[must_use]
    pub fn with_passage(mut self, passage: PassageRequest) -> Self {
        self.passages.push(passage);
        self
    }

    #[must_use]
    pub fn with_door(mut self, door: DoorRequest) -> Self {
        self.doors.push(door);
        self
    }

    /// Total number of requested openings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len() + self.passages.len() + self.doors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rejects NaN and infinities.
pub(crate) fn check_finite(field: impl FnOnce() -> String, value: f64) -> Result<(), ShapeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonFinite {
            field: field(),
            value,
        })
    }
}

/// Rejects non-finite values and anything `<= 0`.
pub(crate) fn check_positive(
    field: impl FnOnce() -> String,
    value: f64,
) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::NonFinite {
            field: field(),
            value,
        });
    }
    if value <= 0.0 {
        return Err(ShapeError::NotPositive {
            field: field(),
            value,
        });
    }
    Ok(())
}
