use std::fmt;

use super::spec::{check_finite, check_positive, OpeningRequests, WallSpec};
use crate::error::ShapeError;
use crate::math::Rectangle;

/// The kind of cutout an [`Opening`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningKind {
    Window,
    Passage,
    Door,
}

impl OpeningKind {
    /// Name of the request list this kind is read from.
    #[must_use]
    pub fn list_name(self) -> &'static str {
        match self {
            Self::Window => "windows",
            Self::Passage => "passages",
            Self::Door => "doors",
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Window => "window",
            Self::Passage => "passage",
            Self::Door => "door",
        })
    }
}

/// Identifies an opening by kind and its position in that kind's request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpeningRef {
    pub kind: OpeningKind,
    pub index: usize,
}

impl fmt::Display for OpeningRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}

/// A normalized cutout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opening {
    pub kind: OpeningKind,
    /// Position in the request list of the same kind.
    pub index: usize,
    pub rect: Rectangle,
}

impl Opening {
    #[must_use]
    pub fn reference(&self) -> OpeningRef {
        OpeningRef {
            kind: self.kind,
            index: self.index,
        }
    }
}

/// Normalizes every request of `requests` into an [`Opening`] on `wall`.
///
/// Openings come out as windows, then passages, then doors, each group in
/// input order. Passages and doors span from `(height - wall_height) / 2` to
/// `(wall_height - height) / 2` vertically.
///
/// # Errors
///
/// Returns a [`ShapeError`] naming the first field that is non-finite, the
/// first width/height that is not positive, or a passage/door taller than the
/// wall.
pub fn catalog(wall: &WallSpec, requests: &OpeningRequests) -> Result<Vec<Opening>, ShapeError> {
    let mut openings = Vec::with_capacity(requests.len());

    for (i, w) in requests.windows.iter().enumerate() {
        let kind = OpeningKind::Window;
        check_size(kind, i, w.width, w.height)?;
        check_finite(|| field(kind, i, "offset_x"), w.offset_x)?;
        check_finite(|| field(kind, i, "offset_y"), w.offset_y)?;
        openings.push(Opening {
            kind,
            index: i,
            rect: Rectangle::centered(w.offset_x, w.offset_y, w.width, w.height),
        });
    }

    for (i, p) in requests.passages.iter().enumerate() {
        let kind = OpeningKind::Passage;
        check_size(kind, i, p.width, p.height)?;
        check_doorway_height(wall, kind, i, p.height)?;
        check_finite(|| field(kind, i, "offset_x"), p.offset_x)?;
        openings.push(Opening {
            kind,
            index: i,
            rect: doorway_rect(wall, p.offset_x, p.width, p.height),
        });
    }

    for (i, d) in requests.doors.iter().enumerate() {
        let kind = OpeningKind::Door;
        check_size(kind, i, d.width, d.height)?;
        check_doorway_height(wall, kind, i, d.height)?;
        check_finite(|| field(kind, i, "offset_x"), d.offset_x)?;
        openings.push(Opening {
            kind,
            index: i,
            rect: doorway_rect(wall, d.offset_x, d.width, d.height),
        });
    }

    Ok(openings)
}

/// Doorways cannot be taller than the wall; past that the rectangle would
/// come out inverted.
fn check_doorway_height(
    wall: &WallSpec,
    kind: OpeningKind,
    i: usize,
    height: f64,
) -> Result<(), ShapeError> {
    if height > wall.height() {
        return Err(ShapeError::ExceedsMaximum {
            field: field(kind, i, "height"),
            value: height,
            max: wall.height(),
        });
    }
    Ok(())
}

fn doorway_rect(wall: &WallSpec, offset_x: f64, width: f64, height: f64) -> Rectangle {
    Rectangle::new(
        offset_x - width / 2.0,
        offset_x + width / 2.0,
        (height - wall.height()) / 2.0,
        (wall.height() - height) / 2.0,
    )
}

fn check_size(kind: OpeningKind, i: usize, width: f64, height: f64) -> Result<(), ShapeError> {
    check_positive(|| field(kind, i, "width"), width)?;
    check_positive(|| field(kind, i, "height"), height)
}

fn field(kind: OpeningKind, i: usize, name: &str) -> String {
    format!("{}[{i}].{name}", kind.list_name())
}
