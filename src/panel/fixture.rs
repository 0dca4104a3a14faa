use crate::error::ShapeError;
use crate::math::{yaw, Isometry3, Point3, Vector3};
use crate::wall::{check_positive, HingeSide, OpeningRef};

/// What a fixture part represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartRole {
    FrameTop,
    FrameBottom,
    FrameLeft,
    FrameRight,
    /// Zero-depth pane spanning the whole window opening.
    Glass,
    /// The closed door leaf.
    Leaf,
    FrontHandle,
    BackHandle,
}

/// A box-shaped piece of a fixture, in the opening's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixturePart {
    pub role: PartRole,
    pub center: Point3,
    pub size: Vector3,
}

impl FixturePart {
    fn new(role: PartRole, center: [f64; 3], size: [f64; 3]) -> Self {
        Self {
            role,
            center: Point3::new(center[0], center[1], center[2]),
            size: Vector3::new(size[0], size[1], size[2]),
        }
    }
}

/// Pivot line a door leaf rotates around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hinge {
    pub side: HingeSide,
    /// Point on the vertical pivot axis, in the opening's local frame.
    pub pivot: Point3,
}

/// Visual sub-object attached to one opening.
///
/// Passages produce a fixture with no parts. Parts and the hinge pivot are
/// offsets from `center` in the fixture's own frame, which is turned
/// `rotation_y` about +Y relative to the frame `center` is given in.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub opening: OpeningRef,
    /// Center of the opening; wall-local as built.
    pub center: Point3,
    /// Heading of the fixture frame, in radians. Zero as built.
    pub rotation_y: f64,
    pub parts: Vec<FixturePart>,
    pub hinge: Option<Hinge>,
}

impl Fixture {
    /// Moves the fixture into the frame described by `isometry`, which must
    /// rotate about +Y only. Parts and hinge stay relative to the center.
    #[must_use]
    pub fn transformed(&self, isometry: &Isometry3) -> Self {
        Self {
            center: isometry * self.center,
            rotation_y: self.rotation_y + yaw(isometry),
            ..self.clone()
        }
    }
}

/// Four frame bars around a `w x h` window, plus the glass pane.
pub(crate) fn window_parts(
    w: f64,
    h: f64,
    t: f64,
    glass_offset: f64,
) -> Result<Vec<FixturePart>, ShapeError> {
    check_positive(|| "window frame bar width".to_owned(), w - t)?;
    check_positive(|| "window frame bar height".to_owned(), h - t)?;

    let bar_x = (w - t) / 2.0;
    let bar_y = (h - t) / 2.0;
    Ok(vec![
        FixturePart::new(PartRole::FrameTop, [0.0, bar_y, 0.0], [w - t, t, t]),
        FixturePart::new(PartRole::FrameBottom, [0.0, -bar_y, 0.0], [w - t, t, t]),
        FixturePart::new(PartRole::FrameLeft, [-bar_x, 0.0, 0.0], [t, h, t]),
        FixturePart::new(PartRole::FrameRight, [bar_x, 0.0, 0.0], [t, h, t]),
        FixturePart::new(PartRole::Glass, [0.0, 0.0, glass_offset], [w, h, 0.0]),
    ])
}

/// Three-sided frame, closed leaf and a handle on each face.
///
/// The handles sit on the leaf, on the side away from the hinge, and never
/// reach past the leaf's edges.
pub(crate) fn door_parts(
    w: f64,
    h: f64,
    t: f64,
    side: HingeSide,
) -> Result<(Vec<FixturePart>, Hinge), ShapeError> {
    let leaf_w = w - 2.0 * t;
    let leaf_h = h - t;
    check_positive(|| "door leaf width".to_owned(), leaf_w)?;
    check_positive(|| "door leaf height".to_owned(), leaf_h)?;

    let jamb_x = (w - t) / 2.0;
    let leaf_y = -t / 2.0;
    // One eighth of the leaf in from its free edge.
    let handle_reach = leaf_w / 2.0 - leaf_w / 8.0;
    let (pivot_x, handle_x) = match side {
        HingeSide::Left => (-(w / 2.0 - t), handle_reach),
        HingeSide::Right => (w / 2.0 - t, -handle_reach),
    };
    let handle_z = (t + t / 2.0) / 2.0;
    let handle = [(h / 16.0).min(leaf_w / 4.0), t / 2.0, t / 8.0];

    let parts = vec![
        FixturePart::new(PartRole::FrameTop, [0.0, (h - t) / 2.0, 0.0], [w, t, t]),
        FixturePart::new(PartRole::FrameLeft, [-jamb_x, 0.0, 0.0], [t, h, t]),
        FixturePart::new(PartRole::FrameRight, [jamb_x, 0.0, 0.0], [t, h, t]),
        FixturePart::new(PartRole::Leaf, [0.0, leaf_y, 0.0], [leaf_w, leaf_h, t]),
        FixturePart::new(PartRole::FrontHandle, [handle_x, leaf_y, handle_z], handle),
        FixturePart::new(PartRole::BackHandle, [handle_x, leaf_y, -handle_z], handle),
    ];
    let hinge = Hinge {
        side,
        pivot: Point3::new(pivot_x, 0.0, t / 2.0),
    };
    Ok((parts, hinge))
}
