mod fixture;

pub use fixture::{Fixture, FixturePart, Hinge, PartRole};

use crate::error::{PanelError, Result};
use crate::math::{yaw, Isometry3, Point3, Vector3};
use crate::wall::{check_positive, DecomposedWall, OpeningKind, OpeningRequests};

/// Parameters controlling fixture geometry.
#[derive(Debug, Clone, Copy)]
pub struct FixtureParams {
    /// Thickness of window and door frame bars, and depth of door leaves.
    pub frame_thickness: f64,
    /// Distance of the glass pane in front of the wall's mid-plane.
    pub glass_offset: f64,
}

impl Default for FixtureParams {
    fn default() -> Self {
        Self {
            frame_thickness: 0.1,
            glass_offset: 0.05,
        }
    }
}

/// A box to be rendered, described by its center and full extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBox {
    pub center: Point3,
    pub size: Vector3,
    /// Rotation about +Y applied after sizing, in radians.
    pub rotation_y: f64,
}

impl PanelBox {
    /// Moves the box into the frame described by `isometry`.
    ///
    /// `isometry` must rotate about +Y only; its heading is added to the
    /// box's own `rotation_y`.
    #[must_use]
    pub fn transformed(&self, isometry: &Isometry3) -> Self {
        Self {
            center: isometry * self.center,
            size: self.size,
            rotation_y: self.rotation_y + yaw(isometry),
        }
    }
}

/// Everything a renderer needs to draw one wall, in wall-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPanel {
    /// One box per solid segment, in segment order.
    pub boxes: Vec<PanelBox>,
    /// One fixture per opening, in opening order.
    pub fixtures: Vec<Fixture>,
}

/// Turns a decomposed wall into box placements and opening fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallPanelBuilder {
    params: FixtureParams,
}

impl WallPanelBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(params: FixtureParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> FixtureParams {
        self.params
    }

    /// One box per segment of `wall`, in wall-local coordinates.
    ///
    /// Boxes need no fixture parameters, so this never fails.
    #[must_use]
    pub fn segment_boxes(wall: &DecomposedWall) -> Vec<PanelBox> {
        let depth = wall.spec.thickness();
        wall.segments
            .iter()
            .map(|s| {
                let c = s.rect.center();
                PanelBox {
                    center: Point3::new(c.x, c.y, 0.0),
                    size: Vector3::new(s.rect.width(), s.rect.height(), depth),
                    rotation_y: 0.0,
                }
            })
            .collect()
    }

    /// Builds the panel for `wall`.
    ///
    /// Fixtures are sized to the opening rectangle that was cut. Door hinge
    /// sides are looked up in `requests` by the opening's index.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the frame thickness is not positive or a
    /// window/door is too small to hold its frame, and
    /// [`PanelError::MissingRequest`] if a door has no matching request.
    pub fn build(&self, wall: &DecomposedWall, requests: &OpeningRequests) -> Result<WallPanel> {
        let t = self.params.frame_thickness;
        check_positive(|| "frame_thickness".to_owned(), t)?;

        let boxes = Self::segment_boxes(wall);

        let mut fixtures = Vec::with_capacity(wall.openings.len());
        for opening in &wall.openings {
            let (w, h) = (opening.rect.width(), opening.rect.height());
            let (parts, hinge) = match opening.kind {
                OpeningKind::Window => (
                    fixture::window_parts(w, h, t, self.params.glass_offset)?,
                    None,
                ),
                OpeningKind::Passage => (Vec::new(), None),
                OpeningKind::Door => {
                    let door = requests.doors.get(opening.index).ok_or(
                        PanelError::MissingRequest {
                            opening: opening.reference(),
                        },
                    )?;
                    let (parts, hinge) = fixture::door_parts(w, h, t, door.hinge)?;
                    (parts, Some(hinge))
                }
            };
            let c = opening.rect.center();
            fixtures.push(Fixture {
                opening: opening.reference(),
                center: Point3::new(c.x, c.y, 0.0),
                rotation_y: 0.0,
                parts,
                hinge,
            });
        }

        tracing::trace!(
            boxes = wall.segments.len(),
            fixtures = fixtures.len(),
            "built wall panel"
        );
        Ok(WallPanel { boxes, fixtures })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ShapeError, WallsmithError};
    use crate::wall::{
        DoorRequest, HingeSide, OpeningRef, PassageRequest, WallDecomposition, WallSpec,
        WindowRequest,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn decompose(requests: &OpeningRequests) -> DecomposedWall {
        WallDecomposition::new(WallSpec::new(10.0, 4.0, 0.25).unwrap(), requests)
            .execute()
            .unwrap()
    }

    #[test]
    fn one_box_per_segment() {
        let requests = OpeningRequests::new().with_passage(PassageRequest {
            offset_x: 0.0,
            width: 2.0,
            height: 3.0,
        });
        let wall = decompose(&requests);
        let panel = WallPanelBuilder::default().build(&wall, &requests).unwrap();
        assert_eq!(panel.boxes.len(), 4);

        let left = panel.boxes[1];
        assert_relative_eq!(left.center.x, -3.0);
        assert_relative_eq!(left.center.y, 0.0);
        assert_relative_eq!(left.size.x, 4.0);
        assert_relative_eq!(left.size.y, 1.0);
        assert_relative_eq!(left.size.z, 0.25);

        let volume: f64 = panel.boxes.iter().map(|b| b.size.x * b.size.y * b.size.z).sum();
        assert_relative_eq!(volume, 38.0 * 0.25);
    }

    #[test]
    fn passage_fixture_is_empty() {
        let requests = OpeningRequests::new().with_passage(PassageRequest {
            offset_x: 1.0,
            width: 2.0,
            height: 3.0,
        });
        let panel = WallPanelBuilder::default()
            .build(&decompose(&requests), &requests)
            .unwrap();
        assert_eq!(panel.fixtures.len(), 1);
        assert!(panel.fixtures[0].parts.is_empty());
        assert!(panel.fixtures[0].hinge.is_none());
        assert_relative_eq!(panel.fixtures[0].center.x, 1.0);
    }

    #[test]
    fn window_and_door_fixtures() {
        let requests = OpeningRequests::new()
            .with_window(WindowRequest {
                offset_x: -3.0,
                offset_y: 0.5,
                width: 2.0,
                height: 1.25,
            })
            .with_door(DoorRequest {
                offset_x: 2.0,
                width: 1.5,
                height: 1.0,
                hinge: HingeSide::Right,
            });
        let panel = WallPanelBuilder::default()
            .build(&decompose(&requests), &requests)
            .unwrap();

        let window = &panel.fixtures[0];
        assert_eq!(
            window.opening,
            OpeningRef {
                kind: OpeningKind::Window,
                index: 0
            }
        );
        assert_eq!(window.parts.len(), 5);
        assert_relative_eq!(window.center.y, 0.5);

        let door = &panel.fixtures[1];
        assert_eq!(door.parts.len(), 6);
        assert_eq!(door.hinge.unwrap().side, HingeSide::Right);
    }

    #[test]
    fn door_without_request_fails() {
        let requests = OpeningRequests::new().with_door(DoorRequest {
            offset_x: 0.0,
            width: 1.5,
            height: 1.0,
            hinge: HingeSide::Left,
        });
        let wall = decompose(&requests);
        let err = WallPanelBuilder::default()
            .build(&wall, &OpeningRequests::new())
            .unwrap_err();
        assert!(matches!(
            err,
            WallsmithError::Panel(PanelError::MissingRequest { .. })
        ));
    }

    #[test]
    fn non_positive_frame_thickness_fails() {
        let requests = OpeningRequests::new();
        let builder = WallPanelBuilder::new(FixtureParams {
            frame_thickness: 0.0,
            ..FixtureParams::default()
        });
        let err = builder.build(&decompose(&requests), &requests).unwrap_err();
        assert!(matches!(
            err,
            WallsmithError::Shape(ShapeError::NotPositive { .. })
        ));
    }

    #[test]
    fn transformed_box_rotates_center() {
        let b = PanelBox {
            center: Point3::new(1.0, 2.0, 0.0),
            size: Vector3::new(2.0, 1.0, 0.25),
            rotation_y: 0.0,
        };
        let iso = Isometry3::new(Vector3::new(10.0, 0.0, 0.0), Vector3::y() * FRAC_PI_2);
        let moved = b.transformed(&iso);
        assert_relative_eq!(moved.center.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(moved.center.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(moved.center.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(moved.rotation_y, FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(moved.size, b.size);
    }

    #[test]
    fn transformed_box_accumulates_heading() {
        let b = PanelBox {
            center: Point3::origin(),
            size: Vector3::new(1.0, 1.0, 1.0),
            rotation_y: 0.25,
        };
        let iso = Isometry3::new(Vector3::zeros(), Vector3::y() * -FRAC_PI_2);
        assert_relative_eq!(b.transformed(&iso).rotation_y, 0.25 - FRAC_PI_2, epsilon = 1e-12);
        let identity = b.transformed(&Isometry3::identity());
        assert_eq!(identity, b);
    }

    #[test]
    fn transformed_fixture_keeps_parts_local() {
        let requests = OpeningRequests::new().with_door(DoorRequest {
            offset_x: 2.0,
            width: 1.5,
            height: 3.0,
            hinge: HingeSide::Left,
        });
        let panel = WallPanelBuilder::default()
            .build(&decompose(&requests), &requests)
            .unwrap();
        let door = &panel.fixtures[0];
        let iso = Isometry3::new(Vector3::new(0.0, 2.0, 5.0), Vector3::y() * FRAC_PI_2);
        let moved = door.transformed(&iso);

        // Local (2, 0, 0) rotated a quarter turn about +Y, then shifted.
        assert_relative_eq!(moved.center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(moved.center.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(moved.center.z, 3.0, epsilon = 1e-12);
        assert_relative_eq!(moved.rotation_y, FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(moved.parts, door.parts);
        assert_eq!(moved.hinge, door.hinge);
    }
}
