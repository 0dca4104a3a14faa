use slotmap::{new_key_type, SlotMap};

use crate::error::{self, StructureError};
use crate::math::{Isometry3, Point3, Vector3};
use crate::panel::{Fixture, PanelBox, WallPanel, WallPanelBuilder};
use crate::wall::{DecomposedWall, OpeningRequests, WallDecomposition, WallSpec};

new_key_type! {
    /// Unique identifier for a wall in a [`Structure`].
    pub struct WallId;
}

/// Where a wall sits in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// World position of the wall's center.
    pub position: Point3,
    /// Rotation about +Y, in radians.
    pub rotation_y: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            rotation_y: 0.0,
        }
    }
}

impl Placement {
    #[must_use]
    pub fn new(position: Point3, rotation_y: f64) -> Self {
        Self {
            position,
            rotation_y,
        }
    }

    /// The wall-local to world transform.
    #[must_use]
    pub fn isometry(&self) -> Isometry3 {
        Isometry3::new(self.position.coords, Vector3::y() * self.rotation_y)
    }
}

/// A validated, decomposed wall positioned in the scene, with its panel.
#[derive(Debug, Clone)]
pub struct PlacedWall {
    pub wall: DecomposedWall,
    /// Boxes and fixtures in wall-local coordinates.
    pub panel: WallPanel,
    pub placement: Placement,
}

impl PlacedWall {
    /// Segment boxes moved into world space.
    #[must_use]
    pub fn world_boxes(&self) -> Vec<PanelBox> {
        let iso = self.placement.isometry();
        self.panel.boxes.iter().map(|b| b.transformed(&iso)).collect()
    }

    /// Opening fixtures moved into world space.
    ///
    /// Fixture centers land in world space and take on the wall's heading;
    /// parts and hinge pivots stay relative to each fixture's center.
    #[must_use]
    pub fn world_fixtures(&self) -> Vec<Fixture> {
        let iso = self.placement.isometry();
        self.panel
            .fixtures
            .iter()
            .map(|f| f.transformed(&iso))
            .collect()
    }
}

/// Arena that owns every wall of a building.
///
/// Only walls whose openings validated and whose fixtures fit their frames
/// are ever stored.
#[derive(Debug, Default)]
pub struct Structure {
    walls: SlotMap<WallId, PlacedWall>,
    builder: WallPanelBuilder,
}

impl Structure {
    /// Creates a new, empty structure using default fixture parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty structure whose walls are built with `builder`.
    #[must_use]
    pub fn with_builder(builder: WallPanelBuilder) -> Self {
        Self {
            walls: SlotMap::with_key(),
            builder,
        }
    }

    #[must_use]
    pub fn builder(&self) -> &WallPanelBuilder {
        &self.builder
    }

    /// Decomposes a wall, builds its panel and stores it.
    ///
    /// # Errors
    ///
    /// Returns the decomposition error, or the panel error if a fixture
    /// does not fit its opening; nothing is stored in either case.
    pub fn add_wall(
        &mut self,
        spec: WallSpec,
        requests: &OpeningRequests,
        placement: Placement,
    ) -> error::Result<WallId> {
        let wall = WallDecomposition::new(spec, requests).execute()?;
        let panel = self.builder.build(&wall, requests)?;
        let id = self.walls.insert(PlacedWall {
            wall,
            panel,
            placement,
        });
        tracing::debug!(?id, walls = self.walls.len(), "added wall");
        Ok(id)
    }

    /// Returns a reference to the wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::WallNotFound`] for a removed or foreign id.
    pub fn wall(&self, id: WallId) -> Result<&PlacedWall, StructureError> {
        self.walls.get(id).ok_or(StructureError::WallNotFound)
    }

    /// Removes a wall and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::WallNotFound`] for a removed or foreign id.
    pub fn remove_wall(&mut self, id: WallId) -> Result<PlacedWall, StructureError> {
        self.walls.remove(id).ok_or(StructureError::WallNotFound)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WallId, &PlacedWall)> {
        self.walls.iter()
    }
}
