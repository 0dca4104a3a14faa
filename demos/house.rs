//! Builds the walls of a small house and logs the resulting geometry.
//!
//! Usage:
//! ```text
//! cargo run --example house
//! RUST_LOG=wallsmith=debug cargo run --example house
//! ```

use std::f64::consts::FRAC_PI_2;

use wallsmith::math::Point3;
use wallsmith::structure::{Placement, Structure};
use wallsmith::wall::{
    DoorRequest, HingeSide, OpeningRequests, PassageRequest, WallSpec, WindowRequest,
};

const HOUSE_WIDTH: f64 = 15.0;
const HOUSE_HEIGHT: f64 = 3.0;
const HOUSE_DEPTH: f64 = 20.0;
const EXTERIOR_THICKNESS: f64 = 0.5;
const INTERIOR_THICKNESS: f64 = 0.25;

const DOOR_WIDTH: f64 = 1.5;
const DOOR_HEIGHT: f64 = 2.5;
const WINDOW_WIDTH: f64 = 2.0;
const WINDOW_HEIGHT: f64 = 1.25;

fn window(offset_x: f64, offset_y: f64) -> WindowRequest {
    WindowRequest {
        offset_x,
        offset_y,
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
    }
}

fn door(offset_x: f64, hinge: HingeSide) -> DoorRequest {
    DoorRequest {
        offset_x,
        width: DOOR_WIDTH,
        height: DOOR_HEIGHT,
        hinge,
    }
}

fn main() -> wallsmith::Result<()> {
    // Default: WARN for everything, INFO for wallsmith and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=wallsmith=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("house=info".parse().unwrap_or_default())
        .add_directive("wallsmith=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let exterior = WallSpec::new(HOUSE_WIDTH, HOUSE_HEIGHT, EXTERIOR_THICKNESS)?;
    let side = WallSpec::new(HOUSE_DEPTH, HOUSE_HEIGHT, EXTERIOR_THICKNESS)?;
    let interior = WallSpec::new(HOUSE_WIDTH, HOUSE_HEIGHT, INTERIOR_THICKNESS)?;
    let half_depth = HOUSE_DEPTH / 2.0;

    let walls = [
        (
            "front",
            exterior,
            OpeningRequests::new()
                .with_window(window(-6.0, 0.5))
                .with_window(window(6.0, 0.5))
                .with_door(door(-2.0, HingeSide::Left))
                .with_door(door(2.0, HingeSide::Right)),
            Placement::new(Point3::new(0.0, HOUSE_HEIGHT / 2.0, half_depth), 0.0),
        ),
        (
            "left",
            side,
            OpeningRequests::new().with_window(window(0.0, 0.25)),
            Placement::new(Point3::new(-HOUSE_WIDTH / 2.0, HOUSE_HEIGHT / 2.0, 0.0), FRAC_PI_2),
        ),
        (
            "hallway",
            interior,
            OpeningRequests::new().with_passage(PassageRequest {
                offset_x: 0.0,
                width: 1.25,
                height: 2.25,
            }),
            Placement::new(Point3::new(0.0, HOUSE_HEIGHT / 2.0, 0.0), 0.0),
        ),
        (
            // Windows sit above the top of the wall: rejected and skipped.
            "back",
            exterior,
            OpeningRequests::new()
                .with_window(window(-6.0, 2.0))
                .with_window(window(6.0, 2.0)),
            Placement::new(Point3::new(0.0, HOUSE_HEIGHT / 2.0, -half_depth), 0.0),
        ),
    ];

    let mut house = Structure::new();
    for (name, spec, requests, placement) in walls {
        match house.add_wall(spec, &requests, placement) {
            Ok(_) => tracing::info!(name, "wall built"),
            Err(e) => tracing::warn!(name, error = %e, "skipping wall"),
        }
    }

    for (id, placed) in house.iter() {
        tracing::info!(
            ?id,
            segments = placed.panel.boxes.len(),
            fixtures = placed.panel.fixtures.len(),
            "wall panel"
        );
        for b in placed.world_boxes() {
            tracing::info!(
                center = ?(b.center.x, b.center.y, b.center.z),
                size = ?(b.size.x, b.size.y, b.size.z),
                rotation_y = b.rotation_y,
                "box"
            );
        }
        for fixture in placed.world_fixtures() {
            tracing::info!(
                opening = %fixture.opening,
                center = ?(fixture.center.x, fixture.center.y, fixture.center.z),
                rotation_y = fixture.rotation_y,
                parts = fixture.parts.len(),
                hinge = ?fixture.hinge.map(|h| h.side),
                "fixture"
            );
        }
    }

    Ok(())
}
