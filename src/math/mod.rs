pub mod rect;

pub use rect::Rectangle;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rigid transform (rotation + translation) in 3D.
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Heading of `isometry` about +Y, in radians within `(-PI, PI]`.
///
/// Only meaningful for rotations about +Y, which is all a wall placement
/// carries.
#[must_use]
pub fn yaw(isometry: &Isometry3) -> f64 {
    let x = isometry.rotation * Vector3::x();
    (-x.z).atan2(x.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn yaw_recovers_rotation_about_y() {
        for angle in [0.0, 0.3, FRAC_PI_2, -FRAC_PI_2, 2.5, PI] {
            let iso = Isometry3::new(Vector3::new(1.0, 2.0, 3.0), Vector3::y() * angle);
            assert_relative_eq!(yaw(&iso), angle, epsilon = 1e-12);
        }
    }
}
