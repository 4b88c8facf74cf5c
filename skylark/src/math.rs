use crate::error::{OrbitError, OrbitResult};
pub use glam::f64::DVec2;
use rand::Rng;

pub const PI: f64 = std::f64::consts::PI;

pub fn rand(min: f64, max: f64) -> f64 {
    rand::thread_rng().gen_range(min..max)
}

pub fn randvec(min: f64, max: f64) -> DVec2 {
    let rot = DVec2::from_angle(rand(0.0, 2.0 * PI));
    let mag = rand(min, max);
    rot.rotate(DVec2::new(mag, 0.0))
}

pub fn rotate(v: DVec2, angle: f64) -> DVec2 {
    DVec2::from_angle(angle).rotate(v)
}

pub fn cross2d(a: DVec2, b: DVec2) -> f64 {
    a.extend(0.0).cross(b.extend(0.0)).z
}

/// Rotates a vector a quarter turn counterclockwise. For a radius vector
/// this is the in-plane orbital normal direction.
pub fn perpendicular(v: DVec2) -> DVec2 {
    DVec2::new(-v.y, v.x)
}

/// Unit vector along `v`. A zero-magnitude vector has no direction, so
/// this surfaces `DegenerateOrbit` instead of dividing by zero.
pub fn normalize(v: DVec2) -> OrbitResult<DVec2> {
    v.try_normalize().ok_or(OrbitError::DegenerateOrbit)
}
