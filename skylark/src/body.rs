use serde::{Deserialize, Serialize};

pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408E-11;

/// A fixed gravitating primary. The primary is a gravity source only; it
/// is never advanced by the propagator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mass: f64,
}

impl Body {
    pub const fn new(mass: f64) -> Self {
        Body { mass }
    }

    /// Standard gravitational parameter, m^3/s^2.
    pub fn mu(&self) -> f64 {
        self.mass * GRAVITATIONAL_CONSTANT
    }
}
