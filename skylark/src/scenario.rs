use crate::body::Body;
use crate::math::{perpendicular, rotate, DVec2};
use crate::propagator::TwoBodyPropagator;
use crate::pv::PV;
use serde::{Deserialize, Serialize};

/// Initial conditions and run parameters for a propagation, loadable from
/// a YAML file. The primary sits at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub primary: Body,
    pub position: DVec2,
    pub velocity: DVec2,
    pub timestep: f64,
    pub steps: u64,
}

impl Scenario {
    /// The reference lunar scenario: Earth's mass, a body at lunar
    /// distance with slightly less than circular speed, one orbit's worth
    /// of steps.
    pub fn earth_moon() -> Self {
        Scenario {
            name: "earth-moon".to_string(),
            primary: Body::new(5.9722E24),
            position: rotate(DVec2::new(0.4055E9, 0.0), 30_f64.to_radians()),
            velocity: rotate(DVec2::new(0.970E3, 0.0), 120_f64.to_radians()),
            timestep: 500.0,
            steps: 5000,
        }
    }

    /// A circular orbit of the given radius, starting at angle `ta` from
    /// the +x axis with tangential speed sqrt(mu / r).
    pub fn circular(primary_mass: f64, radius: f64, ta: f64, steps: u64) -> Self {
        let primary = Body::new(primary_mass);
        let position = rotate(DVec2::new(radius, 0.0), ta);
        let speed = (primary.mu() / radius).sqrt();
        Scenario {
            name: "circular".to_string(),
            primary,
            position,
            velocity: speed * perpendicular(position / radius),
            timestep: 500.0,
            steps,
        }
    }

    pub fn propagator(&self) -> TwoBodyPropagator {
        TwoBodyPropagator::new(
            self.primary,
            DVec2::ZERO,
            PV::new(self.position, self.velocity),
            self.timestep,
        )
    }

    pub fn load(filename: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let s = std::fs::read_to_string(filename)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    pub fn save(&self, filename: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let s = serde_yaml::to_string(self)?;
        Ok(std::fs::write(filename, s)?)
    }
}
