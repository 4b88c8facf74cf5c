use crate::error::{OrbitError, OrbitResult};
use crate::math::{normalize, perpendicular};
use crate::pv::PV;
use glam::f64::DVec2;
use serde::{Deserialize, Serialize};

/// Classical elements of the osculating orbit, recovered from a detected
/// periapsis/apoapsis pair. Computed once per run; read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis, meters.
    pub semi_major_axis: f64,
    /// 0 is circular, (0, 1) elliptical.
    pub eccentricity: f64,
    /// Angle from +x to the periapsis direction, radians.
    pub arg_periapsis: f64,
    /// Specific angular momentum, m^2/s. Computed as |r0| * |v0|, which
    /// is exact only when the initial velocity is purely tangential; for
    /// non-tangential initial conditions this over-reports the true
    /// r x v magnitude.
    pub angular_momentum: f64,
}

impl OrbitalElements {
    /// Builds elements from apsis positions measured from the primary,
    /// plus the initial state for the angular momentum term.
    pub fn from_apsides(periapsis: DVec2, apoapsis: DVec2, initial: PV) -> Self {
        let rp = periapsis.length();
        let ra = apoapsis.length();
        let semi_major_axis = (ra + rp) / 2.0;
        OrbitalElements {
            semi_major_axis,
            eccentricity: 1.0 - rp / semi_major_axis,
            arg_periapsis: f64::atan2(periapsis.y, periapsis.x),
            angular_momentum: initial.radius() * initial.speed(),
        }
    }

    pub fn periapsis_r(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_r(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Rebuilds the velocity at `initial_pos` from the elements, for
    /// cross-checking against the velocity the run actually started with.
    ///
    /// The displacement angle used here is the angle swept from periapsis
    /// to the initial position, not the textbook time-parameterized mean
    /// anomaly. Like the angular momentum term, the decomposition is only
    /// valid when the initial velocity was tangential.
    pub fn reconstruct_velocity(&self, mu: f64, initial_pos: DVec2) -> OrbitResult<DVec2> {
        if self.angular_momentum == 0.0 {
            return Err(OrbitError::DegenerateOrbit);
        }
        let true_anomaly = f64::atan2(initial_pos.y, initial_pos.x);
        let sweep = true_anomaly - self.arg_periapsis;

        let radial_speed = (mu / self.angular_momentum) * self.eccentricity * sweep.sin();
        let normal_speed = self.angular_momentum / initial_pos.length();

        let radial_direction = normalize(initial_pos)?;
        let normal_direction = perpendicular(radial_direction);

        Ok(radial_speed * radial_direction + normal_speed * normal_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;
    use approx::assert_relative_eq;
    use more_asserts::assert_ge;

    #[test]
    fn synthetic_apsides() {
        // no integrator involved; apsis positions chosen by hand
        let peri = DVec2::new(-1.0E8, 0.0);
        let apo = DVec2::new(3.0E8, 0.0);
        let initial = PV::new((-1.0E8, 0.0), (0.0, -2.0E3));

        let elements = OrbitalElements::from_apsides(peri, apo, initial);

        assert_eq!(elements.semi_major_axis, 2.0E8);
        assert_eq!(elements.eccentricity, 0.5);
        assert_relative_eq!(elements.arg_periapsis, PI);
        assert_eq!(elements.angular_momentum, 2.0E11);

        assert_relative_eq!(elements.periapsis_r(), 1.0E8);
        assert_relative_eq!(elements.apoapsis_r(), 3.0E8);
        assert_ge!(elements.apoapsis_r(), elements.periapsis_r());
    }

    #[test]
    fn reconstruction_requires_nonzero_momentum() {
        let elements = OrbitalElements {
            semi_major_axis: 2.0E8,
            eccentricity: 0.5,
            arg_periapsis: 0.0,
            angular_momentum: 0.0,
        };
        assert_eq!(
            elements.reconstruct_velocity(3.98E14, DVec2::new(1.0E8, 0.0)),
            Err(OrbitError::DegenerateOrbit)
        );
    }

    #[test]
    fn reconstruction_requires_nonzero_radius() {
        let elements = OrbitalElements {
            semi_major_axis: 2.0E8,
            eccentricity: 0.5,
            arg_periapsis: 0.0,
            angular_momentum: 2.0E11,
        };
        assert_eq!(
            elements.reconstruct_velocity(3.98E14, DVec2::ZERO),
            Err(OrbitError::DegenerateOrbit)
        );
    }

    #[test]
    fn circular_reconstruction_is_purely_tangential() {
        // e = 0 kills the radial term regardless of the sweep angle
        let r = 4.0E8;
        let v = 900.0;
        let elements = OrbitalElements {
            semi_major_axis: r,
            eccentricity: 0.0,
            arg_periapsis: 0.3,
            angular_momentum: r * v,
        };
        let vel = elements
            .reconstruct_velocity(3.98E14, DVec2::new(r, 0.0))
            .unwrap();
        assert_relative_eq!(vel.x, 0.0);
        assert_relative_eq!(vel.y, v, max_relative = 1E-12);
    }
}
