use crate::apsis::ApsisDetector;
use crate::body::Body;
use crate::elements::OrbitalElements;
use crate::error::{OrbitError, OrbitResult};
use crate::math::normalize;
use crate::pv::PV;
use glam::f64::DVec2;

/// Advances `pv` by one timestep under the gravity of `primary` fixed at
/// `center`, and returns the post-step distance to the primary.
///
/// The position is advanced first, with the pre-step velocity; the
/// acceleration is then evaluated at the new position. Gravity is purely
/// attractive, with no perturbation or third-body terms, so the result is
/// deterministic given the initial state, the timestep, and the step
/// count.
pub fn gravity_step(pv: &mut PV, primary: &Body, center: DVec2, dt: f64) -> OrbitResult<f64> {
    pv.pos += pv.vel * dt;

    let displacement = pv.pos - center;
    let distance = displacement.length();
    if distance == 0.0 {
        return Err(OrbitError::Singularity);
    }

    let accel = primary.mu() / distance.powi(2);
    pv.vel -= accel * normalize(displacement)? * dt;

    Ok(distance)
}

/// Fixed-timestep propagator for a single child body orbiting a fixed
/// primary. Watches the distance history for apsides as it steps.
#[derive(Debug, Clone, Copy)]
pub struct TwoBodyPropagator {
    pub primary: Body,
    pub center: DVec2,
    pub dt: f64,
    pub initial: PV,
    pub pv: PV,
    pub steps_taken: u64,
    detector: ApsisDetector,
}

impl TwoBodyPropagator {
    pub fn new(primary: Body, center: DVec2, initial: impl Into<PV>, dt: f64) -> Self {
        let initial = initial.into();
        TwoBodyPropagator {
            primary,
            center,
            dt,
            initial,
            pv: initial,
            steps_taken: 0,
            detector: ApsisDetector::new(),
        }
    }

    /// Advances one step and feeds the new distance sample to the apsis
    /// detector. Apsis samples are recorded relative to the primary.
    pub fn step(&mut self) -> OrbitResult<()> {
        let distance = gravity_step(&mut self.pv, &self.primary, self.center, self.dt)?;
        self.detector.observe(distance, self.pv.pos - self.center);
        self.steps_taken += 1;
        Ok(())
    }

    pub fn run(&mut self, steps: u64) -> OrbitResult<()> {
        self.run_with(steps, |_, _| ())
    }

    /// Runs for `steps` steps, handing each post-step sample to an
    /// observer. The sample sequence is finite and forward-only; rerunning
    /// requires a fresh propagator.
    pub fn run_with(
        &mut self,
        steps: u64,
        mut observer: impl FnMut(u64, PV),
    ) -> OrbitResult<()> {
        for _ in 0..steps {
            self.step()?;
            observer(self.steps_taken, self.pv);
        }
        Ok(())
    }

    pub fn periapsis(&self) -> Option<DVec2> {
        self.detector.periapsis()
    }

    pub fn apoapsis(&self) -> Option<DVec2> {
        self.detector.apoapsis()
    }

    /// Extracts orbital elements from the detected apsis pair and the
    /// initial state. Precondition: both a periapsis and an apoapsis have
    /// been detected; partial data is an error, never zero-valued
    /// elements.
    pub fn elements(&self) -> OrbitResult<OrbitalElements> {
        match (self.detector.periapsis(), self.detector.apoapsis()) {
            (Some(peri), Some(apo)) => {
                let initial = PV::new(self.initial.pos - self.center, self.initial.vel);
                Ok(OrbitalElements::from_apsides(peri, apo, initial))
            }
            _ => Err(OrbitError::IncompleteApsisData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EARTH: Body = Body::new(5.9722E24);

    #[test]
    fn single_step_matches_hand_calculation() {
        let mut pv = PV::new((1.0E8, 0.0), (0.0, 1.0E3));
        let d = gravity_step(&mut pv, &EARTH, DVec2::ZERO, 10.0).unwrap();

        // position moves with the pre-step velocity only
        assert_eq!(pv.pos, DVec2::new(1.0E8, 1.0E4));
        assert_relative_eq!(d, pv.pos.length());

        // acceleration evaluated at the *new* position, pointed inward
        let a = EARTH.mu() / d.powi(2);
        let n = pv.pos / d;
        assert_relative_eq!(pv.vel.x, -a * n.x * 10.0, max_relative = 1E-12);
        assert_relative_eq!(pv.vel.y, 1.0E3 - a * n.y * 10.0, max_relative = 1E-12);
    }

    #[test]
    fn step_at_primary_center_is_singular() {
        let mut pv = PV::zero();
        let res = gravity_step(&mut pv, &EARTH, DVec2::ZERO, 1.0);
        assert_eq!(res, Err(OrbitError::Singularity));
    }

    #[test]
    fn offset_center_matches_origin_run() {
        let offset = DVec2::new(3.0E7, -5.0E7);
        let mut a = TwoBodyPropagator::new(EARTH, DVec2::ZERO, ((4.0E8, 0.0), (0.0, 900.0)), 500.0);
        let mut b = TwoBodyPropagator::new(
            EARTH,
            offset,
            (offset + DVec2::new(4.0E8, 0.0), DVec2::new(0.0, 900.0)),
            500.0,
        );
        a.run(200).unwrap();
        b.run(200).unwrap();
        assert_relative_eq!(a.pv.pos.x, (b.pv.pos - offset).x, max_relative = 1E-6);
        assert_relative_eq!(a.pv.pos.y, (b.pv.pos - offset).y, max_relative = 1E-6);
        assert_relative_eq!(a.pv.vel.x, b.pv.vel.x, max_relative = 1E-6);
        assert_relative_eq!(a.pv.vel.y, b.pv.vel.y, max_relative = 1E-6);
    }

    #[test]
    fn elements_without_apsides_is_an_error() {
        let mut prop =
            TwoBodyPropagator::new(EARTH, DVec2::ZERO, ((4.055E8, 0.0), (0.0, 970.0)), 500.0);
        assert_eq!(prop.elements().unwrap_err(), OrbitError::IncompleteApsisData);

        // a handful of steps cannot produce an apsis pair either
        prop.run(10).unwrap();
        assert_eq!(prop.elements().unwrap_err(), OrbitError::IncompleteApsisData);
    }

    #[test]
    fn observer_sees_every_sample() {
        let mut prop =
            TwoBodyPropagator::new(EARTH, DVec2::ZERO, ((4.055E8, 0.0), (0.0, 970.0)), 500.0);
        let mut count = 0;
        let mut last = 0;
        prop.run_with(50, |i, pv| {
            count += 1;
            last = i;
            assert!(pv.filter_numerr().is_some());
        })
        .unwrap();
        assert_eq!(count, 50);
        assert_eq!(last, 50);
        assert_eq!(prop.steps_taken, 50);
    }
}
