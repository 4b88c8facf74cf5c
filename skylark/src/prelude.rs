pub use crate::apsis::ApsisDetector;
pub use crate::body::{Body, GRAVITATIONAL_CONSTANT};
pub use crate::elements::OrbitalElements;
pub use crate::error::{OrbitError, OrbitResult};
pub use crate::math::{cross2d, normalize, perpendicular, rotate, DVec2, PI};
pub use crate::propagator::{gravity_step, TwoBodyPropagator};
pub use crate::pv::{write_csv, PV};
pub use crate::scenario::Scenario;
