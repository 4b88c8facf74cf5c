use thiserror::Error;

pub type OrbitResult<T> = Result<T, OrbitError>;

/// Failure modes of a single propagation run. All of them are fatal to the
/// run in progress; the computation is deterministic, so the only recovery
/// is restarting with different initial conditions or a smaller timestep.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitError {
    /// Distance between the child and the primary reached zero mid-step.
    #[error("distance to primary reached zero; collision singularity")]
    Singularity,

    /// Attempted to normalize a zero-magnitude vector.
    #[error("zero-magnitude vector has no direction")]
    DegenerateOrbit,

    /// Element extraction requested before both a periapsis and an
    /// apoapsis sample were detected.
    #[error("periapsis/apoapsis pair not yet detected")]
    IncompleteApsisData,
}
