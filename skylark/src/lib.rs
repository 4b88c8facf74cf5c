pub mod apsis;
pub mod body;
pub mod elements;
pub mod error;
pub mod math;
pub mod prelude;
pub mod propagator;
pub mod pv;
pub mod scenario;
