pub mod states;
pub mod params;
pub mod coefficients;
pub mod motion;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod sampling;
pub mod scenario;
