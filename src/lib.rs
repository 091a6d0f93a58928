pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{ModelError, PlotError};

pub use simulation::states::{State, NVec2};
pub use simulation::params::Parameters;
pub use simulation::coefficients::Coefficients;
pub use simulation::motion::{Motion, TimeFunction};
pub use simulation::forces::{Acceleration, LinearizedDynamics};
pub use simulation::integrator::{integrate_to, rk4_integrator, verlet_integrator};
pub use simulation::sampling::SampleGrid;
pub use simulation::scenario::{CrossCheck, Scenario};

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, SamplingConfig, FigureConfig, ScenarioConfig};

pub use visualization::plot::{default_requests, plot, render, Figure, PlotColor, PlotRequest};
pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_analytic, bench_integrators};
