//! High-level runtime engine settings
//!
//! Selects the integrator and step size used to cross-check the closed forms,
//! and whether the rendered figures are shown in a window

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // verlet or rk4
    pub h0: f64, // fixed step size
    pub display: bool, // open the viewer after plotting
}
