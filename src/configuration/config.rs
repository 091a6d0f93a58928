//! Configuration types for loading scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator, step size and display options
//! - [`ParametersConfig`] – physical constants of the two-body system
//! - [`SamplingConfig`]   – the time grid used for plotting
//! - [`FigureConfig`]     – pixel size of the rendered figures
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section and every field may be omitted; missing values fall back to
//! the fixed scenario (`m1 = 1`, `m2 = 3`, `m3 = 2`, `b = 1e-3`,
//! `alpha = beta = π/6`, `g = 10`, 200 samples on `[0, 2]`).
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "verlet"
//!   h0: 0.001               # cross-check step size
//!   display: true           # open the viewer after plotting
//!
//! parameters:
//!   m1: 1.0
//!   m2: 3.0
//!   m3: 2.0
//!   b: 0.001
//!   alpha: 0.5235987755982988
//!   beta: 0.5235987755982988
//!   g: 10.0
//!
//! sampling:
//!   t0: 0.0
//!   tf: 2.0
//!   steps: 200
//!
//! figure:
//!   width: 640
//!   height: 480
//! ```

use std::f64::consts::PI;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Which integrator is used for the numerical cross-check
/// `integrator: "verlet"` or `integrator: "rk4"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "verlet")] // Velocity Verlet, two force evaluations per step
    Verlet,

    #[default]
    #[serde(rename = "rk4")] // Classical 4th-order Runge–Kutta, four force evaluations per step
    Rk4,
}

/// Engine-level options
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // integrator for the cross-check
    pub h0: f64, // fixed step size of the cross-check
    pub display: bool, // `true` - show the figures in a window after saving
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::Rk4,
            h0: 1e-3,
            display: true,
        }
    }
}

/// Physical constants of the scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub m1: f64,    // mass of the first body
    pub m2: f64,    // mass of the second body
    pub m3: f64,    // mass of the coupling body
    pub b: f64,     // damping
    pub alpha: f64, // first incline angle (radians)
    pub beta: f64,  // second incline angle (radians)
    pub g: f64,     // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            m1: 1.0,
            m2: 3.0,
            m3: 2.0,
            b: 1e-3,
            alpha: PI / 6.0,
            beta: PI / 6.0,
            g: 10.0,
        }
    }
}

/// Time grid for plotting
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SamplingConfig {
    pub t0: f64,      // start time
    pub tf: f64,      // end time, inclusive
    pub steps: usize, // number of samples
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            t0: 0.0,
            tf: 2.0,
            steps: 200,
        }
    }
}

/// Pixel size of each rendered figure
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // integrator and display options
    pub parameters: ParametersConfig, // physical constants
    pub sampling: SamplingConfig,     // plotting grid
    pub figure: FigureConfig,         // figure size
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string
    /// An empty document yields the default scenario
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(s).context("failed to parse scenario YAML")
    }

    /// Load a scenario from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("cannot open scenario {path:?}"))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).with_context(|| format!("failed to parse scenario {path:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let cfg = ScenarioConfig::from_yaml_str("").unwrap();
        assert_eq!(cfg.parameters.m2, 3.0);
        assert_eq!(cfg.sampling.steps, 200);
        assert_eq!(cfg.engine.integrator, IntegratorConfig::Rk4);
        assert!(cfg.engine.display);
    }

    #[test]
    fn partial_yaml_overrides_named_fields() {
        let yaml = "parameters:\n  b: 0.01\nengine:\n  integrator: \"verlet\"\n  display: false\n";
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(cfg.parameters.b, 0.01);
        assert_eq!(cfg.parameters.m1, 1.0);
        assert_eq!(cfg.engine.integrator, IntegratorConfig::Verlet);
        assert!(!cfg.engine.display);
        assert_eq!(cfg.engine.h0, 1e-3);
        assert_eq!(cfg.figure.width, 640);
    }

    #[test]
    fn unknown_integrator_fails() {
        let yaml = "engine:\n  integrator: \"euler\"\n";
        assert!(ScenarioConfig::from_yaml_str(yaml).is_err());
    }
}
