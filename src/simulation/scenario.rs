//! Build a fully-initialized scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - engine settings (`Engine`)
//! - physical constants (`Parameters`)
//! - derived coefficients (`Coefficients`), computed exactly once
//! - the closed-form motion (`Motion`) and the matching ODE (`LinearizedDynamics`)
//! - the plotting grid (`SampleGrid`) and figure size

use log::debug;

use crate::configuration::config::ScenarioConfig;
use crate::error::ModelError;
use crate::simulation::coefficients::Coefficients;
use crate::simulation::engine::Engine;
use crate::simulation::forces::LinearizedDynamics;
use crate::simulation::integrator::{integrate_to, max_deviation};
use crate::simulation::motion::Motion;
use crate::simulation::params::Parameters;
use crate::simulation::sampling::SampleGrid;
use crate::simulation::states::{NVec2, State};

/// Immutable runtime bundle shared by every plot of a run
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub coefficients: Coefficients,
    pub motion: Motion,
    pub dynamics: LinearizedDynamics,
    pub grid: SampleGrid,
    pub figure_size: (u32, u32),
}

/// Outcome of integrating the ODE alongside the closed forms
#[derive(Debug, Clone)]
pub struct CrossCheck {
    pub integrated: State,
    pub analytic_q: NVec2,
    pub analytic_v: NVec2,
    pub max_deviation: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ModelError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            m1: p_cfg.m1,
            m2: p_cfg.m2,
            m3: p_cfg.m3,
            b: p_cfg.b,
            alpha: p_cfg.alpha,
            beta: p_cfg.beta,
            g: p_cfg.g,
        };

        // Coefficients: the only place they are derived
        let coefficients = Coefficients::new(&parameters)?;

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            h0: e_cfg.h0,
            display: e_cfg.display,
        };

        let s_cfg = cfg.sampling;
        let grid = SampleGrid {
            t0: s_cfg.t0,
            tf: s_cfg.tf,
            steps: s_cfg.steps,
        };

        debug!("scenario: {parameters:?}, grid of {} points on [{}, {}]", grid.steps, grid.t0, grid.tf);

        Ok(Self {
            engine,
            parameters,
            coefficients,
            motion: Motion::new(coefficients),
            dynamics: LinearizedDynamics::from(&coefficients),
            grid,
            figure_size: (cfg.figure.width, cfg.figure.height),
        })
    }

    /// Integrate the ODE from the initial state to `t_end` and compare with the
    /// closed forms
    pub fn cross_check(&self, t_end: f64) -> Result<CrossCheck, ModelError> {
        let mut integrated = State::initial();
        integrate_to(&mut integrated, &self.dynamics, &self.engine, t_end)?;

        let (q, v) = self.motion.state_at(t_end);
        let (analytic_q, analytic_v) = (NVec2::from(q), NVec2::from(v));
        let max_deviation = max_deviation(&integrated, &analytic_q, &analytic_v);

        Ok(CrossCheck {
            integrated,
            analytic_q,
            analytic_v,
            max_deviation,
        })
    }
}
