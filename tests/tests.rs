use std::f64::consts::PI;
use std::path::PathBuf;

use approx::assert_relative_eq;

use wedgesim::{Coefficients, Motion, Parameters, SampleGrid, Scenario, ScenarioConfig, State};
use wedgesim::{IntegratorConfig, LinearizedDynamics, ModelError, NVec2};
use wedgesim::{default_requests, integrate_to, plot, render, PlotRequest, TimeFunction};
use wedgesim::simulation::engine::Engine;

/// Parameters of the reference scenario, spelled out
pub fn reference_params() -> Parameters {
    Parameters {
        m1: 1.0,
        m2: 3.0,
        m3: 2.0,
        b: 1e-3,
        alpha: PI / 6.0,
        beta: PI / 6.0,
        g: 10.0,
    }
}

pub fn reference_motion() -> Motion {
    Motion::new(Coefficients::new(&reference_params()).unwrap())
}

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

// ==================================================================================
// Model tests
// ==================================================================================

#[test]
fn reference_coefficients() {
    let c = Coefficients::new(&reference_params()).unwrap();

    // D = 1·(1/2)² + 3 + 8
    assert_relative_eq!(c.d, 11.25, max_relative = 1e-12);
    // A1 = 10·(8·½ − 1·cos(π/6)·cos(π/6)) / D = 10·3.25 / 11.25
    assert_relative_eq!(c.a1, 32.5 / 11.25, max_relative = 1e-9);
    assert_relative_eq!(c.a2, -1e-3 / 11.25, max_relative = 1e-9);
    assert_relative_eq!(c.a3, 6.158402871356008, max_relative = 1e-9);
    assert_relative_eq!(c.a4, 1e-3 * (PI / 6.0).cos() / 11.25, max_relative = 1e-9);
}

#[test]
fn closed_forms_match_integrated_ode_at_one_second() {
    let motion = reference_motion();
    let dynamics = LinearizedDynamics::from(motion.coefficients());

    for integrator in [IntegratorConfig::Rk4, IntegratorConfig::Verlet] {
        let engine = Engine { integrator, h0: 1e-3, display: false };
        let mut state = State::initial();
        integrate_to(&mut state, &dynamics, &engine, 1.0).unwrap();

        assert_relative_eq!(motion.x(1.0), state.q.x, epsilon = 1e-3);
        assert_relative_eq!(motion.xi(1.0), state.q.y, epsilon = 1e-3);
        assert_relative_eq!(motion.vx(1.0), state.v.x, epsilon = 1e-3);
        assert_relative_eq!(motion.vxi(1.0), state.v.y, epsilon = 1e-3);

        let a = wedgesim::Acceleration::acceleration(&dynamics, state.t, &state.q, &state.v);
        assert_relative_eq!(motion.ax(1.0), a.x, epsilon = 1e-3);
        assert_relative_eq!(motion.axi(1.0), a.y, epsilon = 1e-3);
    }
}

#[test]
fn closed_forms_start_from_initial_state() {
    let motion = reference_motion();
    let (q, v) = motion.state_at(0.0);
    let init = State::initial();

    assert_eq!(NVec2::from(q), init.q);
    assert_relative_eq!(v[0], init.v.x, epsilon = 1e-9);
    assert_relative_eq!(v[1], init.v.y, epsilon = 1e-9);
}

#[test]
fn second_derivatives_match_numeric_derivatives() {
    let motion = reference_motion();
    let h = 1e-3;
    for t in [0.1, 0.7, 1.3, 1.9] {
        let d_vx = (motion.vx(t + h) - motion.vx(t - h)) / (2.0 * h);
        let d_vxi = (motion.vxi(t + h) - motion.vxi(t - h)) / (2.0 * h);
        assert_relative_eq!(motion.ax(t), d_vx, epsilon = 1e-4);
        assert_relative_eq!(motion.axi(t), d_vxi, epsilon = 1e-4);
    }
}

#[test]
fn heavy_damping_scenario_cross_checks() {
    let cfg = ScenarioConfig::from_yaml_file(&scenario_path("heavy_damping.yaml")).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.engine.integrator, IntegratorConfig::Verlet);
    assert_eq!(scenario.grid.steps, 400);

    let check = scenario.cross_check(scenario.grid.tf).unwrap();
    assert_eq!(check.integrated.t, 4.0);
    assert!(check.max_deviation < 1e-3, "deviation {}", check.max_deviation);
}

#[test]
fn shipped_default_scenario_equals_builtin() {
    let cfg = ScenarioConfig::from_yaml_file(&scenario_path("default.yaml")).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.parameters, Parameters::default());
    assert_eq!(scenario.grid, SampleGrid::default());
}

#[test]
fn zero_damping_is_a_domain_error() {
    let p = Parameters { b: 0.0, ..reference_params() };
    assert_eq!(Coefficients::new(&p), Err(ModelError::ZeroDamping { b: 0.0 }));
}

// ==================================================================================
// Plot tests
// ==================================================================================

#[test]
fn each_default_plot_writes_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let motion = reference_motion();
    let grid = SampleGrid::default();

    let requests = default_requests(dir.path());
    let names: Vec<_> = requests
        .iter()
        .map(|r| r.save_to.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["x_and_xi_from_t.png", "vx_and_vxi_from_t.png", "ax_and_axi_from_t.png"]);

    for request in &requests {
        let figure = plot(&motion, &grid, request, (320, 240)).unwrap();
        assert_eq!(figure.rgb.len(), 320 * 240 * 3);

        let meta = std::fs::metadata(&request.save_to).unwrap();
        assert!(meta.len() > 0);
    }
}

#[test]
fn mismatched_request_renders_shortest() {
    let dir = tempfile::tempdir().unwrap();
    let request = PlotRequest::new(
        &[TimeFunction::X, TimeFunction::Xi, TimeFunction::Vx],
        &["b", "r"],
        &["x(t)"],
        dir.path().join("short.png"),
    )
    .unwrap();

    let figure = render(&reference_motion(), &SampleGrid::default(), &request, (200, 150)).unwrap();
    assert_eq!(request.len(), 1);
    assert_eq!(figure.title, "x(t)");
    // render alone does not touch the file system
    assert!(!request.save_to.exists());
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let request = PlotRequest::new(
        &[TimeFunction::Ax],
        &["b"],
        &["x''(t)"],
        dir.path().join("missing").join("ax.png"),
    )
    .unwrap();

    let result = plot(&reference_motion(), &SampleGrid::default(), &request, (200, 150));
    assert!(matches!(result, Err(wedgesim::PlotError::Io { .. })));
}
