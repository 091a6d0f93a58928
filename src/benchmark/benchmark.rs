use std::time::Instant;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::engine::Engine;
use crate::simulation::motion::TimeFunction;
use crate::simulation::sampling::SampleGrid;
use crate::simulation::scenario::Scenario;

/// Time evaluating all six closed forms over grids of growing size
/// Paste output directly into a spreadsheet to graph
pub fn bench_analytic(scenario: &Scenario) {
    println!("steps,ms");

    for steps in [200, 2_000, 20_000, 200_000] {
        let grid = SampleGrid { steps, ..scenario.grid };

        // Warm up
        let _ = grid.evaluate(&scenario.motion, TimeFunction::X);

        let t0 = Instant::now();
        let mut checksum = 0.0;
        for f in TimeFunction::ALL {
            checksum += grid.evaluate(&scenario.motion, f).iter().sum::<f64>();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{steps},{ms:.6}  # checksum {checksum:.3e}");
    }
}

/// Time Verlet and RK4 to the end of the grid for shrinking step sizes and
/// report the largest deviation from the closed forms
pub fn bench_integrators(scenario: &Scenario) {
    println!("h0,verlet_ms,verlet_err,rk4_ms,rk4_err");

    let t_end = scenario.grid.tf;
    for h0 in [1e-1, 1e-2, 1e-3, 1e-4] {
        let mut row = format!("{h0:e}");

        for integrator in [IntegratorConfig::Verlet, IntegratorConfig::Rk4] {
            let run = Scenario {
                engine: Engine { integrator, h0, ..scenario.engine.clone() },
                ..scenario.clone()
            };

            let t0 = Instant::now();
            let check = match run.cross_check(t_end) {
                Ok(check) => check,
                Err(e) => {
                    println!("{row},failed: {e}");
                    return;
                }
            };
            let ms = t0.elapsed().as_secs_f64() * 1000.0;

            row.push_str(&format!(",{ms:.6},{:.3e}", check.max_deviation));
        }

        println!("{row}");
    }
}
