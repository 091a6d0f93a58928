use wedgesim::{ScenarioConfig, Scenario};
use wedgesim::{default_requests, plot, run_viewer};
use wedgesim::{bench_analytic, bench_integrators};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario YAML. Without it the built-in scenario is used.
    #[arg(short('f'), long)]
    file: Option<PathBuf>,

    /// Directory the figures are written to.
    #[arg(short('o'), long, default_value = ".")]
    out_dir: PathBuf,

    /// Do not open the viewer after saving the figures.
    #[arg(long)]
    no_display: bool,

    /// Integrate the equations of motion and compare with the closed forms.
    #[arg(long)]
    check: bool,

    /// Run the benchmarks and exit.
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let cfg = match &args.file {
        Some(path) => ScenarioConfig::from_yaml_file(path)?,
        None => ScenarioConfig::default(),
    };
    Scenario::build_scenario(cfg).context("invalid scenario")
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;

    if args.bench {
        bench_analytic(&scenario);
        bench_integrators(&scenario);
        return Ok(());
    }

    if args.out_dir.exists() {
        if !args.out_dir.is_dir() {
            bail!("{:?} is not a directory", args.out_dir);
        }
    } else {
        std::fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("cannot create {:?}", args.out_dir))?;
    }

    let mut figures = Vec::new();
    for request in default_requests(&args.out_dir) {
        let figure = plot(&scenario.motion, &scenario.grid, &request, scenario.figure_size)
            .with_context(|| format!("failed to plot {:?}", request.save_to))?;
        figures.push(figure);
    }

    if args.check {
        let check = scenario.cross_check(scenario.grid.tf)?;
        info!(
            "{:?} with h0 = {} at t = {}: max deviation from closed form {:.3e}",
            scenario.engine.integrator, scenario.engine.h0, check.integrated.t, check.max_deviation
        );
    }

    if scenario.engine.display && !args.no_display {
        run_viewer(figures);
    }

    Ok(())
}
