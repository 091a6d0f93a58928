//! Uniform time grid for plotting
//!
//! The grid is rebuilt on every call to [`SampleGrid::points`]; nothing is
//! cached between plots.

use crate::simulation::motion::{Motion, TimeFunction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    pub t0: f64, // first sample
    pub tf: f64, // last sample, inclusive
    pub steps: usize, // number of samples
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            t0: 0.0,
            tf: 2.0,
            steps: 200,
        }
    }
}

impl SampleGrid {
    /// `steps` evenly spaced values over the closed interval `[t0, tf]`
    pub fn points(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![self.t0],
            n => {
                let step = (self.tf - self.t0) / (n - 1) as f64;
                let mut ts: Vec<f64> = (0..n).map(|i| self.t0 + i as f64 * step).collect();
                // pin the endpoint, t0 + (n-1)·step can miss tf by an ulp
                ts[n - 1] = self.tf;
                ts
            }
        }
    }

    /// Evaluate one time-function at every grid point
    pub fn evaluate(&self, motion: &Motion, f: TimeFunction) -> Vec<f64> {
        self.points().into_iter().map(|t| motion.eval(f, t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::coefficients::Coefficients;
    use crate::simulation::params::Parameters;
    use approx::assert_relative_eq;

    #[test]
    fn default_grid_shape() {
        let ts = SampleGrid::default().points();

        assert_eq!(ts.len(), 200);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[199], 2.0);

        let step = 2.0 / 199.0;
        for w in ts.windows(2) {
            assert_relative_eq!(w[1] - w[0], step, epsilon = 1e-12);
        }
    }

    #[test]
    fn degenerate_grids() {
        assert!(SampleGrid { steps: 0, ..Default::default() }.points().is_empty());
        assert_eq!(SampleGrid { steps: 1, ..Default::default() }.points(), vec![0.0]);
    }

    #[test]
    fn evaluate_follows_the_grid() {
        let motion = Motion::new(Coefficients::new(&Parameters::default()).unwrap());
        let grid = SampleGrid::default();

        let ys = grid.evaluate(&motion, TimeFunction::Ax);
        assert_eq!(ys.len(), 200);
        assert_eq!(ys[0], motion.ax(0.0));
        assert_eq!(ys[199], motion.ax(2.0));
    }
}
