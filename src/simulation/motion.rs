//! Closed-form motion of the two generalized coordinates
//!
//! `x` is the primary coordinate and `ξ` the secondary one. Each has a
//! position, velocity and acceleration function of time, all built from the
//! derived [`Coefficients`]. The constant `3` in `ξ` and `ξ̇` is the initial
//! velocity `ξ̇(0)`.

use std::fmt;

use crate::simulation::coefficients::Coefficients;

/// One of the six time-functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFunction {
    X,
    Xi,
    Vx,
    Vxi,
    Ax,
    Axi,
}

impl TimeFunction {
    pub const ALL: [TimeFunction; 6] = [
        TimeFunction::X,
        TimeFunction::Xi,
        TimeFunction::Vx,
        TimeFunction::Vxi,
        TimeFunction::Ax,
        TimeFunction::Axi,
    ];

    /// Legend label, primes for time derivatives
    /// Plotters draws no combining marks, so dot accents would be lost on `ξ`
    pub fn label(self) -> &'static str {
        match self {
            TimeFunction::X => "x(t)",
            TimeFunction::Xi => "ξ(t)",
            TimeFunction::Vx => "x'(t)",
            TimeFunction::Vxi => "ξ'(t)",
            TimeFunction::Ax => "x''(t)",
            TimeFunction::Axi => "ξ''(t)",
        }
    }
}

impl fmt::Display for TimeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time-functions bound to a set of coefficients
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    c: Coefficients,
}

impl Motion {
    pub fn new(c: Coefficients) -> Self {
        Self { c }
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.c
    }

    /// x(t) = (A1/A2²)·e^(A2·t) − (A1/A2)·t − A1/A2²
    pub fn x(&self, t: f64) -> f64 {
        let Coefficients { a1, a2, .. } = self.c;
        (a1 / a2.powi(2)) * (a2 * t).exp() - (a1 / a2) * t - a1 / a2.powi(2)
    }

    /// ξ(t) = (A1·A4/A2³)·e^(A2·t) + ½·(A3 − A1·A4/A2)·t² + (3 − A1·A4/A2²)·t − A1·A4/A2³
    pub fn xi(&self, t: f64) -> f64 {
        let Coefficients { a1, a2, a3, a4, .. } = self.c;
        ((a1 * a4) / a2.powi(3)) * (a2 * t).exp()
            + 0.5 * (a3 - (a1 * a4) / a2) * t.powi(2)
            + (3.0 - (a1 * a4) / a2.powi(2)) * t
            - (a1 * a4) / a2.powi(3)
    }

    /// ẋ(t) = (A1/A2)·e^(A2·t) − A1/A2
    pub fn vx(&self, t: f64) -> f64 {
        let Coefficients { a1, a2, .. } = self.c;
        (a1 / a2) * (a2 * t).exp() - a1 / a2
    }

    /// ξ̇(t) = (A1·A4/A2²)·e^(A2·t) + (A3 − A1·A4/A2)·t + (3 − A1·A4/A2²)
    pub fn vxi(&self, t: f64) -> f64 {
        let Coefficients { a1, a2, a3, a4, .. } = self.c;
        ((a1 * a4) / a2.powi(2)) * (a2 * t).exp()
            + (a3 - (a1 * a4) / a2) * t
            + (3.0 - (a1 * a4) / a2.powi(2))
    }

    /// ẍ(t) = A1·e^(A2·t)
    pub fn ax(&self, t: f64) -> f64 {
        let Coefficients { a1, a2, .. } = self.c;
        a1 * (a2 * t).exp()
    }

    /// ξ̈(t) = (A1·A4/A2)·e^(A2·t) + (A3 − A1·A4/A2)
    pub fn axi(&self, t: f64) -> f64 {
        let Coefficients { a1, a2, a3, a4, .. } = self.c;
        ((a1 * a4) / a2) * (a2 * t).exp() + (a3 - (a1 * a4) / a2)
    }

    pub fn eval(&self, f: TimeFunction, t: f64) -> f64 {
        match f {
            TimeFunction::X => self.x(t),
            TimeFunction::Xi => self.xi(t),
            TimeFunction::Vx => self.vx(t),
            TimeFunction::Vxi => self.vxi(t),
            TimeFunction::Ax => self.ax(t),
            TimeFunction::Axi => self.axi(t),
        }
    }

    /// Closure over a copy of the coefficients
    pub fn bind(&self, f: TimeFunction) -> impl Fn(f64) -> f64 {
        let motion = *self;
        move |t| motion.eval(f, t)
    }

    /// Positions `(x, ξ)` and velocities `(ẋ, ξ̇)` at `t`
    pub fn state_at(&self, t: f64) -> ([f64; 2], [f64; 2]) {
        ([self.x(t), self.xi(t)], [self.vx(t), self.vxi(t)])
    }
}
