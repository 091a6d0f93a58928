//! Derived coefficients of the linearized dynamics
//!
//! With `D = m1·sin(β)² + m2 + 4·m3`:
//!
//! ```text
//! A1 = g·[(m1+m2+2·m3)·sin(α) − m1·sin(α+β)·cos(β)] / D
//! A2 = −b / D
//! A3 = g·[(m1+m2+4·m3)·sin(α+β) − (m1+m2+2·m3)·sin(α)·cos(β)] / D
//! A4 = b·cos(β) / D
//! ```
//!
//! The equations of motion reduce to `ẍ = A1 + A2·ẋ` and `ξ̈ = A3 + A4·ẋ`.

use log::debug;

use crate::error::ModelError;
use crate::simulation::params::Parameters;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub d: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
}

impl Coefficients {
    /// Compute the coefficients once from the physical constants
    ///
    /// Fails when `D` is zero or not finite, or when `A2` is zero, since every
    /// closed-form solution divides by `A2`.
    pub fn new(p: &Parameters) -> Result<Self, ModelError> {
        p.validate()?;

        let (sin_a, sin_b, cos_b) = (p.alpha.sin(), p.beta.sin(), p.beta.cos());
        let sin_ab = (p.alpha + p.beta).sin();

        let d = p.m1 * sin_b.powi(2) + p.m2 + 4.0 * p.m3;
        if d == 0.0 || !d.is_finite() {
            return Err(ModelError::DegenerateDenominator(d));
        }

        let a1 = p.g * ((p.m1 + p.m2 + 2.0 * p.m3) * sin_a - p.m1 * sin_ab * cos_b) / d;
        let a2 = -p.b / d;
        let a3 = p.g * ((p.m1 + p.m2 + 4.0 * p.m3) * sin_ab - (p.m1 + p.m2 + 2.0 * p.m3) * sin_a * cos_b) / d;
        let a4 = p.b * cos_b / d;

        if a2 == 0.0 {
            return Err(ModelError::ZeroDamping { b: p.b });
        }

        debug!("coefficients: D = {d}, A1 = {a1}, A2 = {a2}, A3 = {a3}, A4 = {a4}");

        Ok(Self { d, a1, a2, a3, a4 })
    }
}
