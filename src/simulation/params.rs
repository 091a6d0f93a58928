//! Physical constants of the two-body system
//!
//! `Parameters` holds:
//! - the three mass-like parameters `m1`, `m2`, `m3`,
//! - the damping coefficient `b`,
//! - the incline angles `alpha` and `beta` (radians),
//! - the gravitational constant `g`

use std::f64::consts::PI;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub m1: f64, // mass of the first body
    pub m2: f64, // mass of the second body
    pub m3: f64, // mass of the coupling body
    pub b: f64, // damping
    pub alpha: f64, // first incline angle
    pub beta: f64, // second incline angle
    pub g: f64, // gravitational constant
}

impl Default for Parameters {
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

impl Parameters {
    /// Reject NaN and infinite constants
    pub fn validate(&self) -> Result<(), ModelError> {
        let named = [
            ("m1", self.m1),
            ("m2", self.m2),
            ("m3", self.m3),
            ("b", self.b),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("g", self.g),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteConstant { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_angles_are_equal() {
        let p = Parameters::default();
        assert_eq!(p.alpha, p.beta);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn nan_constant_is_rejected() {
        let p = Parameters { m3: f64::NAN, ..Default::default() };
        match p.validate() {
            Err(ModelError::NonFiniteConstant { name, .. }) => assert_eq!(name, "m3"),
            other => panic!("expected NonFiniteConstant, got {other:?}"),
        }
    }
}
