//! Acceleration sources for the two-coordinate system
//!
//! The linearized model couples the coordinates only through `ẋ`:
//! `ẍ = A1 + A2·ẋ` and `ξ̈ = A3 + A4·ẋ`.

use crate::simulation::coefficients::Coefficients;
use crate::simulation::states::NVec2;

/// Trait for acceleration sources
/// Returns `(ẍ, ξ̈)` for positions `q` and velocities `v` at time `t`
pub trait Acceleration {
    fn acceleration(&self, t: f64, q: &NVec2, v: &NVec2) -> NVec2;
}

/// Linear damped dynamics described by the derived coefficients
#[derive(Debug, Clone, Copy)]
pub struct LinearizedDynamics {
    pub a1: f64, // constant drive on x
    pub a2: f64, // damping of x
    pub a3: f64, // constant drive on ξ
    pub a4: f64, // coupling of ẋ into ξ̈
}

impl From<&Coefficients> for LinearizedDynamics {
    fn from(c: &Coefficients) -> Self {
        Self {
            a1: c.a1,
            a2: c.a2,
            a3: c.a3,
            a4: c.a4,
        }
    }
}

impl Acceleration for LinearizedDynamics {
    fn acceleration(&self, _t: f64, _q: &NVec2, v: &NVec2) -> NVec2 {
        let vx = v.x;
        NVec2::new(self.a1 + self.a2 * vx, self.a3 + self.a4 * vx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::params::Parameters;

    #[test]
    fn acceleration_at_rest_is_the_drive() {
        let c = Coefficients::new(&Parameters::default()).unwrap();
        let dynamics = LinearizedDynamics::from(&c);

        let a = dynamics.acceleration(0.0, &NVec2::zeros(), &NVec2::new(0.0, 3.0));
        assert_eq!(a, NVec2::new(c.a1, c.a3));
    }

    #[test]
    fn damping_opposes_motion_of_x() {
        let c = Coefficients::new(&Parameters::default()).unwrap();
        let dynamics = LinearizedDynamics::from(&c);

        let slow = dynamics.acceleration(0.0, &NVec2::zeros(), &NVec2::new(1.0, 0.0));
        let fast = dynamics.acceleration(0.0, &NVec2::zeros(), &NVec2::new(10.0, 0.0));
        assert!(fast.x < slow.x);
    }
}
