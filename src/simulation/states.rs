//! State of the two-coordinate system for numerical integration
//!
//! `q = (x, ξ)` are the generalized coordinates and `v = (ẋ, ξ̇)` their rates.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Velocity of `ξ` at `t = 0`, the literal `3` of the closed forms
pub const XI_DOT_0: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub q: NVec2, // positions (x, ξ)
    pub v: NVec2, // velocities (ẋ, ξ̇)
    pub t: f64, // time
}

impl State {
    /// Rest at the origin with `ξ̇(0) = 3`, the state the closed forms start from
    pub fn initial() -> Self {
        Self {
            q: NVec2::zeros(),
            v: NVec2::new(0.0, XI_DOT_0),
            t: 0.0,
        }
    }
}
