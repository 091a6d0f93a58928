//! Fixed-step time integrators for the two-coordinate system
//!
//! Provides a velocity–Verlet step and a classical RK4 step, both driven by an
//! [`Acceleration`] source, plus [`integrate_to`] which advances a [`State`]
//! to a target time with the integrator selected in the [`Engine`]

use super::engine::Engine;
use super::forces::Acceleration;
use super::states::{NVec2, State};
use crate::configuration::config::IntegratorConfig;
use crate::error::ModelError;

/// Advance the state by one step `dt` using velocity–Verlet
/// The force depends on velocity, so the closing kick evaluates it at the
/// predicted end-of-step velocity `v_n + dt * a_n` (second order overall)
pub fn verlet_integrator<A: Acceleration>(state: &mut State, forces: &A, dt: f64) {
    let half_dt = 0.5 * dt; // half step dt/2

    // a_n from (q_n, v_n) at time t_n
    let a_old = forces.acceleration(state.t, &state.q, &state.v);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    let v_half = state.v + half_dt * a_old;

    // Drift: q_n+1 = q_n + dt * v_n+1/2
    state.q += dt * v_half;

    // advance time: t_n+1 = t_n + dt
    state.t += dt;

    // Predict: v~_n+1 = v_n + dt * a_n
    let v_pred = state.v + dt * a_old;

    // a_n+1 from (q_n+1, v~_n+1) at time t_n+1
    let a_new = forces.acceleration(state.t, &state.q, &v_pred);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    state.v = v_half + half_dt * a_new;
}

/// Advance the state by one step `dt` using classical 4th-order Runge–Kutta
/// on the first-order system `q' = v`, `v' = a(t, q, v)`
pub fn rk4_integrator<A: Acceleration>(state: &mut State, forces: &A, dt: f64) {
    let t = state.t;
    let (q, v) = (state.q, state.v);
    let half_dt = 0.5 * dt;

    let k1_q = v;
    let k1_v = forces.acceleration(t, &q, &v);

    let k2_q = v + half_dt * k1_v;
    let k2_v = forces.acceleration(t + half_dt, &(q + half_dt * k1_q), &k2_q);

    let k3_q = v + half_dt * k2_v;
    let k3_v = forces.acceleration(t + half_dt, &(q + half_dt * k2_q), &k3_q);

    let k4_q = v + dt * k3_v;
    let k4_v = forces.acceleration(t + dt, &(q + dt * k3_q), &k4_q);

    state.q = q + (dt / 6.0) * (k1_q + 2.0 * k2_q + 2.0 * k3_q + k4_q);
    state.v = v + (dt / 6.0) * (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v);
    state.t = t + dt;
}

/// Advance `state` to `t_end` with fixed steps of `engine.h0`
/// The last step is shortened so the state lands exactly on `t_end`
pub fn integrate_to<A: Acceleration>(
    state: &mut State,
    forces: &A,
    engine: &Engine,
    t_end: f64,
) -> Result<(), ModelError> {
    let h0 = engine.h0;
    if !h0.is_finite() || h0 <= 0.0 {
        return Err(ModelError::InvalidStep(h0));
    }

    let step: fn(&mut State, &A, f64) = match engine.integrator {
        IntegratorConfig::Verlet => verlet_integrator::<A>,
        IntegratorConfig::Rk4 => rk4_integrator::<A>,
    };

    // stop once the remainder is below rounding noise of t_end
    let eps = 1e-12 * t_end.abs().max(1.0);
    while t_end - state.t > eps {
        let dt = h0.min(t_end - state.t);
        step(state, forces, dt);
    }
    // drop the leftover rounding noise in t
    state.t = t_end;
    Ok(())
}

/// Largest absolute deviation between two position/velocity pairs
pub fn max_deviation(state: &State, q: &NVec2, v: &NVec2) -> f64 {
    (state.q - q).amax().max((state.v - v).amax())
}
