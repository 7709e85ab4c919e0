use nalgebra::Vector2;

use crate::dynamics;
use crate::dynamics::state::State;
use crate::launch::SimulationParameters;

// ---------------------------------------------------------------------------
// Explicit Euler step, fixed dt
// ---------------------------------------------------------------------------

/// Advance `state` by `dt` given the acceleration evaluated at its start.
/// Velocity is updated first and the new velocity moves the position.
pub fn euler_step(state: &State, accel: &Vector2<f64>, dt: f64) -> State {
    let vel = state.vel + accel * dt;
    State {
        time: state.time + dt,
        pos: state.pos + vel * dt,
        vel,
    }
}

/// Evaluate the forces at `state` and take one Euler step.
pub fn step(state: &State, params: &SimulationParameters) -> State {
    let accel = dynamics::acceleration(state, params);
    euler_step(state, &accel, params.time_step)
}
