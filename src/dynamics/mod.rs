pub mod state;

use nalgebra::Vector2;

use crate::launch::SimulationParameters;
use crate::physics::{aerodynamics, gravity};
use state::State;

// ---------------------------------------------------------------------------
// Equations of motion (2D point mass)
// ---------------------------------------------------------------------------

/// Acceleration acting on the body at `state`.
///
/// Forces modeled:
///   1. Gravity: constant, straight down
///   2. Drag: quadratic in speed, opposing velocity
pub fn acceleration(state: &State, params: &SimulationParameters) -> Vector2<f64> {
    let speed = state.speed();
    let drag = aerodynamics::drag_force(speed, params.drag_factor());
    gravity::gravity_accel() + aerodynamics::drag_accel(&state.vel, speed, drag, params.mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::G;

    #[test]
    fn vacuum_acceleration_is_gravity() {
        let p = SimulationParameters::default().vacuum();
        let a = acceleration(&State::launch(&p), &p);
        assert_eq!(a, Vector2::new(0.0, -G));
    }

    #[test]
    fn drag_slows_horizontal_motion() {
        let p = SimulationParameters::default();
        let a = acceleration(&State::launch(&p), &p);
        assert!(a.x < 0.0);
        assert!(a.y < -G, "Drag adds to gravity while climbing");
    }

    #[test]
    fn gravity_only_at_rest() {
        let p = SimulationParameters::default();
        let s = State {
            time: 1.0,
            pos: Vector2::new(5.0, 5.0),
            vel: Vector2::zeros(),
        };
        assert_eq!(acceleration(&s, &p), Vector2::new(0.0, -G));
    }
}
