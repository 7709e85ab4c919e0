use nalgebra::Vector2;

use crate::launch::SimulationParameters;

// ---------------------------------------------------------------------------
// Point-mass state: time, position, velocity (x downrange, y up)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64,           // s
    pub pos: Vector2<f64>,   // m, origin at launch point
    pub vel: Vector2<f64>,   // m/s
}

impl State {
    /// State at the launch point, velocity resolved from speed and angle.
    pub fn launch(params: &SimulationParameters) -> State {
        let theta = params.launch_angle_deg.to_radians();
        State {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: Vector2::new(
                params.initial_speed * theta.cos(),
                params.initial_speed * theta.sin(),
            ),
        }
    }

    /// Speed magnitude, sqrt(vx^2 + vy^2).
    pub fn speed(&self) -> f64 {
        (self.vel.x * self.vel.x + self.vel.y * self.vel.y).sqrt()
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

/// How the final sample of a run is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingMode {
    /// Keep the first sample below launch height as recorded.
    #[default]
    BelowGround,
    /// Replace it with the point where the last segment crosses y = 0.
    Interpolated,
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Step cap; `None` integrates until landing.
    pub max_steps: Option<usize>,
    pub landing: LandingMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            landing: LandingMode::BelowGround,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_resolves_velocity() {
        let p = SimulationParameters {
            initial_speed: 10.0,
            launch_angle_deg: 90.0,
            ..Default::default()
        };
        let s = State::launch(&p);
        assert!(s.vel.x.abs() < 1e-12);
        assert!((s.vel.y - 10.0).abs() < 1e-12);
        assert_eq!(s.pos, Vector2::zeros());
    }

    #[test]
    fn speed_matches_initial_speed() {
        let p = SimulationParameters::default();
        let s = State::launch(&p);
        assert!((s.speed() - p.initial_speed).abs() < 1e-12);
    }
}
