use nalgebra::Vector2;
use tracing::{debug, warn};

use super::integrator;
use super::result::SimulationResult;
use crate::dynamics::state::{LandingMode, SimConfig, State};
use crate::error::SimError;
use crate::launch::SimulationParameters;
use crate::physics::G;

const MAX_PREALLOCATED_SAMPLES: usize = 1_000_000;

// ---------------------------------------------------------------------------
// Full flight simulation
// ---------------------------------------------------------------------------

/// Integrate from launch until the first sample below launch height.
///
/// Fails with `NonTerminationRisk` for a non-positive time step, with
/// `Validation` for non-finite inputs and, when `config.max_steps` is set,
/// with `StepLimitExceeded` once that many steps pass without landing.
pub fn simulate_with(
    params: &SimulationParameters,
    config: &SimConfig,
) -> Result<SimulationResult, SimError> {
    params.check_finite()?;
    if params.time_step <= 0.0 {
        return Err(SimError::NonTerminationRisk {
            time_step: params.time_step,
        });
    }

    let mut state = State::launch(params);

    let cap = estimated_samples(params).min(MAX_PREALLOCATED_SAMPLES);
    let mut trajectory = Vec::with_capacity(cap);
    let mut speeds = Vec::with_capacity(cap);

    trajectory.push(state.pos);
    speeds.push(params.initial_speed);

    let mut max_height = 0.0_f64;
    let mut steps = 0usize;

    while state.pos.y >= 0.0 {
        if let Some(limit) = config.max_steps.filter(|&limit| steps >= limit) {
            warn!(
                limit,
                time = state.time,
                height = state.pos.y,
                "step limit reached before landing"
            );
            return Err(SimError::StepLimitExceeded { limit });
        }

        state = integrator::step(&state, params);
        steps += 1;

        trajectory.push(state.pos);
        speeds.push(state.speed());

        if state.pos.y > max_height {
            max_height = state.pos.y;
        }
    }

    if config.landing == LandingMode::Interpolated {
        interpolate_landing(&mut trajectory, &mut speeds);
    }

    let result = SimulationResult::new(
        params.time_step,
        trajectory,
        speeds,
        max_height,
        config.landing,
    );
    debug!(
        steps,
        dt = params.time_step,
        range = result.range(),
        max_height = result.max_height(),
        final_speed = result.final_speed(),
        "simulation finished"
    );
    Ok(result)
}

/// Simulate with the default config: no interpolation, no step cap.
pub fn simulate(params: &SimulationParameters) -> Result<SimulationResult, SimError> {
    simulate_with(params, &SimConfig::default())
}

/// Move the final below-ground sample onto y = 0 along the last segment.
/// Speed is interpolated with the same fraction.
fn interpolate_landing(trajectory: &mut [Vector2<f64>], speeds: &mut [f64]) {
    let n = trajectory.len();
    if n < 2 {
        return;
    }
    let (above, below) = (trajectory[n - 2], trajectory[n - 1]);
    if !(above.y >= 0.0 && below.y < 0.0) {
        return;
    }

    let f = above.y / (above.y - below.y);
    trajectory[n - 1] = Vector2::new(above.x + (below.x - above.x) * f, 0.0);
    speeds[n - 1] = speeds[n - 2] + (speeds[n - 1] - speeds[n - 2]) * f;
}

/// Drag-free flight time in steps, plus the launch sample and the final one.
fn estimated_samples(params: &SimulationParameters) -> usize {
    let vy = params.initial_speed * params.launch_angle_deg.to_radians().sin();
    let flight_time = (2.0 * vy / G).max(0.0);
    (flight_time / params.time_step) as usize + 2
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn vacuum_shot() -> SimulationParameters {
        SimulationParameters {
            initial_speed: 100.0,
            launch_angle_deg: 45.0,
            mass: 1.0,
            air_density: 0.0,
            drag_coefficient: 0.0,
            cross_section_area: 0.0,
            time_step: 0.01,
        }
    }

    #[test]
    fn vacuum_shot_matches_analytic() {
        let r = simulate(&vacuum_shot()).unwrap();
        // R = v0^2 sin(2θ) / g = 1019.37 m, H = (v0 sinθ)^2 / 2g = 254.84 m
        assert!((r.range() - 1019.37).abs() / 1019.37 < 0.005, "range {}", r.range());
        assert!(
            (r.max_height() - 254.84).abs() / 254.84 < 0.005,
            "max height {}",
            r.max_height()
        );
    }

    #[test]
    fn drag_shortens_range() {
        let vac = simulate(&vacuum_shot()).unwrap();
        let air = simulate(&SimulationParameters {
            air_density: 1.29,
            drag_coefficient: 0.15,
            cross_section_area: 0.01,
            ..vacuum_shot()
        })
        .unwrap();
        assert!(air.range() < vac.range());
        assert!(air.max_height() < vac.max_height());
    }

    #[test]
    fn last_sample_is_below_ground() {
        let r = simulate(&vacuum_shot()).unwrap();
        let traj = r.trajectory();
        assert!(traj[traj.len() - 1].y < 0.0);
        assert!(traj[..traj.len() - 1].iter().all(|p| p.y >= 0.0));
    }

    #[test]
    fn horizontal_launch_stops_after_one_step() {
        let r = simulate(&SimulationParameters {
            launch_angle_deg: 0.0,
            ..vacuum_shot()
        })
        .unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r.max_height(), 0.0);
    }

    #[test]
    fn interpolated_landing_sits_on_ground() {
        let config = SimConfig {
            landing: LandingMode::Interpolated,
            ..Default::default()
        };
        let raw = simulate(&vacuum_shot()).unwrap();
        let lerp = simulate_with(&vacuum_shot(), &config).unwrap();
        let n = raw.len();

        assert_eq!(lerp.len(), n);
        assert_eq!(lerp.trajectory()[n - 1].y, 0.0);
        assert!(lerp.range() <= raw.range());
        assert!(lerp.range() >= raw.trajectory()[n - 2].x);
        assert_eq!(lerp.max_height(), raw.max_height());
        assert_eq!(lerp.landing_mode(), LandingMode::Interpolated);
    }

    #[test]
    fn rejects_non_positive_step() {
        for dt in [0.0, -0.01] {
            let err = simulate(&vacuum_shot().with_time_step(dt)).unwrap_err();
            assert!(matches!(err, SimError::NonTerminationRisk { .. }));
        }
    }

    #[test]
    fn rejects_nan_input() {
        let err = simulate(&SimulationParameters {
            initial_speed: f64::NAN,
            ..vacuum_shot()
        })
        .unwrap_err();
        assert!(matches!(err, SimError::Validation { field: "initial_speed", .. }));
    }

    #[test]
    fn step_limit_aborts() {
        let config = SimConfig {
            max_steps: Some(100),
            ..Default::default()
        };
        let err = simulate_with(&vacuum_shot(), &config).unwrap_err();
        assert!(matches!(err, SimError::StepLimitExceeded { limit: 100 }));
    }

    #[test]
    fn uncapped_run_finishes_past_ten_million_steps() {
        let params = SimulationParameters::default().with_time_step(1e-6);
        assert!(params.validate().is_ok());
        let r = simulate(&params).unwrap();
        assert!(r.len() > 10_000_000, "only {} samples", r.len());
        assert!(r.trajectory()[r.len() - 1].y < 0.0);
    }

    #[test]
    fn estimate_covers_vacuum_flight() {
        let r = simulate(&vacuum_shot()).unwrap();
        assert!(estimated_samples(&vacuum_shot()) + 1 >= r.len());
    }
}
