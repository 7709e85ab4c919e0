use nalgebra::Vector2;

use crate::dynamics::state::LandingMode;

/// One recorded point of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub index: usize,
    pub time: f64,
    pub pos: Vector2<f64>,
    pub speed: f64,
}

/// Output of a single engine run. Frozen once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    time_step: f64,
    trajectory: Vec<Vector2<f64>>,
    speeds: Vec<f64>,
    range: f64,
    max_height: f64,
    final_speed: f64,
    landing: LandingMode,
}

impl SimulationResult {
    /// Assemble a result from recorded samples.
    /// `trajectory` and `speeds` must be the same non-zero length.
    pub(crate) fn new(
        time_step: f64,
        trajectory: Vec<Vector2<f64>>,
        speeds: Vec<f64>,
        max_height: f64,
        landing: LandingMode,
    ) -> Self {
        debug_assert_eq!(trajectory.len(), speeds.len());
        let range = trajectory.last().map_or(0.0, |p| p.x);
        let final_speed = speeds.last().copied().unwrap_or(0.0);
        Self {
            time_step,
            trajectory,
            speeds,
            range,
            max_height,
            final_speed,
            landing,
        }
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn trajectory(&self) -> &[Vector2<f64>] {
        &self.trajectory
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// Horizontal position of the last sample, m.
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Highest y over all samples, m.
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn final_speed(&self) -> f64 {
        self.final_speed
    }

    pub fn landing_mode(&self) -> LandingMode {
        self.landing
    }

    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Flight duration as reported in the results table: samples * dt.
    ///
    /// This counts the launch sample too, so it is one step longer than
    /// the simulated time of the last sample.
    pub fn flight_duration(&self) -> f64 {
        self.trajectory.len() as f64 * self.time_step
    }

    /// Index of the first sample at the apex.
    pub fn apex_index(&self) -> usize {
        self.trajectory
            .iter()
            .position(|p| p.y == self.max_height)
            .unwrap_or(0)
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.trajectory
            .iter()
            .zip(&self.speeds)
            .enumerate()
            .map(move |(index, (pos, speed))| Sample {
                index,
                time: index as f64 * self.time_step,
                pos: *pos,
                speed: *speed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> SimulationResult {
        SimulationResult::new(
            0.5,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 2.0),
                Vector2::new(2.0, 3.0),
                Vector2::new(3.0, -0.5),
            ],
            vec![10.0, 8.0, 7.0, 9.0],
            3.0,
            LandingMode::BelowGround,
        )
    }

    #[test]
    fn summary_fields_follow_last_sample() {
        let r = tiny();
        assert_eq!(r.range(), 3.0);
        assert_eq!(r.final_speed(), 9.0);
        assert_eq!(r.max_height(), 3.0);
        assert_eq!(r.apex_index(), 2);
    }

    #[test]
    fn flight_duration_counts_every_sample() {
        assert_eq!(tiny().flight_duration(), 2.0);
    }

    #[test]
    fn samples_carry_time() {
        let last = tiny().samples().last().unwrap();
        assert_eq!(last.index, 3);
        assert_eq!(last.time, 1.5);
        assert_eq!(last.pos, Vector2::new(3.0, -0.5));
    }
}
