use rayon::prelude::*;
use tracing::info;

use super::result::SimulationResult;
use super::runner::simulate_with;
use crate::dynamics::state::SimConfig;
use crate::error::SimError;
use crate::launch::SimulationParameters;

// ---------------------------------------------------------------------------
// Step-size sweep
// ---------------------------------------------------------------------------

/// Integrate the same launch once per entry of `time_steps`, in parallel.
/// Results come back in the order the step sizes were given.
pub fn sweep_time_steps(
    params: &SimulationParameters,
    time_steps: &[f64],
    config: &SimConfig,
) -> Vec<Result<SimulationResult, SimError>> {
    info!(runs = time_steps.len(), "starting step-size sweep");
    time_steps
        .par_iter()
        .map(|&dt| simulate_with(&params.with_time_step(dt), config))
        .collect()
}
