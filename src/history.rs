// ---------------------------------------------------------------------------
// Run history: ordered, append-only record of past runs
// ---------------------------------------------------------------------------

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::sim::SimulationResult;

/// One row of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    pub run: usize,
    pub time_step: f64,
    pub range: f64,
    pub max_height: f64,
    pub final_speed: f64,
    pub flight_duration: f64,
}

impl SummaryRow {
    pub fn from_result(run: usize, r: &SimulationResult) -> Self {
        Self {
            run,
            time_step: r.time_step(),
            range: r.range(),
            max_height: r.max_height(),
            final_speed: r.final_speed(),
            flight_duration: r.flight_duration(),
        }
    }
}

/// Results in run order. Insertion order is the only ordering kept.
#[derive(Debug, Clone, Default)]
pub struct RunHistory {
    runs: Vec<SimulationResult>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run and return its index.
    pub fn push(&mut self, result: SimulationResult) -> usize {
        self.runs.push(result);
        self.runs.len() - 1
    }

    pub fn latest(&self) -> Option<&SimulationResult> {
        self.runs.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimulationResult> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    pub fn rows(&self) -> Vec<SummaryRow> {
        self.runs
            .iter()
            .enumerate()
            .map(|(i, r)| SummaryRow::from_result(i, r))
            .collect()
    }
}

/// `RunHistory` behind a lock, for results produced on several threads.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    inner: Arc<Mutex<RunHistory>>,
}

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, result: SimulationResult) -> usize {
        self.inner.lock().push(result)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn rows(&self) -> Vec<SummaryRow> {
        self.inner.lock().rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::SimulationParameters;
    use crate::sim::simulate;

    fn run(dt: f64) -> SimulationResult {
        simulate(&SimulationParameters::default().with_time_step(dt)).unwrap()
    }

    #[test]
    fn keeps_run_order() {
        let mut h = RunHistory::new();
        assert_eq!(h.push(run(0.1)), 0);
        assert_eq!(h.push(run(0.01)), 1);
        let rows = h.rows();
        assert_eq!(rows[0].time_step, 0.1);
        assert_eq!(rows[1].time_step, 0.01);
        assert_eq!(h.latest().unwrap().time_step(), 0.01);
    }

    #[test]
    fn row_flight_duration_counts_samples() {
        let r = run(0.05);
        let row = SummaryRow::from_result(0, &r);
        assert_eq!(row.flight_duration, r.len() as f64 * 0.05);
    }

    #[test]
    fn clear_empties_history() {
        let mut h = RunHistory::new();
        h.push(run(0.1));
        h.clear();
        assert!(h.is_empty());
        assert!(h.latest().is_none());
    }

    #[test]
    fn shared_history_accepts_concurrent_appends() {
        let shared = SharedHistory::new();
        std::thread::scope(|s| {
            for dt in [0.1, 0.05, 0.02, 0.01] {
                let shared = shared.clone();
                s.spawn(move || {
                    shared.push(run(dt));
                });
            }
        });
        assert_eq!(shared.len(), 4);
        let mut steps: Vec<f64> = shared.rows().iter().map(|r| r.time_step).collect();
        steps.sort_by(f64::total_cmp);
        assert_eq!(steps, vec![0.01, 0.02, 0.05, 0.1]);
    }
}
