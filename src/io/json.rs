use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::SimError;
use crate::history::{RunHistory, SummaryRow};
use crate::launch::SimulationParameters;
use crate::sim::SimulationResult;

/// Summary statistics of one run.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub time_step_s: f64,
    pub samples: usize,
    pub range_m: f64,
    pub max_height_m: f64,
    pub apex_time_s: f64,
    pub final_speed_ms: f64,
    pub flight_time_s: f64,
}

impl FlightSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        FlightSummary {
            time_step_s: result.time_step(),
            samples: result.len(),
            range_m: result.range(),
            max_height_m: result.max_height(),
            apex_time_s: result.apex_index() as f64 * result.time_step(),
            final_speed_ms: result.final_speed(),
            flight_time_s: result.flight_duration(),
        }
    }
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    parameters: &'a SimulationParameters,
    performance: FlightSummary,
}

#[derive(Serialize)]
struct HistoryDocument<'a> {
    parameters: &'a SimulationParameters,
    runs: Vec<SummaryRow>,
}

/// Write launch parameters and the run summary as pretty JSON.
pub fn write_summary<W: Write>(
    writer: &mut W,
    params: &SimulationParameters,
    result: &SimulationResult,
) -> Result<(), SimError> {
    let doc = SummaryDocument {
        parameters: params,
        performance: FlightSummary::from_result(result),
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

/// Write every run of `history` (launch shared by all runs) as pretty JSON.
pub fn write_history<W: Write>(
    writer: &mut W,
    params: &SimulationParameters,
    history: &RunHistory,
) -> Result<(), SimError> {
    let doc = HistoryDocument {
        parameters: params,
        runs: history.rows(),
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_summary_file(
    path: impl AsRef<Path>,
    params: &SimulationParameters,
    result: &SimulationResult,
) -> Result<(), SimError> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_summary(&mut file, params, result)?;
    file.flush()?;
    Ok(())
}

pub fn write_history_file(
    path: impl AsRef<Path>,
    params: &SimulationParameters,
    history: &RunHistory,
) -> Result<(), SimError> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_history(&mut file, params, history)?;
    file.flush()?;
    Ok(())
}
