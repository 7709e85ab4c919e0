use std::io::{self, Write};
use std::path::Path;

use crate::sim::SimulationResult;

/// Write the recorded samples of a run in CSV format.
///
/// Columns: index, time, x, y, speed
pub fn write_trajectory<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(writer, "index,time,x,y,speed")?;

    for s in result.samples() {
        writeln!(
            writer,
            "{},{:.6},{:.6},{:.6},{:.6}",
            s.index, s.time, s.pos.x, s.pos.y, s.speed,
        )?;
    }

    Ok(())
}

/// Write a run's trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, result: &SimulationResult) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, result)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::SimulationParameters;
    use crate::sim::simulate;

    #[test]
    fn csv_output_has_header_and_rows() {
        let r = simulate(&SimulationParameters {
            launch_angle_deg: 0.0,
            ..Default::default()
        })
        .unwrap();

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &r).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "index,time,x,y,speed");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0,0.000000,0.000000,0.000000,100.000000"));
        assert!(lines[2].starts_with("1,0.010000,"));
    }
}
