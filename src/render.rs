// ---------------------------------------------------------------------------
// Presentation helpers over finished runs: downsampling, run colors,
// plot extents and the results table
// ---------------------------------------------------------------------------

use nalgebra::Vector2;

use crate::history::RunHistory;
use crate::sim::SimulationResult;

/// Most points an animated trajectory reveals, one per frame.
pub const ANIMATION_FRAME_BUDGET: usize = 800;

/// Headroom above the largest coordinate on each plot axis.
const AXIS_MARGIN: f64 = 1.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Run colors, cycled by run index.
pub const PALETTE: [Rgb; 8] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0x7f, 0x7f, 0x7f),
];

pub fn color_for_run(run: usize) -> Rgb {
    PALETTE[run % PALETTE.len()]
}

/// Every k-th element starting at the first, with k chosen so that at most
/// `max_points` remain. Short inputs are returned whole.
pub fn downsample<T: Clone>(points: &[T], max_points: usize) -> Vec<T> {
    if max_points == 0 || points.len() <= max_points {
        return points.to_vec();
    }
    let stride = points.len().div_ceil(max_points);
    points.iter().step_by(stride).cloned().collect()
}

/// Prefix of `points` shown after `frame` animation frames.
pub fn revealed<T>(points: &[T], frame: usize) -> &[T] {
    &points[..frame.min(points.len())]
}

/// Plot extents `((x_min, x_max), (y_min, y_max))` starting at the origin.
pub fn axis_limits(points: &[Vector2<f64>]) -> ((f64, f64), (f64, f64)) {
    let max_x = points.iter().map(|p| p.x).fold(0.0_f64, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(0.0_f64, f64::max);
    let span = |m: f64| if m > 0.0 { m * AXIS_MARGIN } else { 1.0 };
    ((0.0, span(max_x)), (0.0, span(max_y)))
}

pub const TABLE_HEADER: [&str; 5] = [
    "Step (s)",
    "Range (m)",
    "Max height (m)",
    "Final speed (m/s)",
    "Flight time (s)",
];

/// Formatted cells for one run.
pub fn table_row(r: &SimulationResult) -> [String; 5] {
    [
        format!("{:.6}", r.time_step()),
        format!("{:.2}", r.range()),
        format!("{:.2}", r.max_height()),
        format!("{:.2}", r.final_speed()),
        format!("{:.2}", r.flight_duration()),
    ]
}

pub fn table_rows(history: &RunHistory) -> Vec<[String; 5]> {
    history.iter().map(table_row).collect()
}

/// Plain-text table of every run, header first.
pub fn format_table(history: &RunHistory) -> String {
    let mut out = String::new();
    let line = |cells: &[&str]| {
        cells
            .iter()
            .map(|c| format!("{:>18}", c))
            .collect::<Vec<_>>()
            .join("")
    };
    out.push_str(&line(&TABLE_HEADER[..]));
    out.push('\n');
    for row in table_rows(history) {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&cells));
        out.push('\n');
    }
    out
}

/// Summary of the latest run for the info panel.
pub fn info_text(latest: Option<&SimulationResult>) -> String {
    match latest {
        None => "No simulation has been run".to_string(),
        Some(r) => format!(
            "Last simulation:\n\
             Step: {:.6} s\n\
             Range: {:.2} m\n\
             Max height: {:.2} m\n\
             Final speed: {:.2} m/s",
            r.time_step(),
            r.range(),
            r.max_height(),
            r.final_speed()
        ),
    }
}
