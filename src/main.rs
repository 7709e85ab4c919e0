use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ballistic_flight::io::json::FlightSummary;
use ballistic_flight::io::{csv, json};
use ballistic_flight::launch::load_parameters;
use ballistic_flight::render;
use ballistic_flight::sim::event::{self, AltitudeDetector, EventDetector, EventKind};
use ballistic_flight::sim::sweep_time_steps;
use ballistic_flight::{
    simulate_with, LandingMode, RunHistory, SimConfig, SimError, SimulationParameters,
    SimulationResult,
};

#[derive(Parser)]
#[command(name = "ballistic-flight")]
#[command(version)]
#[command(about = "Point-mass flight under gravity and quadratic drag", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single launch and print a flight report
    Run {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Integration time step (s)
        #[arg(long)]
        dt: Option<f64>,

        /// Write the recorded trajectory as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write parameters and summary as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Integrate the same launch at several time steps
    Sweep {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Time steps to compare (s), repeat the flag for each
        #[arg(long = "dt", required = true)]
        dts: Vec<f64>,

        /// Write the results table as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Args)]
struct LaunchArgs {
    /// JSON parameter file; flags below override its values
    #[arg(long)]
    params: Option<PathBuf>,

    /// Initial speed (m/s)
    #[arg(short = 'v', long)]
    speed: Option<f64>,

    /// Launch angle above horizontal (degrees)
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    angle: Option<f64>,

    /// Body mass (kg)
    #[arg(short = 'm', long)]
    mass: Option<f64>,

    /// Air density (kg/m^3)
    #[arg(long)]
    density: Option<f64>,

    /// Drag coefficient
    #[arg(long)]
    cd: Option<f64>,

    /// Cross-section area (m^2)
    #[arg(long)]
    area: Option<f64>,

    /// Report the landing point interpolated to launch height
    #[arg(long)]
    interpolate_landing: bool,

    /// Abort runs that take more steps than this
    #[arg(long)]
    max_steps: Option<usize>,
}

impl LaunchArgs {
    fn parameters(&self, dt: Option<f64>) -> Result<SimulationParameters, SimError> {
        let mut p = match &self.params {
            Some(path) => load_parameters(path)?,
            None => SimulationParameters::default(),
        };
        let overrides = [
            (&mut p.initial_speed, self.speed),
            (&mut p.launch_angle_deg, self.angle),
            (&mut p.mass, self.mass),
            (&mut p.air_density, self.density),
            (&mut p.drag_coefficient, self.cd),
            (&mut p.cross_section_area, self.area),
            (&mut p.time_step, dt),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
        p.validate()?;
        Ok(p)
    }

    fn config(&self) -> SimConfig {
        SimConfig {
            max_steps: self.max_steps,
            landing: if self.interpolate_landing {
                LandingMode::Interpolated
            } else {
                LandingMode::BelowGround
            },
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SimError> {
    match cli.command {
        Commands::Run { launch, dt, csv: csv_path, json: json_path } => {
            let params = launch.parameters(dt)?;
            let result = simulate_with(&params, &launch.config())?;
            print_report(&params, &result);

            if let Some(path) = csv_path {
                csv::write_trajectory_file(&path, &result)?;
                info!(path = %path.display(), "trajectory exported");
            }
            if let Some(path) = json_path {
                json::write_summary_file(&path, &params, &result)?;
                info!(path = %path.display(), "summary exported");
            }
        }
        Commands::Sweep { launch, dts, json: json_path } => {
            let params = launch.parameters(None)?;
            let mut history = RunHistory::new();
            for (dt, outcome) in dts.iter().zip(sweep_time_steps(&params, &dts, &launch.config())) {
                match outcome {
                    Ok(result) => {
                        history.push(result);
                    }
                    Err(e) => eprintln!("  dt={dt}: {e}"),
                }
            }
            print_sweep(&params, &history);

            if let Some(path) = json_path {
                json::write_history_file(&path, &params, &history)?;
                info!(path = %path.display(), runs = history.len(), "history exported");
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

fn print_parameters(p: &SimulationParameters) {
    println!("  Launch Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Speed:         {:>8.2} m/s   Angle:        {:>8.2} deg",
        p.initial_speed, p.launch_angle_deg
    );
    println!(
        "  Mass:          {:>8.3} kg    Density:      {:>8.3} kg/m^3",
        p.mass, p.air_density
    );
    println!(
        "  Cd:            {:>8.3}       Area:         {:>8.4} m^2",
        p.drag_coefficient, p.cross_section_area
    );
    println!();
}

fn print_report(params: &SimulationParameters, result: &SimulationResult) {
    let summary = FlightSummary::from_result(result);

    println!();
    println!("====================================================================");
    println!("  POINT-MASS FLIGHT SIMULATION");
    println!("====================================================================");
    println!();
    print_parameters(params);

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    let mut detectors = event::default_detectors();
    let half_apex = result.max_height() / 2.0;
    if half_apex > 0.0 {
        detectors.push(Box::new(AltitudeDetector::new(half_apex, true)) as Box<dyn EventDetector>);
        detectors.push(Box::new(AltitudeDetector::new(half_apex, false)));
    }
    for ev in event::detect_events(result, &mut detectors) {
        let s = &result.trajectory()[ev.index];
        let label = match ev.kind {
            EventKind::Apex => "APEX".to_string(),
            EventKind::Landing => "LANDING".to_string(),
            EventKind::Altitude { altitude, ascending } => format!(
                "{} {:.0}m",
                if ascending { "UP" } else { "DOWN" },
                altitude
            ),
        };
        println!(
            "  {:<12} t={:>7.2}s   x={:>9.2}m   y={:>8.2}m   v={:>7.2}m/s",
            label,
            ev.time,
            s.x,
            s.y,
            result.speeds()[ev.index]
        );
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Range:         {:>9.2} m", summary.range_m);
    println!(
        "  Max height:    {:>9.2} m   (t={:.2} s)",
        summary.max_height_m, summary.apex_time_s
    );
    println!("  Final speed:   {:>9.2} m/s", summary.final_speed_ms);
    println!("  Flight time:   {:>9.2} s", summary.flight_time_s);
    if result.landing_mode() == LandingMode::Interpolated {
        println!("  (landing point interpolated to launch height)");
    }
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>7}  {:>10}  {:>9}  {:>9}", "t (s)", "x (m)", "y (m)", "v (m/s)");
    println!("  {}", "─".repeat(42));

    let rows = render::downsample(&result.samples().collect::<Vec<_>>(), 30);
    let last = result.samples().last();
    for s in rows.iter().chain(last.iter().filter(|l| rows.last() != Some(*l))) {
        println!(
            "  {:>7.2}  {:>10.2}  {:>9.2}  {:>9.2}",
            s.time, s.pos.x, s.pos.y, s.speed
        );
    }

    println!();
    println!(
        "  Simulation: {} samples, dt={} s",
        result.len(),
        result.time_step()
    );
    println!("====================================================================");
    println!();
}

fn print_sweep(params: &SimulationParameters, history: &RunHistory) {
    println!();
    println!("====================================================================");
    println!("  TIME-STEP SWEEP");
    println!("====================================================================");
    println!();
    print_parameters(params);
    print!("{}", render::format_table(history));
    println!();
    println!("{}", render::info_text(history.latest()));
    println!();
}
