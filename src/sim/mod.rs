pub mod event;
pub mod integrator;
pub mod result;
pub mod runner;
pub mod sweep;

pub use integrator::euler_step;
pub use result::{Sample, SimulationResult};
pub use runner::{simulate, simulate_with};
pub use sweep::sweep_time_steps;
