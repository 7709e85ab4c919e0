pub mod dynamics;
pub mod error;
pub mod history;
pub mod io;
pub mod launch;
pub mod physics;
pub mod render;
pub mod sim;

pub use dynamics::state::{LandingMode, SimConfig};
pub use error::SimError;
pub use history::{RunHistory, SharedHistory, SummaryRow};
pub use launch::{ParameterForm, SimulationParameters};
pub use sim::{simulate, simulate_with, SimulationResult};
