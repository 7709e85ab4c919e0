pub mod form;
pub mod params;

pub use form::{load_parameters, ParameterForm};
pub use params::SimulationParameters;
