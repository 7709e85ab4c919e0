pub mod aerodynamics;
pub mod gravity;

pub use gravity::G;
