//! Movement tempo model and the working-set simulator.

pub mod simulator;
pub mod types;

pub use simulator::{advance, ControlState, TempoSetSimulator};
pub use types::{Phase, SimulatorStatus, TempoProfile, TempoRunState};
