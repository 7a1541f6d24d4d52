#![no_std]

pub mod types;
pub mod engine;
pub mod simulation;

pub use types::{Direction, SwapResult, SwapStatus};
pub use engine::{quote, swap};
pub use simulation::SimulatedStore;
