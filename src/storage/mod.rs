// Storage module for persistent data
pub mod turn_recorder;

pub use turn_recorder::*;
