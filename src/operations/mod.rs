// Operations module - Per-turn decision engine

pub mod threat_table;
pub mod dock_saturation;
pub mod target_priority;
pub mod target_cost;
pub mod navigation;
pub mod combat_micro;
pub mod turn_orchestrator;

pub use threat_table::*;
pub use dock_saturation::{estimate as estimate_saturation, Saturation};
pub use target_priority::*;
pub use target_cost::*;
pub use navigation::*;
pub use combat_micro::*;
pub use turn_orchestrator::*;
