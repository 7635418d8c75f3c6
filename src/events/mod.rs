pub mod pointer;
pub mod toggle;

pub use pointer::{wire_stage_handlers, StageWiring};
pub use toggle::wire_lights_toggle;
