pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod label;
pub mod lights;
pub mod scheduler;
pub mod tracker;
pub mod zorder;

pub use config::*;
pub use controller::*;
pub use easing::*;
pub use error::*;
pub use geometry::*;
pub use label::*;
pub use lights::*;
pub use scheduler::*;
pub use tracker::*;
pub use zorder::*;
