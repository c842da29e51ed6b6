pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod traits;

pub use crate::config::TrackballConfig;
pub use crate::core::{InteractionMode, TrackballController};
pub use crate::math::AxisAngle;
pub use crate::traits::InputHost;
