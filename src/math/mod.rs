mod axis_angle;

pub use axis_angle::{AxisAngle, FALLBACK_AXIS};
