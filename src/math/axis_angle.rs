use glam::{Mat3, Vec3};
use std::f32::consts::PI;

/// Axis used when the axis of a composed rotation cannot be recovered
pub const FALLBACK_AXIS: Vec3 = Vec3::Y;

/// Rotation stored as a unit axis and an angle in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub axis: Vec3,
    pub angle: f32,
}

impl AxisAngle {
    /// No rotation around +Z (the axis must never be zero)
    pub const IDENTITY: Self = Self {
        axis: Vec3::Z,
        angle: 0.0,
    };

    pub const fn new(axis: Vec3, angle: f32) -> Self {
        Self { axis, angle }
    }

    /// Rodrigues rotation matrix, column-major
    pub fn to_mat3(&self) -> Mat3 {
        let (s, c) = self.angle.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = self.axis;

        Mat3::from_cols(
            Vec3::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y),
            Vec3::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x),
            Vec3::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c),
        )
    }

    /// Recover axis and angle from a rotation matrix
    ///
    /// Near 0 and PI the skew-symmetric part vanishes, so the axis falls
    /// back to [`FALLBACK_AXIS`] instead of dividing by a tiny sine.
    pub fn from_mat3(m: &Mat3) -> Self {
        let cos = ((m.x_axis.x + m.y_axis.y + m.z_axis.z - 1.0) / 2.0).clamp(-1.0, 1.0);
        let angle = cos.acos();
        let sin = angle.sin();

        let ratio = sin / PI;
        if (ratio - ratio.trunc()).abs() < 1e-7 {
            return Self::new(FALLBACK_AXIS, angle);
        }

        let denom = 2.0 * sin;
        let axis = Vec3::new(
            (m.y_axis.z - m.z_axis.y) / denom,
            (m.z_axis.x - m.x_axis.z) / denom,
            (m.x_axis.y - m.y_axis.x) / denom,
        );

        Self::new(axis, angle)
    }

    /// Apply `increment` after `self` and renormalize the result
    pub fn compose(&self, increment: &AxisAngle) -> Self {
        let product = self.to_mat3() * increment.to_mat3();
        let mut composed = Self::from_mat3(&product);
        composed.axis = composed.axis.normalize();
        composed
    }

    /// Trackball increment for a pointer drag of `(dx, dy)` pixels
    ///
    /// Returns `None` inside the dead zone and for a zero-length drag,
    /// which has no direction. A drag across the full viewport width turns
    /// the model by PI.
    pub fn from_drag(dx: i32, dy: i32, viewport_width: u32, dead_zone: f32) -> Option<Self> {
        let (dx, dy) = (dx as f32, dy as f32);
        let dist = (dx * dx + dy * dy).sqrt();
        if dist == 0.0 || dist < dead_zone {
            return None;
        }

        // horizontal drags spin around the vertical axis and vice versa
        let axis = Vec3::new(dy / dist, dx / dist, 0.0);
        let angle = PI * dist / viewport_width.max(1) as f32;
        Some(Self::new(axis, angle))
    }

    /// Compose a drag increment in place; returns whether anything changed
    pub fn compose_drag(&mut self, dx: i32, dy: i32, viewport_width: u32, dead_zone: f32) -> bool {
        match Self::from_drag(dx, dy, viewport_width, dead_zone) {
            Some(increment) => {
                *self = self.compose(&increment);
                true
            }
            None => false,
        }
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}
