// config.rs - Trackball tuning parameters
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Tuning constants for the trackball, loadable from JSON
///
/// Missing fields take their default, so a config file only needs the
/// values it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackballConfig {
    /// Maximum gap between two presses of a double-click [ms]
    pub double_click_ms: u64,
    pub scale_min: f32,
    pub scale_max: f32,
    /// Scale change per wheel notch
    pub wheel_scale_step: f32,
    /// Scale change per arrow key press in scale mode
    pub key_scale_step: f32,
    /// Translation per arrow key press in pan modes
    pub key_pan_step: f32,
    /// Synthetic drag length of an arrow key press in rotate mode [px]
    pub key_rotate_pixels: i32,
    /// Pixels of drag per unit of XY translation
    pub pan_xy_divisor: f32,
    /// Pixels of drag per unit of Z translation
    pub pan_z_divisor: f32,
    /// Pixels of drag per unit of scale
    pub scale_divisor: f32,
    /// Drags shorter than this do not rotate [px]
    pub rotate_dead_zone: f32,
}

impl Default for TrackballConfig {
    fn default() -> Self {
        Self {
            double_click_ms: 400,
            scale_min: 0.025,
            scale_max: 5.0,
            wheel_scale_step: 0.05,
            key_scale_step: 0.05,
            key_pan_step: 0.1,
            key_rotate_pixels: 10,
            pan_xy_divisor: 100.0,
            pan_z_divisor: 40.0,
            scale_divisor: 40.0,
            rotate_dead_zone: 0.99,
        }
    }
}

impl TrackballConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.scale_min > 0.0 && self.scale_min <= self.scale_max,
            "scale bounds must satisfy 0 < scale_min <= scale_max (got {}..{})",
            self.scale_min,
            self.scale_max
        );
        for (name, divisor) in [
            ("pan_xy_divisor", self.pan_xy_divisor),
            ("pan_z_divisor", self.pan_z_divisor),
            ("scale_divisor", self.scale_divisor),
        ] {
            ensure!(divisor != 0.0, "{} must not be zero", name);
        }
        ensure!(
            self.rotate_dead_zone > 0.0,
            "rotate_dead_zone must be positive (got {})",
            self.rotate_dead_zone
        );
        Ok(())
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.scale_min, self.scale_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TrackballConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TrackballConfig::from_json(r#"{ "double_click_ms": 250 }"#).unwrap();
        assert_eq!(config.double_click_window(), Duration::from_millis(250));
        assert_eq!(config.scale_max, 5.0);
    }

    #[test]
    fn test_inverted_scale_bounds_rejected() {
        let err = TrackballConfig::from_json(r#"{ "scale_min": 2.0, "scale_max": 1.0 }"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let config = TrackballConfig {
            pan_z_divisor: 0.0,
            ..Default::default()
        };
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("pan_z_divisor"));
    }

    #[test]
    fn test_zero_dead_zone_rejected() {
        let err = TrackballConfig::from_json(r#"{ "rotate_dead_zone": 0.0 }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("rotate_dead_zone"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(TrackballConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TrackballConfig::load("/nonexistent/trackball.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/trackball.json"));
    }

    #[test]
    fn test_clamp_scale() {
        let config = TrackballConfig::default();
        assert_eq!(config.clamp_scale(0.0), 0.025);
        assert_eq!(config.clamp_scale(10.0), 5.0);
        assert_eq!(config.clamp_scale(1.5), 1.5);
    }
}
