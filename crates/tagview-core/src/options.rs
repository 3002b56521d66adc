//! Configuration options for tagview.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Viewer configuration.
///
/// Options only describe how the viewer starts and behaves; scene content is
/// never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Window title.
    pub window_title: String,

    /// Initial window width in pixels.
    pub window_width: u32,

    /// Initial window height in pixels.
    pub window_height: u32,

    /// Background (clear) color.
    pub background_color: Vec3,

    /// Vertical field of view in degrees.
    pub fov_degrees: f64,

    /// Near clipping plane.
    pub near: f64,

    /// Far clipping plane.
    pub far: f64,

    /// Orbit radius at startup and after a view reset.
    pub initial_radius: f64,

    /// Radius change per scroll tick.
    pub scroll_step: f64,

    /// Whether presentation waits for vertical sync.
    pub vsync: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            window_title: "Tag Viewer".to_string(),
            window_width: 800,
            window_height: 600,
            background_color: Vec3::new(1.0, 1.0, 1.0),
            fov_degrees: 65.0,
            near: 0.1,
            far: 10000.0,
            initial_radius: 1.0,
            scroll_step: 0.3,
            vsync: true,
        }
    }
}

impl Options {
    /// Initial aspect ratio derived from the window size.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.window_width.max(1)) / f64::from(self.window_height.max(1))
    }

    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let options = Options::default();
        assert_eq!((options.window_width, options.window_height), (800, 600));
        assert_eq!(options.background_color, Vec3::ONE);
        assert_eq!(options.scroll_step, 0.3);
        assert!((options.aspect_ratio() - 800.0 / 600.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options = Options::from_json(r#"{ "window_width": 1024, "vsync": false }"#).unwrap();
        assert_eq!(options.window_width, 1024);
        assert!(!options.vsync);
        assert_eq!(options.window_height, 600);
        assert_eq!(options.window_title, "Tag Viewer");
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = Options::default();
        options.fov_degrees = 45.0;
        let parsed = Options::from_json(&options.to_json().unwrap()).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Options::from_json("{ not json").is_err());
    }
}
