pub mod panels;

use serde::{Deserialize, Serialize};

pub use self::panels::{
    clamp, compute_layout, compute_layout_from_text, parse_dimension, resolve_dimension,
    DimensionError, PanelLayout,
};

/// Fallback panel width when the configured one is unusable.
pub const DEFAULT_MAX_PANEL_WIDTH_CM: f64 = 100.0;

/// Configuration for the panel calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widest strip the printer can produce (cm). Non-positive or non-finite
    /// values fall back to 100.
    pub max_panel_width_cm: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_panel_width_cm: DEFAULT_MAX_PANEL_WIDTH_CM,
        }
    }
}

impl LayoutConfig {
    /// The panel width actually used by the calculator.
    pub fn effective_panel_width(&self) -> f64 {
        if self.max_panel_width_cm.is_finite() && self.max_panel_width_cm > 0.0 {
            self.max_panel_width_cm
        } else {
            DEFAULT_MAX_PANEL_WIDTH_CM
        }
    }
}

/// Per-product size limits. `None`, zero, negative or non-finite means "unbounded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub max_width_cm: Option<f64>,
    pub max_height_cm: Option<f64>,
}

impl SizeBounds {
    pub fn new(max_width_cm: Option<f64>, max_height_cm: Option<f64>) -> Self {
        Self {
            max_width_cm,
            max_height_cm,
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_width_falls_back_to_default() {
        assert_eq!(LayoutConfig::default().effective_panel_width(), 100.0);
        for bad in [0.0, -20.0, f64::NAN, f64::INFINITY] {
            let config = LayoutConfig {
                max_panel_width_cm: bad,
            };
            assert_eq!(config.effective_panel_width(), 100.0);
        }
        let config = LayoutConfig {
            max_panel_width_cm: 50.0,
        };
        assert_eq!(config.effective_panel_width(), 50.0);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: LayoutConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());
        let config: LayoutConfig = serde_json::from_str(r#"{ "max_panel_width_cm": 90 }"#).unwrap();
        assert_eq!(config.max_panel_width_cm, 90.0);
    }
}
